use super::*;

#[test]
fn label_offers_the_other_mode() {
    assert_eq!(toggle_label(true), "Toggle light mode");
    assert_eq!(toggle_label(false), "Toggle dark mode");
}
