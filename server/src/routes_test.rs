use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn assets_dir_falls_back_to_public() {
    if std::env::var("ASSETS_DIR").is_err() {
        assert!(assets_dir().ends_with("../public"));
    }
}
