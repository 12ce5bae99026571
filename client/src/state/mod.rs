//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The portfolio carries exactly one piece of interactive state, the
//! dark/light theme preference, so `theme` is the only module here.

pub mod theme;
