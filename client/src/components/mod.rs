//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section components render static content from `crate::content`; only
//! `theme_toggle` reads and writes shared state (the theme context).

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod theme_toggle;
