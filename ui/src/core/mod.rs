//! Non-visual building blocks shared by the views.

pub mod config;
pub mod format;
pub mod navigation;
pub mod platform;
