//! Shared UI crate for the Ignition landing page. Views, copy and theme live here;
//! platform crates only add routing and global assets.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_header;
    pub mod footer;
    pub mod org_button;

    pub use app_header::AppHeader;
    pub use footer::{default_footer_links, Footer, FooterLink};
    pub use org_button::OrgButton;
}

/// Unified theme (ui/assets/theme/main.css). Platform crates link it once.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
