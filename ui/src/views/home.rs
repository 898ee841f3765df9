use api::{Info, Profile};
use dioxus::prelude::*;

use crate::components::AppHeader;
use crate::views::Body;

/// Signed-in, permitted user: header plus the promotional body.
#[component]
pub fn Home(info: Info, profile: Profile) -> Element {
    rsx! {
        AppHeader { profile }
        Body { info }
    }
}
