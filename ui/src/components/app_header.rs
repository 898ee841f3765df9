use api::Profile;
use dioxus::prelude::*;

use crate::t;

/// Fixed top bar: brand on the left, the signed-in user on the right.
#[component]
pub fn AppHeader(profile: Profile) -> Element {
    let signed_in_as = t!("header-signed-in-as");

    rsx! {
        header { id: "app-header", class: "app-header",
            div { class: "app-header__inner",
                span { class: "app-header__brand",
                    span { class: "app-header__spark", aria_hidden: "true" }
                    span { class: "app-header__mark", {t!("brand-name")} }
                }
                if let Some(name) = profile.display_name() {
                    span { class: "app-header__user",
                        span { class: "visually-hidden", "{signed_in_as} " }
                        "{name}"
                    }
                }
            }
        }
    }
}
