use api::Profile;
use dioxus::prelude::*;

use crate::core::config::use_landing_config;
use crate::t;

/// Shown when `/info` answers 403. The profile may not have loaded (or may
/// never load); the page still renders without it.
#[component]
pub fn Forbidden(#[props(!optional)] profile: Option<Profile>) -> Element {
    let config = use_landing_config();
    let display_name = profile
        .as_ref()
        .and_then(Profile::display_name)
        .map(str::to_string);

    rsx! {
        section { class: "page page-forbidden",
            div { class: "page-forbidden__card",
                h1 { {t!("forbidden-title")} }
                p { {t!("forbidden-detail")} }
                if let Some(name) = display_name {
                    p { class: "page-forbidden__account",
                        {t!("forbidden-signed-in-as")}
                        " "
                        strong { "{name}" }
                    }
                }
                a { class: "button button--ghost", href: "{config.logout_path}",
                    {t!("forbidden-sign-out")}
                }
            }
        }
    }
}
