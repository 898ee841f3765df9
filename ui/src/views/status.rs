use dioxus::prelude::*;

use crate::t;

/// Landing spot for the `/<status>` redirects.
#[component]
pub fn StatusPage(code: String) -> Element {
    let detail = match code.as_str() {
        "401" => t!("status-unauthorized"),
        "403" => t!("status-forbidden"),
        "404" => t!("status-not-found"),
        _ => t!("status-server-error"),
    };

    rsx! {
        section { class: "page page-status",
            div { class: "page-status__card",
                p { class: "page-status__code", "{code}" }
                h1 { {t!("status-title")} }
                p { "{detail}" }
                a { class: "button button--primary", href: "/", {t!("status-home-link")} }
            }
        }
    }
}
