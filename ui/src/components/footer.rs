use dioxus::prelude::*;

use crate::t;

const VENDOR_LOGO: Asset = asset!("/assets/images/pivotal-logo.svg");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

impl FooterLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Copyright / Terms / Contact. The URLs are filled in per deployment.
pub fn default_footer_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new(t!("footer-copyright"), ""),
        FooterLink::new(t!("footer-terms"), ""),
        FooterLink::new(t!("footer-contact"), ""),
    ]
}

#[component]
pub fn Footer(links: Vec<FooterLink>) -> Element {
    let logo_alt = t!("footer-logo-alt");

    rsx! {
        footer { class: "footer",
            img { class: "footer__logo", src: VENDOR_LOGO, alt: "{logo_alt}" }
            ul { class: "footer__links",
                for link in links {
                    li { key: "{link.text}", class: "footer__link",
                        // Links without a target render as plain labels.
                        if link.url.is_empty() {
                            span { "{link.text}" }
                        } else {
                            a { href: "{link.url}", "{link.text}" }
                        }
                    }
                }
            }
        }
    }
}
