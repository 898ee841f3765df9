use dioxus::prelude::*;

use crate::t;

/// The big green "take me to my org" button that overlaps a speech bubble.
///
/// Both call-to-action buttons share one click handler and one busy flag, so
/// a second click while the lookup is in flight does nothing.
#[component]
pub fn OrgButton(label: String, busy: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let text = if busy { t!("org-button-busy") } else { label };

    rsx! {
        button {
            r#type: "button",
            class: "button button--speech",
            disabled: busy,
            aria_busy: "{busy}",
            onclick: move |evt| onclick.call(evt),
            "{text}"
        }
    }
}
