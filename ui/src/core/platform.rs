//! Browser glue. Native builds (tests, SSR previews) only log.

use tracing::info;

use super::navigation::Navigation;

#[cfg(test)]
thread_local! {
    static RECORDED: std::cell::RefCell<Vec<Navigation>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Send the browser somewhere else.
pub fn navigate(navigation: &Navigation) {
    info!(destination = navigation.target(), "navigating");

    #[cfg(test)]
    RECORDED.with(|recorded| recorded.borrow_mut().push(navigation.clone()));

    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            tracing::warn!("window unavailable; cannot navigate");
            return;
        };
        let location = window.location();
        let result = match navigation {
            Navigation::Replace(target) => location.replace(target),
            Navigation::Assign(target) => location.set_href(target),
        };
        if let Err(err) = result {
            tracing::warn!(?err, destination = navigation.target(), "navigation failed");
        }
    }
}

/// Navigations issued on this thread since the last call.
#[cfg(test)]
pub(crate) fn take_recorded() -> Vec<Navigation> {
    RECORDED.with(|recorded| recorded.take())
}
