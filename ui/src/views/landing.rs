use api::{Client, Info, InfoOutcome, Profile, Transport};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::config::{use_landing_config, LandingConfig};
use crate::core::navigation::{info_redirect, ForbiddenHandling, Navigation};
use crate::core::platform;
use crate::i18n;
use crate::views::{Forbidden, Home};

/// What the root does with an `/info` outcome.
#[derive(Debug, Clone, PartialEq)]
enum RootAction {
    Show(Info),
    ShowForbidden,
    Navigate(Navigation),
}

fn root_action(outcome: InfoOutcome, login_path: &str) -> RootAction {
    if let Some(navigation) = info_redirect(&outcome, ForbiddenHandling::RenderView, login_path) {
        return RootAction::Navigate(navigation);
    }
    match outcome {
        InfoOutcome::Loaded(info) => RootAction::Show(info),
        _ => RootAction::ShowForbidden,
    }
}

/// Root of the landing page.
///
/// Fetches `/info` and `/profile` once on mount, independently of each other,
/// then picks a view: forbidden, home (once both payloads are in), or an
/// empty placeholder. `testing` skips the network entirely.
#[component]
pub fn Landing(#[props(default)] testing: bool) -> Element {
    i18n::init();
    let config = use_landing_config();

    let forbidden = use_signal(|| false);
    let info = use_signal(|| None::<Info>);
    let profile = use_signal(|| None::<Profile>);

    use_hook(|| {
        if testing {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        spawn_root_fetches(api::browser::BrowserTransport, &config, forbidden, info, profile);
        #[cfg(not(target_arch = "wasm32"))]
        debug!(api_base = %config.api_base, "no browser transport; skipping initial fetches");
    });

    root_view(forbidden(), info(), profile())
}

fn root_view(forbidden: bool, info: Option<Info>, profile: Option<Profile>) -> Element {
    if forbidden {
        return rsx! { Forbidden { profile } };
    }
    match (info, profile) {
        (Some(info), Some(profile)) => rsx! { Home { info, profile } },
        _ => rsx! { div { class: "page-placeholder", "\u{a0}" } },
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn spawn_root_fetches<T: Transport + Clone + 'static>(
    transport: T,
    config: &LandingConfig,
    mut forbidden: Signal<bool>,
    mut info: Signal<Option<Info>>,
    mut profile: Signal<Option<Profile>>,
) {
    let endpoints = config.endpoints();
    let login_path = config.login_path.clone();

    let info_client = Client::with_endpoints(transport.clone(), endpoints.clone());
    spawn(async move {
        match info_client.info().await {
            Ok(outcome) => match root_action(outcome, &login_path) {
                RootAction::Show(loaded) => info.set(Some(loaded)),
                RootAction::ShowForbidden => forbidden.set(true),
                RootAction::Navigate(navigation) => platform::navigate(&navigation),
            },
            Err(err) => warn!(%err, path = err.path(), "info request failed"),
        }
    });

    let profile_client = Client::with_endpoints(transport, endpoints);
    spawn(async move {
        match profile_client.profile().await {
            Ok(Some(loaded)) => profile.set(Some(loaded)),
            Ok(None) => debug!("profile unavailable"),
            Err(err) => warn!(%err, path = err.path(), "profile request failed"),
        }
    });
}
