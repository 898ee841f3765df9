use dioxus::prelude::*;
use tracing::info;

use ui::core::config::LandingConfig;
use ui::views::{Landing, StatusPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    // Status redirects (`/401`, `/500`, ...) land back on the app.
    #[route("/:code")]
    Status { code: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let config = use_context_provider(LandingConfig::from_build_env);
    use_hook(|| {
        info!(
            api_base = %config.api_base,
            login_path = %config.login_path,
            apps_url = ?config.apps_url,
            "landing config"
        );
    });

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Root() -> Element {
    rsx! { Landing {} }
}

#[component]
fn Status(code: String) -> Element {
    rsx! { StatusPage { code } }
}
