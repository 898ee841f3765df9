use api::{org_url, Client, Info, InfoOutcome, Transport};
use dioxus::prelude::*;
use tracing::{debug, info as log_info, warn};

use crate::components::{default_footer_links, Footer, OrgButton};
use crate::core::config::{use_landing_config, LandingConfig};
use crate::core::format::adoption_line;
use crate::core::navigation::{info_redirect, ForbiddenHandling, Navigation};
use crate::core::platform;
use crate::i18n;
use crate::t;

const CLI_DOCS_URL: &str = "https://docs.pivotal.io/pivotalcf/latest/cf-cli/";
const SAMPLE_APP_URL: &str = "https://github.com/cloudfoundry-samples/spring-music";
const DEPLOY_GUIDE_URL: &str =
    "https://docs.pivotal.io/pivotalcf/latest/devguide/deploy-apps/deploy-app.html";

/// The promotional page body: welcome, three steps, spaces, footer.
///
/// `info` seeds the personalized copy. Without it the body shows the defaults
/// and, unless `testing`, fetches `/info` itself.
#[component]
pub fn Body(info: Option<Info>, #[props(default)] testing: bool) -> Element {
    i18n::init();
    let config = use_landing_config();

    let fetched = use_signal(|| None::<Info>);
    let mut busy = use_signal(|| false);

    let needs_fetch = info.is_none() && !testing;
    use_hook(|| {
        if !needs_fetch {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        spawn_body_fetch(api::browser::BrowserTransport, &config, fetched);
        #[cfg(not(target_arch = "wasm32"))]
        debug!(api_base = %config.api_base, "no browser transport; body keeps defaults");
    });

    let current = info.or_else(|| fetched()).unwrap_or_default();
    let company_name = current.company_name().to_string();
    let space_name = current.space_name().to_string();
    let adoption = adoption_line(current.org_count(), &t!("welcome-adoption"));

    let open_org = {
        let endpoints = config.endpoints();
        let apps_url = config.apps_url.clone();
        use_callback(move |_: MouseEvent| {
            if busy() {
                return;
            }
            busy.set(true);
            #[cfg(target_arch = "wasm32")]
            spawn(go_to_org(
                Client::with_endpoints(api::browser::BrowserTransport, endpoints.clone()),
                apps_url.clone(),
                busy,
            ));
            #[cfg(not(target_arch = "wasm32"))]
            {
                debug!(path = %endpoints.organization, apps_url = ?apps_url, "no browser transport; org lookup skipped");
                busy.set(false);
            }
        })
    };

    rsx! {
        main { class: "body",
            // Welcome
            section { class: "cta cta--welcome",
                div { class: "speech speech--welcome",
                    p {
                        span { class: "speech__company", "{company_name}" }
                        " "
                        {t!("welcome-playground")}
                    }
                    p { {t!("welcome-orgs")} }
                    p { class: "speech__adoption", "{adoption}" }
                    OrgButton { label: t!("welcome-button"), busy: busy(), onclick: open_org }
                }
                div { class: "cta__character cta__character--rocket", aria_hidden: "true" }
            }

            // Getting started
            section { class: "cta cta--steps",
                h2 { class: "visually-hidden", {t!("steps-title")} }
                div { class: "cta__character cta__character--pewpew", aria_hidden: "true" }
                div { class: "step",
                    div { class: "step__badge", "1" }
                    p {
                        {t!("step-cli-before")}
                        br {}
                        a { href: CLI_DOCS_URL, {t!("step-cli-link")} }
                        br {}
                        {t!("step-cli-after")}
                    }
                }
                div { class: "step",
                    div { class: "step__badge", "2" }
                    p {
                        {t!("step-sample-before")}
                        br {}
                        a { href: SAMPLE_APP_URL, {t!("step-sample-link")} }
                        br {}
                        {t!("step-sample-after")}
                    }
                }
                div { class: "step",
                    div { class: "step__badge", "3" }
                    p {
                        {t!("step-deploy-before")}
                        br {}
                        a { href: DEPLOY_GUIDE_URL, {t!("step-deploy-link")} }
                    }
                }
            }

            // Spaces
            section { class: "cta cta--spaces",
                div { class: "speech speech--spaces",
                    p {
                        {t!("spaces-first-space")}
                        " \""
                        span { class: "speech__space", "{space_name}" }
                        "\"."
                    }
                    p { {t!("spaces-marketplace")} }
                    OrgButton { label: t!("spaces-button"), busy: busy(), onclick: open_org }
                }
                div { class: "cta__character cta__character--moon", aria_hidden: "true" }
            }

            Footer { links: default_footer_links() }
        }
    }
}

/// What the body does with an `/info` outcome. Unlike the root, a 403 here
/// is just another failed status.
#[derive(Debug, Clone, PartialEq)]
enum BodyAction {
    Personalize(Info),
    Navigate(Navigation),
    KeepDefaults,
}

fn body_action(outcome: InfoOutcome, login_path: &str) -> BodyAction {
    if let Some(navigation) = info_redirect(&outcome, ForbiddenHandling::Redirect, login_path) {
        return BodyAction::Navigate(navigation);
    }
    match outcome {
        InfoOutcome::Loaded(info) => BodyAction::Personalize(info),
        _ => BodyAction::KeepDefaults,
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn spawn_body_fetch<T: Transport + 'static>(
    transport: T,
    config: &LandingConfig,
    mut fetched: Signal<Option<Info>>,
) {
    let client = Client::with_endpoints(transport, config.endpoints());
    let login_path = config.login_path.clone();
    spawn(async move {
        match client.info().await {
            Ok(outcome) => match body_action(outcome, &login_path) {
                BodyAction::Personalize(info) => fetched.set(Some(info)),
                BodyAction::Navigate(navigation) => platform::navigate(&navigation),
                BodyAction::KeepDefaults => debug!("info unavailable; body keeps defaults"),
            },
            Err(err) => warn!(%err, path = err.path(), "info request failed"),
        }
    });
}

/// Look up the user's org and leave for it. Clears `busy` when done.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
async fn go_to_org<T: Transport>(
    client: Client<T>,
    apps_url: Option<String>,
    mut busy: Signal<bool>,
) {
    match client.organization().await {
        Ok(Some(org)) => match org_url(&org, apps_url.as_deref()) {
            Some(url) => {
                log_info!(org = %org.name, url = %url, "opening org");
                platform::navigate(&Navigation::Assign(url));
            }
            None => warn!(org = %org.name, "org has no url and no apps url is configured"),
        },
        Ok(None) => warn!(path = %client.endpoints().organization, "organization lookup returned nothing"),
        Err(err) => warn!(%err, path = err.path(), "organization lookup failed"),
    }
    busy.set(false);
}
