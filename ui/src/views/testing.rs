//! Canned backend and a scheduler pump for driving views in a `VirtualDom`.

use std::time::Duration;

use api::{ApiError, ApiResult, RawResponse, Transport};
use dioxus::dioxus_core::VirtualDom;

/// Answers GETs from a fixed table; unknown paths fail like a dropped
/// connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct CannedTransport {
    responses: Vec<(String, u16, String)>,
}

impl CannedTransport {
    pub(crate) fn with(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.push((path.to_string(), status, body.to_string()));
        self
    }
}

impl Transport for CannedTransport {
    async fn get(&self, path: &str) -> ApiResult<RawResponse> {
        self.responses
            .iter()
            .find(|(p, _, _)| p == path)
            .map(|(_, status, body)| RawResponse::new(*status, body.clone()))
            .ok_or_else(|| ApiError::transport(path, "connection refused"))
    }
}

/// Run spawned tasks and re-render until the dom goes quiet.
pub(crate) async fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        let work = tokio::time::timeout(Duration::from_millis(25), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        let _ = dom.render_immediate_to_vec();
    }
}

pub(crate) fn english() {
    crate::i18n::init();
    let _ = crate::i18n::set_language("en-US");
}
