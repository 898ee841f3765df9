//! `gloo-net` transport used by the wasm build.

use gloo_net::http::{Request, RequestCredentials};

use crate::client::{RawResponse, Transport};
use crate::error::{ApiError, ApiResult};

/// Sends requests through the browser's `fetch`, with the session cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get(&self, path: &str) -> ApiResult<RawResponse> {
        let response = Request::get(path)
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|err| ApiError::transport(path, err))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::transport(path, err))?;
        Ok(RawResponse { status, body })
    }
}
