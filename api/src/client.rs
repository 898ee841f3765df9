//! Endpoint paths, the transport seam and status-code classification.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::model::{Info, Organization, Profile};

pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues same-origin GET requests on behalf of a [`Client`].
///
/// The browser build uses [`crate::browser::BrowserTransport`]; tests supply
/// canned responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> ApiResult<RawResponse>;
}

/// Paths of the endpoints the landing page reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub info: String,
    pub profile: String,
    pub organization: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            info: format!("{base}/info"),
            profile: format!("{base}/profile"),
            organization: format!("{base}/organization"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// What the `/info` response tells the page to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoOutcome {
    Loaded(Info),
    /// 401: the session is missing or expired.
    Unauthenticated,
    /// 403: signed in, but not allowed to use the playground.
    Forbidden,
    /// Any other non-2xx status.
    Unexpected(u16),
}

impl InfoOutcome {
    fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthenticated,
            403 => Self::Forbidden,
            other => Self::Unexpected(other),
        }
    }
}

pub struct Client<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self::with_endpoints(transport, Endpoints::default())
    }

    pub fn with_endpoints(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch deployment details and classify the response.
    pub async fn info(&self) -> ApiResult<InfoOutcome> {
        let path = &self.endpoints.info;
        let response = self.transport.get(path).await?;
        debug!(path = %path, status = response.status, "info response");
        if !response.is_ok() {
            return Ok(InfoOutcome::from_status(response.status));
        }
        decode(path, &response.body).map(InfoOutcome::Loaded)
    }

    /// Fetch the signed-in profile. Any non-2xx status yields `None`.
    pub async fn profile(&self) -> ApiResult<Option<Profile>> {
        self.optional(&self.endpoints.profile).await
    }

    /// Look up (or have the backend create) the user's playground org.
    pub async fn organization(&self) -> ApiResult<Option<Organization>> {
        self.optional(&self.endpoints.organization).await
    }

    async fn optional<R: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<R>> {
        let response = self.transport.get(path).await?;
        debug!(path = %path, status = response.status, "response");
        if !response.is_ok() {
            return Ok(None);
        }
        decode(path, &response.body).map(Some)
    }
}

fn decode<R: DeserializeOwned>(path: &str, body: &str) -> ApiResult<R> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Where the "go to my org" buttons should send the browser.
///
/// An explicit `url` on the org wins; otherwise the apps manager URL is
/// combined with the org guid.
pub fn org_url(org: &Organization, apps_url: Option<&str>) -> Option<String> {
    if let Some(url) = org.url.as_deref().filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }
    if org.guid.is_empty() {
        return None;
    }
    apps_url
        .map(|base| base.trim_end_matches('/'))
        .filter(|base| !base.is_empty())
        .map(|base| format!("{base}/organizations/{}", org.guid))
}
