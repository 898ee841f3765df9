//! HTTP contract for the Ignition landing page.
//!
//! The backend exposes a handful of small JSON endpoints under `/api/v1`.
//! This crate owns their payload types, the status-code branching the UI
//! relies on, and the [`Transport`] seam the browser build plugs `gloo-net`
//! into.

pub mod client;
pub mod error;
pub mod model;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use client::{org_url, Client, Endpoints, InfoOutcome, RawResponse, Transport, DEFAULT_API_BASE};
pub use error::{ApiError, ApiResult};
pub use model::{Info, Organization, Profile, DEFAULT_COMPANY_NAME, DEFAULT_SPACE_NAME};
