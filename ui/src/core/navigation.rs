//! Where the browser goes after an `/info` response.

use api::InfoOutcome;

/// A full-page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the current history entry (status redirects).
    Replace(String),
    /// Push a new history entry (leaving for the user's org).
    Assign(String),
}

impl Navigation {
    pub fn target(&self) -> &str {
        match self {
            Self::Replace(target) | Self::Assign(target) => target,
        }
    }
}

/// How a view reacts to a 403 from `/info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenHandling {
    /// The root renders the forbidden view in place.
    RenderView,
    /// The body treats 403 like any other failure and leaves for `/403`.
    Redirect,
}

pub fn status_path(status: u16) -> String {
    format!("/{status}")
}

/// The redirect (if any) an `/info` outcome calls for.
pub fn info_redirect(
    outcome: &InfoOutcome,
    forbidden: ForbiddenHandling,
    login_path: &str,
) -> Option<Navigation> {
    match outcome {
        InfoOutcome::Loaded(_) => None,
        InfoOutcome::Unauthenticated => Some(Navigation::Replace(login_path.to_string())),
        InfoOutcome::Forbidden => match forbidden {
            ForbiddenHandling::RenderView => None,
            ForbiddenHandling::Redirect => Some(Navigation::Replace(status_path(403))),
        },
        InfoOutcome::Unexpected(status) => Some(Navigation::Replace(status_path(*status))),
    }
}
