use thiserror::Error;

/// Failures talking to the backend.
///
/// Non-2xx statuses are not errors: they are classified by the client into
/// outcomes the views branch on. Only a request that never produced a status,
/// or a 2xx body that is not the expected JSON, ends up here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("response from {path} is not valid JSON")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn transport(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Transport { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
