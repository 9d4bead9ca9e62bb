use thiserror::Error;

/// User-facing message when the catalog endpoint is not configured
pub const NOT_CONFIGURED_MESSAGE: &str = "Skip catalog is not configured";
/// User-facing message for every other fetch failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch skip data";

/// Reasons a catalog fetch can fail.
///
/// The variant detail is meant for logs. What the user sees comes from
/// [`FetchError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("catalog base URL is not configured")]
    MissingBaseUrl,
    #[error("catalog base URL is invalid: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("catalog responded with HTTP {0}")]
    Status(u16),
    #[error("malformed catalog response: {0}")]
    Parse(String),
}

impl FetchError {
    /// True when the failure happened before any request could be made
    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::MissingBaseUrl | FetchError::InvalidBaseUrl(_))
    }

    pub fn user_message(&self) -> &'static str {
        if self.is_configuration() {
            NOT_CONFIGURED_MESSAGE
        } else {
            FETCH_FAILED_MESSAGE
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
