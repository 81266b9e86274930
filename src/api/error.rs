use thiserror::Error;

/// Everything that can go wrong talking to the order/auth API.
///
/// Screens only care that a fetch failed; the variants exist for logs and for
/// the login form, which shows the API's own `message` when there is one.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API responded with HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("could not decode API response: {0}")]
    Decode(String),

    #[error("invalid API endpoint: {0}")]
    Config(String),
}

impl ApiError {
    /// Message supplied by the API in its error body, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
