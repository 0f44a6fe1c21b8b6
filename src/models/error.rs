use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Something broke, check username or try again";

/// Everything that can end a lookup attempt. All variants are shown to the
/// user the same way: as a single message line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Enter a Kick username first!")]
    EmptyInput,

    #[error("Kick API error - status {0}. User might not exist or API is down.")]
    HttpError(u16),

    #[error("{}", network_message(.0))]
    NetworkError(String),

    #[error("Malformed profile response: {0}")]
    ParseError(String),
}

fn network_message(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_FAILURE
    } else {
        message
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => LookupError::HttpError(status.as_u16()),
            _ if err.is_decode() => LookupError::ParseError(err.to_string()),
            _ => LookupError::NetworkError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::ParseError(err.to_string())
    }
}
