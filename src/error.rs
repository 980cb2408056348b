use thiserror::Error;

/// Failure of a store action. Carried inside `*Done` actions, so it has to
/// be cheap to clone and comparable in tests.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error("API Error: {endpoint} {message}")]
    Http {
        endpoint: &'static str,
        message: String,
    },
    #[error("API Error: {endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    #[error("API Error: could not decode {endpoint} response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
    #[error("API Error: {endpoint} returned an empty collection")]
    EmptyCollection { endpoint: &'static str },
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Storage Error: {0}")]
    Storage(String),
    #[error("Attachment Error: {0}")]
    Attachment(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
