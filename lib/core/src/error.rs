use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Request for {url} failed: {status}")]
    FetchFailure { url: String, status: String },

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("No link bound to row {0}")]
    UnknownBinding(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// The resource URL the failure refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::FetchFailure { url, .. } | Error::MalformedResponse { url, .. } => Some(url),
            Error::UnknownBinding(_) | Error::InvalidConfig(_) => None,
        }
    }
}
