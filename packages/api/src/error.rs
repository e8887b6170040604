//! Errors raised while building or sending a request.

use thiserror::Error;

use crate::endpoint::Endpoint;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{endpoint:?} does not accept parameter `{name}`")]
    UnknownParam { endpoint: Endpoint, name: String },

    #[error("{endpoint:?} requires parameter `{name}`")]
    MissingParam { endpoint: Endpoint, name: &'static str },

    #[error("parameter `{name}` given twice for {endpoint:?}")]
    DuplicateParam { endpoint: Endpoint, name: String },
}
