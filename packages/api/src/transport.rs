//! The HTTP seam of the dispatcher.

use std::future::Future;

use reqwest::Url;

use crate::endpoint::Method;
use crate::error::ApiError;

/// Status and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Async trait for sending one request.
///
/// Futures are not required to be `Send`; everything runs on the browser's UI
/// thread.
pub trait Transport {
    fn send(
        &self,
        method: Method,
        path_and_query: &str,
    ) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// [`Transport`] over `reqwest`, which uses `fetch` in the browser.
///
/// Same-origin requests carry the session cookies automatically.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    origin: Url,
}

impl HttpTransport {
    /// `origin` is the scheme and host the page was served from.
    pub fn new(origin: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::new(),
            origin: Url::parse(origin)?,
        })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, method: Method, path_and_query: &str) -> Result<RawResponse, ApiError> {
        let url = self.origin.join(path_and_query)?;
        let request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
