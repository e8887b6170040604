//! Shared dispatcher constructor for the pages.
//!
//! Returns an [`api::Dispatcher`] that talks to the CGI programs of the origin
//! the page was served from and applies results through a [`WebHost`].

use api::{ApiError, Dispatcher, HttpTransport};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::host::WebHost;
use crate::state::PageState;

/// Create a dispatcher for one operation.
pub fn make_dispatcher(
    config: ClientConfig,
    page: Signal<PageState>,
) -> Result<Dispatcher<HttpTransport, WebHost>, ApiError> {
    let transport = HttpTransport::new(&page_origin())?;
    Ok(Dispatcher::new(config, transport, WebHost::new(page)))
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    "http://localhost".to_string()
}
