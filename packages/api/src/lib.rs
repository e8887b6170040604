//! # API crate for every request the motorpool client makes
//!
//! The CGI programs answer with pre-rendered HTML fragments; this crate knows
//! which program to call for each operation, which parameters it takes, and what
//! the page should do with each status code. It never touches the DOM itself:
//! page effects go through the [`Host`] trait and HTTP through [`Transport`], so
//! every operation runs unchanged under test.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoint`] | Every endpoint with its method, program, `action` and declared parameters |
//! | [`query`] | Checked query building, form encoding and the cache-busting token |
//! | [`outcome`] | Status code classification (`Success`, `ClientError`, `Unauthorized`, `ServerError`) |
//! | [`transport`] | The [`Transport`] trait and its `reqwest` implementation |
//! | [`host`] | The [`Host`] trait through which page effects are performed |
//! | [`forms`] | Vehicle and user form values |
//! | [`session`] | Session cookie names and expiry strings |
//! | [`dispatcher`] | The [`Dispatcher`] and all admin and user operations |
//! | [`error`] | [`ApiError`] |

pub mod dispatcher;
pub mod endpoint;
pub mod error;
pub mod forms;
pub mod host;
pub mod outcome;
pub mod query;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::Dispatcher;
pub use endpoint::{Endpoint, Method};
pub use error::ApiError;
pub use forms::{UserForm, VehicleForm};
pub use host::{Host, SearchForm};
pub use outcome::Outcome;
pub use query::{Query, Request};
pub use transport::{HttpTransport, RawResponse, Transport};
