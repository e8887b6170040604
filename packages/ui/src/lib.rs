//! This crate contains all shared UI for the motorpool client.
//!
//! Pages talk to the CGI programs only through [`Action`]s; the
//! [`ActionRunner`] turns each one into an [`api::Dispatcher`] call whose
//! effects land in the [`PageState`] signal through [`WebHost`].

pub mod actions;
pub use actions::{use_actions, Action, ActionRunner};

mod bridge;

mod dispatcher;
pub use dispatcher::make_dispatcher;

mod host;
pub use host::WebHost;

mod state;
pub use state::{use_config, use_page_state, PageProvider, PageState};

pub mod views;
