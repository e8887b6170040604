//! View state, formatting and configuration shared by the motorpool client.
//!
//! Nothing in this crate performs I/O; every function is deterministic given its
//! inputs (the current date and time are always passed in).

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod fragment;
pub mod options;
pub mod region;
pub mod schema;
pub mod view;
pub mod window;

pub use command::Command;
pub use config::ClientConfig;
pub use error::ValidationError;
pub use options::{PickerOptions, SelectOption};
pub use region::{Region, SelectList};
pub use schema::{FieldKind, FieldSpec, RowSchema, AVAILABLE_ROW, RESERVATION_ROW};
pub use view::{Modal, Panel, ViewState};
pub use window::{ReservationWindow, WindowSelection};
