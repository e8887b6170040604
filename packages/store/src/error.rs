//! Client-side validation failures.
//!
//! The `Display` text of each variant is the message shown to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error: Start Time must be before End Time")]
    EmptyWindow,

    #[error("Password fields must match")]
    PasswordMismatch,

    #[error("Error: {date} {time} does not exist in the local time zone")]
    NonexistentLocalTime { date: String, time: String },

    #[error("Error: invalid {field} \"{value}\"")]
    InvalidSelection { field: &'static str, value: String },

    #[error("Error: expected {expected} cells in the row, found {found}")]
    RowTooShort { expected: usize, found: usize },
}
