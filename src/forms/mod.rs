//! Form definitions backing the slash command route.

use thiserror::Error;

pub mod command;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("missing `text` field")]
    MissingText,
}
