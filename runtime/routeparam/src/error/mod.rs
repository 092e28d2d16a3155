//! Error handling utilities.
pub(crate) mod error_;

pub use error_::Error;
