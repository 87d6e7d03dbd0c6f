use thiserror::Error;

/// Errors raised while building an adapter over external data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The container handed to an adapter constructor does not have the
    /// expected shape (e.g. an odd number of bytes for UTF-16 input).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
