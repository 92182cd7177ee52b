//! Errors raised by POS backend requests.

use thiserror::Error;

/// Errors that can occur when calling the POS backend.
///
/// Each operation has exactly two failure modes: the exchange never completed
/// ([`PosError::Http`]), or the backend answered with a non-success status
/// ([`PosError::Request`]).
#[derive(Debug, Error)]
pub enum PosError {
    /// The request could not be sent, no response was received, or the
    /// response body could not be decoded. Propagated from the HTTP stack
    /// as-is.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The backend responded with a non-success status. Carries the fixed
    /// message for the failed operation; the status code and response body
    /// are discarded.
    #[error("{0}")]
    Request(&'static str),
}
