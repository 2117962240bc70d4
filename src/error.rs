//! Transcoding error definitions.

use thiserror::Error;

/// Errors raised while converting an HTTP response into a gateway payload.
///
/// Draining the body is the only fallible step. Header reshaping and body
/// encoding are pure in-memory operations.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The response body stream failed or exceeded the configured size limit.
    #[error("failed to drain response body: {0}")]
    BodyDrain(#[source] axum::Error),
}

/// Result type for transcoding operations.
pub type TranscodeResult<T> = Result<T, TranscodeError>;
