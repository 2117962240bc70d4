//! Body collection and encoding.
//!
//! # Responsibilities
//! - Drain a streamed response body into one buffer
//! - Render the buffer as UTF-8 text or base64
//!
//! # Design Decisions
//! - The body is read exactly once; it cannot be replayed
//! - Encoding waits for the full buffer since the decision depends on total content
//! - Text that is not valid UTF-8 falls back to base64 rather than failing

use axum::body::{Body, Bytes, HttpBody};
use axum::BoxError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{TranscodeError, TranscodeResult};
use crate::http::media::BodyEncoding;

/// Drain `body` to completion, failing if it errors or exceeds `limit` bytes.
pub async fn drain<B>(body: B, limit: Option<usize>) -> TranscodeResult<Bytes>
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    axum::body::to_bytes(Body::new(body), limit.unwrap_or(usize::MAX))
        .await
        .map_err(TranscodeError::BodyDrain)
}

/// A body rendered for the gateway payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    pub body: String,
    pub encoding: BodyEncoding,
}

impl EncodedBody {
    pub fn is_base64_encoded(&self) -> bool {
        self.encoding == BodyEncoding::Base64
    }
}

/// Render `buffer` with the requested encoding.
///
/// A `Text` request on bytes that are not valid UTF-8 is downgraded to `Base64`.
pub fn encode(buffer: Bytes, requested: BodyEncoding) -> EncodedBody {
    if requested == BodyEncoding::Base64 {
        return base64_body(&buffer);
    }

    // Reclaims the allocation when `buffer` is uniquely owned.
    match String::from_utf8(Vec::from(buffer)) {
        Ok(body) => EncodedBody {
            body,
            encoding: BodyEncoding::Text,
        },
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                len = e.as_bytes().len(),
                "Textual body is not valid UTF-8, sending as base64"
            );
            base64_body(e.as_bytes())
        }
    }
}

fn base64_body(bytes: &[u8]) -> EncodedBody {
    EncodedBody {
        body: STANDARD.encode(bytes),
        encoding: BodyEncoding::Base64,
    }
}
