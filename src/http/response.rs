//! Response transcoding into gateway payloads.
//!
//! # Responsibilities
//! - Reshape response headers into single-value and multi-value maps
//! - Drain the streamed body
//! - Pick text or base64 from the declared content type
//! - Build the gateway payload
//!
//! # Design Decisions
//! - Body draining is the only suspension point and the only failure path
//! - A dropped transcode future leaves no partial payload behind
//! - Transcoding is a pure function of status, headers and drained bytes

use std::sync::Arc;

use axum::body::{Bytes, HttpBody};
use axum::http::{header, Response};
use axum::BoxError;

use crate::config::TranscoderConfig;
use crate::error::TranscodeResult;
use crate::gateway::ApiResponse;
use crate::http::body::{drain, encode};
use crate::http::headers::GroupedHeaders;
use crate::http::media::{InvalidMediaType, TextualMediaTypes};
use crate::observability::metrics;

/// Converts HTTP responses into gateway payloads.
#[derive(Debug, Clone, Default)]
pub struct ResponseTranscoder {
    textual: Arc<TextualMediaTypes>,
    max_body_bytes: Option<usize>,
}

impl ResponseTranscoder {
    /// Create a transcoder with the default media table and no body limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcoder from validated configuration.
    pub fn from_config(config: &TranscoderConfig) -> Result<Self, InvalidMediaType> {
        let textual = TextualMediaTypes::with_extra(
            config.media_types.extra_textual.iter().map(String::as_str),
        )?;
        Ok(Self {
            textual: Arc::new(textual),
            max_body_bytes: config.body.max_bytes,
        })
    }

    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    /// Consume `response` and build the gateway payload `R`.
    ///
    /// Fails only if the body cannot be drained.
    pub async fn transcode<R, B>(&self, response: Response<B>) -> TranscodeResult<R>
    where
        R: ApiResponse,
        B: HttpBody<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = response.into_parts();

        let buffer = match drain(body, self.max_body_bytes).await {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!(status = %parts.status, error = %e, "Failed to drain response body");
                metrics::record_failure();
                return Err(e);
            }
        };

        // Only `type/subtype` is classified; parameters may carry non-ASCII bytes.
        let content_type = parts
            .headers
            .get(header::CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()));
        let content_type = content_type.as_deref();
        let requested = self.textual.classify(content_type);

        let grouped = GroupedHeaders::from_header_map(&parts.headers);
        let (single, multi) = grouped.partition();

        let body_len = buffer.len();
        let encoded = encode(buffer, requested);

        tracing::debug!(
            status = parts.status.as_u16(),
            content_type = content_type.unwrap_or("-"),
            encoding = encoded.encoding.as_str(),
            body_len,
            single_headers = single.len(),
            multi_headers = multi.len(),
            "Transcoded response"
        );
        metrics::record_transcode(encoded.encoding, body_len);

        let is_base64_encoded = encoded.is_base64_encoded().then_some(true);

        Ok(R::from_parts(
            parts.status.as_u16(),
            (!single.is_empty()).then_some(single),
            (!multi.is_empty()).then_some(multi),
            Some(encoded.body),
            is_base64_encoded,
        ))
    }
}
