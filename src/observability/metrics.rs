//! Metrics collection.
//!
//! # Metrics
//! - `gateway_transcode_total` (counter): transcoded responses by `encoding`
//! - `gateway_transcode_failures_total` (counter): body drain failures
//! - `gateway_transcode_body_bytes` (histogram): drained body sizes

use metrics::{counter, histogram};

use crate::http::media::BodyEncoding;

pub const TRANSCODE_TOTAL: &str = "gateway_transcode_total";
pub const TRANSCODE_FAILURES_TOTAL: &str = "gateway_transcode_failures_total";
pub const TRANSCODE_BODY_BYTES: &str = "gateway_transcode_body_bytes";

/// Record a successful transcode.
pub fn record_transcode(encoding: BodyEncoding, body_len: usize) {
    counter!(TRANSCODE_TOTAL, "encoding" => encoding.as_str()).increment(1);
    histogram!(TRANSCODE_BODY_BYTES).record(body_len as f64);
}

/// Record a body drain failure.
pub fn record_failure() {
    counter!(TRANSCODE_FAILURES_TOTAL).increment(1);
}
