//! Gateway response transcoding.
//!
//! Converts an in-process `http::Response` (status, headers, streamed body)
//! into the flat payload an API gateway expects back from a function
//! invocation: single-value and multi-value header maps, and a body that is
//! either UTF-8 text or base64 depending on the declared content type.
//!
//! ```no_run
//! # async fn run() -> Result<(), gateway_transcoder::TranscodeError> {
//! use axum::{body::Body, http::Response};
//! use gateway_transcoder::{ApiGatewayProxyResponse, ResponseTranscoder};
//!
//! let response = Response::builder()
//!     .header("content-type", "application/json")
//!     .body(Body::from("{\"ok\":true}"))
//!     .unwrap();
//!
//! let payload: ApiGatewayProxyResponse = ResponseTranscoder::new().transcode(response).await?;
//! assert_eq!(payload.body.as_deref(), Some("{\"ok\":true}"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod observability;

pub use config::TranscoderConfig;
pub use error::{TranscodeError, TranscodeResult};
pub use gateway::{ApiGatewayProxyResponse, ApiGatewayV2Response, ApiResponse, GatewayService};
pub use http::ResponseTranscoder;
