//! Gateway payload subsystem.
//!
//! # Data Flow
//! ```text
//! Lambda event adapter
//!     → service.rs (run inner HTTP service)
//!     → http::ResponseTranscoder (headers, body, encoding)
//!     → response.rs (REST v1 / HTTP v2 payload)
//!     → serialized by the runtime and returned to the gateway
//! ```
//!
//! # Design Decisions
//! - Payload types are chosen statically; no dynamic dispatch
//! - Payloads are immutable once built

pub mod response;
pub mod service;

pub use response::{ApiGatewayProxyResponse, ApiGatewayV2Response, ApiResponse};
pub use service::{GatewayLayer, GatewayService, GatewayServiceError};
