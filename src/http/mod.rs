//! HTTP response handling subsystem.
//!
//! # Data Flow
//! ```text
//! http::Response<B> (from axum/hyper handler)
//!     → headers.rs (group by name, split single/multi)
//!     → body.rs (drain stream, encode text or base64)
//!     → media.rs (classify Content-Type)
//!     → response.rs (assemble gateway payload)
//! ```

pub mod body;
pub mod headers;
pub mod media;
pub mod response;

pub use headers::{GroupedHeaders, MultiValueHeaders, SingleValueHeaders};
pub use media::{BodyEncoding, MediaType, TextualMediaTypes};
pub use response::ResponseTranscoder;
