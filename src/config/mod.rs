//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → TranscoderConfig (validated, immutable)
//!     → ResponseTranscoder::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal or absent configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BodyConfig, MediaTypeConfig, ObservabilityConfig, TranscoderConfig};
pub use validation::{validate_config, ValidationError};
