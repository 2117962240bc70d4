//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (body limit > 0)
//! - Check media type syntax before the table is built
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TranscoderConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::TranscoderConfig;
use crate::http::media::MediaRange;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("body.max_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("media_types.extra_textual[{index}]: {value:?} is not a valid type/subtype")]
    InvalidMediaType { index: usize, value: String },

    #[error("observability.log_level: unknown level {0:?}")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every error.
pub fn validate_config(config: &TranscoderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.body.max_bytes == Some(0) {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    for (index, value) in config.media_types.extra_textual.iter().enumerate() {
        if value.parse::<MediaRange>().is_err() {
            errors.push(ValidationError::InvalidMediaType {
                index,
                value: value.clone(),
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
