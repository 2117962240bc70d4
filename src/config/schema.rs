//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the transcoder.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct TranscoderConfig {
    /// Body collection settings.
    pub body: BodyConfig,

    /// Textual media type table extensions.
    pub media_types: MediaTypeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Body collection configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Largest body accepted, in bytes. Unlimited when absent.
    pub max_bytes: Option<usize>,
}

/// Media type configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MediaTypeConfig {
    /// Extra media types sent as text, e.g. `application/xml` or `font/*`.
    pub extra_textual: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
