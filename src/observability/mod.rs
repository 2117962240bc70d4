//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ResponseTranscoder produces:
//!     → tracing events (debug per response, warn on fallback or failure)
//!     → metrics.rs (counters, histograms via the `metrics` facade)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, configured by the binary)
//!     → whatever metrics recorder the host process installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing subscribers and recorders is up to the host
//! - Metric updates are no-ops when no recorder is installed

pub mod logging;
pub mod metrics;
