//! # Arco-Export
//!
//! Thin output boundaries of the posture engine: per-frame CSV metrics
//! rows for offline accuracy analysis, and one-shot JSON snapshots of
//! the full detected skeleton.

pub mod metrics;
pub mod snapshot;

pub use metrics::*;
pub use snapshot::*;
