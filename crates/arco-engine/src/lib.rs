//! # Arco-Engine
//!
//! Posture-evaluation engine for violin bowing-arm feedback.
//!
//! The engine turns raw, noisy per-frame joint positions into a stable,
//! human-usable judgment. It is frame-synchronous and single-threaded:
//! the caller feeds one joint sample (or none) per loop iteration and
//! receives one output record back.
//!
//! ## Pipeline
//!
//! Per frame, in order:
//!
//! 1. **Classifier**: instantaneous decision from the elbow angle and
//!    joint positions (correct/deviated, elbow raised).
//! 2. **Smoother**: majority vote over the recent raised/not-raised
//!    history, suppressing detector jitter.
//! 3. **Calibrator**: rolling shoulder-height average; the first full
//!    window freezes the session baseline, later frames report lift
//!    relative to it.
//! 4. **Sampler**: adapts the detector polling interval to the
//!    shoulder elevation state.
//! 5. **Scorer**: duration-gated streak counter over the composite
//!    "all checks pass" signal.
//! 6. **Hints**: priority-ordered coaching advice.
//!
//! [`session::PostureSession`] owns all of the per-session state and is
//! the intended entry point.

pub mod baseline;
pub mod classifier;
pub mod combo;
pub mod config;
pub mod hints;
pub mod sampling;
pub mod session;
pub mod smoothing;

pub use self::baseline::*;
pub use self::classifier::*;
pub use self::combo::*;
pub use self::config::*;
pub use self::hints::*;
pub use self::sampling::*;
pub use self::session::*;
pub use self::smoothing::*;
