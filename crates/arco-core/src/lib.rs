//! # Arco-Core
//!
//! Core types and utilities for the arco violin bowing-posture
//! feedback system: pixel-space joint samples extracted from a pose
//! detector, the elbow-angle geometry, and shared error types.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::*;
pub use types::*;
