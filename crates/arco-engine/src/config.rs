//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters for one posture session.
///
/// The elevation threshold (pixels) and angle threshold (degrees) happen
/// to share a default magnitude but are independent knobs in different
/// units; they must never be collapsed into one constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Target elbow angle for a correct bowing posture (degrees)
    pub reference_angle: f64,

    /// Accepted deviation from the reference angle (degrees)
    pub angle_threshold: f64,

    /// Capacity of the raised/not-raised majority-vote window (frames)
    pub smoothing_window: usize,

    /// Capacity of the shoulder-height rolling window (frames)
    pub baseline_window: usize,

    /// Shoulder lift above baseline that counts as elevated (pixels)
    pub elevation_threshold: f64,

    /// Minimum uninterrupted qualification time per streak point (seconds)
    pub combo_threshold_secs: f64,

    /// Whether streak qualification requires a correct elbow angle.
    /// Disable for setups that run without angle-based checks.
    pub require_angle_for_combo: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_angle: 150.0,
            angle_threshold: 15.0,
            smoothing_window: 5,
            baseline_window: 10,
            elevation_threshold: 15.0,
            combo_threshold_secs: 2.0,
            require_angle_for_combo: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from file, with `ARCO_`-prefixed environment
    /// variables taking precedence.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("ARCO"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables only
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("ARCO"))
            .build()?;

        settings.try_deserialize()
    }
}
