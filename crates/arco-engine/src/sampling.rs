//! Adaptive detector polling rate.

/// Derives the detector polling interval from the shoulder elevation
/// state: poll every frame while the shoulder is elevated, every other
/// frame when it sits at baseline.
///
/// This is a throughput knob, not a correctness requirement. On frames
/// the caller skips, the engine reuses its last instantaneous decision
/// (last-value-hold) and the smoothing and calibration windows still
/// advance with the held values.
#[derive(Debug, Clone)]
pub struct AdaptiveSampler {
    interval: u32,
}

impl AdaptiveSampler {
    pub fn new() -> Self {
        // Poll every frame until the calibrator has an opinion
        Self { interval: 1 }
    }

    /// Update from the calibrator's elevation state; an unknown state
    /// holds the current interval.
    pub fn update(&mut self, elevated: Option<bool>) -> u32 {
        if let Some(elevated) = elevated {
            self.interval = if elevated { 1 } else { 2 };
        }
        self.interval
    }

    /// Frames to advance between successive detector invocations
    pub fn interval(&self) -> u32 {
        self.interval
    }
}

impl Default for AdaptiveSampler {
    fn default() -> Self {
        Self::new()
    }
}
