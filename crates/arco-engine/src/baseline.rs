//! Shoulder-height baseline calibration and lift tracking.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Shoulder elevation state for one frame.
///
/// `Calibrating` is genuinely unknown, not "normal": downstream checks
/// cannot confirm the shoulder is down until the baseline exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShoulderReading {
    /// The rolling window has not filled yet; no baseline exists
    Calibrating,
    /// Baseline frozen; `lift` is positive when the shoulder has risen
    Settled { lift: f64, elevated: bool },
}

impl ShoulderReading {
    pub fn lift(&self) -> Option<f64> {
        match self {
            ShoulderReading::Calibrating => None,
            ShoulderReading::Settled { lift, .. } => Some(*lift),
        }
    }

    pub fn elevated(&self) -> Option<bool> {
        match self {
            ShoulderReading::Calibrating => None,
            ShoulderReading::Settled { elevated, .. } => Some(*elevated),
        }
    }
}

/// Rolling shoulder-height average with a write-once baseline.
///
/// The first full window freezes the session baseline permanently; the
/// window keeps sliding with fresh data, but only `lift` (baseline minus
/// current average) moves afterwards. The player's setup at session
/// start defines "normal" for the rest of the session.
#[derive(Debug, Clone)]
pub struct BaselineCalibrator {
    heights: VecDeque<f64>,
    capacity: usize,
    baseline: Option<f64>,
    elevation_threshold: f64,
}

impl BaselineCalibrator {
    pub fn new(capacity: usize, elevation_threshold: f64) -> Self {
        let capacity = capacity.max(1);
        Self {
            heights: VecDeque::with_capacity(capacity),
            capacity,
            baseline: None,
            elevation_threshold,
        }
    }

    /// Record one shoulder y-coordinate (pixels) and report the
    /// elevation state for this frame.
    pub fn observe(&mut self, shoulder_y: f64) -> ShoulderReading {
        if self.heights.len() == self.capacity {
            self.heights.pop_front();
        }
        self.heights.push_back(shoulder_y);

        if self.heights.len() < self.capacity {
            return ShoulderReading::Calibrating;
        }

        let average = self.heights.iter().sum::<f64>() / self.heights.len() as f64;
        let baseline = match self.baseline {
            Some(frozen) => frozen,
            None => {
                tracing::debug!(baseline_px = average, "shoulder baseline frozen");
                self.baseline = Some(average);
                average
            }
        };

        // Image y grows downward, so a raised shoulder lowers the average
        let lift = baseline - average;
        ShoulderReading::Settled {
            lift,
            elevated: lift > self.elevation_threshold,
        }
    }

    /// The frozen baseline, `None` until the window first fills
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_calibrating_until_full() {
        let mut calibrator = BaselineCalibrator::new(10, 15.0);
        for _ in 0..9 {
            assert_eq!(calibrator.observe(200.0), ShoulderReading::Calibrating);
            assert!(calibrator.baseline().is_none());
        }
        let reading = calibrator.observe(200.0);
        assert_eq!(reading.lift(), Some(0.0));
        assert_eq!(calibrator.baseline(), Some(200.0));
    }

    #[test]
    fn test_baseline_never_recomputed() {
        let mut calibrator = BaselineCalibrator::new(10, 15.0);
        for _ in 0..10 {
            calibrator.observe(100.0);
        }
        assert_eq!(calibrator.baseline(), Some(100.0));

        // Drastically different heights for a long stretch: only lift moves
        let mut last = ShoulderReading::Calibrating;
        for _ in 0..1000 {
            last = calibrator.observe(500.0);
        }
        assert_eq!(calibrator.baseline(), Some(100.0));
        assert_eq!(last.lift(), Some(-400.0));
        assert_eq!(last.elevated(), Some(false));
    }

    #[test]
    fn test_raised_shoulder_elevates() {
        let mut calibrator = BaselineCalibrator::new(10, 15.0);
        for _ in 0..10 {
            calibrator.observe(200.0);
        }
        // Shoulder moves 50px up the image (smaller y)
        let mut last = ShoulderReading::Calibrating;
        for _ in 0..10 {
            last = calibrator.observe(150.0);
        }
        assert_eq!(last.lift(), Some(50.0));
        assert_eq!(last.elevated(), Some(true));
    }

    #[test]
    fn test_lift_at_threshold_is_not_elevated() {
        let mut calibrator = BaselineCalibrator::new(2, 15.0);
        calibrator.observe(100.0);
        calibrator.observe(100.0);
        calibrator.observe(85.0);
        // Window average now exactly 15px above baseline: strictly-greater rule
        let reading = calibrator.observe(85.0);
        assert_eq!(reading.lift(), Some(15.0));
        assert_eq!(reading.elevated(), Some(false));
    }
}
