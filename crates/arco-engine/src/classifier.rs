//! Per-frame instantaneous posture decision.

use arco_core::{geometry, JointSample};
use serde::{Deserialize, Serialize};

/// Instantaneous decision from a single joint sample, prior to smoothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstantDecision {
    /// Interior elbow angle (degrees)
    pub angle: f64,
    /// Absolute deviation from the reference angle (degrees)
    pub deviation: f64,
    /// Deviation is within the accepted threshold
    pub angle_correct: bool,
    /// Elbow is above the shoulder or sharply bent upward
    pub elbow_raised: bool,
}

/// Stateless per-frame classifier. Re-running [`classify`](Self::classify)
/// on the same sample reproduces the same decision exactly.
#[derive(Debug, Clone)]
pub struct PostureClassifier {
    reference_angle: f64,
    angle_threshold: f64,
}

impl PostureClassifier {
    pub fn new(reference_angle: f64, angle_threshold: f64) -> Self {
        Self {
            reference_angle,
            angle_threshold,
        }
    }

    pub fn classify(&self, sample: &JointSample) -> InstantDecision {
        let angle = geometry::interior_angle(sample.shoulder, sample.elbow, sample.wrist);
        let deviation = (angle - self.reference_angle).abs();

        // Either signal alone marks the elbow as raised: visibly above
        // the shoulder, or bent sharper than a right angle.
        let visibly_above = sample.elbow.y < sample.shoulder.y;
        let bent_upward = angle < 90.0;

        InstantDecision {
            angle,
            deviation,
            angle_correct: deviation <= self.angle_threshold,
            elbow_raised: visibly_above || bent_upward,
        }
    }

    pub fn reference_angle(&self) -> f64 {
        self.reference_angle
    }

    /// Re-anchor the reference to a newly measured angle
    pub fn set_reference(&mut self, angle: f64) {
        self.reference_angle = angle;
    }
}
