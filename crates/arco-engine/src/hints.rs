//! Priority-ordered coaching hints.

use serde::{Deserialize, Serialize};

use crate::baseline::ShoulderReading;

/// Coaching advice derived from the per-frame posture states.
///
/// The variants form a fixed priority stack: an incorrect angle always
/// outranks an elevated shoulder, which outranks an unstable arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackHint {
    ExtendArm,
    LowerShoulder,
    StabilizeArm,
    GoodPosture,
}

impl FeedbackHint {
    /// Evaluate the cascade; first match wins.
    ///
    /// While the shoulder state is still calibrating, `GoodPosture` is
    /// unreachable and the result is `None`: an unknown shoulder cannot
    /// be confirmed as "down", and presenting it as good posture would
    /// mislead the player.
    pub fn for_states(
        angle_correct: bool,
        shoulder: ShoulderReading,
        smoothed_status: bool,
    ) -> Option<FeedbackHint> {
        if !angle_correct {
            return Some(FeedbackHint::ExtendArm);
        }
        if shoulder.elevated() == Some(true) {
            return Some(FeedbackHint::LowerShoulder);
        }
        if !smoothed_status {
            return Some(FeedbackHint::StabilizeArm);
        }
        match shoulder {
            ShoulderReading::Settled { .. } => Some(FeedbackHint::GoodPosture),
            ShoulderReading::Calibrating => None,
        }
    }

    /// On-screen coaching text
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackHint::ExtendArm => "Try extending your bowing arm more",
            FeedbackHint::LowerShoulder => "Lower your shoulder slightly",
            FeedbackHint::StabilizeArm => "Keep bowing arm stable",
            FeedbackHint::GoodPosture => "Great posture!",
        }
    }

    /// Stable machine-readable label for logs
    pub fn as_label(&self) -> &'static str {
        match self {
            FeedbackHint::ExtendArm => "extend_arm",
            FeedbackHint::LowerShoulder => "lower_shoulder",
            FeedbackHint::StabilizeArm => "stabilize_arm",
            FeedbackHint::GoodPosture => "good_posture",
        }
    }
}
