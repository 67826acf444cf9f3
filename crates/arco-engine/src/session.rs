//! Per-session engine state and the frame-synchronous advance loop.

use arco_core::{geometry, JointSample, SessionId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::baseline::{BaselineCalibrator, ShoulderReading};
use crate::classifier::{InstantDecision, PostureClassifier};
use crate::combo::ComboScorer;
use crate::config::EngineConfig;
use crate::hints::FeedbackHint;
use crate::sampling::AdaptiveSampler;
use crate::smoothing::TemporalSmoother;

/// The engine's sole externally visible artifact: one record per frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Session-local frame counter (counts held and missing frames too)
    pub frame: u64,
    pub timestamp: Timestamp,
    /// The joints this frame was judged on (held when detection skipped)
    pub joints: JointSample,
    pub angle: f64,
    pub reference_angle: f64,
    pub deviation: f64,
    /// Instantaneous raised-elbow decision, prior to smoothing
    pub elbow_raised: bool,
    pub smoothed_status: bool,
    pub shoulder: ShoulderReading,
    pub combo_score: u32,
    /// `None` while the shoulder baseline is still calibrating
    pub hint: Option<FeedbackHint>,
}

/// One practice session's worth of engine state.
///
/// Owns every stateful component; construct at session start, discard at
/// session end. Frame-synchronous and single-threaded: each call to
/// [`advance`](Self::advance) consumes one frame's joint sample (or
/// none) and yields one output record.
pub struct PostureSession {
    id: SessionId,
    config: EngineConfig,
    classifier: PostureClassifier,
    smoother: TemporalSmoother,
    calibrator: BaselineCalibrator,
    sampler: AdaptiveSampler,
    scorer: ComboScorer,
    /// Last-value-hold cache for skipped or undetected frames
    last: Option<(JointSample, InstantDecision)>,
    reference_pending: bool,
    frames: u64,
}

impl PostureSession {
    pub fn new(config: EngineConfig) -> Self {
        let id = SessionId::new();
        tracing::debug!(session = %id, "posture session created");
        Self {
            classifier: PostureClassifier::new(config.reference_angle, config.angle_threshold),
            smoother: TemporalSmoother::new(config.smoothing_window),
            calibrator: BaselineCalibrator::new(
                config.baseline_window,
                config.elevation_threshold,
            ),
            sampler: AdaptiveSampler::new(),
            scorer: ComboScorer::new(config.combo_threshold_secs),
            last: None,
            reference_pending: false,
            frames: 0,
            id,
            config,
        }
    }

    /// Process one frame.
    ///
    /// `sample` is `None` when the detector was skipped this frame or
    /// reported no landmarks; the engine then reuses its most recent
    /// decision and still advances the smoothing and calibration
    /// windows with the held values. Returns `None` only before the
    /// first detection of the session, when there is nothing to hold.
    pub fn advance(&mut self, sample: Option<JointSample>, now: Timestamp) -> Option<OutputRecord> {
        self.frames += 1;

        let (sample, decision) = match sample {
            Some(sample) => {
                if self.reference_pending {
                    let angle =
                        geometry::interior_angle(sample.shoulder, sample.elbow, sample.wrist);
                    self.classifier.set_reference(angle);
                    self.reference_pending = false;
                    tracing::info!(session = %self.id, angle, "reference angle re-anchored");
                }
                let decision = self.classifier.classify(&sample);
                self.last = Some((sample, decision));
                (sample, decision)
            }
            None => self.last?,
        };

        let smoothed_status = self.smoother.push(decision.elbow_raised);
        let shoulder = self.calibrator.observe(sample.shoulder.y as f64);
        self.sampler.update(shoulder.elevated());

        // An unknown shoulder state cannot confirm "not elevated" and
        // therefore disqualifies.
        let angle_ok = decision.angle_correct || !self.config.require_angle_for_combo;
        let qualifies = angle_ok && smoothed_status && shoulder.elevated() == Some(false);
        let combo_score = self.scorer.update(qualifies, now);

        let hint = FeedbackHint::for_states(decision.angle_correct, shoulder, smoothed_status);

        Some(OutputRecord {
            frame: self.frames,
            timestamp: now,
            joints: sample,
            angle: decision.angle,
            reference_angle: self.classifier.reference_angle(),
            deviation: decision.deviation,
            elbow_raised: decision.elbow_raised,
            smoothed_status,
            shoulder,
            combo_score,
            hint,
        })
    }

    /// Overwrite the reference angle with the next fresh detection's
    /// measured elbow angle.
    pub fn mark_reference(&mut self) {
        self.reference_pending = true;
    }

    /// Frames the external loop should advance between detector
    /// invocations, per the adaptive sampler.
    pub fn skip_interval(&self) -> u32 {
        self.sampler.interval()
    }

    pub fn reference_angle(&self) -> f64 {
        self.classifier.reference_angle()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    pub fn id(&self) -> SessionId {
        self.id
    }
}
