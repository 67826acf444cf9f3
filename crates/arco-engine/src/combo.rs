//! Duration-gated streak scoring.

use arco_core::Timestamp;

/// Streak counter over the composite "all posture checks pass" signal.
///
/// A qualifying frame arms a logical timer; once qualification has held
/// uninterrupted for longer than the threshold, the streak increments
/// and the timer re-arms. Any single non-qualifying frame erases the
/// streak and the score, with no partial credit or decay.
///
/// Time comes from caller-supplied timestamps, never from an internal
/// clock, so skip patterns can be replayed deterministically in tests.
#[derive(Debug, Clone)]
pub struct ComboScorer {
    threshold_secs: f64,
    streak: u32,
    last_qualify: Option<Timestamp>,
}

impl ComboScorer {
    pub fn new(threshold_secs: f64) -> Self {
        Self {
            threshold_secs,
            streak: 0,
            last_qualify: None,
        }
    }

    /// Advance the state machine by one frame and return the streak count.
    pub fn update(&mut self, qualifies: bool, now: Timestamp) -> u32 {
        if !qualifies {
            self.streak = 0;
            self.last_qualify = None;
            return 0;
        }

        match self.last_qualify {
            None => {
                self.last_qualify = Some(now);
                self.streak = 0;
            }
            Some(armed) => {
                if now.secs_since(armed) > self.threshold_secs {
                    self.streak += 1;
                    self.last_qualify = Some(now);
                }
            }
        }

        self.streak
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: f64) -> Timestamp {
        Timestamp::from_secs_f64(secs)
    }

    #[test]
    fn test_first_qualifying_frame_arms_without_scoring() {
        let mut scorer = ComboScorer::new(2.0);
        assert_eq!(scorer.update(true, at(0.0)), 0);
    }

    #[test]
    fn test_streak_increments_once_per_threshold() {
        let mut scorer = ComboScorer::new(2.0);
        scorer.update(true, at(0.0));
        // Within the gate: no change
        assert_eq!(scorer.update(true, at(1.0)), 0);
        assert_eq!(scorer.update(true, at(2.0)), 0); // strictly-greater gate
        assert_eq!(scorer.update(true, at(2.001)), 1);
        // Timer re-armed at 2.001
        assert_eq!(scorer.update(true, at(3.5)), 1);
        assert_eq!(scorer.update(true, at(4.002)), 2);
    }

    #[test]
    fn test_run_of_two_thresholds_plus_epsilon_scores_two() {
        let mut scorer = ComboScorer::new(2.0);
        scorer.update(true, at(0.0));
        scorer.update(true, at(2.0005));
        assert_eq!(scorer.update(true, at(4.001)), 2);
    }

    #[test]
    fn test_single_lapse_erases_everything() {
        let mut scorer = ComboScorer::new(2.0);
        scorer.update(true, at(0.0));
        scorer.update(true, at(2.1));
        scorer.update(true, at(4.2));
        assert_eq!(scorer.streak(), 2);

        assert_eq!(scorer.update(false, at(4.3)), 0);

        // Re-qualification starts from scratch: arm, then wait out the gate
        assert_eq!(scorer.update(true, at(4.4)), 0);
        assert_eq!(scorer.update(true, at(6.0)), 0);
        assert_eq!(scorer.update(true, at(6.5)), 1);
    }

    #[test]
    fn test_idle_non_qualifying_frames_stay_idle() {
        let mut scorer = ComboScorer::new(2.0);
        for i in 0..5 {
            assert_eq!(scorer.update(false, at(i as f64)), 0);
        }
    }
}
