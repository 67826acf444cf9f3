//! Majority-vote smoothing of the raised-elbow signal.

use std::collections::VecDeque;

/// Bounded sliding-window majority vote over the instantaneous
/// raised-elbow decisions.
///
/// The vote threshold is `len / 2` with integer division, so a partially
/// filled window of odd length leans toward `true` during warm-up: a
/// single `true` in a length-1 window already wins the vote (1 > 0).
/// This asymmetry is deliberate and relied upon by callers.
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    window: VecDeque<bool>,
    capacity: usize,
}

impl TemporalSmoother {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the newest decision, evicting the oldest at capacity, and
    /// return the majority vote over the window.
    pub fn push(&mut self, raised: bool) -> bool {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(raised);

        let raised_votes = self.window.iter().filter(|&&v| v).count();
        raised_votes > self.window.len() / 2
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
