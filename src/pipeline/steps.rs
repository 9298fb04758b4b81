// Stridewatch — Step Detector
//
// Two-state hysteresis machine over the per-cycle velocity magnitude. The
// separated enter/exit thresholds keep sampling jitter near a single
// threshold from double-counting one stride.

use crate::config::{STEP_HIGH_MPS, STEP_LOW_MPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stride {
    Idle,
    Walking,
}

/// Turns velocity transitions into discrete step events.
///
/// Initialised Idle with a zero previous magnitude at session start; never
/// reset mid-session.
#[derive(Debug)]
pub struct StepDetector {
    state: Stride,
    prev_mps: f32,
}

impl StepDetector {
    pub fn new() -> Self {
        Self {
            state: Stride::Idle,
            prev_mps: 0.0,
        }
    }

    /// Observe one cycle's velocity magnitude.
    ///
    /// Returns `true` exactly when a step completes — the Walking→Idle
    /// transition. The previous magnitude is updated every cycle regardless
    /// of whether a transition fired.
    pub fn observe(&mut self, velocity_mps: f32) -> bool {
        let cur = velocity_mps.abs();
        let mut step_completed = false;

        match self.state {
            Stride::Idle => {
                // A clean rise from near-stationary to a confident stride
                // speed; intermediate speeds are jitter and ignored.
                if cur > STEP_HIGH_MPS && self.prev_mps <= STEP_LOW_MPS {
                    self.state = Stride::Walking;
                }
            }
            Stride::Walking => {
                if cur <= STEP_LOW_MPS && self.prev_mps > STEP_LOW_MPS {
                    self.state = Stride::Idle;
                    step_completed = true;
                }
            }
        }

        self.prev_mps = cur;
        step_completed
    }

    pub fn is_walking(&self) -> bool {
        self.state == Stride::Walking
    }
}

impl Default for StepDetector {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn count_steps(detector: &mut StepDetector, velocities: &[f32]) -> u32 {
        velocities
            .iter()
            .map(|&v| detector.observe(v) as u32)
            .sum()
    }

    #[test]
    fn one_stride_counts_one_step() {
        let mut detector = StepDetector::new();
        // Rise from rest, swing, settle back to rest.
        let steps = count_steps(&mut detector, &[0.0, 2.1, 2.1, 0.0, 0.0]);
        assert_eq!(steps, 1);
        assert!(!detector.is_walking());
    }

    #[test]
    fn step_only_counted_on_walking_to_idle() {
        let mut detector = StepDetector::new();
        assert!(!detector.observe(0.0));
        assert!(!detector.observe(2.1)); // Idle→Walking, no step yet
        assert!(!detector.observe(2.1));
        assert!(detector.observe(0.05)); // Walking→Idle completes the step
    }

    #[test]
    fn always_above_low_never_steps() {
        let mut detector = StepDetector::new();
        let steps = count_steps(&mut detector, &[0.2, 0.8, 1.4, 0.9, 0.3, 2.0]);
        assert_eq!(steps, 0, "velocity never returned to near-stationary");
    }

    #[test]
    fn always_below_high_never_steps() {
        let mut detector = StepDetector::new();
        let steps = count_steps(&mut detector, &[0.0, 0.3, 0.45, 0.2, 0.0, 0.4]);
        assert_eq!(steps, 0, "stride speed was never confidently reached");
    }

    #[test]
    fn gradual_rise_does_not_enter_walking() {
        let mut detector = StepDetector::new();
        // prev climbs past LOW before cur crosses HIGH — jitter, not a stride.
        count_steps(&mut detector, &[0.0, 0.3, 0.6]);
        assert!(!detector.is_walking());
    }

    #[test]
    fn direction_reversal_uses_magnitude() {
        let mut detector = StepDetector::new();
        let steps = count_steps(&mut detector, &[0.0, -2.1, -2.1, 0.0]);
        assert_eq!(steps, 1);
    }

    #[test]
    fn repeated_strides_count_once_each() {
        let mut detector = StepDetector::new();
        let stride = [0.0, 2.1, 2.1, 0.0];
        let mut steps = 0;
        for _ in 0..5 {
            steps += count_steps(&mut detector, &stride);
        }
        assert_eq!(steps, 5);
    }

    #[test]
    fn counter_never_decrements() {
        let mut detector = StepDetector::new();
        let mut total: i64 = 0;
        for &v in &[0.0, 2.1, 0.0, 2.1, 0.0, 0.7, 0.0, 2.1, 2.1, 0.05] {
            total += detector.observe(v) as i64;
            assert!(total >= 0);
        }
        assert_eq!(total, 4);
    }
}
