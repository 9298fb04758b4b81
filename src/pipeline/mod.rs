// Stridewatch — Per-Cycle Processing Pipeline
//
// One call per sample-due tick: raw gyro sample in, telemetry snapshot out.
// Every stage is synchronous arithmetic; the whole cycle completes well
// inside the 500 ms sampling interval.

pub mod distance;
pub mod energy;
pub mod session;
pub mod steps;
pub mod velocity;

use crate::config::SessionConfig;
use crate::events::TelemetrySnapshot;

use distance::DistanceAccumulator;
use energy::CalorieEstimator;
use session::SessionState;
use steps::StepDetector;
use velocity::{VelocityHistory, VelocityTracker};

pub struct Pipeline {
    tracker: VelocityTracker,
    distance: DistanceAccumulator,
    detector: StepDetector,
    estimator: CalorieEstimator,
    session: SessionState,
}

impl Pipeline {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            tracker: VelocityTracker::new(config.leg_length_m),
            distance: DistanceAccumulator::new(),
            detector: StepDetector::new(),
            estimator: CalorieEstimator::new(config.body_weight_kg),
            session: SessionState::new(),
        }
    }

    /// Run one full sample cycle.
    ///
    /// `elapsed_s` is the 1 Hz counter read at cycle start. Distance
    /// integrates the *held* current velocity, so a noise-rejected sample
    /// changes nothing there. The step detector instead sees a rejected
    /// cycle as stationary: with no confident swing reading the leg is not
    /// mid-stride, and a stride can wind down to Idle and count.
    pub fn process_sample(&mut self, raw: i16, elapsed_s: u32) -> TelemetrySnapshot {
        let reading = self.tracker.convert(raw);

        let distance_m = self.distance.accumulate(self.tracker.current_mps());

        if self.detector.observe(reading.unwrap_or(0.0)) {
            self.session.count_step();
        }

        let calories = self.estimator.estimate(distance_m, elapsed_s);
        self.session.update(distance_m, elapsed_s, calories);
        self.session.snapshot()
    }

    /// Latest accepted velocity in m/s (held across noise cycles).
    pub fn current_velocity_mps(&self) -> f32 {
        self.tracker.current_mps()
    }

    pub fn velocity_history(&self) -> &VelocityHistory {
        self.tracker.history()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }
}

// ============================================================================
// TESTS
// ============================================================================
