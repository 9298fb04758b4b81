// Stridewatch — Session State
//
// The session's cumulative counters as one exclusively-owned value threaded
// through the pipeline. Lives for the duration of one continuous session.

use crate::events::TelemetrySnapshot;

#[derive(Debug, Default)]
pub struct SessionState {
    distance_m: f32,
    elapsed_s: u32,
    steps: u32,
    calories_kcal: f32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cycle's outcome. Distance and elapsed seconds only ever
    /// grow; calories are the latest recomputed figure, not a running sum.
    pub fn update(&mut self, distance_m: f32, elapsed_s: u32, calories_kcal: f32) {
        self.distance_m = distance_m;
        self.elapsed_s = elapsed_s;
        self.calories_kcal = calories_kcal;
    }

    pub fn count_step(&mut self) {
        self.steps += 1;
    }

    pub fn distance_m(&self) -> f32 {
        self.distance_m
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Immutable snapshot for the output surface, calories truncated to a
    /// whole kcal for display.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            elapsed_s: self.elapsed_s,
            distance_m: self.distance_m,
            steps: self.steps,
            calories: self.calories_kcal as u32,
        }
    }
}
