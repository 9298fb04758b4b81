// Stridewatch — Calorie Estimator
//
// Buckets the session's mean speed into a MET (metabolic equivalent of task)
// intensity factor and scales it by body weight and elapsed hours. The figure
// is recomputed from cumulative distance and elapsed time every cycle, never
// accumulated.

use crate::config::{
    MET_FAST_RUN, MET_LIGHT_RUN, MET_LIGHT_WALK, MET_RUN, MET_WALK, SECONDS_PER_HOUR,
    SPEED_FAST_RUN_MPS, SPEED_LIGHT_RUN_MPS, SPEED_RUN_MPS, SPEED_WALK_MPS,
};

/// MET factor for a mean speed in m/s. Bucket bounds are closed-open.
pub fn met_for_speed(mean_mps: f32) -> f32 {
    if mean_mps < SPEED_WALK_MPS {
        MET_LIGHT_WALK
    } else if mean_mps < SPEED_LIGHT_RUN_MPS {
        MET_WALK
    } else if mean_mps < SPEED_RUN_MPS {
        MET_LIGHT_RUN
    } else if mean_mps < SPEED_FAST_RUN_MPS {
        MET_RUN
    } else {
        MET_FAST_RUN
    }
}

#[derive(Debug)]
pub struct CalorieEstimator {
    body_weight_kg: f32,
}

impl CalorieEstimator {
    pub fn new(body_weight_kg: f32) -> Self {
        Self { body_weight_kg }
    }

    /// Calories burned (kcal, fractional) for the session so far.
    ///
    /// Before the first full second has elapsed there is no mean speed to
    /// bucket; reports zero rather than dividing by zero.
    pub fn estimate(&self, distance_m: f32, elapsed_s: u32) -> f32 {
        if elapsed_s == 0 {
            return 0.0;
        }

        let mean_mps = distance_m / elapsed_s as f32;
        met_for_speed(mean_mps) * self.body_weight_kg * (elapsed_s as f32 / SECONDS_PER_HOUR)
    }
}

// ============================================================================
// TESTS
// ============================================================================
