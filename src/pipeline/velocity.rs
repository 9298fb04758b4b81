// Stridewatch — Velocity Tracker
//
// Converts one raw gyro sample into forward linear velocity. The leg swings
// through a small arc while walking, so the angular rate maps to linear speed
// via the small-angle approximation v = π · ω · leg / 180.

use std::f32::consts::PI;

use crate::config::{NOISE_GATE_DPS, SENSITIVITY_DPS_PER_LSB, VELOCITY_HISTORY_LEN};

/// Fixed-capacity ring of recent velocity samples.
///
/// Purely a bounded audit trail: the write index wraps modulo capacity and
/// the oldest entry is silently overwritten once full. Never allocates after
/// construction, regardless of session length.
#[derive(Debug)]
pub struct VelocityHistory {
    slots: [f32; VELOCITY_HISTORY_LEN],
    write_idx: usize,
    len: usize,
}

impl VelocityHistory {
    pub fn new() -> Self {
        Self {
            slots: [0.0; VELOCITY_HISTORY_LEN],
            write_idx: 0,
            len: 0,
        }
    }

    /// Write `v` at the current index and advance modulo capacity.
    pub fn record(&mut self, v: f32) {
        self.slots[self.write_idx] = v;
        self.write_idx = (self.write_idx + 1) % VELOCITY_HISTORY_LEN;
        if self.len < VELOCITY_HISTORY_LEN {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        VELOCITY_HISTORY_LEN
    }

    /// Recorded samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.len < VELOCITY_HISTORY_LEN {
            0
        } else {
            self.write_idx
        };
        (0..self.len).map(move |i| self.slots[(start + i) % VELOCITY_HISTORY_LEN])
    }
}

impl Default for VelocityHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw-sample → linear-velocity converter.
///
/// Holds the single authoritative "current velocity" consumed by every
/// downstream stage in the same cycle. A sample whose angular rate sits at or
/// below the noise gate produces no new reading: the previous velocity is
/// held unchanged and nothing is recorded to history.
#[derive(Debug)]
pub struct VelocityTracker {
    leg_length_m: f32,
    current_mps: f32,
    history: VelocityHistory,
}

impl VelocityTracker {
    pub fn new(leg_length_m: f32) -> Self {
        Self {
            leg_length_m,
            current_mps: 0.0,
            history: VelocityHistory::new(),
        }
    }

    /// Process one raw sample.
    ///
    /// Returns `Some(velocity)` when the sample cleared the noise gate and
    /// became the new current velocity, `None` when it was rejected as noise
    /// (the previous velocity stays in effect).
    pub fn convert(&mut self, raw: i16) -> Option<f32> {
        let angular_dps = SENSITIVITY_DPS_PER_LSB * raw as f32;
        if angular_dps.abs() <= NOISE_GATE_DPS {
            return None;
        }

        let linear = PI * angular_dps * self.leg_length_m / 180.0;
        self.current_mps = linear;
        self.history.record(linear);
        Some(linear)
    }

    /// Latest accepted velocity (m/s, signed). Starts at 0 and holds its
    /// value across noise-rejected cycles.
    pub fn current_mps(&self) -> f32 {
        self.current_mps
    }

    pub fn history(&self) -> &VelocityHistory {
        &self.history
    }
}

// ============================================================================
// TESTS
// ============================================================================
