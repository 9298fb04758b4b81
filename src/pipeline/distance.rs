// Stridewatch — Distance Accumulator

/// Accumulates total path length from successive velocity readings.
///
/// Fixed-step numerical integration with the 0.5 s sampling interval baked
/// into the `1.5 / 10` constant. Uses the velocity magnitude, so the total
/// measures path length rather than net displacement and never decreases.
#[derive(Debug, Default)]
pub struct DistanceAccumulator {
    total_m: f32,
}

impl DistanceAccumulator {
    pub fn new() -> Self {
        Self { total_m: 0.0 }
    }

    /// Add one cycle's contribution and return the running total in metres.
    pub fn accumulate(&mut self, velocity_mps: f32) -> f32 {
        self.total_m += (velocity_mps.abs() / 10.0) * 1.5;
        self.total_m
    }

    pub fn total_m(&self) -> f32 {
        self.total_m
    }
}
