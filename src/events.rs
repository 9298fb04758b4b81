// Stridewatch — System Events & Data Types

// ---------------------------------------------------------------------------
// Telemetry Snapshot (one per sample cycle, sampler → display channel)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TelemetrySnapshot {
    /// Whole seconds since session start.
    pub elapsed_s: u32,
    /// Cumulative path length in metres.
    pub distance_m: f32,
    /// Completed strides.
    pub steps: u32,
    /// Calorie expenditure, truncated to a whole kcal for display.
    pub calories: u32,
}

impl TelemetrySnapshot {
    /// Elapsed time split into (hours, minutes, seconds) for rendering.
    pub fn hms(&self) -> (u32, u32, u32) {
        let hours = self.elapsed_s / 3600;
        let minutes = (self.elapsed_s % 3600) / 60;
        let seconds = self.elapsed_s % 60;
        (hours, minutes, seconds)
    }
}
