// Stridewatch — Angular-Rate Sensor Seam
//
// The bus transaction that yields a raw sample lives behind this trait; the
// pipeline never sees registers or wires. `SimulatedGyro` stands in for the
// hardware so the rest of the system can run end-to-end on a workstation.

use crate::config::SENSITIVITY_DPS_PER_LSB;
use crate::error::{Result, SensorError};

/// One-axis angular-rate sensor.
pub trait RateGyro {
    /// One-time device setup: output data rate and filter bandwidth. Assumed
    /// to succeed once at session start or the system is inoperable.
    fn configure(&mut self) -> Result<()>;

    /// Read one signed 16-bit rate sample from the swing axis.
    fn read_sample(&mut self) -> Result<i16>;
}

// ---------------------------------------------------------------------------
// Simulated sensor
// ---------------------------------------------------------------------------

/// Scripted sensor: replays a fixed sequence of raw counts, looping forever.
pub struct SimulatedGyro {
    script: Vec<i16>,
    cursor: usize,
}

impl SimulatedGyro {
    /// Replay an explicit raw-count script.
    pub fn from_script(script: Vec<i16>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A repeating walking stride at the 2 Hz sample cadence: two swing
    /// samples (~69 °/s → ~1.2 m/s with a 1 m leg) followed by two quiet
    /// samples under the noise gate. One step every two seconds.
    pub fn walking() -> Self {
        let swing = Self::raw_for_dps(68.8);
        let rest = Self::raw_for_dps(0.2);
        Self::from_script(vec![swing, swing, rest, rest])
    }

    fn raw_for_dps(dps: f32) -> i16 {
        (dps / SENSITIVITY_DPS_PER_LSB) as i16
    }
}

impl RateGyro for SimulatedGyro {
    fn configure(&mut self) -> Result<()> {
        log::info!(
            "Simulated gyro configured ({} scripted samples)",
            self.script.len()
        );
        Ok(())
    }

    fn read_sample(&mut self) -> Result<i16> {
        if self.script.is_empty() {
            return Err(SensorError::SensorUnavailable);
        }
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        Ok(raw)
    }
}
