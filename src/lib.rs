//! Walking/running telemetry from a leg-worn angular-rate sensor.
//!
//! A single worker loop samples the gyro at a fixed ~2 Hz cadence and derives
//! forward velocity, cumulative distance, step count, elapsed time, and
//! calorie expenditure every cycle. Hardware concerns (the sensor bus, the
//! periodic tick interrupts, the physical screen) sit behind seams so the
//! whole system also runs on a workstation against a simulated sensor.
//!
//! # Quick Start
//!
//! ```
//! use stridewatch::config::SessionConfig;
//! use stridewatch::drivers::gyro::{RateGyro, SimulatedGyro};
//! use stridewatch::pipeline::Pipeline;
//!
//! let mut gyro = SimulatedGyro::walking();
//! gyro.configure()?;
//!
//! let mut pipeline = Pipeline::new(&SessionConfig::default());
//! let snapshot = pipeline.process_sample(gyro.read_sample()?, 0);
//! assert_eq!(snapshot.elapsed_s, 0);
//! # Ok::<(), stridewatch::SensorError>(())
//! ```

pub mod clock;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod tasks;

// Re-export the session-facing API
pub use config::SessionConfig;
pub use error::SensorError;
pub use events::TelemetrySnapshot;
pub use pipeline::Pipeline;
