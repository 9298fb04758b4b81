//! Error types for the sensor collaborator seam.

use thiserror::Error;

/// Error type for angular-rate sensor operations.
///
/// The pipeline itself is pure arithmetic and cannot fail; the only fallible
/// collaborator is the sensor. A read failure ends the session, there is no
/// retry path.
#[derive(Error, Debug)]
pub enum SensorError {
    /// The sensor did not answer a sample read.
    #[error("sensor unavailable")]
    SensorUnavailable,
}

/// Result type for sensor operations.
pub type Result<T> = std::result::Result<T, SensorError>;
