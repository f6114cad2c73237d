//! Error types for the impact-effects pipeline.
//!
//! Two distinct failure surfaces:
//! - [`ImpactError`]: input validation failures. These abort the pipeline
//!   before any stage runs and are returned directly to the caller.
//! - [`StageError`] / [`StageOutcome`]: per-stage computation failures.
//!   A stage that cannot complete attaches a `Failed` marker to its own
//!   slot in the report and leaves every other sub-report intact.

use serde::{Deserialize, Serialize};

/// Validation error for impactor input parameters.
///
/// Raised before any stage runs; carries the offending value so the
/// caller can report the violated constraint.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("diameter must be positive and finite, got {0} m")]
    InvalidDiameter(f64),

    #[error("velocity must be positive and finite, got {0} km/s")]
    InvalidVelocity(f64),

    #[error("density must be positive and finite, got {0} kg/m³")]
    InvalidDensity(f64),

    #[error("mass must be positive and finite, got {0} kg")]
    InvalidMass(f64),

    #[error("miss distance must be non-negative and finite, got {0} km")]
    InvalidMissDistance(f64),

    #[error("latitude must be within [-90, 90], got {0}")]
    InvalidLatitude(f64),

    #[error("longitude must be within [-180, 180], got {0}")]
    InvalidLongitude(f64),
}

/// Error marker attached to a single failed stage.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{stage} stage failed: {message}")]
pub struct StageError {
    /// Name of the stage that failed (e.g. "seismic").
    pub stage: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl StageError {
    pub fn new(stage: &str, message: impl Into<String>) -> Self {
        Self {
            stage: stage.to_string(),
            message: message.into(),
        }
    }
}

/// Result of one pipeline stage: either the computed sub-report or an
/// error marker that degrades only this stage.
///
/// Serializes untagged, so a computed stage appears as its payload and a
/// failed stage as `{"stage": ..., "message": ...}` wrapped in `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StageOutcome<T> {
    Computed(T),
    Failed { error: StageError },
}

impl<T> StageOutcome<T> {
    /// Wrap a successfully computed stage payload.
    pub fn computed(value: T) -> Self {
        StageOutcome::Computed(value)
    }

    /// Mark this stage as failed without aborting the pipeline.
    pub fn failed(stage: &str, message: impl Into<String>) -> Self {
        StageOutcome::Failed {
            error: StageError::new(stage, message),
        }
    }

    /// The computed payload, if this stage succeeded.
    pub fn as_computed(&self) -> Option<&T> {
        match self {
            StageOutcome::Computed(value) => Some(value),
            StageOutcome::Failed { .. } => None,
        }
    }

    /// Consume the outcome, returning the payload if computed.
    pub fn into_computed(self) -> Option<T> {
        match self {
            StageOutcome::Computed(value) => Some(value),
            StageOutcome::Failed { .. } => None,
        }
    }

    /// True if the stage attached an error marker.
    pub fn is_failed(&self) -> bool {
        matches!(self, StageOutcome::Failed { .. })
    }
}
