//! Groundfall - Asteroid Impact Effects Pipeline
//!
//! Computes the physical consequences of a hypothetical asteroid impact
//! from a handful of observable parameters: energy release, crater size,
//! impact probability, a geographic point estimate, seismic and blast
//! effects, and a time-bucketed mitigation plan, assembled into a single
//! report. Validation failures abort the pipeline; failures inside an
//! individual effects stage degrade only that stage's section.

pub mod blast;
pub mod constants;
pub mod crater;
pub mod energy;
pub mod error;
pub mod geography;
pub mod impactor;
pub mod mitigation;
pub mod report;
pub mod seismic;
pub mod warning;

pub use error::{ImpactError, StageError, StageOutcome};
pub use impactor::ImpactorSpec;
pub use report::{EffectsReport, FeedReport, compute_effects, compute_effects_with};

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_effects;
