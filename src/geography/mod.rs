//! Geographic stages: impact-point estimation and coarse risk
//! classification.
//!
//! The estimator turns approach time and velocity into a nominal surface
//! location via a sidereal rotation model, plus a Monte-Carlo cloud of
//! candidate points. The classifier buckets the point into a coarse
//! region and a risk tier from the affected area.

pub mod point;
pub mod region;

pub use point::{
    Confidence, DEFAULT_POSITION_UNCERTAINTY_KM, DEFAULT_SAMPLE_COUNT, GeographicImpactPoint,
    PointEstimate, ProbabilityMap, ProbabilitySample, estimate_impact_point, normalize_longitude,
};
pub use region::{GeographicRisk, RiskTier, classify};
