//! Crater scaling and impact-probability kernel.
//!
//! Crater size comes from an empirical cube-root-like scaling of energy
//! against surface gravity. Impact probability is a distance-based
//! heuristic, not an orbital-covariance computation: certain inside one
//! Earth radius, exponentially decaying out to a diameter-scaled critical
//! distance, and floored at 1e-6 beyond.

use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS_KM, SURFACE_GRAVITY};

/// Empirical crater-diameter scaling coefficient.
const CRATER_SCALING_COEFFICIENT: f64 = 0.2;

/// Exponent of the crater scaling law: D ∝ (E/g)^(1/3.4).
const CRATER_SCALING_EXPONENT: f64 = 1.0 / 3.4;

/// Exponential decay rate of impact probability over the critical band.
const PROBABILITY_DECAY: f64 = 5.0;

/// Probability floor beyond the critical distance.
const PROBABILITY_FLOOR: f64 = 1e-6;

/// Margin past Earth's radius still considered at risk, in units of
/// impactor diameter (km). Fixed design constant, not configurable.
const CRITICAL_DISTANCE_DIAMETERS: f64 = 10.0;

/// Estimated transient crater size. Monotonic increasing in energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraterEstimate {
    /// Crater diameter in meters.
    pub diameter_m: f64,
    /// Crater radius in meters.
    pub radius_m: f64,
}

impl CraterEstimate {
    /// D = 0.2 · (E / g)^(1/3.4)
    pub fn from_energy(kinetic_energy_j: f64) -> Self {
        let diameter_m =
            CRATER_SCALING_COEFFICIENT * (kinetic_energy_j / SURFACE_GRAVITY).powf(CRATER_SCALING_EXPONENT);
        Self {
            diameter_m,
            radius_m: diameter_m / 2.0,
        }
    }

    pub fn diameter_km(&self) -> f64 {
        self.diameter_m / 1000.0
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_m / 1000.0
    }
}

/// Risk classification from fixed probability-band thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
    /// Below every probability band, but flagged potentially hazardous
    /// by the source catalogue.
    LowHazardous,
    Minimal,
}

impl RiskLevel {
    /// Band thresholds use inclusive lower bounds, so a probability
    /// sitting exactly on a boundary maps to the higher tier.
    pub fn from_probability(probability: f64, hazardous: bool) -> Self {
        if probability >= 0.01 {
            RiskLevel::Critical
        } else if probability >= 0.001 {
            RiskLevel::High
        } else if probability >= 0.0001 {
            RiskLevel::Moderate
        } else if hazardous {
            RiskLevel::LowHazardous
        } else {
            RiskLevel::Minimal
        }
    }
}

/// Impact probability and its banded risk level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactProbability {
    /// Scalar probability in [0, 1]. Non-increasing in miss distance.
    pub probability: f64,
    pub risk_level: RiskLevel,
}

impl ImpactProbability {
    /// Distance-based heuristic:
    /// - miss ≤ Earth radius: certain impact (1.0)
    /// - miss ≤ Earth radius + 10 × diameter (km): exp(−5 · normalized)
    /// - beyond: floor of 1e-6
    pub fn estimate(miss_distance_km: f64, diameter_m: f64, hazardous: bool) -> Self {
        let critical_distance_km =
            EARTH_RADIUS_KM + CRITICAL_DISTANCE_DIAMETERS * (diameter_m / 1000.0);

        let probability = if miss_distance_km <= EARTH_RADIUS_KM {
            1.0
        } else if miss_distance_km <= critical_distance_km {
            let normalized =
                (miss_distance_km - EARTH_RADIUS_KM) / (critical_distance_km - EARTH_RADIUS_KM);
            (-PROBABILITY_DECAY * normalized).exp()
        } else {
            PROBABILITY_FLOOR
        };

        Self {
            probability,
            risk_level: RiskLevel::from_probability(probability, hazardous),
        }
    }
}
