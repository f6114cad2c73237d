//! Geographic impact-point estimation.
//!
//! For close approaches the nominal longitude comes from which face of
//! the rotating Earth points at the incoming object: a GMST-style
//! rotation angle at the approach instant, perturbed by a small
//! velocity-derived offset. Latitude is drawn with a bias toward the
//! equator, reflecting the low inclinations of the NEO population.
//! This is a deliberately coarse estimate; derived points always carry
//! "low" confidence.
//!
//! Distant passes produce no point at all; an uncertainty-zone marker
//! is a valid terminal state meaning "no impact predicted", not an error.

use chrono::{DateTime, Timelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::{
    EARTH_RADIUS_KM, GMST_AT_J2000_DEG, GMST_DEG_PER_DAY, KM_PER_DEGREE, ROTATION_DEG_PER_HOUR,
    unix_to_j2000_days,
};
use crate::impactor::ImpactorSpec;

/// Miss distances beyond this multiple of Earth's radius produce an
/// uncertainty zone instead of an impact point.
const UNCERTAINTY_ZONE_FACTOR: f64 = 2.0;

/// Velocity-derived longitude perturbation, degrees per km/s.
const VELOCITY_LONGITUDE_OFFSET_DEG: f64 = 1.5;

/// Maximum absolute latitude of a derived point (degrees). Derived
/// latitudes are equator-biased, so high latitudes are rare anyway.
const MAX_DERIVED_LATITUDE_DEG: f64 = 60.0;

/// Default number of Monte-Carlo samples in a probability map.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Default assumed positional uncertainty for the probability cloud (km).
pub const DEFAULT_POSITION_UNCERTAINTY_KM: f64 = 1000.0;

/// How an impact point was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    /// Coordinates supplied directly by the caller.
    UserProvided,
    /// Derived from approach geometry; always low confidence.
    Low,
}

/// A nominal impact location on Earth's surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicImpactPoint {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
    pub confidence: Confidence,
    /// Approach instant the rotation model was evaluated at.
    pub timestamp: DateTime<Utc>,
    /// Coordinate system tag for downstream map layers.
    pub coordinate_system: String,
}

/// Result of the impact-point estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointEstimate {
    /// A nominal impact point was produced.
    Impact(GeographicImpactPoint),
    /// Miss distance too large for any meaningful surface point.
    UncertaintyZone { miss_distance_km: f64 },
}

impl PointEstimate {
    pub fn point(&self) -> Option<&GeographicImpactPoint> {
        match self {
            PointEstimate::Impact(point) => Some(point),
            PointEstimate::UncertaintyZone { .. } => None,
        }
    }

    pub fn is_impact(&self) -> bool {
        matches!(self, PointEstimate::Impact(_))
    }
}

/// GMST-style Earth rotation angle at the given instant, in degrees
/// (not normalized). Polynomial in days since J2000 plus an hour-of-day
/// term, matching the source rotation model.
pub fn rotation_angle_deg(time: DateTime<Utc>) -> f64 {
    let days = unix_to_j2000_days(time.timestamp());
    let hour_of_day =
        time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0;
    GMST_AT_J2000_DEG + GMST_DEG_PER_DAY * days + ROTATION_DEG_PER_HOUR * hour_of_day
}

/// Wrap a longitude into [-180, 180].
pub fn normalize_longitude(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Estimate the impact point for a close approach.
///
/// User-supplied coordinates pass straight through with "user-provided"
/// confidence. Otherwise, when the miss distance is under twice Earth's
/// radius, a nominal point is derived from the rotation model; beyond
/// that an [`PointEstimate::UncertaintyZone`] is returned.
pub fn estimate_impact_point<R: Rng + ?Sized>(
    spec: &ImpactorSpec,
    rng: &mut R,
) -> PointEstimate {
    if spec.miss_distance_km >= UNCERTAINTY_ZONE_FACTOR * EARTH_RADIUS_KM {
        return PointEstimate::UncertaintyZone {
            miss_distance_km: spec.miss_distance_km,
        };
    }

    if let (Some(latitude), Some(longitude)) = (spec.latitude, spec.longitude) {
        return PointEstimate::Impact(GeographicImpactPoint {
            latitude,
            longitude,
            confidence: Confidence::UserProvided,
            timestamp: spec.impact_time,
            coordinate_system: "WGS84".to_string(),
        });
    }

    let angle = rotation_angle_deg(spec.impact_time);
    let velocity_offset = spec.velocity_km_s * VELOCITY_LONGITUDE_OFFSET_DEG;
    let longitude = normalize_longitude(-angle + velocity_offset);

    // Cubed uniform deviate concentrates derived latitudes near the equator
    let deviate: f64 = rng.gen_range(-1.0..=1.0);
    let latitude = deviate.powi(3) * MAX_DERIVED_LATITUDE_DEG;

    PointEstimate::Impact(GeographicImpactPoint {
        latitude,
        longitude,
        confidence: Confidence::Low,
        timestamp: spec.impact_time,
        coordinate_system: "WGS84".to_string(),
    })
}

/// One sampled candidate impact point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilitySample {
    pub latitude: f64,
    pub longitude: f64,
    pub probability: f64,
}

/// Monte-Carlo cloud of candidate impact points around the nominal one.
///
/// Samples carry uniform probability 1/N. The cloud expresses positional
/// spread, not a real covariance (an explicit simplification).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMap {
    pub samples: Vec<ProbabilitySample>,
    pub sample_count: usize,
    /// Assumed 1-sigma positional uncertainty (km).
    pub position_uncertainty_km: f64,
}

impl ProbabilityMap {
    /// Draw `sample_count` Gaussian perturbations of the nominal point,
    /// scaled by `position_uncertainty_km` converted to degrees.
    /// `sample_count` must be at least 1.
    pub fn sample<R: Rng + ?Sized>(
        center: &GeographicImpactPoint,
        sample_count: usize,
        position_uncertainty_km: f64,
        rng: &mut R,
    ) -> Self {
        debug_assert!(sample_count > 0, "probability map needs at least one sample");
        let sigma_deg = position_uncertainty_km / KM_PER_DEGREE;
        let probability = 1.0 / sample_count as f64;

        let samples = (0..sample_count)
            .map(|_| ProbabilitySample {
                latitude: (center.latitude + gaussian(rng) * sigma_deg).clamp(-90.0, 90.0),
                longitude: normalize_longitude(center.longitude + gaussian(rng) * sigma_deg),
                probability,
            })
            .collect();

        Self {
            samples,
            sample_count,
            position_uncertainty_km,
        }
    }

    /// Sum of sample probabilities; 1.0 within floating tolerance.
    pub fn total_probability(&self) -> f64 {
        self.samples.iter().map(|s| s.probability).sum()
    }
}

/// Standard normal deviate via Box-Muller.
fn gaussian<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen_range(1e-12..1.0);
    let u2: f64 = rng.r#gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
