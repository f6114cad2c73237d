//! Impactor input parameters and their validation.
//!
//! An [`ImpactorSpec`] describes a hypothetical or catalogued near-Earth
//! object: size, bulk density (or explicit mass), encounter velocity,
//! approach geometry, and an optional user-supplied impact location.
//! Validation runs once, before any pipeline stage; every stage after
//! that can assume physically sensible inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_IMPACTOR_DENSITY, LUNAR_DISTANCE_KM, SECONDS_PER_DAY};
use crate::error::ImpactError;

/// Input parameters for one impact scenario.
///
/// Exactly one of {explicit mass, diameter + density} determines the mass:
/// when `mass_kg` is absent the energy kernel derives it from the density
/// and the spherical volume of `diameter_m`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactorSpec {
    /// Object designation, if known (e.g. a catalogue name).
    #[serde(default)]
    pub name: Option<String>,

    /// Diameter in meters. Must be strictly positive.
    pub diameter_m: f64,

    /// Bulk density in kg/m³. Defaults to a stony asteroid (3000).
    #[serde(default = "default_density")]
    pub density_kg_m3: f64,

    /// Explicit mass in kg. When present, overrides diameter + density.
    #[serde(default)]
    pub mass_kg: Option<f64>,

    /// Encounter velocity in km/s. Must be strictly positive.
    pub velocity_km_s: f64,

    /// Nominal approach distance in lunar distances, when the upstream
    /// feed supplies one.
    #[serde(default)]
    pub approach_distance_ld: Option<f64>,

    /// Miss distance from Earth's surface-centered position, in km.
    /// Zero means a direct impact trajectory.
    pub miss_distance_km: f64,

    /// Potentially-hazardous flag from the source catalogue.
    #[serde(default)]
    pub hazardous: bool,

    /// Predicted impact (or closest-approach) instant.
    pub impact_time: DateTime<Utc>,

    /// User-supplied impact latitude in degrees, if any.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// User-supplied impact longitude in degrees, if any.
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_density() -> f64 {
    DEFAULT_IMPACTOR_DENSITY
}

impl ImpactorSpec {
    /// Create a spec with the default density and no explicit location.
    pub fn new(
        diameter_m: f64,
        velocity_km_s: f64,
        miss_distance_km: f64,
        impact_time: DateTime<Utc>,
    ) -> Self {
        Self {
            name: None,
            diameter_m,
            density_kg_m3: DEFAULT_IMPACTOR_DENSITY,
            mass_kg: None,
            velocity_km_s,
            approach_distance_ld: None,
            miss_distance_km,
            hazardous: false,
            impact_time,
            latitude: None,
            longitude: None,
        }
    }

    /// Set the object name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the bulk density.
    pub fn with_density(mut self, density_kg_m3: f64) -> Self {
        self.density_kg_m3 = density_kg_m3;
        self
    }

    /// Supply an explicit mass, bypassing the diameter + density derivation.
    pub fn with_mass(mut self, mass_kg: f64) -> Self {
        self.mass_kg = Some(mass_kg);
        self
    }

    /// Supply a user-chosen impact location.
    pub fn at_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Set the potentially-hazardous catalogue flag.
    pub fn hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    /// Check every physical-range constraint.
    ///
    /// Runs before any stage; a violation aborts the whole pipeline.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !(self.diameter_m.is_finite() && self.diameter_m > 0.0) {
            return Err(ImpactError::InvalidDiameter(self.diameter_m));
        }
        if !(self.velocity_km_s.is_finite() && self.velocity_km_s > 0.0) {
            return Err(ImpactError::InvalidVelocity(self.velocity_km_s));
        }
        if !(self.density_kg_m3.is_finite() && self.density_kg_m3 > 0.0) {
            return Err(ImpactError::InvalidDensity(self.density_kg_m3));
        }
        if let Some(mass) = self.mass_kg
            && !(mass.is_finite() && mass > 0.0)
        {
            return Err(ImpactError::InvalidMass(mass));
        }
        if !(self.miss_distance_km.is_finite() && self.miss_distance_km >= 0.0) {
            return Err(ImpactError::InvalidMissDistance(self.miss_distance_km));
        }
        if let Some(lat) = self.latitude
            && !(lat.is_finite() && (-90.0..=90.0).contains(&lat))
        {
            return Err(ImpactError::InvalidLatitude(lat));
        }
        if let Some(lon) = self.longitude
            && !(lon.is_finite() && (-180.0..=180.0).contains(&lon))
        {
            return Err(ImpactError::InvalidLongitude(lon));
        }
        Ok(())
    }

    /// Diameter in kilometers.
    pub fn diameter_km(&self) -> f64 {
        self.diameter_m / 1000.0
    }

    /// Miss distance expressed in lunar distances.
    pub fn miss_distance_ld(&self) -> f64 {
        self.miss_distance_km / LUNAR_DISTANCE_KM
    }

    /// Days remaining until the predicted impact instant, measured from
    /// `now`. Negative when the impact time is in the past.
    pub fn days_until_impact(&self, now: DateTime<Utc>) -> f64 {
        let seconds = (self.impact_time - now).num_milliseconds() as f64 / 1000.0;
        seconds / SECONDS_PER_DAY
    }

    /// True when the spec carries user-supplied coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn impact_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2031, 4, 13, 21, 46, 0).unwrap()
    }

    #[test]
    fn test_valid_spec_passes() {
        let spec = ImpactorSpec::new(500.0, 30.2, 25000.0, impact_time());
        assert!(spec.validate().is_ok());
        assert_eq!(spec.density_kg_m3, DEFAULT_IMPACTOR_DENSITY);
    }

    #[test]
    fn test_nonpositive_diameter_rejected() {
        let spec = ImpactorSpec::new(0.0, 25.0, 0.0, impact_time());
        assert_eq!(spec.validate(), Err(ImpactError::InvalidDiameter(0.0)));

        let spec = ImpactorSpec::new(-10.0, 25.0, 0.0, impact_time());
        assert_eq!(spec.validate(), Err(ImpactError::InvalidDiameter(-10.0)));
    }

    #[test]
    fn test_nonpositive_velocity_rejected() {
        let spec = ImpactorSpec::new(100.0, 0.0, 0.0, impact_time());
        assert_eq!(spec.validate(), Err(ImpactError::InvalidVelocity(0.0)));
    }

    #[test]
    fn test_negative_miss_distance_rejected() {
        let spec = ImpactorSpec::new(100.0, 25.0, -1.0, impact_time());
        assert_eq!(spec.validate(), Err(ImpactError::InvalidMissDistance(-1.0)));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let spec = ImpactorSpec::new(100.0, 25.0, 0.0, impact_time()).at_coordinates(91.0, 0.0);
        assert_eq!(spec.validate(), Err(ImpactError::InvalidLatitude(91.0)));

        let spec = ImpactorSpec::new(100.0, 25.0, 0.0, impact_time()).at_coordinates(0.0, -181.0);
        assert_eq!(spec.validate(), Err(ImpactError::InvalidLongitude(-181.0)));
    }

    #[test]
    fn test_boundary_coordinates_accepted() {
        let spec = ImpactorSpec::new(100.0, 25.0, 0.0, impact_time()).at_coordinates(-90.0, 180.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_explicit_nonfinite_mass_rejected() {
        let spec = ImpactorSpec::new(100.0, 25.0, 0.0, impact_time()).with_mass(f64::NAN);
        assert!(matches!(
            spec.validate(),
            Err(ImpactError::InvalidMass(_))
        ));
    }

    #[test]
    fn test_days_until_impact() {
        let spec = ImpactorSpec::new(100.0, 25.0, 0.0, impact_time());
        let now = impact_time() - chrono::Duration::days(30);
        let days = spec.days_until_impact(now);
        assert!((days - 30.0).abs() < 1e-6, "got {days}");
    }

    #[test]
    fn test_miss_distance_in_lunar_distances() {
        let spec = ImpactorSpec::new(100.0, 25.0, LUNAR_DISTANCE_KM, impact_time());
        assert!((spec.miss_distance_ld() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let json = r#"{
            "diameter_m": 140.0,
            "velocity_km_s": 19.3,
            "miss_distance_km": 31000.0,
            "impact_time": "2029-04-13T21:46:00Z"
        }"#;
        let spec: ImpactorSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.density_kg_m3, DEFAULT_IMPACTOR_DENSITY);
        assert_eq!(spec.mass_kg, None);
        assert!(!spec.hazardous);
        assert!(spec.validate().is_ok());
    }
}
