//! Mass and kinetic-energy kernel.
//!
//! First stage of the pipeline: derives the impactor mass (from an
//! explicit value or from density × spherical volume) and converts the
//! encounter velocity into kinetic energy and TNT equivalents. Everything
//! downstream keys off these numbers.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::{JOULES_PER_KILOTON, JOULES_PER_MEGATON};
use crate::error::ImpactError;
use crate::impactor::ImpactorSpec;

/// Mass and energy release of one impactor. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    /// Impactor mass in kg.
    pub mass_kg: f64,
    /// Kinetic energy ½mv² in joules.
    pub kinetic_energy_j: f64,
    /// TNT equivalent in megatons.
    pub megatons_tnt: f64,
    /// TNT equivalent in kilotons.
    pub kilotons_tnt: f64,
}

/// Mass of a sphere of the given diameter and bulk density.
pub fn mass_from_diameter(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    density_kg_m3 * (4.0 / 3.0) * PI * radius.powi(3)
}

impl EnergyProfile {
    /// Compute the energy profile for a validated spec.
    ///
    /// Re-checks the kernel's own preconditions (positive diameter and
    /// velocity) so it stays safe to call outside the full pipeline.
    pub fn from_spec(spec: &ImpactorSpec) -> Result<Self, ImpactError> {
        if !(spec.diameter_m.is_finite() && spec.diameter_m > 0.0) {
            return Err(ImpactError::InvalidDiameter(spec.diameter_m));
        }
        if !(spec.velocity_km_s.is_finite() && spec.velocity_km_s > 0.0) {
            return Err(ImpactError::InvalidVelocity(spec.velocity_km_s));
        }

        let mass_kg = match spec.mass_kg {
            Some(mass) => mass,
            None => mass_from_diameter(spec.diameter_m, spec.density_kg_m3),
        };

        let velocity_m_s = spec.velocity_km_s * 1000.0;
        let kinetic_energy_j = 0.5 * mass_kg * velocity_m_s * velocity_m_s;

        Ok(Self {
            mass_kg,
            kinetic_energy_j,
            megatons_tnt: kinetic_energy_j / JOULES_PER_MEGATON,
            kilotons_tnt: kinetic_energy_j / JOULES_PER_KILOTON,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn spec(diameter_m: f64, velocity_km_s: f64) -> ImpactorSpec {
        let t = Utc.with_ymd_and_hms(2031, 4, 13, 21, 46, 0).unwrap();
        ImpactorSpec::new(diameter_m, velocity_km_s, 25000.0, t)
    }

    #[test]
    fn test_mass_matches_sphere_volume() {
        // 500 m stony asteroid: 3000 * (4/3)π * 250³ ≈ 1.963e11 kg
        let mass = mass_from_diameter(500.0, 3000.0);
        let relative_error = (mass - 1.9635e11).abs() / 1.9635e11;
        assert!(relative_error < 1e-3, "mass {mass} off by {relative_error}");
    }

    #[test]
    fn test_kinetic_energy_reference_scenario() {
        // 500 m, 3000 kg/m³, 30.2 km/s → ≈ 8.95e19 J ≈ 21,400 MT
        let profile = EnergyProfile::from_spec(&spec(500.0, 30.2)).unwrap();
        let relative_error = (profile.kinetic_energy_j - 8.954e19).abs() / 8.954e19;
        assert!(
            relative_error < 1e-3,
            "energy {} off by {relative_error}",
            profile.kinetic_energy_j
        );
        assert!(
            (profile.megatons_tnt - 21400.0).abs() / 21400.0 < 0.01,
            "got {} MT",
            profile.megatons_tnt
        );
    }

    #[test]
    fn test_explicit_mass_overrides_derivation() {
        let profile = EnergyProfile::from_spec(&spec(500.0, 10.0).with_mass(1.0e9)).unwrap();
        assert_eq!(profile.mass_kg, 1.0e9);
        // ½ · 1e9 · (1e4)² = 5e16
        assert!((profile.kinetic_energy_j - 5.0e16).abs() / 5.0e16 < 1e-12);
    }

    #[test]
    fn test_doubling_velocity_quadruples_energy() {
        let base = EnergyProfile::from_spec(&spec(100.0, 20.0)).unwrap();
        let doubled = EnergyProfile::from_spec(&spec(100.0, 40.0)).unwrap();
        let ratio = doubled.kinetic_energy_j / base.kinetic_energy_j;
        assert!((ratio - 4.0).abs() < 1e-12, "ratio {ratio}");
    }

    #[test]
    fn test_kernel_rejects_nonpositive_inputs() {
        assert!(matches!(
            EnergyProfile::from_spec(&spec(-1.0, 20.0)),
            Err(ImpactError::InvalidDiameter(_))
        ));
        assert!(matches!(
            EnergyProfile::from_spec(&spec(100.0, 0.0)),
            Err(ImpactError::InvalidVelocity(_))
        ));
    }

    #[test]
    fn test_kilotons_megatons_consistent() {
        let profile = EnergyProfile::from_spec(&spec(100.0, 25.0)).unwrap();
        let ratio = profile.kilotons_tnt / profile.megatons_tnt;
        assert!((ratio - 1000.0).abs() < 1e-9);
    }
}
