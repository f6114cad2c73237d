//! Test utilities for impact-effects pipeline tests.
//!
//! Provides fixtures for building impactor specs and assertions for
//! comparing computed physical quantities against reference values.

use chrono::{DateTime, TimeZone, Utc};

use crate::impactor::ImpactorSpec;

/// Fixtures for creating test impactor specs.
pub mod fixtures {
    use super::*;

    /// A fixed impact instant shared by deterministic tests.
    pub fn impact_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2031, 4, 13, 21, 46, 0).unwrap()
    }

    /// A fixed "now" 30 days before [`impact_time`].
    pub fn observation_time() -> DateTime<Utc> {
        impact_time() - chrono::Duration::days(30)
    }

    /// An object on a direct impact trajectory (zero miss distance).
    pub fn direct_impactor(diameter_m: f64, velocity_km_s: f64) -> ImpactorSpec {
        ImpactorSpec::new(diameter_m, velocity_km_s, 0.0, impact_time())
    }

    /// An object passing well outside the critical distance band.
    pub fn distant_impactor(diameter_m: f64, velocity_km_s: f64) -> ImpactorSpec {
        ImpactorSpec::new(diameter_m, velocity_km_s, 25000.0, impact_time())
    }

    /// Direct impactor aimed at the continental United States.
    pub fn land_impactor(diameter_m: f64, velocity_km_s: f64) -> ImpactorSpec {
        direct_impactor(diameter_m, velocity_km_s).at_coordinates(40.0, -100.0)
    }

    /// Direct impactor aimed at the mid-Pacific.
    pub fn ocean_impactor(diameter_m: f64, velocity_km_s: f64) -> ImpactorSpec {
        direct_impactor(diameter_m, velocity_km_s).at_coordinates(0.0, -150.0)
    }
}

/// Assertions for comparing computed quantities.
pub mod assertions {
    /// Assert that `actual` is within `tolerance` relative error of
    /// `expected`.
    ///
    /// # Panics
    /// Panics when the relative error exceeds the tolerance.
    pub fn assert_relative_error(actual: f64, expected: f64, tolerance: f64) {
        let error = if expected.abs() > 1e-10 {
            ((actual - expected) / expected).abs()
        } else {
            (actual - expected).abs()
        };
        assert!(
            error <= tolerance,
            "relative error {error:.6e} exceeds tolerance {tolerance:.6e}: actual={actual:.6e}, expected={expected:.6e}"
        );
    }

    /// Assert that a slice of values is strictly decreasing.
    ///
    /// # Panics
    /// Panics when any adjacent pair is out of order.
    pub fn assert_strictly_decreasing(values: &[f64], label: &str) {
        for (index, pair) in values.windows(2).enumerate() {
            assert!(
                pair[0] > pair[1],
                "{label} not strictly decreasing at index {index}: {} <= {}",
                pair[0],
                pair[1]
            );
        }
    }

    /// Assert that a slice of values is strictly increasing.
    ///
    /// # Panics
    /// Panics when any adjacent pair is out of order.
    pub fn assert_strictly_increasing(values: &[f64], label: &str) {
        for (index, pair) in values.windows(2).enumerate() {
            assert!(
                pair[0] < pair[1],
                "{label} not strictly increasing at index {index}: {} >= {}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_impactor_is_valid() {
        let spec = fixtures::direct_impactor(100.0, 25.0);
        assert!(spec.validate().is_ok());
        assert_eq!(spec.miss_distance_km, 0.0);
    }

    #[test]
    fn test_observation_time_precedes_impact() {
        let days = fixtures::direct_impactor(100.0, 25.0)
            .days_until_impact(fixtures::observation_time());
        assert_relative_eq!(days, 30.0, epsilon = 1e-6);
    }

    #[test]
    fn test_relative_error_assertion() {
        assertions::assert_relative_error(1.001, 1.0, 0.01);
    }

    #[test]
    #[should_panic(expected = "relative error")]
    fn test_relative_error_assertion_panics() {
        assertions::assert_relative_error(1.5, 1.0, 0.01);
    }

    #[test]
    fn test_ordering_assertions() {
        assertions::assert_strictly_decreasing(&[3.0, 2.0, 1.0], "radii");
        assertions::assert_strictly_increasing(&[1.0, 2.0, 3.0], "areas");
    }
}
