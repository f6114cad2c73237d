//! Property-based tests for the impact-effects pipeline using proptest.
//!
//! These tests verify ordering and scaling invariants across wide
//! parameter ranges rather than single reference scenarios.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::blast::{self, ImpactSurface};
use crate::constants::EARTH_RADIUS_KM;
use crate::crater::{CraterEstimate, ImpactProbability};
use crate::energy::EnergyProfile;
use crate::geography::normalize_longitude;
use crate::impactor::ImpactorSpec;
use crate::report::compute_effects_with;
use crate::seismic::magnitudes;
use crate::test_utils::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Kinetic energy grows strictly with diameter at fixed velocity
    /// and strictly with velocity at fixed diameter.
    #[test]
    fn prop_energy_monotonic_in_inputs(
        diameter_m in 1.0f64..2000.0,
        velocity_km_s in 1.0f64..70.0,
    ) {
        let base = EnergyProfile::from_spec(
            &fixtures::direct_impactor(diameter_m, velocity_km_s),
        ).unwrap();
        let bigger = EnergyProfile::from_spec(
            &fixtures::direct_impactor(diameter_m * 1.1, velocity_km_s),
        ).unwrap();
        let faster = EnergyProfile::from_spec(
            &fixtures::direct_impactor(diameter_m, velocity_km_s * 1.1),
        ).unwrap();

        prop_assert!(
            bigger.kinetic_energy_j > base.kinetic_energy_j,
            "energy did not grow with diameter at d={diameter_m}, v={velocity_km_s}"
        );
        prop_assert!(
            faster.kinetic_energy_j > base.kinetic_energy_j,
            "energy did not grow with velocity at d={diameter_m}, v={velocity_km_s}"
        );
    }

    /// Crater diameter is positive and strictly increasing in energy.
    #[test]
    fn prop_crater_monotonic_in_energy(
        energy_j in 1.0e12f64..1.0e22,
    ) {
        let crater = CraterEstimate::from_energy(energy_j);
        let larger = CraterEstimate::from_energy(energy_j * 2.0);
        prop_assert!(crater.diameter_m > 0.0);
        prop_assert!(
            larger.diameter_m > crater.diameter_m,
            "crater not monotonic at E={energy_j:.3e}"
        );
    }

    /// Impact probability stays in [1e-6, 1] and never increases with
    /// miss distance.
    #[test]
    fn prop_probability_bounded_and_non_increasing(
        miss_km in 0.0f64..500_000.0,
        diameter_m in 1.0f64..2000.0,
    ) {
        let near = ImpactProbability::estimate(miss_km, diameter_m, false);
        let far = ImpactProbability::estimate(miss_km + 100.0, diameter_m, false);

        prop_assert!((1e-6..=1.0).contains(&near.probability));
        prop_assert!(
            far.probability <= near.probability,
            "probability rose with distance at miss={miss_km}"
        );

        if miss_km <= EARTH_RADIUS_KM {
            prop_assert!(near.probability == 1.0);
        }
    }

    /// Moment magnitude sits exactly 0.2 above Richter, and the primary
    /// magnitude is always one of the two.
    #[test]
    fn prop_magnitude_relationship(
        seismic_energy_j in 1.0e10f64..1.0e21,
    ) {
        let (richter, moment, primary) = magnitudes(seismic_energy_j);
        prop_assert!(
            (moment - richter - 0.2).abs() < 1e-9,
            "moment-Richter offset drifted: {richter} vs {moment}"
        );
        if richter > 6.5 {
            prop_assert!(primary == moment);
        } else {
            prop_assert!(primary == richter);
        }
    }

    /// Blast rings keep their strict ordering at any yield, and radii
    /// scale with the cube root of yield (8x energy doubles each ring).
    #[test]
    fn prop_blast_rings_ordered_and_cube_root_scaled(
        megatons in 0.01f64..100_000.0,
    ) {
        let energy = EnergyProfile {
            mass_kg: 1.0,
            kinetic_energy_j: megatons * crate::constants::JOULES_PER_MEGATON,
            megatons_tnt: megatons,
            kilotons_tnt: megatons * 1000.0,
        };
        let crater = CraterEstimate::from_energy(energy.kinetic_energy_j);

        let profile = blast::assess(&energy, &crater, ImpactSurface::Surface)
            .into_computed()
            .unwrap();
        for pair in profile.blast_zones.windows(2) {
            prop_assert!(
                pair[0].radius_km < pair[1].radius_km,
                "overpressure rings out of order at {megatons} MT"
            );
        }

        let energy_8x = EnergyProfile {
            megatons_tnt: megatons * 8.0,
            kilotons_tnt: megatons * 8000.0,
            ..energy
        };
        let profile_8x = blast::assess(&energy_8x, &crater, ImpactSurface::Surface)
            .into_computed()
            .unwrap();
        let ratio = profile_8x.blast_zones[0].radius_km / profile.blast_zones[0].radius_km;
        prop_assert!(
            (ratio - 2.0).abs() < 1e-9,
            "8x yield should double the ring radius, got ratio {ratio}"
        );
    }

    /// Longitude normalization always lands in [-180, 180].
    #[test]
    fn prop_normalize_longitude_in_range(
        degrees in -100_000.0f64..100_000.0,
    ) {
        let wrapped = normalize_longitude(degrees);
        prop_assert!(
            (-180.0..=180.0).contains(&wrapped),
            "normalize_longitude({degrees}) = {wrapped}"
        );
    }

    /// The full pipeline succeeds for any physically valid spec, and the
    /// assembled report is internally consistent.
    #[test]
    fn prop_pipeline_succeeds_for_valid_specs(
        diameter_m in 1.0f64..2000.0,
        velocity_km_s in 1.0f64..70.0,
        miss_km in 0.0f64..100_000.0,
        seed in any::<u64>(),
    ) {
        let impact_time = Utc.with_ymd_and_hms(2031, 4, 13, 21, 46, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
        let spec = ImpactorSpec::new(diameter_m, velocity_km_s, miss_km, impact_time);

        let mut rng = StdRng::seed_from_u64(seed);
        let report = compute_effects_with(&spec, now, &mut rng).unwrap();

        prop_assert!(report.energy.kinetic_energy_j > 0.0);
        prop_assert!(report.crater.diameter_m > 0.0);
        prop_assert!((1e-6..=1.0).contains(&report.impact_probability.probability));

        // Geographic sections appear together or not at all
        prop_assert!(report.probability_map.is_some() == report.impact_point.is_impact());
        prop_assert!(report.geographic_risk.is_some() == report.impact_point.is_impact());

        if let Some(point) = report.impact_point.point() {
            prop_assert!((-90.0..=90.0).contains(&point.latitude));
            prop_assert!((-180.0..=180.0).contains(&point.longitude));
        }
    }
}
