//! Common test utilities for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use groundfall::ImpactorSpec;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fixed impact instant shared by the integration scenarios.
pub fn impact_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2031, 4, 13, 21, 46, 0).unwrap()
}

/// Fixed observation instant, well before the impact.
pub fn observation_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
}

/// Deterministic RNG for reproducible geographic sampling.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x6772_6e64)
}

/// A 500 m hazardous object passing at 25,000 km.
pub fn distant_hazardous() -> ImpactorSpec {
    ImpactorSpec::new(500.0, 30.2, 25000.0, impact_time())
        .named("2031 QF")
        .hazardous(true)
}

/// A 100 m object on a direct trajectory into the mid-Pacific.
#[allow(dead_code)]
pub fn pacific_impactor() -> ImpactorSpec {
    ImpactorSpec::new(100.0, 20.0, 0.0, impact_time())
        .named("2031 RD")
        .at_coordinates(0.0, -150.0)
}

/// A 100 m object on a direct trajectory into the North American plains.
#[allow(dead_code)]
pub fn plains_impactor() -> ImpactorSpec {
    ImpactorSpec::new(100.0, 20.0, 0.0, impact_time())
        .named("2031 RE")
        .at_coordinates(40.0, -100.0)
}
