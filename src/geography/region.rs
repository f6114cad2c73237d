//! Coarse geographic risk classification.
//!
//! Maps an impact point to a continent-scale region bucket via a small
//! ordered table of bounding boxes, then derives a risk tier from the
//! affected area. Intentionally approximate: the downstream risk tiers
//! are calibrated against this coarse classifier, so it must not be
//! replaced by a true geospatial lookup.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One bounding-box classification rule. Rules are checked in order;
/// the first match wins.
struct RegionRule {
    lat_range: (f64, f64),
    lon_range: (f64, f64),
    name: &'static str,
    land: bool,
}

/// Ordered continent-scale bounding boxes. Land rules come first so a
/// point inside a continent box never falls through to an ocean basin.
static REGION_RULES: &[RegionRule] = &[
    RegionRule {
        lat_range: (-90.0, -60.0),
        lon_range: (-180.0, 180.0),
        name: "Antarctica",
        land: true,
    },
    RegionRule {
        lat_range: (15.0, 72.0),
        lon_range: (-168.0, -52.0),
        name: "North America",
        land: true,
    },
    RegionRule {
        lat_range: (-56.0, 15.0),
        lon_range: (-82.0, -34.0),
        name: "South America",
        land: true,
    },
    RegionRule {
        lat_range: (36.0, 71.0),
        lon_range: (-10.0, 40.0),
        name: "Europe",
        land: true,
    },
    RegionRule {
        lat_range: (-35.0, 36.0),
        lon_range: (-18.0, 52.0),
        name: "Africa",
        land: true,
    },
    RegionRule {
        lat_range: (5.0, 75.0),
        lon_range: (40.0, 180.0),
        name: "Asia",
        land: true,
    },
    RegionRule {
        lat_range: (-47.0, -10.0),
        lon_range: (110.0, 180.0),
        name: "Australia",
        land: true,
    },
];

/// Ocean-basin fallback by longitude for points outside every land box.
fn ocean_basin(latitude: f64, longitude: f64) -> &'static str {
    if latitude > 66.0 {
        "Arctic Ocean"
    } else if latitude < -55.0 {
        "Southern Ocean"
    } else if (-70.0..20.0).contains(&longitude) {
        "Atlantic Ocean"
    } else if (20.0..146.0).contains(&longitude) {
        "Indian Ocean"
    } else {
        "Pacific Ocean"
    }
}

/// Risk tier keyed by affected area and land/ocean classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Severe,
    Catastrophic,
}

impl RiskTier {
    /// Area thresholds for a land impact (km²).
    fn from_land_area(area_km2: f64) -> Self {
        if area_km2 >= 100_000.0 {
            RiskTier::Catastrophic
        } else if area_km2 >= 10_000.0 {
            RiskTier::Severe
        } else if area_km2 >= 1_000.0 {
            RiskTier::High
        } else if area_km2 >= 100.0 {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    /// Ocean impacts bucket one tier lower than land for the same area.
    fn downgraded(self) -> Self {
        match self {
            RiskTier::Catastrophic => RiskTier::Severe,
            RiskTier::Severe => RiskTier::High,
            RiskTier::High => RiskTier::Moderate,
            RiskTier::Moderate | RiskTier::Low => RiskTier::Low,
        }
    }
}

/// Region bucket, affected area, and risk tier for one impact point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicRisk {
    /// Coarse region/continent label.
    pub region: String,
    /// True for a continental impact, false for an ocean basin.
    pub land: bool,
    /// π · (3 × crater radius)² in km².
    pub affected_area_km2: f64,
    pub risk_tier: RiskTier,
}

/// Classify an impact point and crater radius into a geographic risk.
pub fn classify(latitude: f64, longitude: f64, crater_radius_km: f64) -> GeographicRisk {
    let rule = REGION_RULES.iter().find(|rule| {
        (rule.lat_range.0..=rule.lat_range.1).contains(&latitude)
            && (rule.lon_range.0..=rule.lon_range.1).contains(&longitude)
    });

    let (region, land) = match rule {
        Some(rule) => (rule.name, rule.land),
        None => (ocean_basin(latitude, longitude), false),
    };

    let affected_radius_km = 3.0 * crater_radius_km;
    let affected_area_km2 = PI * affected_radius_km * affected_radius_km;

    let land_tier = RiskTier::from_land_area(affected_area_km2);
    let risk_tier = if land { land_tier } else { land_tier.downgraded() };

    GeographicRisk {
        region: region.to_string(),
        land,
        affected_area_km2,
        risk_tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_buckets() {
        assert_eq!(classify(40.0, -100.0, 1.0).region, "North America");
        assert_eq!(classify(-15.0, -60.0, 1.0).region, "South America");
        assert_eq!(classify(50.0, 10.0, 1.0).region, "Europe");
        assert_eq!(classify(0.0, 20.0, 1.0).region, "Africa");
        assert_eq!(classify(35.0, 105.0, 1.0).region, "Asia");
        assert_eq!(classify(-25.0, 135.0, 1.0).region, "Australia");
        assert_eq!(classify(-75.0, 0.0, 1.0).region, "Antarctica");
    }

    #[test]
    fn test_ocean_fallbacks() {
        let mid_pacific = classify(0.0, -150.0, 1.0);
        assert_eq!(mid_pacific.region, "Pacific Ocean");
        assert!(!mid_pacific.land);

        let mid_atlantic = classify(30.0, -40.0, 1.0);
        assert_eq!(mid_atlantic.region, "Atlantic Ocean");

        let indian = classify(-20.0, 80.0, 1.0);
        assert_eq!(indian.region, "Indian Ocean");
    }

    #[test]
    fn test_affected_area_formula() {
        // radius 10 km → affected radius 30 km → area π·900
        let risk = classify(40.0, -100.0, 10.0);
        let expected = PI * 900.0;
        assert!((risk.affected_area_km2 - expected).abs() < 1e-9);
    }

    #[test]
    fn test_land_tier_thresholds() {
        // affected area = π·(3r)²; r chosen to land in each band
        let area_for = |r: f64| PI * (3.0 * r) * (3.0 * r);

        let r_low = 1.0; // ~28 km²
        assert!(area_for(r_low) < 100.0);
        assert_eq!(classify(40.0, -100.0, r_low).risk_tier, RiskTier::Low);

        let r_high = 15.0; // ~6,362 km²
        assert!((1_000.0..10_000.0).contains(&area_for(r_high)));
        assert_eq!(classify(40.0, -100.0, r_high).risk_tier, RiskTier::High);

        let r_cat = 60.0; // ~101,788 km²
        assert!(area_for(r_cat) >= 100_000.0);
        assert_eq!(
            classify(40.0, -100.0, r_cat).risk_tier,
            RiskTier::Catastrophic
        );
    }

    #[test]
    fn test_ocean_downgrades_one_tier() {
        let r_cat = 60.0;
        let land = classify(40.0, -100.0, r_cat);
        let ocean = classify(0.0, -150.0, r_cat);
        assert_eq!(land.risk_tier, RiskTier::Catastrophic);
        assert_eq!(ocean.risk_tier, RiskTier::Severe);
    }
}
