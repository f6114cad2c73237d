//! Blast, thermal, and ejecta effects.
//!
//! Overpressure radii follow cube-root yield scaling against a fixed
//! table of PSI thresholds; thermal radii scale from fluence thresholds;
//! fireball, mushroom cloud, and ejecta extents are power laws of yield
//! and crater size. Casualty figures are area differences between nested
//! blast circles and are population-density dependent, not absolute
//! counts. Evacuation zones are keyed directly off the already-computed
//! blast radii rather than derived independently.

use log::warn;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::KPA_PER_PSI;
use crate::crater::CraterEstimate;
use crate::energy::EnergyProfile;
use crate::error::StageOutcome;
use crate::warning::{Severity, Warning, sort_by_severity};

const STAGE: &str = "blast";

/// Minimum effective yield (MT) that lofts a stable mushroom cloud.
const MUSHROOM_CLOUD_MIN_MEGATONS: f64 = 0.1;

/// Dust-and-vapor cloud cap (km), whatever the crater size.
const DUST_CLOUD_MAX_KM: f64 = 1000.0;

/// Overpressure attenuation exponent for wind-at-distance estimates.
const OVERPRESSURE_ATTENUATION_EXPONENT: f64 = 1.5;

/// Fixed overpressure bands: threshold (psi), cube-root scaling
/// coefficient (km per MT^(1/3)), description, survivability.
static OVERPRESSURE_BANDS: &[(&str, f64, f64, &str, &str)] = &[
    (
        "Total destruction",
        20.0,
        2.2,
        "Reinforced concrete structures leveled",
        "No survivors expected in the open",
    ),
    (
        "Severe blast damage",
        10.0,
        3.0,
        "Most commercial buildings collapse",
        "Survival unlikely without hardened shelter",
    ),
    (
        "Moderate blast damage",
        5.0,
        4.5,
        "Residential structures collapse",
        "Serious injuries common; basements offer protection",
    ),
    (
        "Light blast damage",
        2.0,
        6.5,
        "Walls cracked, roofs stripped",
        "Injuries from debris; most survive",
    ),
    (
        "Minor damage",
        1.0,
        9.5,
        "Doors and window frames blown in",
        "Minor injuries widespread",
    ),
    (
        "Glass breakage",
        0.5,
        13.0,
        "Widespread window breakage",
        "Lacerations from flying glass",
    ),
];

/// Thermal fluence bands: label, threshold (cal/cm²), description.
static THERMAL_BANDS: &[(&str, f64, &str)] = &[
    ("Vaporization zone", 300.0, "Exposed materials vaporize"),
    (
        "Severe burns and ignition",
        100.0,
        "Spontaneous ignition of clothing and structures",
    ),
    (
        "Third-degree burns",
        40.0,
        "Full-thickness burns to exposed skin",
    ),
    ("Second-degree burns", 15.0, "Blistering burns to exposed skin"),
    ("First-degree burns", 6.0, "Painful reddening of exposed skin"),
];

/// Surface type at the impact point; sets the blast coupling efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactSurface {
    Surface,
    Airburst,
    ShallowWater,
    DeepWater,
}

impl ImpactSurface {
    /// Blast-efficiency multiplier applied to the raw yield.
    pub fn efficiency(self) -> f64 {
        match self {
            ImpactSurface::Surface => 1.0,
            ImpactSurface::Airburst => 1.5,
            ImpactSurface::ShallowWater => 0.7,
            ImpactSurface::DeepWater => 0.5,
        }
    }
}

/// One overpressure ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastZone {
    pub name: String,
    pub overpressure_psi: f64,
    pub radius_km: f64,
    pub description: String,
    pub survivability: String,
    /// Peak wind behind the shock front at this overpressure (m/s).
    pub wind_speed_m_s: f64,
}

/// One thermal-radiation ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalZone {
    pub name: String,
    pub fluence_cal_cm2: f64,
    pub radius_km: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fireball {
    pub radius_km: f64,
    pub duration_s: f64,
    pub temperature_k: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MushroomCloud {
    pub height_km: f64,
    pub cap_width_km: f64,
}

/// One ejecta layer around the crater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EjectaLayer {
    pub name: String,
    pub radius_km: f64,
    pub description: String,
}

/// Yield-gated qualitative environmental consequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalEffects {
    pub climate_impact: String,
    pub ozone_depletion: String,
    pub acid_rain: String,
}

/// Area estimate between nested blast circles. Population-density
/// dependent; never an absolute casualty count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasualtyZone {
    pub name: String,
    pub area_km2: f64,
    pub expectation: String,
}

/// One color-coded evacuation band keyed off a computed blast radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationZone {
    pub color: String,
    pub radius_km: f64,
    pub priority: String,
    pub timeframe: String,
    pub actions: Vec<String>,
}

/// Full blast/thermal/ejecta sub-report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastProfile {
    pub yield_megatons: f64,
    pub surface: ImpactSurface,
    /// Yield × surface efficiency, the value all radii scale from.
    pub effective_yield_megatons: f64,
    pub fireball: Fireball,
    pub mushroom_cloud: Option<MushroomCloud>,
    /// Six overpressure rings, innermost first.
    pub blast_zones: Vec<BlastZone>,
    /// Five thermal rings, innermost first.
    pub thermal_zones: Vec<ThermalZone>,
    /// Continuous blanket, discontinuous ejecta, dust-and-vapor cloud.
    pub ejecta: Vec<EjectaLayer>,
    pub environment: EnvironmentalEffects,
    pub casualty_zones: Vec<CasualtyZone>,
    /// Five color-coded bands, innermost first.
    pub evacuation_zones: Vec<EvacuationZone>,
    /// Warnings ordered most severe first.
    pub warnings: Vec<Warning>,
}

impl BlastProfile {
    /// Radius of the ring at the given overpressure threshold, if it is
    /// one of the fixed bands.
    pub fn radius_at_psi(&self, psi: f64) -> Option<f64> {
        self.blast_zones
            .iter()
            .find(|zone| zone.overpressure_psi == psi)
            .map(|zone| zone.radius_km)
    }

    /// Peak wind speed at an arbitrary distance from ground zero (m/s).
    ///
    /// Attenuates the innermost band's overpressure with a 1.5-exponent
    /// power law, then converts through v = 5·√(overpressure in kPa).
    pub fn wind_speed_at_distance(&self, distance_km: f64) -> f64 {
        let reference = &self.blast_zones[0];
        if distance_km <= 0.0 {
            return reference.wind_speed_m_s;
        }
        let ratio = (reference.radius_km / distance_km).min(1.0);
        let overpressure_psi =
            reference.overpressure_psi * ratio.powf(OVERPRESSURE_ATTENUATION_EXPONENT);
        wind_speed(overpressure_psi)
    }
}

/// Peak wind speed behind a shock front of the given overpressure (m/s).
fn wind_speed(overpressure_psi: f64) -> f64 {
    5.0 * (overpressure_psi * KPA_PER_PSI).sqrt()
}

fn thermal_radius_km(yield_megatons: f64, fluence_cal_cm2: f64) -> f64 {
    1.8 * (yield_megatons * 0.5).powf(0.41) / (fluence_cal_cm2 / 100.0).sqrt()
}

fn environmental_effects(effective_yield: f64) -> EnvironmentalEffects {
    let climate_impact = if effective_yield >= 10_000.0 {
        "Impact winter: global temperature collapse lasting years"
    } else if effective_yield >= 1_000.0 {
        "Global cooling of several degrees for months to years"
    } else if effective_yield >= 100.0 {
        "Measurable hemispheric cooling from stratospheric dust"
    } else if effective_yield >= 10.0 {
        "Regional climate disruption from dust loading"
    } else {
        "Negligible climate effect"
    };

    let ozone_depletion = if effective_yield >= 1_000.0 {
        "Severe global ozone destruction from nitrogen oxides"
    } else if effective_yield >= 100.0 {
        "Significant ozone depletion over the impact hemisphere"
    } else if effective_yield >= 10.0 {
        "Minor regional ozone depletion"
    } else {
        "Negligible ozone effect"
    };

    let acid_rain = if effective_yield >= 10_000.0 {
        "Global acid rain from vaporized rock and seawater"
    } else if effective_yield >= 1_000.0 {
        "Continental-scale acid rain"
    } else if effective_yield >= 100.0 {
        "Acid rain across the impact region"
    } else {
        "Negligible acid rain"
    };

    EnvironmentalEffects {
        climate_impact: climate_impact.to_string(),
        ozone_depletion: ozone_depletion.to_string(),
        acid_rain: acid_rain.to_string(),
    }
}

fn casualty_zones(blast_zones: &[BlastZone]) -> Vec<CasualtyZone> {
    let area = |r: f64| PI * r * r;
    let r20 = blast_zones[0].radius_km;
    let r5 = blast_zones[2].radius_km;
    let r1 = blast_zones[4].radius_km;
    let r_glass = blast_zones[5].radius_km;

    vec![
        CasualtyZone {
            name: "Inner lethal zone".to_string(),
            area_km2: area(r20),
            expectation: "Near-total fatalities; scales with population density".to_string(),
        },
        CasualtyZone {
            name: "Severe casualty ring".to_string(),
            area_km2: area(r5) - area(r20),
            expectation: "Majority casualties among the unsheltered population".to_string(),
        },
        CasualtyZone {
            name: "Injury ring".to_string(),
            area_km2: area(r1) - area(r5),
            expectation: "Widespread injuries; fatalities concentrated in collapsed structures"
                .to_string(),
        },
        CasualtyZone {
            name: "Light injury ring".to_string(),
            area_km2: area(r_glass) - area(r1),
            expectation: "Light injuries, mostly from broken glass".to_string(),
        },
    ]
}

fn evacuation_zones(blast_zones: &[BlastZone]) -> Vec<EvacuationZone> {
    let moderate = blast_zones[2].radius_km;
    let light = blast_zones[3].radius_km;
    let minor = blast_zones[4].radius_km;
    let glass = blast_zones[5].radius_km;

    vec![
        EvacuationZone {
            color: "red".to_string(),
            radius_km: moderate,
            priority: "IMMEDIATE".to_string(),
            timeframe: "Evacuate within 0-24 hours".to_string(),
            actions: vec![
                "Mandatory evacuation of all residents".to_string(),
                "Close all transport into the zone".to_string(),
            ],
        },
        EvacuationZone {
            color: "orange".to_string(),
            radius_km: light,
            priority: "URGENT".to_string(),
            timeframe: "Evacuate within 24-48 hours".to_string(),
            actions: vec![
                "Staged evacuation, vulnerable populations first".to_string(),
                "Pre-position emergency services at the perimeter".to_string(),
            ],
        },
        EvacuationZone {
            color: "yellow".to_string(),
            radius_km: minor,
            priority: "HIGH".to_string(),
            timeframe: "Evacuate within 48-72 hours".to_string(),
            actions: vec![
                "Voluntary evacuation; prepare shelters".to_string(),
                "Secure or board windows before departure".to_string(),
            ],
        },
        EvacuationZone {
            color: "blue".to_string(),
            radius_km: glass,
            priority: "PRECAUTIONARY".to_string(),
            timeframe: "72 hours to 1 week".to_string(),
            actions: vec![
                "Shelter away from windows".to_string(),
                "Stock water, food, and first-aid supplies".to_string(),
            ],
        },
        EvacuationZone {
            color: "green".to_string(),
            radius_km: glass * 1.5,
            priority: "STAGING".to_string(),
            timeframe: "Shelter in place".to_string(),
            actions: vec![
                "Host evacuees and stage response resources".to_string(),
                "Monitor official broadcasts".to_string(),
            ],
        },
    ]
}

fn build_warnings(effective_yield: f64, thermal_zones: &[ThermalZone]) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if effective_yield >= 10_000.0 {
        warnings.push(Warning::new(
            Severity::Extreme,
            format!(
                "Energy release of {effective_yield:.0} MT is in the mass-extinction range"
            ),
        ));
    } else if effective_yield >= 1_000.0 {
        warnings.push(Warning::new(
            Severity::Critical,
            format!("Energy release of {effective_yield:.0} MT threatens an entire continent"),
        ));
    } else if effective_yield >= 100.0 {
        warnings.push(Warning::new(
            Severity::High,
            format!("Energy release of {effective_yield:.0} MT will devastate the region"),
        ));
    } else if effective_yield >= 1.0 {
        warnings.push(Warning::new(
            Severity::Watch,
            format!("Energy release of {effective_yield:.1} MT endangers a metropolitan area"),
        ));
    }

    // Third-degree-burn ring is the middle thermal band
    let burn_radius = thermal_zones[2].radius_km;
    if burn_radius > 50.0 {
        warnings.push(Warning::new(
            Severity::Critical,
            format!("Third-degree burns to exposed skin out to {burn_radius:.0} km"),
        ));
    }

    sort_by_severity(&mut warnings);
    warnings
}

/// Assess blast, thermal, and ejecta effects.
///
/// A non-finite energy or crater radius degrades only this stage; the
/// rest of the report stays intact.
pub fn assess(
    energy: &EnergyProfile,
    crater: &CraterEstimate,
    surface: ImpactSurface,
) -> StageOutcome<BlastProfile> {
    if !(energy.megatons_tnt.is_finite() && energy.megatons_tnt > 0.0) {
        warn!("blast stage degraded: yield {} unusable", energy.megatons_tnt);
        return StageOutcome::failed(
            STAGE,
            format!("yield must be positive and finite, got {} MT", energy.megatons_tnt),
        );
    }
    if !(crater.radius_m.is_finite() && crater.radius_m > 0.0) {
        warn!(
            "blast stage degraded: crater radius {} unusable",
            crater.radius_m
        );
        return StageOutcome::failed(
            STAGE,
            format!(
                "crater radius must be positive and finite, got {} m",
                crater.radius_m
            ),
        );
    }

    let yield_megatons = energy.megatons_tnt;
    let effective_yield = yield_megatons * surface.efficiency();
    let cube_root_yield = effective_yield.powf(1.0 / 3.0);

    let blast_zones: Vec<BlastZone> = OVERPRESSURE_BANDS
        .iter()
        .map(|&(name, psi, k, description, survivability)| BlastZone {
            name: name.to_string(),
            overpressure_psi: psi,
            radius_km: k * cube_root_yield,
            description: description.to_string(),
            survivability: survivability.to_string(),
            wind_speed_m_s: wind_speed(psi),
        })
        .collect();

    let thermal_zones: Vec<ThermalZone> = THERMAL_BANDS
        .iter()
        .map(|&(name, fluence, description)| ThermalZone {
            name: name.to_string(),
            fluence_cal_cm2: fluence,
            radius_km: thermal_radius_km(yield_megatons, fluence),
            description: description.to_string(),
        })
        .collect();

    let fireball = Fireball {
        radius_km: 0.09 * yield_megatons.powf(0.4),
        duration_s: 10.0 * yield_megatons.powf(0.4),
        temperature_k: 8000.0 * yield_megatons.powf(0.1),
    };

    let mushroom_cloud = if effective_yield >= MUSHROOM_CLOUD_MIN_MEGATONS {
        Some(MushroomCloud {
            height_km: 6.0 * effective_yield.powf(0.25),
            cap_width_km: 3.0 * effective_yield.powf(0.4),
        })
    } else {
        None
    };

    let crater_radius_km = crater.radius_km();
    let ejecta = vec![
        EjectaLayer {
            name: "Continuous ejecta blanket".to_string(),
            radius_km: 3.0 * crater_radius_km,
            description: "Meters-thick blanket of excavated rock".to_string(),
        },
        EjectaLayer {
            name: "Discontinuous ejecta".to_string(),
            radius_km: 7.0 * crater_radius_km,
            description: "Scattered boulders and secondary craters".to_string(),
        },
        EjectaLayer {
            name: "Dust and vapor cloud".to_string(),
            radius_km: (20.0 * crater_radius_km).min(DUST_CLOUD_MAX_KM),
            description: "Fine dust and condensed rock vapor fallout".to_string(),
        },
    ];

    let warnings = build_warnings(effective_yield, &thermal_zones);
    let casualty_zones = casualty_zones(&blast_zones);
    let evacuation_zones = evacuation_zones(&blast_zones);

    StageOutcome::computed(BlastProfile {
        yield_megatons,
        surface,
        effective_yield_megatons: effective_yield,
        fireball,
        mushroom_cloud,
        blast_zones,
        thermal_zones,
        ejecta,
        environment: environmental_effects(effective_yield),
        casualty_zones,
        evacuation_zones,
        warnings,
    })
}
