//! Seismic effects of an impact.
//!
//! A fixed fraction of the kinetic energy couples into the ground
//! (less over water), giving Richter and moment magnitude estimates.
//! Regional shaking is attenuated over standoff distances and expressed
//! as Modified Mercalli Intensity and peak ground acceleration.
//! Aftershock rates follow Omori's law; ocean impacts above magnitude 7
//! raise a tsunami warning.
//!
//! The Richter/moment switch at 6.5 is an exact discontinuity carried
//! over from the source model; see DESIGN.md before changing it.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::energy::EnergyProfile;
use crate::error::StageOutcome;
use crate::warning::{Severity, Warning, sort_by_severity};

const STAGE: &str = "seismic";

/// Fraction of kinetic energy radiated as seismic energy on land.
const SEISMIC_EFFICIENCY_LAND: f64 = 0.005;

/// Fraction over water; the water column absorbs energy.
const SEISMIC_EFFICIENCY_OCEAN: f64 = 0.002;

/// Richter magnitude above which the moment magnitude becomes primary.
const MOMENT_SWITCH_MAGNITUDE: f64 = 6.5;

/// Magnitude-distance attenuation coefficient.
const ATTENUATION_BETA_LAND: f64 = 2.0;
const ATTENUATION_BETA_OCEAN: f64 = 2.5;

/// Omori's law parameters: rate(t) = K / (c + t)^p, K = 10^(M-4).
const OMORI_C_HOURS: f64 = 0.1;
const OMORI_P: f64 = 1.1;

/// Båth's law offset for the largest expected aftershock.
const LARGEST_AFTERSHOCK_DROP: f64 = 1.2;

/// Standoff distances for regional effects (km).
const REGIONAL_DISTANCES: &[(&str, f64)] = &[
    ("epicenter", 0.0),
    ("near", 100.0),
    ("far", 500.0),
    ("distant", 1000.0),
];

/// Magnitude-sorted historical analogues; nearest magnitude wins.
static HISTORICAL_ANALOGUES: &[(f64, &str)] = &[
    (9.5, "1960 Valdivia, Chile"),
    (9.2, "1964 Prince William Sound, Alaska"),
    (9.1, "2011 Tōhoku, Japan"),
    (9.0, "2004 Sumatra-Andaman"),
    (8.8, "2010 Maule, Chile"),
    (8.2, "2017 Chiapas, Mexico"),
    (7.9, "1906 San Francisco"),
    (7.0, "2010 Haiti"),
    (6.9, "1989 Loma Prieta"),
    (6.0, "2014 South Napa"),
    (5.0, "typical moderate earthquake"),
];

/// Shaking felt at one standoff distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalEffect {
    /// Band label: epicenter, near, far, distant.
    pub label: String,
    pub distance_km: f64,
    /// Attenuated magnitude at this distance.
    pub magnitude: f64,
    /// Modified Mercalli Intensity, clamped to [1, 12].
    pub mmi: f64,
    /// Peak ground acceleration in units of g.
    pub pga_g: f64,
    /// Qualitative damage expectation from the MMI band.
    pub expected_damage: String,
}

/// Omori-law aftershock forecast for the first 24 hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AftershockForecast {
    /// (hours after impact, events per hour) at 1/6/12/24 h.
    pub rates_per_hour: Vec<(f64, f64)>,
    /// Integrated expected event count over the first 24 hours.
    pub expected_count_24h: f64,
    /// Largest expected aftershock magnitude (Båth's law, M − 1.2).
    pub largest_expected_magnitude: f64,
}

/// Tsunami warning for ocean impacts at primary magnitude ≥ 7.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsunamiWarning {
    pub min_wave_height_m: f64,
    pub max_wave_height_m: f64,
    pub message: String,
}

/// Full seismic sub-report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicProfile {
    /// Kinetic energy × coupling efficiency (J).
    pub seismic_energy_j: f64,
    pub seismic_efficiency: f64,
    pub richter_magnitude: f64,
    pub moment_magnitude: f64,
    /// Moment magnitude once the Richter estimate exceeds 6.5, else Richter.
    pub primary_magnitude: f64,
    pub magnitude_class: String,
    pub historical_analogue: String,
    pub regional_effects: Vec<RegionalEffect>,
    pub aftershocks: AftershockForecast,
    pub tsunami: Option<TsunamiWarning>,
    /// Ordinal severity label for societal-scale consequences.
    pub global_impact: String,
    /// Warnings ordered most severe first.
    pub warnings: Vec<Warning>,
}

/// Richter, moment, and primary magnitudes for a seismic energy release.
///
/// Primary switches from Richter to moment magnitude exactly when the
/// Richter estimate exceeds 6.5 (a sharp jump, preserved deliberately).
pub fn magnitudes(seismic_energy_j: f64) -> (f64, f64, f64) {
    let log_e = seismic_energy_j.log10();
    let richter = (2.0 / 3.0) * log_e - 2.9;
    let moment = (2.0 / 3.0) * log_e - 10.7 + 8.0;
    let primary = if richter > MOMENT_SWITCH_MAGNITUDE {
        moment
    } else {
        richter
    };
    (richter, moment, primary)
}

fn magnitude_class(magnitude: f64) -> &'static str {
    if magnitude >= 8.0 {
        "Great"
    } else if magnitude >= 7.0 {
        "Major"
    } else if magnitude >= 6.0 {
        "Strong"
    } else if magnitude >= 5.0 {
        "Moderate"
    } else if magnitude >= 4.0 {
        "Light"
    } else {
        "Minor"
    }
}

fn historical_analogue(magnitude: f64) -> &'static str {
    HISTORICAL_ANALOGUES
        .iter()
        .min_by(|a, b| {
            let da = (a.0 - magnitude).abs();
            let db = (b.0 - magnitude).abs();
            da.total_cmp(&db)
        })
        .map(|(_, name)| *name)
        .unwrap_or("typical moderate earthquake")
}

fn damage_for_mmi(mmi: f64) -> &'static str {
    if mmi >= 11.0 {
        "Near-total destruction of built structures"
    } else if mmi >= 9.0 {
        "Heavy structural damage; many buildings collapse"
    } else if mmi >= 7.0 {
        "Moderate structural damage; unreinforced masonry fails"
    } else if mmi >= 5.0 {
        "Light damage; objects thrown, plaster cracks"
    } else if mmi >= 3.0 {
        "Felt widely; negligible damage"
    } else {
        "Barely perceptible"
    }
}

fn regional_effect(label: &str, distance_km: f64, primary: f64, beta: f64) -> RegionalEffect {
    // No amplification inside the 100 km reference distance
    let attenuation = beta * (distance_km / 100.0).max(1.0).log10();
    let magnitude = primary - attenuation;

    let log_d = distance_km.max(1.0).log10();
    let mmi = (1.5 * magnitude - 1.5 * log_d + 1.78).clamp(1.0, 12.0);
    let pga_g = 10f64.powf(0.5 * magnitude - log_d - 0.5);

    RegionalEffect {
        label: label.to_string(),
        distance_km,
        magnitude,
        mmi,
        pga_g,
        expected_damage: damage_for_mmi(mmi).to_string(),
    }
}

fn aftershock_forecast(primary: f64) -> AftershockForecast {
    let k = 10f64.powf(primary - 4.0);
    let rate = |t: f64| k / (OMORI_C_HOURS + t).powf(OMORI_P);

    // ∫ K/(c+t)^p dt from 0 to 24 h, p = 1.1
    let exponent = 1.0 - OMORI_P;
    let expected_count_24h =
        k * ((OMORI_C_HOURS + 24.0).powf(exponent) - OMORI_C_HOURS.powf(exponent)) / exponent;

    AftershockForecast {
        rates_per_hour: [1.0, 6.0, 12.0, 24.0]
            .iter()
            .map(|&t| (t, rate(t)))
            .collect(),
        expected_count_24h,
        largest_expected_magnitude: primary - LARGEST_AFTERSHOCK_DROP,
    }
}

fn global_impact(primary: f64) -> &'static str {
    if primary >= 9.5 {
        "Global-scale shaking; worldwide infrastructure disruption expected"
    } else if primary >= 8.5 {
        "Continental-scale devastation across the impact region"
    } else if primary >= 7.5 {
        "Severe destruction across a multi-hundred-kilometer region"
    } else if primary >= 6.5 {
        "Major damage near the impact site"
    } else {
        "Limited structural damage confined to the immediate area"
    }
}

fn build_warnings(primary: f64, tsunami: &Option<TsunamiWarning>) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if primary >= 9.5 {
        warnings.push(Warning::new(
            Severity::Extreme,
            format!("Seismic event of magnitude {primary:.1} exceeds any recorded earthquake"),
        ));
    } else if primary >= 8.5 {
        warnings.push(Warning::new(
            Severity::Critical,
            format!("Magnitude {primary:.1} shaking will devastate the surrounding region"),
        ));
    } else if primary >= 7.5 {
        warnings.push(Warning::new(
            Severity::High,
            format!("Magnitude {primary:.1} shaking expected across hundreds of kilometers"),
        ));
    } else if primary >= 6.5 {
        warnings.push(Warning::new(
            Severity::Watch,
            format!("Damaging shaking (magnitude {primary:.1}) near the impact site"),
        ));
    }

    if tsunami.is_some() {
        warnings.push(Warning::new(
            Severity::Extreme,
            "Ocean impact tsunami: coastal evacuation required across the basin",
        ));
    }

    if primary >= 6.5 {
        warnings.push(Warning::new(
            Severity::Advisory,
            "Elevated aftershock rates expected for at least 24 hours",
        ));
    }

    sort_by_severity(&mut warnings);
    warnings
}

/// Assess the seismic consequences of an impact.
///
/// `ocean` selects the coupling efficiency and attenuation profile;
/// callers resolve it from the geographic risk classifier (land when
/// that stage is unavailable). A non-finite or non-positive energy input
/// degrades only this stage.
pub fn assess(energy: &EnergyProfile, ocean: bool) -> StageOutcome<SeismicProfile> {
    if !(energy.kinetic_energy_j.is_finite() && energy.kinetic_energy_j > 0.0) {
        warn!(
            "seismic stage degraded: kinetic energy {} unusable",
            energy.kinetic_energy_j
        );
        return StageOutcome::failed(
            STAGE,
            format!(
                "kinetic energy must be positive and finite, got {}",
                energy.kinetic_energy_j
            ),
        );
    }

    let efficiency = if ocean {
        SEISMIC_EFFICIENCY_OCEAN
    } else {
        SEISMIC_EFFICIENCY_LAND
    };
    let beta = if ocean {
        ATTENUATION_BETA_OCEAN
    } else {
        ATTENUATION_BETA_LAND
    };

    let seismic_energy_j = energy.kinetic_energy_j * efficiency;
    let (richter, moment, primary) = magnitudes(seismic_energy_j);

    let regional_effects = REGIONAL_DISTANCES
        .iter()
        .map(|&(label, d)| regional_effect(label, d, primary, beta))
        .collect();

    let tsunami = if ocean && primary >= 7.0 {
        Some(TsunamiWarning {
            min_wave_height_m: 10f64.powf(primary - 6.0),
            max_wave_height_m: 10f64.powf(primary - 5.0),
            message: format!(
                "Ocean impact at magnitude {primary:.1}: tsunami wave heights of {:.0}-{:.0} m possible near the impact",
                10f64.powf(primary - 6.0),
                10f64.powf(primary - 5.0)
            ),
        })
    } else {
        None
    };

    let warnings = build_warnings(primary, &tsunami);

    StageOutcome::computed(SeismicProfile {
        seismic_energy_j,
        seismic_efficiency: efficiency,
        richter_magnitude: richter,
        moment_magnitude: moment,
        primary_magnitude: primary,
        magnitude_class: magnitude_class(primary).to_string(),
        historical_analogue: historical_analogue(primary).to_string(),
        regional_effects,
        aftershocks: aftershock_forecast(primary),
        tsunami,
        global_impact: global_impact(primary).to_string(),
        warnings,
    })
}
