//! Report assembly and pipeline entry points.
//!
//! Runs the full stage sequence for one impactor and collects every
//! sub-report into an [`EffectsReport`]. Input validation failures abort
//! the pipeline with an error; failures inside the seismic or blast
//! stages degrade only that section, and the report still assembles.
//! A feed of objects aggregates into a [`FeedReport`].

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::blast::{self, BlastProfile, ImpactSurface};
use crate::crater::{CraterEstimate, ImpactProbability};
use crate::energy::EnergyProfile;
use crate::error::{ImpactError, StageOutcome};
use crate::geography::{
    DEFAULT_POSITION_UNCERTAINTY_KM, DEFAULT_SAMPLE_COUNT, GeographicRisk, PointEstimate,
    ProbabilityMap, classify, estimate_impact_point,
};
use crate::impactor::ImpactorSpec;
use crate::mitigation::{self, MitigationPlan};
use crate::seismic::{self, SeismicProfile};
use crate::warning::{Warning, sort_by_severity};

/// Overall threat classification from the energy release alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    Minimal,
    Moderate,
    High,
    Severe,
    Catastrophic,
    ExtinctionLevel,
}

impl ThreatLevel {
    /// Energy ladder with inclusive lower bounds (megatons TNT).
    pub fn from_megatons(megatons: f64) -> Self {
        if megatons >= 1.0e6 {
            ThreatLevel::ExtinctionLevel
        } else if megatons >= 1.0e4 {
            ThreatLevel::Catastrophic
        } else if megatons >= 100.0 {
            ThreatLevel::Severe
        } else if megatons >= 1.0 {
            ThreatLevel::High
        } else if megatons >= 0.01 {
            ThreatLevel::Moderate
        } else {
            ThreatLevel::Minimal
        }
    }

    fn impact_scale(self) -> &'static str {
        match self {
            ThreatLevel::ExtinctionLevel => "Global, extinction-level consequences",
            ThreatLevel::Catastrophic => "Continental to global devastation",
            ThreatLevel::Severe => "Regional devastation across hundreds of kilometers",
            ThreatLevel::High => "City-scale destruction",
            ThreatLevel::Moderate => "Local damage near the impact site",
            ThreatLevel::Minimal => "Negligible surface damage; likely airburst or burnup",
        }
    }
}

/// Executive summary assembled from every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub threat_level: ThreatLevel,
    pub impact_scale: String,
    pub primary_effects: Vec<String>,
    pub secondary_effects: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub urgency: String,
    /// Critical-and-above warnings from all stages, most severe first.
    pub critical_warnings: Vec<Warning>,
}

/// Complete effects report for one impactor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectsReport {
    pub spec: ImpactorSpec,
    pub energy: EnergyProfile,
    pub crater: CraterEstimate,
    pub impact_probability: ImpactProbability,
    pub impact_point: PointEstimate,
    /// Present only when a nominal impact point exists.
    pub probability_map: Option<ProbabilityMap>,
    /// Present only when a nominal impact point exists.
    pub geographic_risk: Option<GeographicRisk>,
    pub seismic: StageOutcome<SeismicProfile>,
    pub blast: StageOutcome<BlastProfile>,
    pub mitigation: MitigationPlan,
    pub summary: Summary,
}

/// Aggregate statistics over one feed of objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSummary {
    pub object_count: usize,
    pub hazardous_count: usize,
    pub total_energy_megatons: f64,
    pub max_crater_diameter_km: f64,
    /// Name (or index label) of the object with the highest impact
    /// probability, if the feed is non-empty.
    pub highest_probability_object: Option<String>,
}

/// Per-object reports plus feed-level aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedReport {
    pub reports: Vec<EffectsReport>,
    pub summary: FeedSummary,
}

/// Run the full pipeline with the wall clock and a thread-local RNG.
pub fn compute_effects(spec: &ImpactorSpec) -> Result<EffectsReport, ImpactError> {
    compute_effects_with(spec, Utc::now(), &mut rand::thread_rng())
}

/// Run the full pipeline with an explicit clock and RNG.
///
/// The injected RNG makes the geographic sampling reproducible; every
/// other stage is deterministic in the spec alone.
pub fn compute_effects_with<R: Rng + ?Sized>(
    spec: &ImpactorSpec,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<EffectsReport, ImpactError> {
    spec.validate()?;

    let energy = EnergyProfile::from_spec(spec)?;
    let crater = CraterEstimate::from_energy(energy.kinetic_energy_j);
    let impact_probability =
        ImpactProbability::estimate(spec.miss_distance_km, spec.diameter_m, spec.hazardous);

    let impact_point = estimate_impact_point(spec, rng);
    let (probability_map, geographic_risk) = match impact_point.point() {
        Some(point) => {
            let map = ProbabilityMap::sample(
                point,
                DEFAULT_SAMPLE_COUNT,
                DEFAULT_POSITION_UNCERTAINTY_KM,
                rng,
            );
            let risk = classify(point.latitude, point.longitude, crater.radius_km());
            (Some(map), Some(risk))
        }
        None => (None, None),
    };

    // Without a classified point the effects stages assume a land impact
    let ocean = geographic_risk.as_ref().is_some_and(|risk| !risk.land);
    let surface = if ocean {
        ImpactSurface::DeepWater
    } else {
        ImpactSurface::Surface
    };

    let seismic = seismic::assess(&energy, ocean);
    let blast = blast::assess(&energy, &crater, surface);

    let days_until_impact = spec.days_until_impact(now);
    let mitigation = mitigation::plan(spec, days_until_impact);

    let summary = build_summary(
        &energy,
        &crater,
        &seismic,
        &blast,
        &mitigation,
        days_until_impact,
    );

    info!(
        "effects report assembled: {} MT, threat {:?}, probability {:.3e}",
        energy.megatons_tnt, summary.threat_level, impact_probability.probability
    );

    Ok(EffectsReport {
        spec: spec.clone(),
        energy,
        crater,
        impact_probability,
        impact_point,
        probability_map,
        geographic_risk,
        seismic,
        blast,
        mitigation,
        summary,
    })
}

/// Run the pipeline over a feed of objects and aggregate.
///
/// A spec that fails validation aborts the whole feed; per-stage failures
/// inside individual reports do not.
pub fn compute_effects_for_feed<R: Rng + ?Sized>(
    specs: &[ImpactorSpec],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<FeedReport, ImpactError> {
    let reports: Vec<EffectsReport> = specs
        .iter()
        .map(|spec| compute_effects_with(spec, now, rng))
        .collect::<Result<_, _>>()?;

    let hazardous_count = reports.iter().filter(|r| r.spec.hazardous).count();
    let total_energy_megatons = reports.iter().map(|r| r.energy.megatons_tnt).sum();
    let max_crater_diameter_km = reports
        .iter()
        .map(|r| r.crater.diameter_km())
        .fold(0.0, f64::max);

    let highest_probability_object = reports
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.impact_probability
                .probability
                .total_cmp(&b.impact_probability.probability)
        })
        .map(|(index, report)| {
            report
                .spec
                .name
                .clone()
                .unwrap_or_else(|| format!("object #{index}"))
        });

    Ok(FeedReport {
        summary: FeedSummary {
            object_count: reports.len(),
            hazardous_count,
            total_energy_megatons,
            max_crater_diameter_km,
            highest_probability_object,
        },
        reports,
    })
}

fn build_summary(
    energy: &EnergyProfile,
    crater: &CraterEstimate,
    seismic: &StageOutcome<SeismicProfile>,
    blast: &StageOutcome<BlastProfile>,
    mitigation: &MitigationPlan,
    days_until_impact: f64,
) -> Summary {
    let threat_level = ThreatLevel::from_megatons(energy.megatons_tnt);

    let mut primary_effects = vec![
        format!(
            "Energy release of {:.1} megatons TNT",
            energy.megatons_tnt
        ),
        format!("Transient crater {:.1} km across", crater.diameter_km()),
    ];
    if let Some(profile) = seismic.as_computed() {
        primary_effects.push(format!(
            "Magnitude {:.1} ground shaking ({})",
            profile.primary_magnitude, profile.magnitude_class
        ));
    }
    if let Some(profile) = blast.as_computed()
        && let Some(severe) = profile.radius_at_psi(5.0)
    {
        primary_effects.push(format!(
            "Severe structural damage out to {severe:.1} km"
        ));
    }

    let mut secondary_effects = Vec::new();
    if let Some(profile) = seismic.as_computed() {
        if profile.tsunami.is_some() {
            secondary_effects.push("Ocean-basin tsunami from the seismic release".to_string());
        }
        secondary_effects.push(format!(
            "Aftershock sequence: ~{:.0} events expected in the first 24 h",
            profile.aftershocks.expected_count_24h
        ));
    }
    if let Some(profile) = blast.as_computed() {
        secondary_effects.push(profile.environment.climate_impact.clone());
    }

    let mut critical_warnings: Vec<Warning> = Vec::new();
    if let Some(profile) = seismic.as_computed() {
        critical_warnings.extend(profile.warnings.iter().filter(|w| w.is_critical()).cloned());
    }
    if let Some(profile) = blast.as_computed() {
        critical_warnings.extend(profile.warnings.iter().filter(|w| w.is_critical()).cloned());
    }
    sort_by_severity(&mut critical_warnings);

    // Time drives the ladder; a sub-HIGH threat caps it below IMMEDIATE
    let dangerous = threat_level >= ThreatLevel::High;
    let urgency = if days_until_impact < 30.0 {
        if dangerous {
            "IMMEDIATE: impact expected within a month".to_string()
        } else {
            "PRECAUTIONARY: impact within a month, limited damage expected".to_string()
        }
    } else if days_until_impact < 365.0 {
        if dangerous {
            "URGENT: less than a year of warning".to_string()
        } else {
            "ELEVATED: less than a year of warning, limited damage expected".to_string()
        }
    } else {
        format!(
            "PLANNING: {:.0} days of warning available",
            days_until_impact
        )
    };

    Summary {
        threat_level,
        impact_scale: threat_level.impact_scale().to_string(),
        primary_effects,
        secondary_effects,
        recommended_actions: mitigation.key_recommendations.clone(),
        urgency,
        critical_warnings,
    }
}
