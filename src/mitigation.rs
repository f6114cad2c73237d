//! Mitigation strategy selection.
//!
//! A policy engine over days-until-impact: five fixed time buckets each
//! select a disjoint catalogue of deflection and disruption strategies,
//! an approach tag, and a success-probability label. Civil-defense
//! strategies are always included, with an immediate-actions entry
//! injected inside the final week. The selector depends only on size,
//! mass, velocity, and time, never on the blast or seismic stages.

use serde::{Deserialize, Serialize};

use crate::impactor::ImpactorSpec;

/// Time-to-impact bucket boundaries (days).
const DECADES_MIN_DAYS: f64 = 10950.0;
const YEARS_MIN_DAYS: f64 = 3650.0;
const MONTHS_MIN_DAYS: f64 = 365.0;
const WEEKS_MIN_DAYS: f64 = 30.0;

/// Inside this window the civil-defense list gains an immediate-actions entry.
const IMMEDIATE_ACTIONS_MAX_DAYS: f64 = 7.0;

/// Diameter above which an impact is treated as extinction-class (m).
const EXTINCTION_DIAMETER_M: f64 = 1000.0;

/// Time-to-impact bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeBucket {
    Decades,
    Years,
    Months,
    Weeks,
    Days,
}

impl TimeBucket {
    /// Bucket boundaries are inclusive lower bounds: exactly 10950 days
    /// is Decades, 10949 is Years, and so on down.
    pub fn from_days(days_until_impact: f64) -> Self {
        if days_until_impact >= DECADES_MIN_DAYS {
            TimeBucket::Decades
        } else if days_until_impact >= YEARS_MIN_DAYS {
            TimeBucket::Years
        } else if days_until_impact >= MONTHS_MIN_DAYS {
            TimeBucket::Months
        } else if days_until_impact >= WEEKS_MIN_DAYS {
            TimeBucket::Weeks
        } else {
            TimeBucket::Days
        }
    }
}

/// Recommended approach category for a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApproachTag {
    LongTermDeflection,
    RapidDeflection,
    EmergencyDeflection,
    DisruptionLastResort,
    CivilDefenseOnly,
}

/// One candidate strategy with its trade-offs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    pub description: String,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
    pub technical_requirements: Vec<String>,
    pub effectiveness: String,
    pub cost: String,
    /// NASA-style technology readiness level, 1-9.
    pub technology_readiness: u8,
}

/// Static strategy definition; converted to an owned [`Strategy`] when a
/// plan is assembled.
struct StrategyDef {
    name: &'static str,
    description: &'static str,
    advantages: &'static [&'static str],
    disadvantages: &'static [&'static str],
    technical_requirements: &'static [&'static str],
    effectiveness: &'static str,
    cost: &'static str,
    technology_readiness: u8,
}

impl StrategyDef {
    fn to_strategy(&self) -> Strategy {
        Strategy {
            name: self.name.to_string(),
            description: self.description.to_string(),
            advantages: self.advantages.iter().map(|s| s.to_string()).collect(),
            disadvantages: self.disadvantages.iter().map(|s| s.to_string()).collect(),
            technical_requirements: self
                .technical_requirements
                .iter()
                .map(|s| s.to_string())
                .collect(),
            effectiveness: self.effectiveness.to_string(),
            cost: self.cost.to_string(),
            technology_readiness: self.technology_readiness,
        }
    }
}

static GRAVITY_TRACTOR: StrategyDef = StrategyDef {
    name: "Gravity tractor",
    description: "Spacecraft hovers near the asteroid, towing it gravitationally over years",
    advantages: &[
        "Works on any composition, including rubble piles",
        "Precisely controllable deflection",
    ],
    disadvantages: &[
        "Extremely slow; needs decades of lead time",
        "Requires long-duration station keeping",
    ],
    technical_requirements: &[
        "Multi-year deep-space power and propulsion",
        "Precision proximity navigation",
    ],
    effectiveness: "High with decades of warning",
    cost: "Multi-billion USD",
    technology_readiness: 5,
};

static ION_BEAM_SHEPHERD: StrategyDef = StrategyDef {
    name: "Ion beam shepherd",
    description: "Ion engine plume impinges on the surface, pushing the asteroid continuously",
    advantages: &[
        "No physical contact required",
        "Thrust measurable and adjustable in flight",
    ],
    disadvantages: &[
        "Very low thrust; years of operation needed",
        "Twin-engine balancing adds complexity",
    ],
    technical_requirements: &[
        "High-power electric propulsion",
        "Sustained formation flight at close range",
    ],
    effectiveness: "Moderate to high over years",
    cost: "Multi-billion USD",
    technology_readiness: 4,
};

static ALBEDO_MODIFICATION: StrategyDef = StrategyDef {
    name: "Albedo modification",
    description: "Paint or powder coating shifts the Yarkovsky thermal recoil over decades",
    advantages: &[
        "Very low mass delivered to the target",
        "No impulsive stress on the body",
    ],
    disadvantages: &[
        "Slowest known technique",
        "Effect depends on poorly-known thermal properties",
    ],
    technical_requirements: &[
        "Surface coating dispersal system",
        "Long-term orbit determination campaign",
    ],
    effectiveness: "Low; only useful with multi-decade warning",
    cost: "Hundreds of millions USD",
    technology_readiness: 3,
};

static MASS_DRIVER: StrategyDef = StrategyDef {
    name: "Mass driver",
    description: "Lander mines surface material and ejects it as reaction mass",
    advantages: &[
        "Uses the asteroid itself as propellant",
        "Large total impulse achievable",
    ],
    disadvantages: &[
        "Complex surface operations on low gravity",
        "Unproven anchoring and excavation",
    ],
    technical_requirements: &[
        "Autonomous surface mining and anchoring",
        "Sustained power on the surface",
    ],
    effectiveness: "High in principle, unproven",
    cost: "Tens of billions USD",
    technology_readiness: 2,
};

static KINETIC_IMPACTOR: StrategyDef = StrategyDef {
    name: "Kinetic impactor",
    description: "High-velocity spacecraft collision transfers momentum, DART-style",
    advantages: &[
        "Flight-proven by the DART mission",
        "Simple, no exotic technology",
    ],
    disadvantages: &[
        "Single impulsive event, hard to fine-tune",
        "Momentum transfer uncertain for rubble piles",
    ],
    technical_requirements: &[
        "Precision terminal guidance at >6 km/s closing speed",
        "Launch vehicle on interplanetary trajectory",
    ],
    effectiveness: "High for sub-kilometer bodies with years of warning",
    cost: "Hundreds of millions USD",
    technology_readiness: 9,
};

static KINETIC_CAMPAIGN: StrategyDef = StrategyDef {
    name: "Multiple kinetic impactors",
    description: "Staggered impactor salvo with observation between strikes",
    advantages: &[
        "Deflection accumulates across strikes",
        "Later strikes correct earlier dispersion",
    ],
    disadvantages: &[
        "Multiple launches on a tight schedule",
        "Risk of unintended fragmentation grows per strike",
    ],
    technical_requirements: &[
        "Heavy launch cadence",
        "Rapid post-impact orbit reassessment",
    ],
    effectiveness: "High for bodies up to about a kilometer",
    cost: "Billions USD",
    technology_readiness: 7,
};

static NUCLEAR_STANDOFF: StrategyDef = StrategyDef {
    name: "Nuclear standoff deflection",
    description: "Detonation near the surface ablates material, producing thrust without fragmenting",
    advantages: &[
        "Largest single impulse available",
        "Effective against kilometer-class bodies",
    ],
    disadvantages: &[
        "Treaty and policy constraints on nuclear devices in space",
        "Fragmentation risk if yield or standoff is misjudged",
    ],
    technical_requirements: &[
        "Nuclear device certified for spaceflight",
        "Precise standoff detonation control",
    ],
    effectiveness: "High, with fragmentation risk",
    cost: "Billions USD plus policy cost",
    technology_readiness: 3,
};

static NUCLEAR_DISRUPTION: StrategyDef = StrategyDef {
    name: "Nuclear disruption",
    description: "Subsurface detonation fragments the body so most mass misses or burns up",
    advantages: &[
        "Only option inside weeks of warning",
        "Can disperse a small body completely",
    ],
    disadvantages: &[
        "Fragments may still strike across a wider footprint",
        "Outcome for large bodies highly uncertain",
    ],
    technical_requirements: &[
        "Penetrating or surface-coupled nuclear device",
        "Late-trajectory interception capability",
    ],
    effectiveness: "Last resort; fragment risk",
    cost: "Billions USD plus policy cost",
    technology_readiness: 2,
};

static HYPERVELOCITY_FRAGMENTATION: StrategyDef = StrategyDef {
    name: "Hypervelocity fragmentation",
    description: "Massive conventional impactor shatters a small body shortly before arrival",
    advantages: &[
        "No nuclear policy constraints",
        "Usable on very short timelines",
    ],
    disadvantages: &[
        "Only plausible for small bodies",
        "Creates an uncontrolled debris field",
    ],
    technical_requirements: &[
        "Very high closing velocity intercept",
        "Heavy impactor mass",
    ],
    effectiveness: "Low to moderate, small bodies only",
    cost: "Billions USD",
    technology_readiness: 3,
};

static CIVIL_DEFENSE: &[StrategyDef] = &[
    StrategyDef {
        name: "Mass evacuation",
        description: "Phased evacuation of the predicted impact corridor",
        advantages: &["Directly reduces casualties", "Uses existing emergency frameworks"],
        disadvantages: &["Corridor uncertainty forces over-evacuation", "Enormous logistical burden"],
        technical_requirements: &["Refined impact-corridor prediction", "Transport and shelter capacity"],
        effectiveness: "High where the corridor is known",
        cost: "Tens of billions USD",
        technology_readiness: 9,
    },
    StrategyDef {
        name: "Shelter hardening",
        description: "Reinforce shelters against blast, thermal, and seismic effects",
        advantages: &["Protects populations that cannot move", "Useful against secondary effects"],
        disadvantages: &["Ineffective near ground zero"],
        technical_requirements: &["Engineering assessment of shelter stock"],
        effectiveness: "Moderate outside the severe-damage radius",
        cost: "Billions USD",
        technology_readiness: 9,
    },
    StrategyDef {
        name: "Stockpile and logistics",
        description: "Pre-position food, water, medical supplies, and fuel outside the impact region",
        advantages: &["Mitigates post-impact infrastructure collapse"],
        disadvantages: &["Does not reduce direct casualties"],
        technical_requirements: &["Continuity-of-supply planning"],
        effectiveness: "Supporting measure",
        cost: "Billions USD",
        technology_readiness: 9,
    },
    StrategyDef {
        name: "Public warning and communication",
        description: "Sustained official guidance through broadcast and cell networks",
        advantages: &["Cheap and immediate", "Reduces panic-driven losses"],
        disadvantages: &["Effectiveness depends on public trust"],
        technical_requirements: &["Emergency broadcast integration"],
        effectiveness: "Supporting measure",
        cost: "Millions USD",
        technology_readiness: 9,
    },
];

static IMMEDIATE_ACTIONS: StrategyDef = StrategyDef {
    name: "IMMEDIATE ACTIONS",
    description: "Final-week protective actions for the predicted impact region",
    advantages: &["Actionable by individuals within hours"],
    disadvantages: &["No effect on the impactor itself"],
    technical_requirements: &["Continuous public alert channel"],
    effectiveness: "Last-line casualty reduction",
    cost: "Minimal",
    technology_readiness: 9,
};

/// One phase of the implementation timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub name: String,
    pub duration: String,
}

/// Full mitigation sub-report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationPlan {
    pub time_bucket: TimeBucket,
    pub days_until_impact: f64,
    pub recommended_approach: ApproachTag,
    pub success_probability: String,
    pub deflection_strategies: Vec<Strategy>,
    pub disruption_strategies: Vec<Strategy>,
    pub civil_defense_strategies: Vec<Strategy>,
    pub timeline: Vec<TimelinePhase>,
    pub resource_requirements: Vec<String>,
    pub international_coordination: Vec<String>,
    pub key_recommendations: Vec<String>,
    /// Set when the diameter exceeds 1 km.
    pub extinction_class: bool,
}

fn bucket_selection(bucket: TimeBucket) -> (ApproachTag, &'static str, Vec<Strategy>, Vec<Strategy>) {
    match bucket {
        TimeBucket::Decades => (
            ApproachTag::LongTermDeflection,
            "Very high (>95%)",
            vec![
                GRAVITY_TRACTOR.to_strategy(),
                ION_BEAM_SHEPHERD.to_strategy(),
                ALBEDO_MODIFICATION.to_strategy(),
                MASS_DRIVER.to_strategy(),
            ],
            Vec::new(),
        ),
        TimeBucket::Years => (
            ApproachTag::RapidDeflection,
            "High (80-95%)",
            vec![
                KINETIC_IMPACTOR.to_strategy(),
                KINETIC_CAMPAIGN.to_strategy(),
                ION_BEAM_SHEPHERD.to_strategy(),
            ],
            Vec::new(),
        ),
        TimeBucket::Months => (
            ApproachTag::EmergencyDeflection,
            "Moderate (40-70%)",
            vec![KINETIC_IMPACTOR.to_strategy(), NUCLEAR_STANDOFF.to_strategy()],
            vec![NUCLEAR_DISRUPTION.to_strategy()],
        ),
        TimeBucket::Weeks => (
            ApproachTag::DisruptionLastResort,
            "Low (10-40%)",
            Vec::new(),
            vec![
                NUCLEAR_DISRUPTION.to_strategy(),
                HYPERVELOCITY_FRAGMENTATION.to_strategy(),
            ],
        ),
        TimeBucket::Days => (
            ApproachTag::CivilDefenseOnly,
            "Deflection no longer feasible",
            Vec::new(),
            Vec::new(),
        ),
    }
}

fn timeline_for(approach: ApproachTag) -> Vec<TimelinePhase> {
    let phase = |name: &str, duration: &str| TimelinePhase {
        name: name.to_string(),
        duration: duration.to_string(),
    };
    match approach {
        ApproachTag::LongTermDeflection => vec![
            phase("Characterization campaign", "2-5 years"),
            phase("Mission design and build", "5-8 years"),
            phase("Transit and rendezvous", "2-4 years"),
            phase("Sustained deflection operations", "5-15 years"),
            phase("Verification of safe trajectory", "1-2 years"),
        ],
        ApproachTag::RapidDeflection => vec![
            phase("Target characterization", "6-12 months"),
            phase("Impactor build and launch", "18-36 months"),
            phase("Transit and intercept", "6-18 months"),
            phase("Post-impact orbit verification", "6-12 months"),
        ],
        ApproachTag::EmergencyDeflection => vec![
            phase("Crash mission design", "1-3 months"),
            phase("Device integration and launch", "3-6 months"),
            phase("Intercept and assessment", "1-3 months"),
        ],
        ApproachTag::DisruptionLastResort => vec![
            phase("Intercept vehicle preparation", "1-2 weeks"),
            phase("Launch and terminal intercept", "1-2 weeks"),
            phase("Fragment-track reassessment", "continuous"),
        ],
        ApproachTag::CivilDefenseOnly => vec![
            phase("Impact-corridor refinement", "continuous"),
            phase("Evacuation of the corridor", "days"),
            phase("Shelter and supply operations", "through impact + recovery"),
        ],
    }
}

fn resources_for(approach: ApproachTag) -> Vec<String> {
    let items: &[&str] = match approach {
        ApproachTag::LongTermDeflection => &[
            "Sustained multi-decade mission funding",
            "Deep-space network tracking allocation",
            "Heavy-lift launch capability",
        ],
        ApproachTag::RapidDeflection => &[
            "Priority launch vehicles within 2 years",
            "Interplanetary navigation teams",
            "Ground observatories for orbit refinement",
        ],
        ApproachTag::EmergencyDeflection => &[
            "Emergency launch authorization",
            "Nuclear device custody transfer (if selected)",
            "24/7 tracking of the target",
        ],
        ApproachTag::DisruptionLastResort => &[
            "Ready launch vehicle and intercept stage",
            "Nuclear device release authority",
            "Global debris-tracking network",
        ],
        ApproachTag::CivilDefenseOnly => &[
            "National emergency-management mobilization",
            "Mass transport and shelter capacity",
            "Medical surge capacity outside the corridor",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

fn coordination_for(approach: ApproachTag) -> Vec<String> {
    let items: &[&str] = match approach {
        ApproachTag::LongTermDeflection | ApproachTag::RapidDeflection => &[
            "IAWN observation campaign coordination",
            "SMPAG mission-option agreement",
        ],
        ApproachTag::EmergencyDeflection | ApproachTag::DisruptionLastResort => &[
            "UN Security Council notification for nuclear options",
            "SMPAG emergency session",
            "Bilateral launch-range agreements",
        ],
        ApproachTag::CivilDefenseOnly => &[
            "Cross-border evacuation agreements",
            "International disaster-relief staging",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

fn key_recommendations(days_until_impact: f64, extinction_class: bool) -> Vec<String> {
    // Coarser ladder than the bucket selection, by design
    let mut recommendations: Vec<String> = if days_until_impact > 3650.0 {
        vec![
            "Begin a slow-push deflection campaign now; decades of margin make success near-certain".to_string(),
            "Maintain a continuous orbit-determination campaign".to_string(),
        ]
    } else if days_until_impact > 365.0 {
        vec![
            "Commit to a kinetic-impactor mission immediately".to_string(),
            "Prepare a follow-up impactor as contingency".to_string(),
        ]
    } else if days_until_impact > 30.0 {
        vec![
            "Pursue emergency deflection and disruption options in parallel".to_string(),
            "Begin precautionary evacuation planning for the corridor".to_string(),
        ]
    } else {
        vec![
            "Focus all resources on civil defense; deflection is no longer feasible".to_string(),
            "Execute corridor evacuation without delay".to_string(),
        ]
    };

    if extinction_class {
        recommendations.push(
            "Object exceeds 1 km: treat as a potential extinction-level event and plan for global consequences"
                .to_string(),
        );
    }
    recommendations
}

/// Select a mitigation plan from size, mass, velocity, and time-to-impact.
pub fn plan(spec: &ImpactorSpec, days_until_impact: f64) -> MitigationPlan {
    let bucket = TimeBucket::from_days(days_until_impact);
    let (approach, success, deflection, disruption) = bucket_selection(bucket);

    let mut civil_defense: Vec<Strategy> =
        CIVIL_DEFENSE.iter().map(StrategyDef::to_strategy).collect();
    if days_until_impact < IMMEDIATE_ACTIONS_MAX_DAYS {
        civil_defense.push(IMMEDIATE_ACTIONS.to_strategy());
    }

    let extinction_class = spec.diameter_m > EXTINCTION_DIAMETER_M;

    MitigationPlan {
        time_bucket: bucket,
        days_until_impact,
        recommended_approach: approach,
        success_probability: success.to_string(),
        deflection_strategies: deflection,
        disruption_strategies: disruption,
        civil_defense_strategies: civil_defense,
        timeline: timeline_for(approach),
        resource_requirements: resources_for(approach),
        international_coordination: coordination_for(approach),
        key_recommendations: key_recommendations(days_until_impact, extinction_class),
        extinction_class,
    }
}
