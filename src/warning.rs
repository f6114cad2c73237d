//! Severity-graded warnings emitted by the seismic and blast stages and
//! rolled up by the report assembler.

use serde::{Deserialize, Serialize};

/// Ordinal warning severity. Ordering is derived, so `Extreme` compares
/// greater than `Critical` and warning lists can be sorted by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Advisory,
    Watch,
    High,
    Critical,
    Extreme,
}

/// A single warning produced by a pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// True for the severities the summary rolls up.
    pub fn is_critical(&self) -> bool {
        self.severity >= Severity::Critical
    }
}

/// Sort warnings in place, most severe first. Stable, so warnings of equal
/// severity keep the order their stage emitted them in.
pub fn sort_by_severity(warnings: &mut [Warning]) {
    warnings.sort_by(|a, b| b.severity.cmp(&a.severity));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Extreme > Severity::Critical);
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Watch);
        assert!(Severity::Watch > Severity::Advisory);
    }

    #[test]
    fn test_sort_most_severe_first() {
        let mut warnings = vec![
            Warning::new(Severity::Watch, "a"),
            Warning::new(Severity::Extreme, "b"),
            Warning::new(Severity::High, "c"),
        ];
        sort_by_severity(&mut warnings);
        assert_eq!(warnings[0].message, "b");
        assert_eq!(warnings[2].message, "a");
    }

    #[test]
    fn test_critical_rollup_predicate() {
        assert!(Warning::new(Severity::Extreme, "x").is_critical());
        assert!(Warning::new(Severity::Critical, "x").is_critical());
        assert!(!Warning::new(Severity::High, "x").is_critical());
    }
}
