//! Per-analysis derived types: matched interactions, statistics, risk level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::{Alternative, Severity, SeverityBucket};

/// A rule that fired for one pair of caller-supplied medications.
///
/// `drug1` is the medication that matched the rule's first side and `drug2`
/// the one that matched its second side. Both keep the caller's original
/// spelling, annotation included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedInteraction {
    pub drug1: String,
    pub drug2: String,
    /// Identifier of the rule that produced this match.
    pub rule_id: String,
    pub risk: String,
    pub severity: Severity,
    pub clinical_significance: String,
    pub mechanism: String,
    pub evidence: String,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<Alternative>,
    pub adverse_events: u64,
    pub cost_per_event: u64,
}

impl MatchedInteraction {
    /// `"drugA + drugB"` label used by recommendations and alternatives.
    pub fn pair_label(&self) -> String {
        format!("{} + {}", self.drug1, self.drug2)
    }

    /// True if `medication` is exactly one of the two sides.
    pub fn involves(&self, medication: &str) -> bool {
        self.drug1 == medication || self.drug2 == medication
    }

    /// Adverse events multiplied by the per-event cost.
    pub fn total_cost(&self) -> u64 {
        self.adverse_events.saturating_mul(self.cost_per_event)
    }
}

/// Count of interactions per severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityDistribution {
    pub contraindicated: usize,
    pub major: usize,
    pub moderate: usize,
    pub minor: usize,
}

impl SeverityDistribution {
    pub fn record(&mut self, severity: Severity) {
        match severity.bucket() {
            SeverityBucket::Contraindicated => self.contraindicated += 1,
            SeverityBucket::Major => self.major += 1,
            SeverityBucket::Moderate => self.moderate += 1,
            SeverityBucket::Minor => self.minor += 1,
        }
    }

    pub fn count(&self, bucket: SeverityBucket) -> usize {
        match bucket {
            SeverityBucket::Contraindicated => self.contraindicated,
            SeverityBucket::Major => self.major,
            SeverityBucket::Moderate => self.moderate,
            SeverityBucket::Minor => self.minor,
        }
    }

    pub fn total(&self) -> usize {
        self.contraindicated + self.major + self.moderate + self.minor
    }
}

/// Summary of a set of matched interactions.
///
/// The `Default` value is the all-zero record returned for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionStatistics {
    pub total_interactions: usize,
    /// Highest severity observed, `0` when there are no interactions.
    pub max_severity: u8,
    pub total_adverse_events: u64,
    /// Sum of `adverse_events * cost_per_event` across interactions.
    pub total_cost: u64,
    pub severity_distribution: SeverityDistribution,
}

/// Overall classification of a medication list.
///
/// Derived from the maximum severity alone on every analysis; nothing about
/// a previous classification is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No interactions were found.
    #[default]
    None,
    /// Maximum severity below 5.
    Low,
    /// Maximum severity 5–7.
    Moderate,
    /// Maximum severity 8–9.
    High,
    /// Maximum severity 10 or more.
    Critical,
}

impl RiskLevel {
    /// Classify a statistics record. No interactions always yields `None`.
    pub fn from_stats(stats: &InteractionStatistics) -> Self {
        if stats.total_interactions == 0 {
            return RiskLevel::None;
        }
        Self::from_max_severity(stats.max_severity)
    }

    /// Classify by maximum severity, assuming at least one interaction.
    pub fn from_max_severity(max_severity: u8) -> Self {
        match max_severity {
            10.. => RiskLevel::Critical,
            8..=9 => RiskLevel::High,
            5..=7 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
