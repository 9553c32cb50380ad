//! Interaction rule types.
//!
//! An `InteractionRule` relates two sides, each of which is either a specific
//! drug or a drug class. The four possible combinations are captured by
//! `RulePair` so the matcher handles every shape exhaustively.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Clinical danger of an interaction on a 2–10 scale. Higher is worse.
///
/// Severity is authored per rule and is the only ranking key used for sort
/// order, histogram buckets and risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(pub u8);

impl Severity {
    /// Lowest severity a rule may carry.
    pub const MIN: Severity = Severity(2);
    /// Highest severity a rule may carry (contraindicated).
    pub const MAX: Severity = Severity(10);

    pub fn value(self) -> u8 {
        self.0
    }

    /// Histogram bucket for this severity.
    pub fn bucket(self) -> SeverityBucket {
        match self.0 {
            10.. => SeverityBucket::Contraindicated,
            8..=9 => SeverityBucket::Major,
            5..=7 => SeverityBucket::Moderate,
            _ => SeverityBucket::Minor,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four severity bands used by the statistics histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBucket {
    /// Severity 10 and above.
    Contraindicated,
    /// Severity 8–9.
    Major,
    /// Severity 5–7.
    Moderate,
    /// Severity below 5.
    Minor,
}

impl SeverityBucket {
    /// All buckets, most severe first.
    pub const ALL: [SeverityBucket; 4] = [
        SeverityBucket::Contraindicated,
        SeverityBucket::Major,
        SeverityBucket::Moderate,
        SeverityBucket::Minor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Contraindicated => "contraindicated",
            Self::Major => "major",
            Self::Moderate => "moderate",
            Self::Minor => "minor",
        }
    }
}

/// Which drug or drug class each side of a rule refers to.
///
/// Serialized with a `shape` tag:
/// ```toml
/// pair = { shape = "class-class", class1 = "MAOI", class2 = "SSRI" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum RulePair {
    /// Two specific drugs, e.g. Warfarin + Aspirin.
    DrugDrug { drug1: String, drug2: String },
    /// A specific drug on side one and any member of a class on side two.
    DrugClass { drug: String, class: String },
    /// Any member of a class on side one and a specific drug on side two.
    ClassDrug { class: String, drug: String },
    /// Any member of one class with any member of another.
    ClassClass { class1: String, class2: String },
}

impl RulePair {
    /// Human-readable `"side1 + side2"` label.
    pub fn describe(&self) -> String {
        match self {
            Self::DrugDrug { drug1, drug2 } => format!("{drug1} + {drug2}"),
            Self::DrugClass { drug, class } => format!("{drug} + {class}"),
            Self::ClassDrug { class, drug } => format!("{class} + {drug}"),
            Self::ClassClass { class1, class2 } => format!("{class1} + {class2}"),
        }
    }

    /// Class names this pair refers to, in side order.
    pub fn classes(&self) -> Vec<&str> {
        match self {
            Self::DrugDrug { .. } => Vec::new(),
            Self::DrugClass { class, .. } | Self::ClassDrug { class, .. } => vec![class.as_str()],
            Self::ClassClass { class1, class2 } => vec![class1.as_str(), class2.as_str()],
        }
    }
}

/// A rule-provided suggestion to replace one side of an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    /// The drug or class being replaced.
    pub from: String,
    /// The suggested replacement.
    pub to: String,
    /// Clinical reason for the substitution.
    pub reason: String,
}

/// One authored drug-drug interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRule {
    /// Stable identifier used in logs and integrity errors.
    pub id: String,
    pub pair: RulePair,
    pub severity: Severity,
    /// Short risk label, e.g. `"Serotonin Syndrome"`.
    pub risk: String,
    pub mechanism: String,
    pub clinical_significance: String,
    /// Citation or evidence summary.
    pub evidence: String,
    /// Documented adverse events attributed to this combination.
    pub adverse_events: u64,
    /// Average cost of one adverse event, in whole currency units.
    pub cost_per_event: u64,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<Alternative>,
}
