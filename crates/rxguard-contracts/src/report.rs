//! Analysis results and the serializable interaction report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{RxGuardError, RxGuardResult},
    interaction::{InteractionStatistics, MatchedInteraction, RiskLevel},
    rule::Severity,
};

/// Urgency band of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    /// Informational only; used when nothing was found.
    Info,
}

/// One prioritized, human-readable recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    /// Headline with the interaction count, e.g. `"2 contraindicated interactions"`.
    pub title: String,
    /// Suggested action for the prescriber.
    pub action: String,
    /// `"drugA + drugB"` labels of the interactions in this band.
    pub pairs: Vec<String>,
}

/// Output of one `analyze()` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub medications: Vec<String>,
    /// Sorted by descending severity.
    pub interactions: Vec<MatchedInteraction>,
    pub stats: InteractionStatistics,
    pub recommendations: Vec<Recommendation>,
    pub risk_level: RiskLevel,
}

impl AnalysisResult {
    /// The deterministic answer for lists with fewer than two medications.
    pub fn empty(medications: Vec<String>) -> Self {
        Self {
            medications,
            interactions: Vec::new(),
            stats: InteractionStatistics::default(),
            recommendations: Vec::new(),
            risk_level: RiskLevel::None,
        }
    }
}

/// A replacement suggestion together with the interaction that motivated it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSuggestion {
    pub to: String,
    pub reason: String,
    pub severity: Severity,
    /// `"drugA + drugB"` label of the originating interaction.
    pub pair: String,
}

/// All suggestions that replace the same drug or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeGroup {
    pub from: String,
    pub suggestions: Vec<AlternativeSuggestion>,
}

/// Per-medication view over the last analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationInfo {
    pub name: String,
    pub classes: Vec<String>,
    pub interaction_count: usize,
    pub interactions: Vec<MatchedInteraction>,
    /// `0` when the medication is involved in no interaction.
    pub max_severity: u8,
}

/// Fixed-formula cost-benefit estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub prevention_rate: f64,
    pub implementation_cost: f64,
    pub total_adverse_events: u64,
    pub events_prevented: u64,
    pub cost_savings: f64,
    pub net_savings: f64,
    /// Net savings as a whole percentage of the implementation cost.
    pub roi: f64,
}

/// Everything known about a medication list, assembled for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
    pub alternatives: Vec<AlternativeGroup>,
    pub roi: RoiEstimate,
    pub medication_info: Vec<MedicationInfo>,
}

impl InteractionReport {
    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> RxGuardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RxGuardError::Serialization {
            reason: format!("failed to render report {}: {}", self.report_id, e),
        })
    }
}
