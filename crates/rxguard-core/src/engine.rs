//! The interaction engine facade.
//!
//! `InteractionEngine` holds a medication list for one caller, runs the
//! matcher and statistics over it, and derives recommendations, risk level,
//! alternatives, per-medication views, ROI and the full report.
//!
//! The last analysis is cached. Every mutation of the medication list clears
//! the cache, and the read-side queries (`medication_info`, `alternatives`,
//! `calculate_roi`) see only what the most recent `analyze()` produced.
//!
//! An engine is not meant to be shared between concurrent callers; create
//! one per request. The knowledge it borrows is immutable and can be shared
//! freely.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use rxguard_contracts::{
    interaction::{InteractionStatistics, MatchedInteraction, RiskLevel},
    report::{
        AlternativeGroup, AlternativeSuggestion, AnalysisResult, InteractionReport,
        MedicationInfo, RoiEstimate,
    },
};

use crate::{
    config::{EngineConfig, RoiConfig},
    matcher::find_interactions,
    recommend::generate_recommendations,
    roi::estimate_roi,
    stats::calculate_interaction_stats,
    traits::InteractionKnowledge,
};

/// Interactions and statistics from the most recent `analyze()`.
#[derive(Debug, Clone, Default)]
struct CachedAnalysis {
    interactions: Vec<MatchedInteraction>,
    stats: InteractionStatistics,
}

/// Stateful session over one medication list.
///
/// ```rust,ignore
/// use rxguard_core::InteractionEngine;
/// use rxguard_rules::RuleCorpus;
///
/// let mut engine = InteractionEngine::new(RuleCorpus::builtin());
/// let result = engine.set_medications(["Warfarin", "Aspirin"]).analyze();
/// assert_eq!(result.risk_level, RiskLevel::High);
/// ```
pub struct InteractionEngine<'k> {
    knowledge: &'k dyn InteractionKnowledge,
    config: EngineConfig,
    medications: Vec<String>,
    cache: Option<CachedAnalysis>,
}

impl<'k> InteractionEngine<'k> {
    /// Create an engine with the default configuration.
    pub fn new(knowledge: &'k dyn InteractionKnowledge) -> Self {
        Self::with_config(knowledge, EngineConfig::default())
    }

    pub fn with_config(knowledge: &'k dyn InteractionKnowledge, config: EngineConfig) -> Self {
        Self {
            knowledge,
            config,
            medications: Vec::new(),
            cache: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current medication list, in insertion order.
    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    /// Interactions from the last `analyze()`, or an empty slice if the list
    /// changed since or no analysis has run.
    pub fn last_interactions(&self) -> &[MatchedInteraction] {
        self.cache
            .as_ref()
            .map(|c| c.interactions.as_slice())
            .unwrap_or(&[])
    }

    fn invalidate(&mut self) {
        self.cache = None;
    }

    // ── Medication list ───────────────────────────────────────────────────────

    /// Replace the medication list.
    ///
    /// Entries are trimmed; empty entries and exact duplicates are dropped.
    /// Differently-cased spellings are distinct entries.
    pub fn set_medications<I, S>(&mut self, medications: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.medications.clear();
        for name in medications {
            let name = name.as_ref().trim();
            if !name.is_empty() && !self.medications.iter().any(|m| m == name) {
                self.medications.push(name.to_string());
            }
        }
        self.invalidate();
        self
    }

    /// Append `name` unless an identical entry already exists.
    pub fn add_medication(&mut self, name: impl AsRef<str>) -> &mut Self {
        let name = name.as_ref().trim();
        if !name.is_empty() && !self.medications.iter().any(|m| m == name) {
            self.medications.push(name.to_string());
        }
        self.invalidate();
        self
    }

    /// Remove every entry exactly equal to `name`.
    pub fn remove_medication(&mut self, name: &str) -> &mut Self {
        self.medications.retain(|m| m != name);
        self.invalidate();
        self
    }

    // ── Analysis ──────────────────────────────────────────────────────────────

    /// Analyze the current medication list and cache the result.
    ///
    /// With fewer than two medications there is nothing to compare: the
    /// result is empty with risk level `None`.
    pub fn analyze(&mut self) -> AnalysisResult {
        let medications = self.medications.clone();

        if medications.len() < 2 {
            debug!(
                medications = medications.len(),
                "fewer than two medications; nothing to analyze"
            );
            self.cache = Some(CachedAnalysis::default());
            return AnalysisResult::empty(medications);
        }

        let interactions = find_interactions(&medications, self.knowledge);
        let stats = calculate_interaction_stats(&interactions);
        let recommendations = generate_recommendations(&interactions);
        let risk_level = RiskLevel::from_stats(&stats);

        if stats.severity_distribution.contraindicated > 0 {
            warn!(
                count = stats.severity_distribution.contraindicated,
                "contraindicated interaction detected"
            );
        }
        info!(
            medications = medications.len(),
            interactions = stats.total_interactions,
            max_severity = stats.max_severity,
            risk_level = %risk_level,
            "interaction analysis complete"
        );

        self.cache = Some(CachedAnalysis {
            interactions: interactions.clone(),
            stats,
        });

        AnalysisResult {
            medications,
            interactions,
            stats,
            recommendations,
            risk_level,
        }
    }

    // ── Derived views over the last analysis ─────────────────────────────────

    /// Classes and interactions for one medication.
    ///
    /// Interactions are those from the last `analyze()` that name `name`
    /// exactly on either side.
    pub fn medication_info(&self, name: &str) -> MedicationInfo {
        let interactions: Vec<MatchedInteraction> = self
            .last_interactions()
            .iter()
            .filter(|i| i.involves(name))
            .cloned()
            .collect();
        let max_severity = interactions
            .iter()
            .map(|i| i.severity.value())
            .max()
            .unwrap_or(0);

        MedicationInfo {
            name: name.to_string(),
            classes: self.knowledge.classes_of(name),
            interaction_count: interactions.len(),
            interactions,
            max_severity,
        }
    }

    /// Rule-provided alternatives, grouped by the drug or class they replace.
    ///
    /// Groups appear in first-seen order. Suggestions are not deduplicated;
    /// each keeps the severity and pair of the interaction that produced it.
    pub fn alternatives(&self) -> Vec<AlternativeGroup> {
        let mut groups: Vec<AlternativeGroup> = Vec::new();

        for interaction in self.last_interactions() {
            let pair = interaction.pair_label();
            for alt in &interaction.alternatives {
                let suggestion = AlternativeSuggestion {
                    to: alt.to.clone(),
                    reason: alt.reason.clone(),
                    severity: interaction.severity,
                    pair: pair.clone(),
                };
                match groups.iter_mut().find(|g| g.from == alt.from) {
                    Some(group) => group.suggestions.push(suggestion),
                    None => groups.push(AlternativeGroup {
                        from: alt.from.clone(),
                        suggestions: vec![suggestion],
                    }),
                }
            }
        }

        groups
    }

    /// ROI estimate for the last analysis using the configured assumptions.
    pub fn calculate_roi(&self) -> RoiEstimate {
        self.calculate_roi_with(&self.config.roi)
    }

    /// ROI estimate for the last analysis with explicit assumptions.
    pub fn calculate_roi_with(&self, roi: &RoiConfig) -> RoiEstimate {
        let stats = self
            .cache
            .as_ref()
            .map(|c| c.stats)
            .unwrap_or_default();
        estimate_roi(&stats, roi)
    }

    /// Analyze and assemble everything into one serializable report.
    pub fn generate_report(&mut self) -> InteractionReport {
        let analysis = self.analyze();
        let alternatives = self.alternatives();
        let roi = self.calculate_roi();
        let medication_info = self
            .medications
            .iter()
            .map(|m| self.medication_info(m))
            .collect();

        InteractionReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            analysis,
            alternatives,
            roi,
            medication_info,
        }
    }
}
