//! Reduction of matched interactions into summary statistics.

use rxguard_contracts::interaction::{InteractionStatistics, MatchedInteraction};

/// Summarize `interactions`.
///
/// An empty slice yields the all-zero record. Adverse-event and cost totals
/// saturate rather than wrap.
pub fn calculate_interaction_stats(interactions: &[MatchedInteraction]) -> InteractionStatistics {
    interactions
        .iter()
        .fold(InteractionStatistics::default(), |mut stats, interaction| {
            stats.total_interactions += 1;
            stats.max_severity = stats.max_severity.max(interaction.severity.value());
            stats.total_adverse_events = stats
                .total_adverse_events
                .saturating_add(interaction.adverse_events);
            stats.total_cost = stats.total_cost.saturating_add(interaction.total_cost());
            stats.severity_distribution.record(interaction.severity);
            stats
        })
}
