//! Statistics scenarios that need no rule corpus.

use rxguard_contracts::interaction::InteractionStatistics;
use rxguard_core::calculate_interaction_stats;

use super::{Checks, ScenarioOutcome};

/// Reducing an empty interaction set yields all-zero statistics.
pub fn empty_statistics() -> ScenarioOutcome {
    let stats = calculate_interaction_stats(&[]);

    let mut checks = Checks::default();
    checks.expect(stats == InteractionStatistics::default(), || {
        format!("expected all-zero statistics, got {stats:?}")
    });
    checks.expect(stats.severity_distribution.total() == stats.total_interactions, || {
        "severity buckets do not sum to the interaction count".to_string()
    });
    checks.finish("Empty statistics", "all counters zero".to_string())
}
