//! Seed scenarios.
//!
//! Each scenario drives a real `InteractionEngine` (or the stats reducer)
//! over a fixed input and compares what comes back with the clinically
//! expected outcome. Scenarios never panic: a mismatch is reported as a
//! failed [`ScenarioOutcome`] whose `detail` lists every check that failed.

use serde::Serialize;
use tracing::{info, warn};

use rxguard_core::traits::InteractionKnowledge;

pub mod analysis;
pub mod statistics;

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub passed: bool,
    /// Summary on success; the failed checks, joined by `"; "`, otherwise.
    pub detail: String,
}

/// Accumulates check failures for a single scenario.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    failures: Vec<String>,
}

impl Checks {
    pub(crate) fn expect(&mut self, ok: bool, failure: impl FnOnce() -> String) {
        if !ok {
            self.failures.push(failure());
        }
    }

    pub(crate) fn finish(self, name: &str, summary: String) -> ScenarioOutcome {
        let passed = self.failures.is_empty();
        let detail = if passed {
            summary
        } else {
            self.failures.join("; ")
        };

        if passed {
            info!(scenario = name, "scenario passed");
        } else {
            warn!(scenario = name, detail = %detail, "scenario failed");
        }

        ScenarioOutcome {
            name: name.to_string(),
            passed,
            detail,
        }
    }
}

/// Run every seed scenario, in order, against `knowledge`.
pub fn run_all(knowledge: &dyn InteractionKnowledge) -> Vec<ScenarioOutcome> {
    vec![
        analysis::maoi_plus_ssri(knowledge),
        analysis::lithium_plus_ace_inhibitor(knowledge),
        analysis::warfarin_plus_aspirin(knowledge),
        analysis::serotonergic_triple(knowledge),
        analysis::no_interaction(knowledge),
        statistics::empty_statistics(),
    ]
}
