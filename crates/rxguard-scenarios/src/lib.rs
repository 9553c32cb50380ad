//! # rxguard-scenarios
//!
//! Reference runtime for RxGuard: wires the built-in rule corpus into an
//! `InteractionEngine` and ships a set of runnable seed scenarios with
//! known clinical outcomes.
//!
//! 1. **MAOI + SSRI**: serotonin syndrome, critical.
//! 2. **Lithium + ACE inhibitor**: lithium toxicity, high.
//! 3. **Warfarin + Aspirin**: major bleeding, high.
//! 4. **MAOI + SSRI + Tramadol**: every pair interacts, critical.
//! 5. **Metformin + Atorvastatin**: no interactions, ROI of -100.
//! 6. **Empty statistics**: reducing nothing yields all zeros.
//!
//! All medication lists are fictional examples. No external calls are made.

use rxguard_core::{EngineConfig, InteractionEngine};
use rxguard_rules::RuleCorpus;

pub mod scenarios;

pub use scenarios::{run_all, ScenarioOutcome};

/// An engine over the built-in corpus with default configuration.
pub fn builtin_engine() -> InteractionEngine<'static> {
    InteractionEngine::new(RuleCorpus::builtin())
}

/// An engine over the built-in corpus with the given configuration.
pub fn builtin_engine_with(config: EngineConfig) -> InteractionEngine<'static> {
    InteractionEngine::with_config(RuleCorpus::builtin(), config)
}

/// Run every seed scenario against the built-in corpus.
pub fn run_builtin() -> Vec<ScenarioOutcome> {
    run_all(RuleCorpus::builtin())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
