//! The knowledge seam between the engine and its rule data.
//!
//! The matcher and the engine facade never read rule files themselves. They
//! consult an `InteractionKnowledge` implementation, which resolves drug
//! class membership and exposes the authored rules. `rxguard-rules` provides
//! the TOML-backed implementation; tests supply small in-memory ones.

use rxguard_contracts::rule::InteractionRule;

/// Read-only access to drug classes and interaction rules.
///
/// Implementations are shared immutably across any number of engine
/// instances and must be deterministic: the same name always resolves to the
/// same classes, and `rules()` always yields the same rules in the same order.
pub trait InteractionKnowledge: Send + Sync {
    /// Every class the given caller-supplied name belongs to, in the
    /// implementation's declaration order. Unknown drugs resolve to an empty
    /// list.
    fn classes_of(&self, drug: &str) -> Vec<String>;

    /// All interaction rules, in authored order.
    fn rules(&self) -> &[InteractionRule];
}
