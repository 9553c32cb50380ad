//! Error types for the RxGuard interaction engine.
//!
//! Interaction queries themselves never fail: unknown drugs, short medication
//! lists and empty result sets are ordinary answers. Errors only arise at the
//! edges, when rule data or configuration is loaded, or when a report is
//! rendered for delivery.

use thiserror::Error;

/// The unified error type for the RxGuard crates.
#[derive(Debug, Error)]
pub enum RxGuardError {
    /// A configuration document is unreadable, malformed or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// An authored interaction rule is incomplete or inconsistent.
    ///
    /// The rule corpus is shipped data, so this is an authoring defect rather
    /// than a user error.
    #[error("interaction rule '{rule_id}' is invalid: {reason}")]
    RuleIntegrity { rule_id: String, reason: String },

    /// A drug class definition is empty or duplicated.
    #[error("drug class '{class}' is invalid: {reason}")]
    ClassIntegrity { class: String, reason: String },

    /// A report could not be rendered to JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// Convenience alias used throughout the RxGuard crates.
pub type RxGuardResult<T> = Result<T, RxGuardError>;
