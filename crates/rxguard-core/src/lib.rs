//! # rxguard-core
//!
//! The deterministic drug interaction engine.
//!
//! This crate provides:
//! - The `InteractionKnowledge` trait, the seam to the rule data
//! - Loose medication-name matching (`names`)
//! - The pairwise matcher, statistics aggregator and recommendation builder
//! - The fixed-formula ROI estimate and its configuration
//! - `InteractionEngine`, the stateful facade most callers use
//!
//! Everything here is pure, synchronous, in-memory computation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rxguard_core::InteractionEngine;
//! use rxguard_rules::RuleCorpus;
//!
//! let mut engine = InteractionEngine::new(RuleCorpus::builtin());
//! let report = engine
//!     .set_medications(["Phenelzine (MAOI)", "Sertraline (Zoloft)"])
//!     .generate_report();
//! ```

pub mod config;
pub mod engine;
pub mod matcher;
pub mod names;
pub mod recommend;
pub mod roi;
pub mod stats;
pub mod traits;

#[cfg(test)]
pub(crate) mod fixture;

pub use config::{EngineConfig, RoiConfig};
pub use engine::InteractionEngine;
pub use matcher::find_interactions;
pub use recommend::generate_recommendations;
pub use roi::estimate_roi;
pub use stats::calculate_interaction_stats;
pub use traits::InteractionKnowledge;

// ── Tests ─────────────────────────────────────────────────────────────────────
