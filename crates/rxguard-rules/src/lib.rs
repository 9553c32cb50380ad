//! # rxguard-rules
//!
//! TOML-authored drug classes and interaction rules for the RxGuard engine.
//!
//! ## Overview
//!
//! [`RuleCorpus`] loads a document of `[[classes]]` and `[[rules]]`,
//! validates it, and implements
//! [`InteractionKnowledge`](rxguard_core::traits::InteractionKnowledge).
//! Class membership is answered by [`DrugClassRegistry`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rxguard_core::InteractionEngine;
//! use rxguard_rules::RuleCorpus;
//!
//! let mut engine = InteractionEngine::new(RuleCorpus::builtin());
//! let result = engine.set_medications(["Lithium", "Lisinopril"]).analyze();
//! ```
//!
//! ## Rule shapes
//!
//! A rule relates `drug1` or `class1` to `drug2` or `class2`. Drug sides
//! match by loose name comparison; class sides match when the medication
//! resolves to that class in the registry.

pub mod corpus;
pub mod registry;

pub use corpus::RuleCorpus;
pub use registry::DrugClassRegistry;

// ── Tests ─────────────────────────────────────────────────────────────────────
