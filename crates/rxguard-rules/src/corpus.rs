//! The interaction rule corpus and its TOML schema.
//!
//! A corpus document declares drug classes and interaction rules:
//!
//! ```toml
//! [[classes]]
//! name = "SSRI"
//! members = ["Sertraline", "Fluoxetine"]
//!
//! [[rules]]
//! id = "maoi-ssri"
//! class1 = "MAOI"
//! class2 = "SSRI"
//! severity = 10
//! risk = "Serotonin Syndrome"
//! mechanism = "..."
//! clinical_significance = "..."
//! recommendations = ["..."]
//! ```
//!
//! Each rule names exactly one drug (`drug1`/`drug2`) or class
//! (`class1`/`class2`) per side. Loading validates every rule and class and
//! fails on the first defect with an error naming the offending rule or
//! class. A corpus that loaded successfully is never mutated again.

use std::{collections::HashSet, path::Path, sync::OnceLock};

use serde::Deserialize;
use tracing::debug;

use rxguard_contracts::{
    drug::DrugClass,
    error::{RxGuardError, RxGuardResult},
    rule::{Alternative, InteractionRule, RulePair, Severity},
};
use rxguard_core::traits::InteractionKnowledge;

use crate::registry::DrugClassRegistry;

/// The corpus shipped with the crate.
const BUILTIN_RULES: &str = include_str!("../rules/interactions.toml");

static BUILTIN: OnceLock<RuleCorpus> = OnceLock::new();

// ── TOML schema ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CorpusDocument {
    #[serde(default)]
    classes: Vec<ClassEntry>,
    #[serde(default)]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct ClassEntry {
    name: String,
    #[serde(default)]
    members: Vec<String>,
}

/// A rule as authored. Mandatory fields are optional here so that a missing
/// one is reported against the rule id instead of as a bare parse error.
#[derive(Debug, Deserialize)]
struct RuleEntry {
    id: Option<String>,
    drug1: Option<String>,
    drug2: Option<String>,
    class1: Option<String>,
    class2: Option<String>,
    /// Mandatory, 2–10.
    severity: Option<i64>,
    /// Mandatory.
    risk: Option<String>,
    /// Mandatory.
    mechanism: Option<String>,
    /// Mandatory.
    clinical_significance: Option<String>,
    #[serde(default)]
    evidence: String,
    #[serde(default)]
    adverse_events: u64,
    #[serde(default)]
    cost_per_event: u64,
    /// Mandatory, at least one entry.
    recommendations: Option<Vec<String>>,
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

// ── Validation ────────────────────────────────────────────────────────────────

fn rule_error(rule_id: &str, reason: impl Into<String>) -> RxGuardError {
    RxGuardError::RuleIntegrity {
        rule_id: rule_id.to_string(),
        reason: reason.into(),
    }
}

fn required_text(rule_id: &str, field: &str, value: Option<String>) -> RxGuardResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(rule_error(rule_id, format!("field '{field}' is empty"))),
        None => Err(rule_error(rule_id, format!("missing field '{field}'"))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn build_classes(entries: Vec<ClassEntry>) -> RxGuardResult<Vec<DrugClass>> {
    let mut seen = HashSet::new();
    let mut classes = Vec::with_capacity(entries.len());

    for entry in entries {
        let name = entry.name.trim().to_string();
        if name.is_empty() {
            return Err(RxGuardError::ClassIntegrity {
                class: entry.name,
                reason: "class name is empty".to_string(),
            });
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(RxGuardError::ClassIntegrity {
                class: name,
                reason: "class is declared more than once".to_string(),
            });
        }
        let members: Vec<String> = entry
            .members
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if members.is_empty() {
            return Err(RxGuardError::ClassIntegrity {
                class: name,
                reason: "class has no members".to_string(),
            });
        }
        classes.push(DrugClass::new(name, members));
    }

    Ok(classes)
}

fn rule_pair(rule_id: &str, entry: &mut RuleEntry) -> RxGuardResult<RulePair> {
    let sides = (
        non_blank(entry.drug1.take()),
        non_blank(entry.drug2.take()),
        non_blank(entry.class1.take()),
        non_blank(entry.class2.take()),
    );
    match sides {
        (Some(drug1), Some(drug2), None, None) => Ok(RulePair::DrugDrug { drug1, drug2 }),
        (Some(drug), None, None, Some(class)) => Ok(RulePair::DrugClass { drug, class }),
        (None, Some(drug), Some(class), None) => Ok(RulePair::ClassDrug { class, drug }),
        (None, None, Some(class1), Some(class2)) => Ok(RulePair::ClassClass { class1, class2 }),
        _ => Err(rule_error(
            rule_id,
            "each side must name exactly one of drug1/class1 and drug2/class2",
        )),
    }
}

fn build_rule(
    index: usize,
    mut entry: RuleEntry,
    registry: &DrugClassRegistry,
) -> RxGuardResult<InteractionRule> {
    let id = match non_blank(entry.id.take()) {
        Some(id) => id,
        None => return Err(rule_error(&format!("#{}", index + 1), "missing field 'id'")),
    };

    let pair = rule_pair(&id, &mut entry)?;
    for class in pair.classes() {
        if registry.get(class).is_none() {
            return Err(rule_error(&id, format!("references unknown drug class '{class}'")));
        }
    }

    let severity = match entry.severity {
        Some(s) if (Severity::MIN.value() as i64..=Severity::MAX.value() as i64).contains(&s) => {
            Severity(s as u8)
        }
        Some(s) => {
            return Err(rule_error(
                &id,
                format!("severity {s} is outside {}..={}", Severity::MIN, Severity::MAX),
            ))
        }
        None => return Err(rule_error(&id, "missing field 'severity'")),
    };

    let risk = required_text(&id, "risk", entry.risk)?;
    let mechanism = required_text(&id, "mechanism", entry.mechanism)?;
    let clinical_significance =
        required_text(&id, "clinical_significance", entry.clinical_significance)?;

    let recommendations = match entry.recommendations {
        Some(recs) if !recs.is_empty() => recs,
        Some(_) => return Err(rule_error(&id, "field 'recommendations' is empty")),
        None => return Err(rule_error(&id, "missing field 'recommendations'")),
    };

    Ok(InteractionRule {
        id,
        pair,
        severity,
        risk,
        mechanism,
        clinical_significance,
        evidence: entry.evidence,
        adverse_events: entry.adverse_events,
        cost_per_event: entry.cost_per_event,
        recommendations,
        alternatives: entry.alternatives,
    })
}

// ── RuleCorpus ────────────────────────────────────────────────────────────────

/// A validated, immutable set of drug classes and interaction rules.
#[derive(Debug, Clone)]
pub struct RuleCorpus {
    registry: DrugClassRegistry,
    rules: Vec<InteractionRule>,
}

impl RuleCorpus {
    /// Parse and validate a corpus document.
    ///
    /// Returns `ConfigError` for malformed TOML, `ClassIntegrity` for a bad
    /// class definition, and `RuleIntegrity` naming the first invalid rule.
    pub fn from_toml_str(s: &str) -> RxGuardResult<Self> {
        let doc: CorpusDocument = toml::from_str(s).map_err(|e| RxGuardError::ConfigError {
            reason: format!("failed to parse interaction corpus TOML: {}", e),
        })?;

        let registry = DrugClassRegistry::new(build_classes(doc.classes)?);

        let mut seen_ids = HashSet::new();
        let mut rules = Vec::with_capacity(doc.rules.len());
        for (index, entry) in doc.rules.into_iter().enumerate() {
            let rule = build_rule(index, entry, &registry)?;
            if !seen_ids.insert(rule.id.clone()) {
                return Err(rule_error(&rule.id, "rule id is declared more than once"));
            }
            rules.push(rule);
        }

        debug!(
            classes = registry.classes().len(),
            rules = rules.len(),
            "interaction corpus loaded"
        );

        Ok(Self { registry, rules })
    }

    /// Read the file at `path` and load it as a corpus.
    pub fn from_file(path: &Path) -> RxGuardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RxGuardError::ConfigError {
            reason: format!("failed to read interaction corpus '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The corpus compiled into this crate.
    ///
    /// Loaded and validated on first use, then shared for the life of the
    /// process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded corpus fails validation. That data ships with
    /// the binary, so a defect there is a build defect.
    pub fn builtin() -> &'static RuleCorpus {
        BUILTIN.get_or_init(|| match Self::from_toml_str(BUILTIN_RULES) {
            Ok(corpus) => corpus,
            Err(e) => panic!("built-in interaction corpus is invalid: {e}"),
        })
    }

    pub fn registry(&self) -> &DrugClassRegistry {
        &self.registry
    }

    /// All rules, in authored order.
    pub fn rules(&self) -> &[InteractionRule] {
        &self.rules
    }

    /// Look up a rule by id.
    pub fn rule(&self, id: &str) -> Option<&InteractionRule> {
        self.rules.iter().find(|r| r.id == id)
    }
}

impl InteractionKnowledge for RuleCorpus {
    fn classes_of(&self, drug: &str) -> Vec<String> {
        self.registry.classes_of(drug)
    }

    fn rules(&self) -> &[InteractionRule] {
        &self.rules
    }
}
