//! Drug class registry.
//!
//! Answers "is this drug a member of that class?" and "which classes does
//! this drug belong to?" for free-text medication names. Membership uses
//! the loose name matching from `rxguard_core::names`: parenthetical
//! suffixes are ignored, case does not matter, and either name may contain
//! the other.

use rxguard_contracts::drug::DrugClass;
use rxguard_core::names::names_match;

/// Immutable, ordered set of drug classes.
#[derive(Debug, Clone, Default)]
pub struct DrugClassRegistry {
    classes: Vec<DrugClass>,
}

impl DrugClassRegistry {
    /// Build a registry from classes in declaration order.
    ///
    /// No validation happens here; `RuleCorpus` checks class definitions
    /// before constructing its registry.
    pub fn new(classes: Vec<DrugClass>) -> Self {
        Self { classes }
    }

    /// All classes, in declaration order.
    pub fn classes(&self) -> &[DrugClass] {
        &self.classes
    }

    /// Look up a class by name, ignoring ASCII case.
    pub fn get(&self, class_name: &str) -> Option<&DrugClass> {
        self.classes
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(class_name))
    }

    /// True if `drug_name` matches any member of `class_name`.
    ///
    /// Unknown classes contain nothing.
    pub fn is_member(&self, drug_name: &str, class_name: &str) -> bool {
        self.get(class_name)
            .is_some_and(|class| class.members.iter().any(|m| names_match(drug_name, m)))
    }

    /// Names of every class `drug_name` belongs to. Empty for uncatalogued
    /// drugs.
    pub fn classes_of(&self, drug_name: &str) -> Vec<String> {
        self.classes
            .iter()
            .filter(|class| class.members.iter().any(|m| names_match(drug_name, m)))
            .map(|class| class.name.clone())
            .collect()
    }
}
