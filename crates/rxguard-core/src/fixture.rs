//! Small in-memory knowledge base for unit tests.

use rxguard_contracts::{
    drug::DrugClass,
    rule::{Alternative, InteractionRule, RulePair, Severity},
};

use crate::{names::names_match, traits::InteractionKnowledge};

pub(crate) struct FixtureKnowledge {
    pub classes: Vec<DrugClass>,
    pub rules: Vec<InteractionRule>,
}

impl InteractionKnowledge for FixtureKnowledge {
    fn classes_of(&self, drug: &str) -> Vec<String> {
        self.classes
            .iter()
            .filter(|c| c.members.iter().any(|m| names_match(drug, m)))
            .map(|c| c.name.clone())
            .collect()
    }

    fn rules(&self) -> &[InteractionRule] {
        &self.rules
    }
}

pub(crate) fn class(name: &str, members: &[&str]) -> DrugClass {
    DrugClass::new(name, members.iter().map(|m| m.to_string()).collect())
}

pub(crate) fn rule(id: &str, pair: RulePair, severity: u8, risk: &str) -> InteractionRule {
    InteractionRule {
        id: id.to_string(),
        pair,
        severity: Severity(severity),
        risk: risk.to_string(),
        mechanism: format!("{id} mechanism"),
        clinical_significance: format!("{id} significance"),
        evidence: "fixture".to_string(),
        adverse_events: 10,
        cost_per_event: 1_000,
        recommendations: vec![format!("{id} recommendation")],
        alternatives: Vec::new(),
    }
}

pub(crate) fn drug_drug(a: &str, b: &str) -> RulePair {
    RulePair::DrugDrug {
        drug1: a.to_string(),
        drug2: b.to_string(),
    }
}

pub(crate) fn drug_class(drug: &str, class: &str) -> RulePair {
    RulePair::DrugClass {
        drug: drug.to_string(),
        class: class.to_string(),
    }
}

pub(crate) fn class_drug(class: &str, drug: &str) -> RulePair {
    RulePair::ClassDrug {
        class: class.to_string(),
        drug: drug.to_string(),
    }
}

pub(crate) fn class_class(a: &str, b: &str) -> RulePair {
    RulePair::ClassClass {
        class1: a.to_string(),
        class2: b.to_string(),
    }
}

/// A knowledge base covering every rule shape.
///
/// - MAOI + SSRI (class-class, 10)
/// - MAOI + Tramadol (class-drug, 10)
/// - Tramadol + SSRI (drug-class, 8)
/// - Lithium + ACE Inhibitor (drug-class, 9)
/// - Warfarin + Aspirin (drug-drug, 8)
/// - Simvastatin + Amlodipine (drug-drug, 5)
/// - Antacid + Ciprofloxacin (class-drug, 3)
pub(crate) fn knowledge() -> FixtureKnowledge {
    let mut warfarin_aspirin = rule("warfarin-aspirin", drug_drug("Warfarin", "Aspirin"), 8, "Major Bleeding");
    warfarin_aspirin.adverse_events = 40;
    warfarin_aspirin.cost_per_event = 15_000;
    warfarin_aspirin.alternatives = vec![Alternative {
        from: "Aspirin".to_string(),
        to: "Acetaminophen".to_string(),
        reason: "analgesia without antiplatelet effect".to_string(),
    }];

    let mut maoi_ssri = rule("maoi-ssri", class_class("MAOI", "SSRI"), 10, "Serotonin Syndrome");
    maoi_ssri.alternatives = vec![Alternative {
        from: "SSRI".to_string(),
        to: "Bupropion".to_string(),
        reason: "no serotonergic activity".to_string(),
    }];

    let mut tramadol_ssri = rule("tramadol-ssri", drug_class("Tramadol", "SSRI"), 8, "Serotonin Syndrome");
    tramadol_ssri.alternatives = vec![Alternative {
        from: "SSRI".to_string(),
        to: "Mirtazapine".to_string(),
        reason: "lower serotonergic load".to_string(),
    }];

    FixtureKnowledge {
        classes: vec![
            class("SSRI", &["Sertraline", "Fluoxetine", "Paroxetine"]),
            class("MAOI", &["Phenelzine", "Selegiline"]),
            class("ACE Inhibitor", &["Lisinopril", "Enalapril"]),
            class("Antacid", &["Calcium Carbonate", "Magnesium Hydroxide"]),
        ],
        rules: vec![
            maoi_ssri,
            rule("maoi-tramadol", class_drug("MAOI", "Tramadol"), 10, "Serotonin Syndrome"),
            tramadol_ssri,
            rule("lithium-ace", drug_class("Lithium", "ACE Inhibitor"), 9, "Lithium Toxicity"),
            warfarin_aspirin,
            rule("simvastatin-amlodipine", drug_drug("Simvastatin", "Amlodipine"), 5, "Myopathy"),
            rule("antacid-cipro", class_drug("Antacid", "Ciprofloxacin"), 3, "Reduced Absorption"),
        ],
    }
}
