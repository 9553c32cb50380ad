//! Pairwise interaction matching.
//!
//! Matching algorithm:
//!
//! 1. Visit every position pair `(i, j)` with `i < j` in the medication list.
//! 2. Resolve the drug classes of both medications once per pair.
//! 3. Test every rule against the pair, in authored order. A rule matches
//!    when its first side fits one medication and its second side fits the
//!    other; the forward assignment `(med_i, med_j)` is tried before the
//!    reverse one. Drug sides use `names_match`, class sides use the resolved
//!    class lists.
//! 4. Emit one `MatchedInteraction` per matching rule, then stable-sort the
//!    whole list by descending severity.

use tracing::debug;

use rxguard_contracts::{
    interaction::MatchedInteraction,
    rule::{InteractionRule, RulePair},
};

use crate::{names::names_match, traits::InteractionKnowledge};

/// One side of a pair as seen by the matcher.
struct Candidate<'a> {
    name: &'a str,
    classes: Vec<String>,
}

impl Candidate<'_> {
    fn is_drug(&self, drug: &str) -> bool {
        names_match(self.name, drug)
    }

    fn in_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.eq_ignore_ascii_case(class))
    }

    /// Does this candidate fit one side of a rule?
    fn fits(&self, side: Side<'_>) -> bool {
        match side {
            Side::Drug(drug) => self.is_drug(drug),
            Side::Class(class) => self.in_class(class),
        }
    }
}

#[derive(Clone, Copy)]
enum Side<'r> {
    Drug(&'r str),
    Class(&'r str),
}

fn sides(pair: &RulePair) -> (Side<'_>, Side<'_>) {
    match pair {
        RulePair::DrugDrug { drug1, drug2 } => (Side::Drug(drug1), Side::Drug(drug2)),
        RulePair::DrugClass { drug, class } => (Side::Drug(drug), Side::Class(class)),
        RulePair::ClassDrug { class, drug } => (Side::Class(class), Side::Drug(drug)),
        RulePair::ClassClass { class1, class2 } => (Side::Class(class1), Side::Class(class2)),
    }
}

/// Test `rule` against a pair. Returns the medications in rule-side order
/// when it matches.
fn match_rule<'n>(
    rule: &InteractionRule,
    a: &Candidate<'n>,
    b: &Candidate<'n>,
) -> Option<(&'n str, &'n str)> {
    let (first, second) = sides(&rule.pair);
    if a.fits(first) && b.fits(second) {
        Some((a.name, b.name))
    } else if b.fits(first) && a.fits(second) {
        Some((b.name, a.name))
    } else {
        None
    }
}

fn to_matched(rule: &InteractionRule, drug1: &str, drug2: &str) -> MatchedInteraction {
    MatchedInteraction {
        drug1: drug1.to_string(),
        drug2: drug2.to_string(),
        rule_id: rule.id.clone(),
        risk: rule.risk.clone(),
        severity: rule.severity,
        clinical_significance: rule.clinical_significance.clone(),
        mechanism: rule.mechanism.clone(),
        evidence: rule.evidence.clone(),
        recommendations: rule.recommendations.clone(),
        alternatives: rule.alternatives.clone(),
        adverse_events: rule.adverse_events,
        cost_per_event: rule.cost_per_event,
    }
}

/// Find every interaction implied by the rule set for `medications`.
///
/// Pairs are taken by list position, so the caller is responsible for
/// removing duplicates. Fewer than two medications yields an empty list.
/// The result is sorted by descending severity; equal severities keep their
/// discovery order.
pub fn find_interactions<K>(medications: &[String], knowledge: &K) -> Vec<MatchedInteraction>
where
    K: InteractionKnowledge + ?Sized,
{
    let mut found = Vec::new();
    if medications.len() < 2 {
        return found;
    }

    for i in 0..medications.len() {
        for j in (i + 1)..medications.len() {
            let a = Candidate {
                name: &medications[i],
                classes: knowledge.classes_of(&medications[i]),
            };
            let b = Candidate {
                name: &medications[j],
                classes: knowledge.classes_of(&medications[j]),
            };

            for rule in knowledge.rules() {
                if let Some((drug1, drug2)) = match_rule(rule, &a, &b) {
                    debug!(
                        rule_id = %rule.id,
                        drug1,
                        drug2,
                        severity = %rule.severity,
                        "interaction rule matched"
                    );
                    found.push(to_matched(rule, drug1, drug2));
                }
            }
        }
    }

    // `sort_by` is stable, which preserves discovery order within a severity.
    found.sort_by(|x, y| y.severity.cmp(&x.severity));
    found
}
