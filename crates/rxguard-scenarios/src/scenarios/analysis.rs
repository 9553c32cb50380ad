//! Medication-list scenarios run through the full engine.

use rxguard_contracts::{interaction::RiskLevel, report::AnalysisResult};
use rxguard_core::{traits::InteractionKnowledge, InteractionEngine};

use super::{Checks, ScenarioOutcome};

fn analyze(knowledge: &dyn InteractionKnowledge, medications: &[&str]) -> AnalysisResult {
    InteractionEngine::new(knowledge)
        .set_medications(medications.iter().copied())
        .analyze()
}

fn summary(result: &AnalysisResult) -> String {
    format!(
        "{} interaction(s), max severity {}, risk {}",
        result.stats.total_interactions, result.stats.max_severity, result.risk_level
    )
}

/// Require a match carrying `risk` at exactly `severity`.
fn expect_risk(checks: &mut Checks, result: &AnalysisResult, risk: &str, severity: u8) {
    let found = result
        .interactions
        .iter()
        .any(|i| i.risk == risk && i.severity.value() == severity);
    checks.expect(found, || {
        format!("expected a '{risk}' interaction at severity {severity}")
    });
}

fn expect_level(checks: &mut Checks, result: &AnalysisResult, level: RiskLevel) {
    checks.expect(result.risk_level == level, || {
        format!("expected risk level {level}, got {}", result.risk_level)
    });
}

/// Phenelzine with sertraline is contraindicated.
pub fn maoi_plus_ssri(knowledge: &dyn InteractionKnowledge) -> ScenarioOutcome {
    let result = analyze(knowledge, &["Phenelzine (MAOI)", "Sertraline (Zoloft)"]);

    let mut checks = Checks::default();
    expect_risk(&mut checks, &result, "Serotonin Syndrome", 10);
    expect_level(&mut checks, &result, RiskLevel::Critical);
    checks.finish("MAOI + SSRI", summary(&result))
}

pub fn lithium_plus_ace_inhibitor(knowledge: &dyn InteractionKnowledge) -> ScenarioOutcome {
    let result = analyze(knowledge, &["Lithium", "Lisinopril"]);

    let mut checks = Checks::default();
    expect_risk(&mut checks, &result, "Lithium Toxicity", 9);
    expect_level(&mut checks, &result, RiskLevel::High);
    checks.finish("Lithium + ACE inhibitor", summary(&result))
}

pub fn warfarin_plus_aspirin(knowledge: &dyn InteractionKnowledge) -> ScenarioOutcome {
    let result = analyze(knowledge, &["Warfarin", "Aspirin"]);

    let mut checks = Checks::default();
    expect_risk(&mut checks, &result, "Major Bleeding", 8);
    expect_level(&mut checks, &result, RiskLevel::High);
    checks.finish("Warfarin + Aspirin", summary(&result))
}

/// Three serotonergic drugs: every pair interacts.
pub fn serotonergic_triple(knowledge: &dyn InteractionKnowledge) -> ScenarioOutcome {
    let result = analyze(
        knowledge,
        &["Phenelzine (MAOI)", "Sertraline (Zoloft)", "Tramadol"],
    );

    let mut checks = Checks::default();
    checks.expect(result.interactions.len() >= 3, || {
        format!(
            "expected at least 3 interactions, got {}",
            result.interactions.len()
        )
    });
    for (a, b) in [
        ("Phenelzine (MAOI)", "Sertraline (Zoloft)"),
        ("Phenelzine (MAOI)", "Tramadol"),
        ("Sertraline (Zoloft)", "Tramadol"),
    ] {
        let found = result
            .interactions
            .iter()
            .any(|i| i.involves(a) && i.involves(b));
        checks.expect(found, || format!("expected an interaction between {a} and {b}"));
    }
    expect_level(&mut checks, &result, RiskLevel::Critical);
    checks.finish("MAOI + SSRI + Tramadol", summary(&result))
}

/// Metformin with atorvastatin: nothing found, and ROI bottoms out.
pub fn no_interaction(knowledge: &dyn InteractionKnowledge) -> ScenarioOutcome {
    let mut engine = InteractionEngine::new(knowledge);
    let result = engine.set_medications(["Metformin", "Atorvastatin"]).analyze();
    let roi = engine.calculate_roi();

    let mut checks = Checks::default();
    checks.expect(result.interactions.is_empty(), || {
        format!(
            "expected no interactions, got {}",
            result.interactions.len()
        )
    });
    expect_level(&mut checks, &result, RiskLevel::None);
    checks.expect(roi.roi == -100.0, || {
        format!("expected ROI of -100, got {}", roi.roi)
    });
    checks.finish(
        "Metformin + Atorvastatin",
        format!("{}, ROI {}", summary(&result), roi.roi),
    )
}
