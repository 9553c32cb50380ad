//! # rxguard-contracts
//!
//! Shared types and errors for the RxGuard drug interaction engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, a few classification helpers and the
//! error type.

pub mod drug;
pub mod error;
pub mod interaction;
pub mod report;
pub mod rule;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use error::RxGuardError;
    use interaction::{InteractionStatistics, MatchedInteraction, RiskLevel, SeverityDistribution};
    use report::{AnalysisResult, Priority};
    use rule::{RulePair, Severity, SeverityBucket};

    fn interaction(severity: u8) -> MatchedInteraction {
        MatchedInteraction {
            drug1: "Warfarin".to_string(),
            drug2: "Aspirin (low dose)".to_string(),
            rule_id: "warfarin-aspirin".to_string(),
            risk: "Major Bleeding".to_string(),
            severity: Severity(severity),
            clinical_significance: "bleeding".to_string(),
            mechanism: "antiplatelet + anticoagulant".to_string(),
            evidence: "label".to_string(),
            recommendations: vec!["monitor INR".to_string()],
            alternatives: Vec::new(),
            adverse_events: 12,
            cost_per_event: 1_000,
        }
    }

    // ── Severity ─────────────────────────────────────────────────────────────

    #[test]
    fn severity_bucket_thresholds() {
        assert_eq!(Severity(10).bucket(), SeverityBucket::Contraindicated);
        assert_eq!(Severity(9).bucket(), SeverityBucket::Major);
        assert_eq!(Severity(8).bucket(), SeverityBucket::Major);
        assert_eq!(Severity(7).bucket(), SeverityBucket::Moderate);
        assert_eq!(Severity(5).bucket(), SeverityBucket::Moderate);
        assert_eq!(Severity(4).bucket(), SeverityBucket::Minor);
        assert_eq!(Severity(2).bucket(), SeverityBucket::Minor);
    }

    #[test]
    fn severity_serializes_as_plain_number() {
        assert_eq!(serde_json::to_value(Severity(8)).unwrap(), json!(8));
    }

    // ── RiskLevel ────────────────────────────────────────────────────────────

    #[test]
    fn risk_level_is_none_without_interactions() {
        let stats = InteractionStatistics::default();
        assert_eq!(RiskLevel::from_stats(&stats), RiskLevel::None);
    }

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_max_severity(2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_max_severity(4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_max_severity(5), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_max_severity(7), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_max_severity(8), RiskLevel::High);
        assert_eq!(RiskLevel::from_max_severity(9), RiskLevel::High);
        assert_eq!(RiskLevel::from_max_severity(10), RiskLevel::Critical);
    }

    #[test]
    fn risk_level_is_order_preserving() {
        let mut previous = RiskLevel::from_max_severity(0);
        for max in 1..=10u8 {
            let current = RiskLevel::from_max_severity(max);
            assert!(current >= previous, "risk level dropped at severity {max}");
            previous = current;
        }
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(serde_json::to_value(RiskLevel::Critical).unwrap(), json!("critical"));
        assert_eq!(RiskLevel::None.to_string(), "none");
    }

    // ── SeverityDistribution ─────────────────────────────────────────────────

    #[test]
    fn distribution_records_into_matching_bucket() {
        let mut dist = SeverityDistribution::default();
        for s in [10, 9, 8, 6, 3] {
            dist.record(Severity(s));
        }
        assert_eq!(dist.contraindicated, 1);
        assert_eq!(dist.major, 2);
        assert_eq!(dist.moderate, 1);
        assert_eq!(dist.minor, 1);
        assert_eq!(dist.total(), 5);
        assert_eq!(dist.count(SeverityBucket::Major), 2);
    }

    // ── RulePair ─────────────────────────────────────────────────────────────

    #[test]
    fn rule_pair_describe_and_classes() {
        let pair = RulePair::ClassClass {
            class1: "MAOI".to_string(),
            class2: "SSRI".to_string(),
        };
        assert_eq!(pair.describe(), "MAOI + SSRI");
        assert_eq!(pair.classes(), vec!["MAOI", "SSRI"]);

        let pair = RulePair::DrugDrug {
            drug1: "Warfarin".to_string(),
            drug2: "Aspirin".to_string(),
        };
        assert!(pair.classes().is_empty());
    }

    #[test]
    fn rule_pair_uses_shape_tag() {
        let pair = RulePair::DrugClass {
            drug: "Lithium".to_string(),
            class: "ACE Inhibitor".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&pair).unwrap(),
            json!({ "shape": "drug-class", "drug": "Lithium", "class": "ACE Inhibitor" })
        );
    }

    // ── MatchedInteraction ───────────────────────────────────────────────────

    #[test]
    fn matched_interaction_helpers() {
        let m = interaction(8);
        assert_eq!(m.pair_label(), "Warfarin + Aspirin (low dose)");
        assert!(m.involves("Aspirin (low dose)"));
        assert!(!m.involves("Aspirin"), "involvement is exact string equality");
        assert_eq!(m.total_cost(), 12_000);
    }

    // ── AnalysisResult ───────────────────────────────────────────────────────

    #[test]
    fn empty_analysis_uses_camel_case_fields() {
        let result = AnalysisResult::empty(vec!["Metformin".to_string()]);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["riskLevel"], json!("none"));
        assert_eq!(value["stats"]["totalInteractions"], json!(0));
        assert_eq!(value["stats"]["severityDistribution"]["contraindicated"], json!(0));
        assert_eq!(value["interactions"], json!([]));
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Priority::Info).unwrap(), json!("info"));
    }

    // ── RxGuardError display messages ────────────────────────────────────────

    #[test]
    fn error_rule_integrity_display() {
        let err = RxGuardError::RuleIntegrity {
            rule_id: "maoi-ssri".to_string(),
            reason: "missing field 'mechanism'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("maoi-ssri"));
        assert!(msg.contains("mechanism"));
    }

    #[test]
    fn error_config_error_display() {
        let err = RxGuardError::ConfigError {
            reason: "implementation_cost must be positive".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("implementation_cost"));
    }

    #[test]
    fn error_class_integrity_display() {
        let err = RxGuardError::ClassIntegrity {
            class: "SSRI".to_string(),
            reason: "class has no members".to_string(),
        };
        assert!(err.to_string().contains("drug class 'SSRI'"));
    }
}
