//! Priority scoring and recommendation engine for partner-nation security
//! assistance assessments.
//!
//! An [`Assessment`] goes in, an [`AssessmentResult`] comes out: a 0–100
//! priority score, its tier with canned actions, a rationale sentence,
//! region/threat considerations and the full scoring breakdown.  The engine
//! is total; unknown or missing inputs resolve to documented defaults.
pub mod assessment;
pub mod recommend;
pub mod reference;
pub mod report;
pub mod scoring;

use tracing::info;

pub use assessment::{Assessment, CapabilityInput};
pub use recommend::{AssessmentResult, Tier, assemble};
pub use report::render_report;
pub use scoring::{ScoreBreakdown, ScoringConfig, score, score_with};

/// Score and assemble with the default [`ScoringConfig`].
pub fn evaluate(assessment: &Assessment) -> AssessmentResult {
    evaluate_with(assessment, &ScoringConfig::default())
}

pub fn evaluate_with(assessment: &Assessment, cfg: &ScoringConfig) -> AssessmentResult {
    let (priority_score, breakdown) = score_with(assessment, cfg);
    let result = assemble(priority_score, assessment, breakdown);
    info!(
        "Assessed {:?} ({}): score={} tier={:?}",
        assessment.country, assessment.regional_bureau, result.priority_score, result.tier
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur_frontline() -> Assessment {
        Assessment {
            regional_bureau: "eur".into(),
            country: "Latvia".into(),
            partner_type: "nato-ally".into(),
            political_relationship: "strategic-alliance".into(),
            political_constraints: "none".into(),
            primary_threat: "state-aggression".into(),
            threat_intensity: "critical-imminent".into(),
            urgency: "immediate".into(),
            military_capability: Some(CapabilityInput::Level(2)),
            institutional_strength: Some(CapabilityInput::Level(2)),
            resource_capacity: Some(CapabilityInput::Level(2)),
            ..Default::default()
        }
    }

    #[test]
    fn evaluates_high_priority_partner() {
        let result = evaluate(&eur_frontline());
        assert_eq!(result.priority_score, 78);
        assert_eq!(result.tier, Tier::High);
        assert_eq!(result.recommendations.len(), 6);
        assert_eq!(result.considerations.len(), 3);
    }

    #[test]
    fn evaluates_multi_threat_partner_at_ceiling() {
        let a = Assessment {
            secondary_threat: Some("hybrid-warfare".into()),
            ..eur_frontline()
        };
        let result = evaluate(&a);
        assert_eq!(result.priority_score, 100);
        assert_eq!(result.tier, Tier::High);
        assert!(result.rationale.contains(
            "multi-threat environment (State-Level Aggression + Hybrid Warfare Operations)"
        ));
    }

    #[test]
    fn evaluates_unknown_region_without_error() {
        let a = Assessment {
            regional_bureau: "antarctica".into(),
            ..Default::default()
        };
        let result = evaluate(&a);
        assert_eq!(result.priority_score, 2);
        assert_eq!(result.tier, Tier::NotRecommended);
        assert!(result.rationale.starts_with("Current unspecified threat"));
        assert_eq!(result.recommendations.len(), 5);
    }

    #[test]
    fn evaluate_with_custom_scale() {
        let cfg = ScoringConfig {
            score_scale: 4.0,
            ..Default::default()
        };
        // 12.96 × 4 = 51.84
        let result = evaluate_with(&eur_frontline(), &cfg);
        assert_eq!(result.priority_score, 52);
        assert_eq!(result.tier, Tier::Medium);
    }

    #[test]
    fn json_record_evaluates_like_typed_record() {
        let a: Assessment = serde_json::from_str(
            r#"{"regionalBureau":"eur","country":"Latvia","partnerType":"nato-ally",
                "politicalRelationship":"strategic-alliance","politicalConstraints":"none",
                "primaryThreat":"state-aggression","threatIntensity":"critical-imminent",
                "urgency":"immediate","militaryCapability":"2",
                "institutionalStrength":"2","resourceCapacity":2}"#,
        )
        .unwrap();
        assert_eq!(evaluate(&a), evaluate(&eur_frontline()));
    }
}
