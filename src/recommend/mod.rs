//! Turns a priority score into a tier, its canned course of action, a
//! rationale sentence and region/threat specific considerations.
pub mod tiers;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::recommend::tiers::{
    DIPLOMATIC_ONLY_ACTIONS, HIGH_PRIORITY_ACTIONS, LOW_PRIORITY_ACTIONS, MEDIUM_PRIORITY_ACTIONS,
    TIER_THRESHOLDS,
};
use crate::reference::{self, considerations_for, threat_in_region};
use crate::scoring::ScoreBreakdown;

/// Stand-in label for a threat code the region's catalog does not know.
pub const UNSPECIFIED_THREAT: &str = "unspecified";
/// Stand-in name for an unknown regional bureau.
pub const UNSPECIFIED_REGION: &str = "unspecified region";

// ───────────────────────────── Tiers ─────────────────────────────────────

/// Priority band of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    NotRecommended = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::NotRecommended, |&(_, tier)| tier)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Priority - Comprehensive Assistance",
            Self::Medium => "Medium Priority - Targeted Assistance",
            Self::Low => "Low Priority - Minimal Engagement",
            Self::NotRecommended => "Not Recommended - Diplomatic Engagement Only",
        }
    }

    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Self::High => HIGH_PRIORITY_ACTIONS,
            Self::Medium => MEDIUM_PRIORITY_ACTIONS,
            Self::Low => LOW_PRIORITY_ACTIONS,
            Self::NotRecommended => DIPLOMATIC_ONLY_ACTIONS,
        }
    }

    /// Rationale sentence for this tier.  `threat_context` is either
    /// `"<threat> threat"` or `"multi-threat environment (<a> + <b>)"`.
    pub fn rationale(&self, threat_context: &str, region_name: &str) -> String {
        match self {
            Self::High => format!(
                "Critical security partnership requiring immediate, sustained engagement due to \
                 {threat_context} and strategic importance of {region_name}."
            ),
            Self::Medium => format!(
                "Selective engagement focusing on capability gaps and {threat_context} within \
                 {region_name}."
            ),
            Self::Low => format!(
                "Basic partnership maintenance with limited resources, monitoring \
                 {threat_context} for potential escalation."
            ),
            Self::NotRecommended => format!(
                "Current {threat_context} and partner capacity do not warrant significant \
                 military assistance investment."
            ),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ───────────────────────────── Result ────────────────────────────────────

/// Outcome of one assessment.  Built once, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub priority_score: u8,
    pub tier: Tier,
    /// Display label of `tier`.
    pub recommendation_type: String,
    pub recommendations: Vec<String>,
    pub rationale: String,
    pub considerations: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Short display label of a threat within a region.
pub fn threat_label(region_code: &str, threat_code: &str) -> &'static str {
    threat_in_region(region_code, threat_code).map_or(UNSPECIFIED_THREAT, |t| t.short_label())
}

pub fn region_name(region_code: &str) -> &'static str {
    reference::region(region_code).map_or(UNSPECIFIED_REGION, |r| r.name)
}

/// `"<primary> threat"`, or `"multi-threat environment (<primary> +
/// <secondary>)"` when a secondary threat is set.
pub fn threat_context(assessment: &Assessment) -> String {
    let region = assessment.regional_bureau.as_str();
    let primary = threat_label(region, &assessment.primary_threat);
    match assessment.secondary_threat() {
        Some(secondary) => format!(
            "multi-threat environment ({primary} + {})",
            threat_label(region, secondary)
        ),
        None => format!("{primary} threat"),
    }
}

/// Package a computed score into the final result.
pub fn assemble(
    priority_score: u8,
    assessment: &Assessment,
    breakdown: ScoreBreakdown,
) -> AssessmentResult {
    let tier = Tier::from_score(priority_score);
    let rationale = tier.rationale(
        &threat_context(assessment),
        region_name(&assessment.regional_bureau),
    );
    let considerations =
        considerations_for(&assessment.regional_bureau, &assessment.primary_threat)
            .iter()
            .map(|c| c.to_string())
            .collect();

    AssessmentResult {
        priority_score,
        tier,
        recommendation_type: tier.label().to_owned(),
        recommendations: tier.actions().iter().map(|a| a.to_string()).collect(),
        rationale,
        considerations,
        breakdown,
    }
}
