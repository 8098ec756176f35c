//! Priority scoring: folds an [`Assessment`] and the reference tables into a
//! bounded 0–100 priority score plus a breakdown of every factor used.
//!
//! ```text
//! base  = combined_threat × threat_mult × intensity × urgency × capability_gap
//!         × partner × political × constraint × regional
//! score = clamp(round(base × scale), 0, 100)
//! ```
pub mod scoring_tests;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::Assessment;
use crate::reference::{
    self, DEFAULT_PRIMARY_THREAT_WEIGHT, MAX_CAPABILITY_SCORE, threat_in_region,
};

pub const DEFAULT_SCORE_SCALE: f64 = 6.0;
pub const DEFAULT_SECONDARY_THREAT_DISCOUNT: f64 = 0.6;
pub const DEFAULT_MULTI_THREAT_MULTIPLIER: f64 = 1.15;
pub const MIN_PRIORITY_SCORE: u8 = 0;
pub const MAX_PRIORITY_SCORE: u8 = 100;

/// Combined capability of a partner rated at the top of all three scales.
const MAX_COMBINED_CAPABILITY: f64 = 3.0 * MAX_CAPABILITY_SCORE as f64;

// ───────────────────────────── Config ────────────────────────────────────

/// Tuned constants of the scoring formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Maps the raw product onto the 0–100 band.
    pub score_scale: f64,
    /// Fraction of the secondary threat's weight that is added.
    pub secondary_discount: f64,
    /// Applied once whenever a secondary threat is present.
    pub multi_threat_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_scale: DEFAULT_SCORE_SCALE,
            secondary_discount: DEFAULT_SECONDARY_THREAT_DISCOUNT,
            multi_threat_multiplier: DEFAULT_MULTI_THREAT_MULTIPLIER,
        }
    }
}

impl ScoringConfig {
    /// Build from environment variables.
    ///
    /// | Env var                     | Default | Purpose                               |
    /// |-----------------------------|---------|---------------------------------------|
    /// | `SCORE_SCALE`               | `6`     | Multiplier from raw product to score  |
    /// | `SECONDARY_THREAT_DISCOUNT` | `0.6`   | Share of secondary threat weight used |
    /// | `MULTI_THREAT_MULTIPLIER`   | `1.15`  | Boost for multi-threat environments   |
    ///
    /// Missing, unparsable or non-positive values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from any key/value
    /// source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str, default: f64| {
            get(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };

        Self {
            score_scale: parse("SCORE_SCALE", DEFAULT_SCORE_SCALE),
            secondary_discount: parse(
                "SECONDARY_THREAT_DISCOUNT",
                DEFAULT_SECONDARY_THREAT_DISCOUNT,
            ),
            multi_threat_multiplier: parse(
                "MULTI_THREAT_MULTIPLIER",
                DEFAULT_MULTI_THREAT_MULTIPLIER,
            ),
        }
    }
}

impl fmt::Display for ScoringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScoringConfig(scale={}, secondary_discount={}, multi_threat={})",
            self.score_scale, self.secondary_discount, self.multi_threat_multiplier,
        )
    }
}

// ──────────────────────────── Breakdown ──────────────────────────────────

/// Every intermediate factor of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub partner_weight: f64,
    pub political_weight: f64,
    pub constraint_weight: f64,
    pub primary_threat_weight: f64,
    /// Already discounted.
    pub secondary_threat_weight: f64,
    pub combined_threat_weight: f64,
    pub threat_multiplier: f64,
    pub intensity_multiplier: f64,
    pub urgency_multiplier: f64,
    pub regional_multiplier: f64,
    /// Shortfall from full capability, `(15 - sum) / 15`.
    pub capability_gap: f64,
    /// `capability_gap` as a rounded percentage.
    pub capability_gap_pct: i32,
    pub military_score: u8,
    pub institutional_score: u8,
    pub resource_score: u8,
    /// Product of all factors before scaling and clamping.
    pub base_score: f64,
}

// ───────────────────────────── Scoring ───────────────────────────────────

/// Score with the default [`ScoringConfig`].
pub fn score(assessment: &Assessment) -> (u8, ScoreBreakdown) {
    score_with(assessment, &ScoringConfig::default())
}

pub fn score_with(assessment: &Assessment, cfg: &ScoringConfig) -> (u8, ScoreBreakdown) {
    let region = assessment.regional_bureau.as_str();

    let partner_weight = reference::partner_weight(&assessment.partner_type);
    let political_weight = reference::political_weight(&assessment.political_relationship);
    let constraint_weight = reference::constraint_weight(&assessment.political_constraints);

    let primary_threat_weight = match threat_in_region(region, &assessment.primary_threat) {
        Some(t) => t.weight,
        None => {
            debug!(
                "Primary threat {:?} not in {region:?} catalog – using weight \
                 {DEFAULT_PRIMARY_THREAT_WEIGHT}",
                assessment.primary_threat
            );
            DEFAULT_PRIMARY_THREAT_WEIGHT
        }
    };

    let secondary = assessment.secondary_threat();
    let secondary_threat_weight = match secondary {
        Some(code) => match threat_in_region(region, code) {
            Some(t) => t.weight * cfg.secondary_discount,
            None => {
                debug!("Secondary threat {code:?} not in {region:?} catalog – adds nothing");
                0.0
            }
        },
        None => 0.0,
    };

    let combined_threat_weight = primary_threat_weight + secondary_threat_weight;
    let threat_multiplier = if secondary.is_some() {
        cfg.multi_threat_multiplier
    } else {
        1.0
    };

    let intensity_multiplier = reference::intensity_multiplier(&assessment.threat_intensity);
    let urgency_multiplier = reference::urgency_multiplier(&assessment.urgency);

    let military_score = assessment.military_score();
    let institutional_score = assessment.institutional_score();
    let resource_score = assessment.resource_score();
    let combined_capability =
        f64::from(military_score) + f64::from(institutional_score) + f64::from(resource_score);
    let capability_gap = (MAX_COMBINED_CAPABILITY - combined_capability) / MAX_COMBINED_CAPABILITY;

    let regional_multiplier = reference::regional_multiplier(region);

    let base_score = combined_threat_weight
        * threat_multiplier
        * intensity_multiplier
        * urgency_multiplier
        * capability_gap
        * partner_weight
        * political_weight
        * constraint_weight
        * regional_multiplier;

    let priority_score = to_priority_score(base_score * cfg.score_scale);
    debug!(
        "Scored {region:?}/{:?}: base={base_score:.4} → {priority_score}",
        assessment.primary_threat
    );

    let breakdown = ScoreBreakdown {
        partner_weight,
        political_weight,
        constraint_weight,
        primary_threat_weight,
        secondary_threat_weight,
        combined_threat_weight,
        threat_multiplier,
        intensity_multiplier,
        urgency_multiplier,
        regional_multiplier,
        capability_gap,
        capability_gap_pct: (capability_gap * 100.0).round() as i32,
        military_score,
        institutional_score,
        resource_score,
        base_score,
    };

    (priority_score, breakdown)
}

/// Round half away from zero and clamp into 0–100.  NaN lands on 0.
fn to_priority_score(scaled: f64) -> u8 {
    scaled
        .round()
        .clamp(f64::from(MIN_PRIORITY_SCORE), f64::from(MAX_PRIORITY_SCORE)) as u8
}
