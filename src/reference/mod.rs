//! Static reference data for partner assessments: weight tables, regional
//! bureaus, per-region threat catalogs and strategic considerations.
//!
//! Every table is a `const` slice, so nothing needs initialising and all of
//! it is safe to share between threads.  Lookups never fail: each table has
//! a **resolve-with-default** accessor that falls back to a documented
//! neutral value and logs the fallback at `debug`.
pub mod considerations;
pub mod tables;
pub mod threat_catalog;

use std::fmt;

use tracing::debug;

pub use considerations::{GENERIC_CONSIDERATIONS, STRATEGIC_CONSIDERATIONS, considerations_for};
pub use tables::{
    CAPABILITY_LEVELS, DIPLOMATIC_OBJECTIVES, PARTNER_TYPES, POLITICAL_CONSTRAINTS,
    POLITICAL_RELATIONSHIPS, REGIONS, THREAT_INTENSITY, URGENCY_LEVELS,
};
pub use threat_catalog::{REGIONAL_THREATS, threat_in_region, threats_for};

// ───────────────────────────── Defaults ──────────────────────────────────

pub const DEFAULT_PARTNER_WEIGHT: f64 = 0.5;
pub const DEFAULT_POLITICAL_WEIGHT: f64 = 0.5;
/// No constraint must not suppress the score.
pub const DEFAULT_CONSTRAINT_WEIGHT: f64 = 1.0;
pub const DEFAULT_INTENSITY_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_URGENCY_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_REGIONAL_MULTIPLIER: f64 = 1.0;
/// Weight of a primary threat that is not in the region's catalog.  A raw
/// severity rather than a neutral multiplier, so partially specified
/// assessments still score above zero.
pub const DEFAULT_PRIMARY_THREAT_WEIGHT: f64 = 3.0;
/// Midpoint of the 1–5 capability scale.
pub const DEFAULT_CAPABILITY_SCORE: u8 = 3;
pub const MIN_CAPABILITY_SCORE: u8 = 1;
pub const MAX_CAPABILITY_SCORE: u8 = 5;

// ───────────────────────────── Entry types ───────────────────────────────

/// Common shape of every coded table row.
pub trait TableEntry {
    fn code(&self) -> &str;
    fn label(&self) -> &'static str;
}

/// Code → label + weight (partner types, political constraints).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedOption {
    pub code: &'static str,
    pub label: &'static str,
    pub weight: f64,
}

/// Political relationship with its stability tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relationship {
    pub code: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub stability: &'static str,
}

/// Code → label + multiplier (threat intensity, urgency).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierOption {
    pub code: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
}

/// Capability tier.  The value doubles as the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityLevel {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiplomaticObjective {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub priority: &'static str,
}

/// One entry of a region's threat catalog.  Weights are region-specific.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatDefinition {
    pub code: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub primary: bool,
}

impl ThreatDefinition {
    /// Label without its parenthesised qualifier, e.g.
    /// `"State-Level Aggression (Primary)"` → `"State-Level Aggression"`.
    pub fn short_label(&self) -> &'static str {
        let label = self.label;
        label.split('(').next().unwrap_or(label).trim()
    }
}

/// Strategic priority assigned to a regional bureau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategicPriority {
    Critical,
    High,
    MediumHigh,
    Medium,
}

impl StrategicPriority {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Critical => 1.2,
            Self::High => 1.0,
            Self::MediumHigh => 0.9,
            Self::Medium => 0.8,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::MediumHigh => "medium-high",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for StrategicPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub strategic_priority: StrategicPriority,
    /// Threat codes the bureau flags as its headline concerns.
    pub default_threats: &'static [&'static str],
    pub countries: &'static [&'static str],
}

macro_rules! table_entry {
    ($ty:ty, $code:ident, $label:ident) => {
        impl TableEntry for $ty {
            fn code(&self) -> &str {
                self.$code
            }
            fn label(&self) -> &'static str {
                self.$label
            }
        }
    };
}

table_entry!(WeightedOption, code, label);
table_entry!(Relationship, code, label);
table_entry!(MultiplierOption, code, label);
table_entry!(DiplomaticObjective, id, name);
table_entry!(ThreatDefinition, code, label);
table_entry!(Region, code, name);

// ───────────────────────────── Lookups ───────────────────────────────────

/// Exact-code lookup in any reference table.
pub fn lookup<T: TableEntry>(table: &'static [T], code: &str) -> Option<&'static T> {
    table.iter().find(|entry| entry.code() == code)
}

/// Look up `code` and project a value out of it, or fall back to `default`.
fn resolve_or<T: TableEntry>(
    table: &'static [T],
    code: &str,
    what: &str,
    default: f64,
    value: impl Fn(&T) -> f64,
) -> f64 {
    match lookup(table, code) {
        Some(entry) => value(entry),
        None => {
            debug!("Unknown {what} {code:?} – using default {default}");
            default
        }
    }
}

pub fn region(code: &str) -> Option<&'static Region> {
    lookup(REGIONS, code)
}

/// Countries of a region in display order; empty for an unknown region.
pub fn countries_for(region_code: &str) -> &'static [&'static str] {
    region(region_code).map_or(&[], |r| r.countries)
}

pub fn region_has_country(region_code: &str, country: &str) -> bool {
    countries_for(region_code).iter().any(|c| *c == country)
}

pub fn partner_weight(code: &str) -> f64 {
    resolve_or(PARTNER_TYPES, code, "partner type", DEFAULT_PARTNER_WEIGHT, |p| p.weight)
}

pub fn political_weight(code: &str) -> f64 {
    resolve_or(
        POLITICAL_RELATIONSHIPS,
        code,
        "political relationship",
        DEFAULT_POLITICAL_WEIGHT,
        |r| r.weight,
    )
}

pub fn constraint_weight(code: &str) -> f64 {
    resolve_or(
        POLITICAL_CONSTRAINTS,
        code,
        "political constraint",
        DEFAULT_CONSTRAINT_WEIGHT,
        |c| c.weight,
    )
}

pub fn intensity_multiplier(code: &str) -> f64 {
    resolve_or(
        THREAT_INTENSITY,
        code,
        "threat intensity",
        DEFAULT_INTENSITY_MULTIPLIER,
        |i| i.multiplier,
    )
}

pub fn urgency_multiplier(code: &str) -> f64 {
    resolve_or(URGENCY_LEVELS, code, "urgency", DEFAULT_URGENCY_MULTIPLIER, |u| {
        u.multiplier
    })
}

/// Multiplier for the region's strategic priority, 1.0 for unknown regions.
pub fn regional_multiplier(region_code: &str) -> f64 {
    match region(region_code) {
        Some(r) => r.strategic_priority.multiplier(),
        None => {
            debug!(
                "Unknown region {region_code:?} – using default multiplier \
                 {DEFAULT_REGIONAL_MULTIPLIER}"
            );
            DEFAULT_REGIONAL_MULTIPLIER
        }
    }
}

/// Clamp a raw capability reading onto the 1–5 scale, defaulting to the
/// midpoint for anything missing or out of range.
pub fn capability_score(raw: Option<i64>) -> u8 {
    match raw {
        Some(v)
            if (i64::from(MIN_CAPABILITY_SCORE)..=i64::from(MAX_CAPABILITY_SCORE))
                .contains(&v) =>
        {
            v as u8
        }
        other => {
            debug!("Capability reading {other:?} – using default {DEFAULT_CAPABILITY_SCORE}");
            DEFAULT_CAPABILITY_SCORE
        }
    }
}

pub fn capability_level(score: u8) -> Option<&'static CapabilityLevel> {
    CAPABILITY_LEVELS.iter().find(|c| c.value == score)
}
