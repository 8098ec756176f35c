use tracing::debug;

use crate::reference::{ThreatDefinition, lookup};

const fn threat(code: &'static str, label: &'static str, weight: f64) -> ThreatDefinition {
    ThreatDefinition {
        code,
        label,
        weight,
        primary: false,
    }
}

const fn primary(code: &'static str, label: &'static str, weight: f64) -> ThreatDefinition {
    ThreatDefinition {
        code,
        label,
        weight,
        primary: true,
    }
}

/// Threat catalog per regional bureau.  **Order matters** – it is the
/// order options are offered to the assessor, headline threats first.
///
/// Codes repeat across regions with region-specific weights, so a threat
/// weight must always be read through the assessed region's own catalog.
pub const REGIONAL_THREATS: &[(&str, &[ThreatDefinition])] = &[
    // ── Europe and Eurasia ─────────────────────────────────────────────
    (
        "eur",
        &[
            primary("state-aggression", "State-Level Aggression (Primary)", 5.0),
            threat("hybrid-warfare", "Hybrid Warfare Operations", 4.5),
            threat("cyber-attacks", "Cyber Warfare & Infrastructure Attacks", 4.5),
            threat("terrorism", "Terrorist Organizations", 3.5),
            threat("organized-crime", "Transnational Organized Crime", 3.0),
        ],
    ),
    // ── East Asia and Pacific ──────────────────────────────────────────
    (
        "eap",
        &[
            primary("state-aggression", "State-Level Aggression (Primary)", 5.0),
            primary(
                "maritime-disputes",
                "Maritime Territorial Disputes (Primary)",
                4.5,
            ),
            threat("cyber-attacks", "Cyber Warfare & Critical Infrastructure", 4.5),
            threat("terrorism", "Terrorist Organizations & Extremism", 3.5),
        ],
    ),
    // ── Near East ──────────────────────────────────────────────────────
    (
        "nea",
        &[
            primary("terrorism", "Terrorist Organizations (Primary)", 5.0),
            primary(
                "sectarian-conflict",
                "Sectarian Violence & Proxy Conflicts",
                4.5,
            ),
            threat("state-aggression", "State-Level Aggression", 4.5),
            threat("instability", "Regional Instability & State Collapse", 4.0),
        ],
    ),
    // ── South and Central Asia ─────────────────────────────────────────
    (
        "sca",
        &[
            primary("terrorism", "Terrorist Organizations (Primary)", 5.0),
            primary("insurgency", "Insurgency & Militant Groups", 4.5),
            threat("state-aggression", "State-Level Aggression", 4.0),
            threat("instability", "Regional Instability", 3.5),
        ],
    ),
    // ── Africa ─────────────────────────────────────────────────────────
    (
        "af",
        &[
            primary("terrorism", "Terrorist Organizations (Primary)", 5.0),
            primary(
                "instability",
                "Political Instability & Governance Failure",
                4.5,
            ),
            threat("organized-crime", "Transnational Criminal Networks", 4.0),
            threat("ethnic-conflict", "Ethnic & Tribal Conflicts", 3.0),
        ],
    ),
    // ── Western Hemisphere ─────────────────────────────────────────────
    (
        "wha",
        &[
            primary(
                "drug-cartels",
                "Drug Cartels & Trafficking Organizations (Primary)",
                5.0,
            ),
            primary("organized-crime", "Transnational Organized Crime", 4.5),
            threat("corruption", "Institutional Corruption & Governance", 4.0),
            threat("terrorism", "Terrorist Organizations", 2.5),
        ],
    ),
];

/// Ordered threat catalog of a region.  Unknown regions get an empty slice.
pub fn threats_for(region_code: &str) -> &'static [ThreatDefinition] {
    match REGIONAL_THREATS
        .iter()
        .find(|(code, _)| *code == region_code)
    {
        Some(&(_, catalog)) => catalog,
        None => {
            debug!("No threat catalog for region {region_code:?}");
            &[]
        }
    }
}

/// Resolve a threat code through the region's own catalog.
pub fn threat_in_region(region_code: &str, threat_code: &str) -> Option<&'static ThreatDefinition> {
    lookup(threats_for(region_code), threat_code)
}
