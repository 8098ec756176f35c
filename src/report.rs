//! Plain-text rendering of an assessment and its result, laid out like the
//! results screen of the questionnaire.

use crate::assessment::{Assessment, CapabilityInput};
use crate::recommend::AssessmentResult;
use crate::reference::{
    self, DIPLOMATIC_OBJECTIVES, MAX_CAPABILITY_SCORE, PARTNER_TYPES, POLITICAL_CONSTRAINTS,
    POLITICAL_RELATIONSHIPS, THREAT_INTENSITY, TableEntry, URGENCY_LEVELS, capability_level,
    lookup, threat_in_region,
};

/// Shown for any code the reference tables do not know.
pub const PLACEHOLDER: &str = "—";

fn label_of<T: TableEntry + 'static>(table: &'static [T], code: &str) -> &'static str {
    lookup(table, code).map_or(PLACEHOLDER, |entry| entry.label())
}

/// Full catalog label, qualifier included.
fn threat_display(region_code: &str, threat_code: &str) -> &'static str {
    threat_in_region(region_code, threat_code).map_or(PLACEHOLDER, |t| t.label)
}

/// Level label of a submitted capability, [`PLACEHOLDER`] when it was
/// absent or did not read as a value on the 1–5 scale.
fn capability_display(input: Option<&CapabilityInput>) -> &'static str {
    input
        .and_then(CapabilityInput::reading)
        .and_then(|v| u8::try_from(v).ok())
        .and_then(capability_level)
        .map_or(PLACEHOLDER, |level| level.label)
}

fn objectives_display(assessment: &Assessment) -> String {
    if assessment.diplomatic_objectives.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    assessment
        .diplomatic_objectives
        .iter()
        .map(|id| label_of(DIPLOMATIC_OBJECTIVES, id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_placeholder(s: &str) -> &str {
    let s = s.trim();
    if s.is_empty() { PLACEHOLDER } else { s }
}

/// Render the full report.  Never fails; unknown codes show as [`PLACEHOLDER`].
pub fn render_report(assessment: &Assessment, result: &AssessmentResult) -> String {
    let region_code = assessment.regional_bureau.as_str();
    let region = reference::region(region_code);
    let b = &result.breakdown;

    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "PARTNER ASSESSMENT: {}\n",
        or_placeholder(&assessment.country)
    ));
    match region {
        Some(r) => out.push_str(&format!(
            "Region: {} · strategic priority {}\n",
            r.name, r.strategic_priority
        )),
        None => out.push_str(&format!("Region: {PLACEHOLDER}\n")),
    }
    out.push_str("═══\n");

    // Summary
    out.push_str("Assessment summary\n");
    out.push_str(&format!(
        "  Partnership type:      {}\n",
        label_of(PARTNER_TYPES, &assessment.partner_type)
    ));
    match lookup(POLITICAL_RELATIONSHIPS, &assessment.political_relationship) {
        Some(r) => out.push_str(&format!(
            "  Political relationship: {} (stability: {})\n",
            r.label, r.stability
        )),
        None => out.push_str(&format!("  Political relationship: {PLACEHOLDER}\n")),
    }
    out.push_str(&format!(
        "  Political constraints: {}\n",
        label_of(POLITICAL_CONSTRAINTS, &assessment.political_constraints)
    ));
    out.push_str(&format!(
        "  Diplomatic objectives: {}\n",
        objectives_display(assessment)
    ));
    out.push_str(&format!(
        "  Primary threat:        {}\n",
        threat_display(region_code, &assessment.primary_threat)
    ));
    if let Some(secondary) = assessment.secondary_threat() {
        out.push_str(&format!(
            "  Secondary threat:      {}\n",
            threat_display(region_code, secondary)
        ));
    }
    out.push_str(&format!(
        "  Threat intensity:      {}\n",
        label_of(THREAT_INTENSITY, &assessment.threat_intensity)
    ));
    out.push_str(&format!(
        "  Urgency:               {}\n",
        label_of(URGENCY_LEVELS, &assessment.urgency)
    ));

    // Capabilities
    out.push_str("Capability assessment\n");
    for (name, input, score) in [
        ("Military", assessment.military_capability.as_ref(), b.military_score),
        ("Institutional", assessment.institutional_strength.as_ref(), b.institutional_score),
        ("Resources", assessment.resource_capacity.as_ref(), b.resource_score),
    ] {
        out.push_str(&format!(
            "  {name:<14} {} ({score}/{MAX_CAPABILITY_SCORE})\n",
            capability_display(input)
        ));
    }
    out.push_str("═══\n");

    // Outcome
    out.push_str(&format!(
        "PRIORITY SCORE: {}/100 · {}\n",
        result.priority_score, result.recommendation_type
    ));
    out.push_str(&result.rationale);
    out.push('\n');

    out.push_str("Recommended actions\n");
    for (idx, action) in result.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {action}\n", idx + 1));
    }

    out.push_str("Regional considerations\n");
    for item in &result.considerations {
        out.push_str(&format!("  • {item}\n"));
    }

    // Breakdown
    out.push_str("Scoring breakdown\n");
    out.push_str(&format!(
        "  Threat weight: {:.2} (primary {:.2} + secondary {:.2}) × {:.2}\n",
        b.combined_threat_weight,
        b.primary_threat_weight,
        b.secondary_threat_weight,
        b.threat_multiplier
    ));
    out.push_str(&format!(
        "  Intensity × urgency: {:.2} × {:.2}\n",
        b.intensity_multiplier, b.urgency_multiplier
    ));
    out.push_str(&format!("  Capability gap: {}%\n", b.capability_gap_pct));
    out.push_str(&format!(
        "  Partner {:.2} · political {:.2} · constraints {:.2} · regional {:.2}\n",
        b.partner_weight, b.political_weight, b.constraint_weight, b.regional_multiplier
    ));
    out.push_str(&format!("  Base score: {:.4}", b.base_score));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate;

    fn estonia() -> Assessment {
        Assessment {
            regional_bureau: "eur".into(),
            country: "Estonia".into(),
            partner_type: "nato-ally".into(),
            political_relationship: "strategic-alliance".into(),
            diplomatic_objectives: ["regional-stability".to_owned()].into(),
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
    fn renders_known_labels() {
        let a = estonia();
        let report = render_report(&a, &evaluate(&a));

        assert!(report.starts_with("PARTNER ASSESSMENT: Estonia\n"));
        assert!(report.contains("Europe and Eurasia (EUR) · strategic priority critical"));
        assert!(report.contains("NATO Article 5 Ally"));
        assert!(report.contains("(stability: very-high)"));
        assert!(report.contains("Regional Stability & Conflict Prevention"));
        assert!(report.contains("Primary threat:        State-Level Aggression (Primary)\n"));
        assert!(report.contains("due to State-Level Aggression threat and"));
        assert!(!report.contains("Secondary threat"));
        assert!(report.contains("Basic - Below Average (2/5)"));
        assert!(
            report.contains("PRIORITY SCORE: 78/100 · High Priority - Comprehensive Assistance")
        );
        assert!(report.contains("  6. Institutional capacity building for defense governance"));
        assert!(report.contains("  • NATO Article 5 implications"));
        assert!(report.contains("Capability gap: 60%"));
        assert!(report.ends_with("Base score: 12.9600"));
        assert!(!report.contains(PLACEHOLDER));
    }

    #[test]
    fn unknown_codes_render_placeholders() {
        let a = Assessment {
            regional_bureau: "arctic".into(),
            partner_type: "pen-pal".into(),
            primary_threat: "yetis".into(),
            secondary_threat: Some("walruses".into()),
            military_capability: Some("lots".into()),
            ..Default::default()
        };
        let report = render_report(&a, &evaluate(&a));

        assert!(report.starts_with(&format!("PARTNER ASSESSMENT: {PLACEHOLDER}\n")));
        assert!(report.contains(&format!("Region: {PLACEHOLDER}\n")));
        assert!(report.contains(&format!("Partnership type:      {PLACEHOLDER}\n")));
        assert!(report.contains(&format!("Political relationship: {PLACEHOLDER}\n")));
        assert!(report.contains(&format!("Diplomatic objectives: {PLACEHOLDER}\n")));
        assert!(report.contains(&format!("Primary threat:        {PLACEHOLDER}\n")));
        assert!(report.contains(&format!("Secondary threat:      {PLACEHOLDER}\n")));
        assert!(report.contains(&format!("{PLACEHOLDER} (3/5)")));
        assert!(report.contains("Regional coordination"));
    }

    #[test]
    fn unknown_objective_ids_render_placeholders() {
        let a = Assessment {
            diplomatic_objectives: ["human-rights".to_owned(), "zzz".to_owned()].into(),
            ..estonia()
        };
        let report = render_report(&a, &evaluate(&a));
        assert!(report.contains(&format!("Human Rights & Civil Liberties, {PLACEHOLDER}")));
    }
}
