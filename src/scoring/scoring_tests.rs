// ─────────────────────────────── Tests ───────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::assessment::{Assessment, CapabilityInput};
    use crate::reference::{REGIONS, THREAT_INTENSITY, threats_for};
    use crate::scoring::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// EUR NATO ally under imminent state aggression, weak on all three
    /// capability axes.
    fn eur_frontline() -> Assessment {
        Assessment {
            regional_bureau: "eur".into(),
            country: "Estonia".into(),
            partner_type: "nato-ally".into(),
            political_relationship: "strategic-alliance".into(),
            political_constraints: "none".into(),
            primary_threat: "state-aggression".into(),
            secondary_threat: None,
            threat_intensity: "critical-imminent".into(),
            urgency: "immediate".into(),
            military_capability: Some(CapabilityInput::Level(2)),
            institutional_strength: Some(CapabilityInput::Level(2)),
            resource_capacity: Some(CapabilityInput::Level(2)),
            ..Default::default()
        }
    }

    // ── Worked scenarios ──

    #[test]
    fn single_threat_scenario() {
        let (score, b) = score(&eur_frontline());
        assert_eq!(b.partner_weight, 1.0);
        assert_eq!(b.political_weight, 1.0);
        assert_eq!(b.constraint_weight, 1.0);
        assert_eq!(b.primary_threat_weight, 5.0);
        assert_eq!(b.secondary_threat_weight, 0.0);
        assert_eq!(b.threat_multiplier, 1.0);
        assert_eq!(b.intensity_multiplier, 1.8);
        assert_eq!(b.urgency_multiplier, 2.0);
        assert_eq!(b.regional_multiplier, 1.2);
        assert!(approx(b.capability_gap, 0.6));
        assert_eq!(b.capability_gap_pct, 60);
        assert!(approx(b.base_score, 12.96));
        assert_eq!(score, 78);
    }

    #[test]
    fn multi_threat_scenario_clamps_to_100() {
        let a = Assessment {
            secondary_threat: Some("hybrid-warfare".into()),
            ..eur_frontline()
        };
        let (score, b) = score(&a);
        assert!(approx(b.secondary_threat_weight, 2.7));
        assert!(approx(b.combined_threat_weight, 7.7));
        assert_eq!(b.threat_multiplier, 1.15);
        assert!(b.base_score * DEFAULT_SCORE_SCALE > 100.0);
        assert_eq!(score, 100);
    }

    #[test]
    fn empty_assessment_uses_every_default() {
        let (score, b) = score(&Assessment::default());
        assert_eq!(b.primary_threat_weight, 3.0);
        assert_eq!(b.secondary_threat_weight, 0.0);
        assert_eq!(b.threat_multiplier, 1.0);
        assert_eq!(b.partner_weight, 0.5);
        assert_eq!(b.political_weight, 0.5);
        assert_eq!(b.constraint_weight, 1.0);
        assert_eq!(b.intensity_multiplier, 1.0);
        assert_eq!(b.urgency_multiplier, 1.0);
        assert_eq!(b.regional_multiplier, 1.0);
        assert_eq!(
            (b.military_score, b.institutional_score, b.resource_score),
            (3, 3, 3)
        );
        assert!(approx(b.capability_gap, 0.4));
        // 3 × 0.4 × 0.5 × 0.5 = 0.3 → 1.8 → 2
        assert!(approx(b.base_score, 0.3));
        assert_eq!(score, 2);
    }

    #[test]
    fn unknown_region_still_scores() {
        let a = Assessment {
            regional_bureau: "arctic".into(),
            ..eur_frontline()
        };
        let (score, b) = score(&a);
        assert_eq!(b.primary_threat_weight, 3.0);
        assert_eq!(b.regional_multiplier, 1.0);
        // 3 × 1.8 × 2.0 × 0.6 = 6.48 → 38.88
        assert_eq!(score, 39);
    }

    #[test]
    fn primary_weight_resolves_through_own_region() {
        let nea = Assessment {
            regional_bureau: "nea".into(),
            ..eur_frontline()
        };
        let (_, b) = score(&nea);
        assert_eq!(b.primary_threat_weight, 4.5);
        assert_eq!(b.regional_multiplier, 1.0);

        // AF has no state-aggression entry at all.
        let af = Assessment {
            regional_bureau: "af".into(),
            ..eur_frontline()
        };
        let (_, b) = score(&af);
        assert_eq!(b.primary_threat_weight, 3.0);
    }

    #[test]
    fn secondary_outside_region_adds_nothing_but_keeps_multiplier() {
        let a = Assessment {
            secondary_threat: Some("drug-cartels".into()),
            ..eur_frontline()
        };
        let (_, b) = score(&a);
        assert_eq!(b.secondary_threat_weight, 0.0);
        assert_eq!(b.combined_threat_weight, 5.0);
        assert_eq!(b.threat_multiplier, 1.15);
    }

    #[test]
    fn secondary_repeating_primary_is_not_a_second_threat() {
        let a = Assessment {
            secondary_threat: Some("state-aggression".into()),
            ..eur_frontline()
        };
        assert_eq!(score(&a), score(&eur_frontline()));
    }

    #[test]
    fn full_capability_scores_zero() {
        let a = Assessment {
            military_capability: Some(CapabilityInput::Level(5)),
            institutional_strength: Some(CapabilityInput::Level(5)),
            resource_capacity: Some(CapabilityInput::Level(5)),
            ..eur_frontline()
        };
        let (score, b) = score(&a);
        assert_eq!(b.capability_gap, 0.0);
        assert_eq!(score, 0);
    }

    // ── Properties ──

    #[test]
    fn score_stays_in_range_across_the_tables() {
        for region in REGIONS {
            for threat in threats_for(region.code) {
                for intensity in THREAT_INTENSITY {
                    for cap in 1..=5u8 {
                        let a = Assessment {
                            regional_bureau: region.code.into(),
                            primary_threat: threat.code.into(),
                            threat_intensity: intensity.code.into(),
                            urgency: "immediate".into(),
                            military_capability: Some(CapabilityInput::from(cap)),
                            institutional_strength: Some(CapabilityInput::Level(1)),
                            resource_capacity: Some(CapabilityInput::Level(1)),
                            ..Default::default()
                        };
                        let (score, _) = score(&a);
                        assert!(score <= MAX_PRIORITY_SCORE);
                    }
                }
            }
        }
    }

    #[test]
    fn higher_intensity_never_lowers_the_score() {
        let mut levels: Vec<_> = THREAT_INTENSITY.iter().collect();
        levels.sort_by(|a, b| a.multiplier.total_cmp(&b.multiplier));

        let mut previous = 0;
        for level in levels {
            let a = Assessment {
                threat_intensity: level.code.into(),
                urgency: "medium-term".into(),
                ..eur_frontline()
            };
            let (score, _) = score(&a);
            assert!(score >= previous, "{} dropped the score", level.code);
            previous = score;
        }
    }

    #[test]
    fn more_capability_never_raises_the_score() {
        // Raise one axis at a time so the combined capability only grows.
        let mut caps = [1u8, 1, 1];
        let mut previous = u8::MAX;
        for axis in 0..3 {
            for level in 1..=5u8 {
                caps[axis] = level;
                let a = Assessment {
                    urgency: "long-term".into(),
                    threat_intensity: "moderate-active".into(),
                    military_capability: Some(CapabilityInput::from(caps[0])),
                    institutional_strength: Some(CapabilityInput::from(caps[1])),
                    resource_capacity: Some(CapabilityInput::from(caps[2])),
                    ..eur_frontline()
                };
                let (score, _) = score(&a);
                assert!(score <= previous, "{caps:?} raised the score");
                previous = score;
            }
        }
    }

    #[test]
    fn secondary_threat_never_lowers_combined_weight() {
        for region in REGIONS {
            let catalog = threats_for(region.code);
            for primary in catalog {
                let base = Assessment {
                    regional_bureau: region.code.into(),
                    primary_threat: primary.code.into(),
                    ..Default::default()
                };
                let (_, without) = score(&base);
                for secondary in catalog.iter().filter(|t| t.code != primary.code) {
                    let a = Assessment {
                        secondary_threat: Some(secondary.code.into()),
                        ..base.clone()
                    };
                    let (_, with) = score(&a);
                    assert!(with.combined_threat_weight >= without.combined_threat_weight);
                }
            }
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = Assessment {
            secondary_threat: Some("cyber-attacks".into()),
            ..eur_frontline()
        };
        let (s1, b1) = score(&a);
        let (s2, b2) = score(&a);
        assert_eq!(s1, s2);
        assert_eq!(b1.base_score.to_bits(), b2.base_score.to_bits());
        assert_eq!(b1, b2);
    }

    // ── Config ──

    #[test]
    fn config_defaults() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.score_scale, 6.0);
        assert_eq!(cfg.secondary_discount, 0.6);
        assert_eq!(cfg.multi_threat_multiplier, 1.15);
        assert_eq!(ScoringConfig::from_lookup(|_| None), cfg);
    }

    #[test]
    fn config_from_lookup_overrides_and_rejects_garbage() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SCORE_SCALE", "3"),
            ("SECONDARY_THREAT_DISCOUNT", "abc"),
            ("MULTI_THREAT_MULTIPLIER", "-1"),
        ]);
        let cfg = ScoringConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.score_scale, 3.0);
        assert_eq!(cfg.secondary_discount, DEFAULT_SECONDARY_THREAT_DISCOUNT);
        assert_eq!(cfg.multi_threat_multiplier, DEFAULT_MULTI_THREAT_MULTIPLIER);
    }

    #[test]
    fn custom_scale_changes_only_the_final_step() {
        let cfg = ScoringConfig {
            score_scale: 3.0,
            ..Default::default()
        };
        let (score, b) = score_with(&eur_frontline(), &cfg);
        // 12.96 × 3 = 38.88
        assert_eq!(score, 39);
        assert!(approx(b.base_score, 12.96));
    }
}
