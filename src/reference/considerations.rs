/// Situational talking points per region, keyed by the assessed primary
/// threat.  Regions list only the threats that have tailored guidance.
pub const STRATEGIC_CONSIDERATIONS: &[(&str, &[(&str, &[&str])])] = &[
    (
        "eur",
        &[
            (
                "state-aggression",
                &[
                    "NATO Article 5 implications",
                    "EU coordination requirements",
                    "Eastern flank reinforcement",
                ],
            ),
            (
                "hybrid-warfare",
                &[
                    "Information warfare countermeasures",
                    "Critical infrastructure protection",
                    "Democratic resilience",
                ],
            ),
            (
                "cyber-attacks",
                &[
                    "EU cyber directive compliance",
                    "NATO cyber defense integration",
                    "Public-private partnerships",
                ],
            ),
        ],
    ),
    (
        "eap",
        &[
            (
                "state-aggression",
                &[
                    "Alliance burden sharing",
                    "Maritime domain awareness",
                    "Multi-domain deterrence",
                ],
            ),
            (
                "maritime-disputes",
                &[
                    "Freedom of navigation operations",
                    "Coast guard capacity building",
                    "Maritime law enforcement",
                ],
            ),
            (
                "cyber-attacks",
                &[
                    "5G infrastructure security",
                    "Supply chain integrity",
                    "Technology standards coordination",
                ],
            ),
        ],
    ),
    (
        "nea",
        &[
            (
                "terrorism",
                &[
                    "Regional CT partnerships",
                    "Border security coordination",
                    "CVE programming",
                ],
            ),
            (
                "state-aggression",
                &[
                    "Regional balance of power",
                    "Proxy conflict management",
                    "Deterrence architecture",
                ],
            ),
            (
                "sectarian-conflict",
                &[
                    "Humanitarian crisis preparedness",
                    "Refugee management",
                    "Economic stabilization",
                ],
            ),
        ],
    ),
    (
        "sca",
        &[
            (
                "terrorism",
                &[
                    "Afghanistan lessons learned",
                    "Pakistan coordination",
                    "Regional CT frameworks",
                ],
            ),
            (
                "state-aggression",
                &[
                    "Nuclear stability",
                    "Kashmir conflict management",
                    "Great power competition",
                ],
            ),
            (
                "insurgency",
                &[
                    "Disaster preparedness",
                    "Climate security",
                    "Migration management",
                ],
            ),
        ],
    ),
    (
        "af",
        &[
            (
                "terrorism",
                &[
                    "AFRICOM coordination",
                    "French operations integration",
                    "Regional force development",
                ],
            ),
            (
                "instability",
                &[
                    "Governance strengthening",
                    "Economic development linkage",
                    "AU partnership",
                ],
            ),
            (
                "organized-crime",
                &[
                    "Maritime security (Gulf of Guinea)",
                    "Sahel security corridor",
                    "Border management",
                ],
            ),
        ],
    ),
    (
        "wha",
        &[
            (
                "drug-cartels",
                &[
                    "Drug interdiction cooperation",
                    "Anti-corruption initiatives",
                    "Border security",
                ],
            ),
            (
                "organized-crime",
                &[
                    "Migration management",
                    "Democratic governance",
                    "Economic partnerships",
                ],
            ),
            (
                "corruption",
                &[
                    "Democratic resilience",
                    "Information integrity",
                    "Economic diversification",
                ],
            ),
        ],
    ),
];

/// Used when a region/threat pair has no tailored entry.
pub const GENERIC_CONSIDERATIONS: &[&str] = &[
    "Regional coordination",
    "Partner capacity building",
    "Multilateral engagement",
];

pub fn considerations_for(region_code: &str, threat_code: &str) -> &'static [&'static str] {
    STRATEGIC_CONSIDERATIONS
        .iter()
        .find(|(region, _)| *region == region_code)
        .and_then(|(_, by_threat)| by_threat.iter().find(|(threat, _)| *threat == threat_code))
        .map_or(GENERIC_CONSIDERATIONS, |&(_, items)| items)
}
