use crate::reference::{
    CapabilityLevel, DiplomaticObjective, MultiplierOption, Region, Relationship,
    StrategicPriority, WeightedOption,
};

const fn weighted(code: &'static str, label: &'static str, weight: f64) -> WeightedOption {
    WeightedOption {
        code,
        label,
        weight,
    }
}

const fn relationship(
    code: &'static str,
    label: &'static str,
    weight: f64,
    stability: &'static str,
) -> Relationship {
    Relationship {
        code,
        label,
        weight,
        stability,
    }
}

const fn multiplier(code: &'static str, label: &'static str, multiplier: f64) -> MultiplierOption {
    MultiplierOption {
        code,
        label,
        multiplier,
    }
}

const fn objective(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    priority: &'static str,
) -> DiplomaticObjective {
    DiplomaticObjective {
        id,
        name,
        category,
        priority,
    }
}

// ───────────────────────── Regional bureaus ──────────────────────────────

/// State Department regional bureaus, in display order.
pub const REGIONS: &[Region] = &[
    Region {
        code: "eur",
        name: "Europe and Eurasia (EUR)",
        strategic_priority: StrategicPriority::Critical,
        default_threats: &["state-aggression", "hybrid-warfare", "cyber-attacks"],
        countries: &[
            "Albania", "Armenia", "Austria", "Azerbaijan", "Belarus", "Belgium",
            "Bosnia and Herzegovina", "Bulgaria", "Croatia", "Cyprus", "Czech Republic",
            "Denmark", "Estonia", "Finland", "France", "Georgia", "Germany", "Greece",
            "Hungary", "Iceland", "Ireland", "Italy", "Kazakhstan", "Kosovo", "Kyrgyzstan",
            "Latvia", "Lithuania", "Luxembourg", "Malta", "Moldova", "Montenegro",
            "Netherlands", "North Macedonia", "Norway", "Poland", "Portugal", "Romania",
            "Russia", "Serbia", "Slovakia", "Slovenia", "Spain", "Sweden", "Switzerland",
            "Tajikistan", "Turkey", "Turkmenistan", "Ukraine", "United Kingdom", "Uzbekistan",
        ],
    },
    Region {
        code: "eap",
        name: "East Asia and Pacific (EAP)",
        strategic_priority: StrategicPriority::Critical,
        default_threats: &["state-aggression", "maritime-disputes", "cyber-attacks"],
        countries: &[
            "Australia", "Brunei", "Cambodia", "China", "Fiji", "Indonesia", "Japan",
            "Kiribati", "Laos", "Malaysia", "Marshall Islands", "Micronesia", "Mongolia",
            "Myanmar", "Nauru", "New Zealand", "North Korea", "Palau", "Papua New Guinea",
            "Philippines", "Samoa", "Singapore", "Solomon Islands", "South Korea", "Taiwan",
            "Thailand", "Timor-Leste", "Tonga", "Tuvalu", "Vanuatu", "Vietnam",
        ],
    },
    Region {
        code: "nea",
        name: "Near East Affairs (NEA)",
        strategic_priority: StrategicPriority::High,
        default_threats: &["terrorism", "state-aggression", "instability"],
        countries: &[
            "Algeria", "Bahrain", "Egypt", "Iran", "Iraq", "Israel", "Jordan", "Kuwait",
            "Lebanon", "Libya", "Morocco", "Oman", "Palestine", "Qatar", "Saudi Arabia",
            "Syria", "Tunisia", "United Arab Emirates", "Yemen",
        ],
    },
    Region {
        code: "sca",
        name: "South and Central Asia (SCA)",
        strategic_priority: StrategicPriority::High,
        default_threats: &["terrorism", "state-aggression", "instability"],
        countries: &[
            "Afghanistan", "Bangladesh", "Bhutan", "India", "Maldives", "Nepal", "Pakistan",
            "Sri Lanka",
        ],
    },
    Region {
        code: "af",
        name: "African Affairs (AF)",
        strategic_priority: StrategicPriority::MediumHigh,
        default_threats: &["terrorism", "instability", "transnational-crime"],
        countries: &[
            "Angola", "Benin", "Botswana", "Burkina Faso", "Burundi", "Cabo Verde", "Cameroon",
            "Central African Republic", "Chad", "Comoros", "Congo",
            "Democratic Republic of the Congo", "Djibouti", "Equatorial Guinea", "Eritrea",
            "Eswatini", "Ethiopia", "Gabon", "Gambia", "Ghana", "Guinea", "Guinea-Bissau",
            "Ivory Coast", "Kenya", "Lesotho", "Liberia", "Madagascar", "Malawi", "Mali",
            "Mauritania", "Mauritius", "Mozambique", "Namibia", "Niger", "Nigeria", "Rwanda",
            "Sao Tome and Principe", "Senegal", "Seychelles", "Sierra Leone", "Somalia",
            "South Africa", "South Sudan", "Sudan", "Tanzania", "Togo", "Uganda", "Zambia",
            "Zimbabwe",
        ],
    },
    Region {
        code: "wha",
        name: "Western Hemisphere Affairs (WHA)",
        strategic_priority: StrategicPriority::Medium,
        default_threats: &["transnational-crime", "instability", "cyber-attacks"],
        countries: &[
            "Antigua and Barbuda", "Argentina", "Bahamas", "Barbados", "Belize", "Bolivia",
            "Brazil", "Canada", "Chile", "Colombia", "Costa Rica", "Cuba", "Dominica",
            "Dominican Republic", "Ecuador", "El Salvador", "Grenada", "Guatemala", "Guyana",
            "Haiti", "Honduras", "Jamaica", "Mexico", "Nicaragua", "Panama", "Paraguay", "Peru",
            "Saint Kitts and Nevis", "Saint Lucia", "Saint Vincent and the Grenadines",
            "Suriname", "Trinidad and Tobago", "Uruguay", "Venezuela",
        ],
    },
];

// ───────────────────────── Partner relationship ──────────────────────────

/// Partnership types, strongest commitment first.
pub const PARTNER_TYPES: &[WeightedOption] = &[
    weighted("nato-ally", "NATO Article 5 Ally", 1.0),
    weighted("treaty-ally", "Bilateral Treaty Ally", 0.95),
    weighted("major-non-nato-ally", "Major Non-NATO Ally (MNNA)", 0.9),
    weighted("strategic-defense-partner", "Strategic Defense Partner", 0.85),
    weighted("close-security-partner", "Close Security Partner", 0.8),
    weighted("intel-sharing-partner", "Intelligence Sharing Partner", 0.75),
    weighted("regional-security-partner", "Regional Security Partner", 0.7),
    weighted("capacity-building-partner", "Capacity Building Partner", 0.65),
    weighted("coalition-partner", "Coalition/Contingency Partner", 0.6),
    weighted("emerging-partner", "Emerging Security Partner", 0.55),
    weighted("transitional-partner", "Transitional Relationship", 0.5),
    weighted("limited-cooperation", "Limited Security Cooperation", 0.45),
    weighted("humanitarian-partner", "Humanitarian/Disaster Response Partner", 0.4),
    weighted("conditional-engagement", "Conditional Engagement", 0.35),
    weighted("minimal-engagement", "Minimal Engagement", 0.3),
];

pub const POLITICAL_RELATIONSHIPS: &[Relationship] = &[
    relationship(
        "strategic-alliance",
        "Strategic Alliance - Comprehensive Partnership",
        1.0,
        "very-high",
    ),
    relationship(
        "close-partnership",
        "Close Partnership - Strong Bilateral Ties",
        0.95,
        "high",
    ),
    relationship(
        "cooperative-partnership",
        "Cooperative Partnership - Regular Engagement",
        0.85,
        "high",
    ),
    relationship(
        "functional-cooperation",
        "Functional Cooperation - Issue-Based",
        0.75,
        "moderate",
    ),
    relationship(
        "constructive-engagement",
        "Constructive Engagement - Building Relations",
        0.7,
        "moderate",
    ),
    relationship(
        "normalized-relations",
        "Normalized Relations - Standard Diplomacy",
        0.65,
        "moderate",
    ),
    relationship(
        "cautious-engagement",
        "Cautious Engagement - Limited Trust",
        0.55,
        "moderate-low",
    ),
    relationship(
        "transactional",
        "Transactional - Specific Issue Focus",
        0.5,
        "variable",
    ),
    relationship(
        "strained-relations",
        "Strained Relations - Political Tensions",
        0.4,
        "low",
    ),
    relationship(
        "minimal-contact",
        "Minimal Contact - Very Limited Engagement",
        0.3,
        "low",
    ),
    relationship("adversarial", "Adversarial - Competing Interests", 0.2, "very-low"),
];

pub const DIPLOMATIC_OBJECTIVES: &[DiplomaticObjective] = &[
    objective(
        "democratic-governance",
        "Democratic Governance & Rule of Law",
        "governance",
        "high",
    ),
    objective("human-rights", "Human Rights & Civil Liberties", "values", "high"),
    objective(
        "regional-stability",
        "Regional Stability & Conflict Prevention",
        "security",
        "critical",
    ),
    objective(
        "counter-influence",
        "Counter Malign External Influence",
        "strategic-competition",
        "high",
    ),
    objective(
        "economic-integration",
        "Economic Integration & Trade Relations",
        "economic",
        "medium",
    ),
    objective("energy-cooperation", "Energy Security & Cooperation", "economic", "medium"),
    objective(
        "multilateral-engagement",
        "Multilateral Institution Participation",
        "institutional",
        "medium",
    ),
    objective(
        "crisis-management",
        "Crisis Management & Response Capacity",
        "security",
        "high",
    ),
    objective(
        "migration-cooperation",
        "Migration & Border Management",
        "transnational",
        "medium",
    ),
    objective(
        "nuclear-nonproliferation",
        "Nuclear Nonproliferation & Disarmament",
        "security",
        "critical",
    ),
    objective(
        "climate-cooperation",
        "Climate Change & Environmental Security",
        "global-challenges",
        "medium",
    ),
    objective(
        "technology-standards",
        "Technology Standards & Digital Governance",
        "technological",
        "high",
    ),
];

pub const POLITICAL_CONSTRAINTS: &[WeightedOption] = &[
    weighted("none", "No Significant Political Constraints", 1.0),
    weighted("domestic-opposition", "Domestic Political Opposition", 0.85),
    weighted("legislative-restrictions", "Legislative/Congressional Restrictions", 0.7),
    weighted("human-rights-concerns", "Human Rights & Governance Concerns", 0.65),
    weighted("corruption-issues", "Corruption & Transparency Issues", 0.75),
    weighted("regional-sensitivities", "Regional Political Sensitivities", 0.8),
    weighted("alliance-concerns", "Alliance Partner Concerns", 0.7),
    weighted("public-opinion", "U.S. Public Opinion Constraints", 0.8),
    weighted("legal-sanctions", "Legal Sanctions & Restrictions", 0.5),
    weighted("election-cycle", "Election Cycle Considerations", 0.9),
];

// ───────────────────────── Threat environment ────────────────────────────

pub const THREAT_INTENSITY: &[MultiplierOption] = &[
    multiplier("existential", "Existential - Threatens State Survival", 2.0),
    multiplier(
        "critical-imminent",
        "Critical & Imminent - Active Military Operations",
        1.8,
    ),
    multiplier(
        "critical-persistent",
        "Critical & Persistent - Sustained High-Level Threat",
        1.6,
    ),
    multiplier("severe", "Severe - Major Security Challenge", 1.4),
    multiplier("substantial", "Substantial - Significant Ongoing Threat", 1.2),
    multiplier(
        "moderate-active",
        "Moderate-Active - Regular Security Incidents",
        1.0,
    ),
    multiplier(
        "moderate-latent",
        "Moderate-Latent - Potential for Escalation",
        0.9,
    ),
    multiplier(
        "low-persistent",
        "Low-Persistent - Manageable Ongoing Concern",
        0.8,
    ),
    multiplier("minimal", "Minimal - Limited Security Impact", 0.6),
    multiplier("negligible", "Negligible - Very Low Current Risk", 0.4),
];

pub const URGENCY_LEVELS: &[MultiplierOption] = &[
    multiplier("immediate", "Immediate (0-6 months)", 2.0),
    multiplier("short-term", "Short Term (6-18 months)", 1.5),
    multiplier("medium-term", "Medium Term (1.5-3 years)", 1.0),
    multiplier("long-term", "Long Term (3+ years)", 0.8),
];

// ───────────────────────────── Capability ────────────────────────────────

pub const CAPABILITY_LEVELS: &[CapabilityLevel] = &[
    CapabilityLevel {
        value: 5,
        label: "Advanced - Regional Leader",
    },
    CapabilityLevel {
        value: 4,
        label: "Proficient - Above Average",
    },
    CapabilityLevel {
        value: 3,
        label: "Developing - Average",
    },
    CapabilityLevel {
        value: 2,
        label: "Basic - Below Average",
    },
    CapabilityLevel {
        value: 1,
        label: "Minimal - Significant Gaps",
    },
];
