use crate::recommend::Tier;

/// Inclusive lower bounds, checked top-down.  First match wins.
pub const TIER_THRESHOLDS: &[(u8, Tier)] = &[
    (75, Tier::High),
    (50, Tier::Medium),
    (25, Tier::Low),
    (0, Tier::NotRecommended),
];

// ───────────────────────── Recommended actions ───────────────────────────

pub const HIGH_PRIORITY_ACTIONS: &[&str] = &[
    "Multi-year Foreign Military Financing (FMF) program ($100M+ annually)",
    "Advanced military equipment transfers (subject to technology transfer approval)",
    "Extensive International Military Education and Training (IMET) programs",
    "Security Cooperation Office (SCO) establishment or expansion",
    "Joint exercises and regional security integration initiatives",
    "Institutional capacity building for defense governance",
];

pub const MEDIUM_PRIORITY_ACTIONS: &[&str] = &[
    "Targeted Foreign Military Financing ($25-75M annually)",
    "Focused equipment packages addressing priority capability gaps",
    "Professional military education and training programs",
    "Technical assistance for institutional strengthening",
    "Limited bilateral and multilateral exercise participation",
    "Security sector reform advisory support",
];

pub const LOW_PRIORITY_ACTIONS: &[&str] = &[
    "Small-scale training and education programs ($5-15M annually)",
    "Humanitarian assistance and disaster relief capabilities",
    "Institutional assessments and advisory services",
    "Regional conference and dialogue participation",
    "Peacekeeping capacity building (if applicable)",
];

pub const DIPLOMATIC_ONLY_ACTIONS: &[&str] = &[
    "Maintain diplomatic engagement through embassy channels",
    "Monitor security situation for changes",
    "Consider humanitarian assistance during crises",
    "Support multilateral diplomatic initiatives",
    "Reassess annually or following significant developments",
];
