use anyhow::Result;
use capability_assessment::reference::{
    CAPABILITY_LEVELS, MultiplierOption, PARTNER_TYPES, POLITICAL_CONSTRAINTS,
    POLITICAL_RELATIONSHIPS, REGIONS, THREAT_INTENSITY, URGENCY_LEVELS, WeightedOption,
    threats_for,
};
use tracing::info;

fn print_weighted(title: &str, table: &[WeightedOption]) {
    println!("\n{title}");
    for entry in table {
        println!("  {:<32} {:.2}  {}", entry.code, entry.weight, entry.label);
    }
}

fn print_multipliers(title: &str, table: &[MultiplierOption]) {
    println!("\n{title}");
    for entry in table {
        println!("  {:<32} ×{:.2}  {}", entry.code, entry.multiplier, entry.label);
    }
}

pub(super) fn run() -> Result<()> {
    info!("Printing reference catalog: {} regions", REGIONS.len());

    println!("Regional bureaus");
    for region in REGIONS {
        println!(
            "\n{} [{}] priority={} ×{:.2} countries={}",
            region.name,
            region.code,
            region.strategic_priority,
            region.strategic_priority.multiplier(),
            region.countries.len()
        );
        for threat in threats_for(region.code) {
            let marker = if threat.primary { "*" } else { " " };
            println!(
                "  {marker} {:<22} {:.1}  {}",
                threat.code, threat.weight, threat.label
            );
        }
    }

    print_weighted("Partner types", PARTNER_TYPES);

    println!("\nPolitical relationships");
    for entry in POLITICAL_RELATIONSHIPS {
        println!(
            "  {:<32} {:.2}  {} (stability: {})",
            entry.code, entry.weight, entry.label, entry.stability
        );
    }

    print_weighted("Political constraints", POLITICAL_CONSTRAINTS);
    print_multipliers("Threat intensity", THREAT_INTENSITY);
    print_multipliers("Urgency", URGENCY_LEVELS);

    println!("\nCapability levels");
    for level in CAPABILITY_LEVELS {
        println!("  {}  {}", level.value, level.label);
    }
    Ok(())
}
