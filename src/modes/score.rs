use anyhow::{Context, Result, anyhow};
use capability_assessment::{ScoringConfig, Tier, evaluate_with, render_report};
use chrono::Utc;
use std::io::Write;
use tracing::info;

use super::shared::{OutputFormat, load_assessments, load_score_cfg, open_output};

pub(super) fn run() -> Result<()> {
    let cfg = load_score_cfg()?;
    let assessments = load_assessments(&cfg.input_path)?;
    if assessments.is_empty() {
        return Err(anyhow!("Assessment input is empty: {}", cfg.input_path));
    }

    let scoring = ScoringConfig::from_env();
    info!(
        "Scoring {} assessments from {}",
        assessments.len(),
        cfg.input_path
    );
    info!("Scoring config: {scoring}");

    let mut out = open_output(cfg.output_path.as_deref())?;
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let mut per_tier = [0usize; 4];

    for (idx, assessment) in assessments.iter().enumerate() {
        let result = evaluate_with(assessment, &scoring);
        per_tier[result.tier as usize] += 1;

        match cfg.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &result)
                    .with_context(|| format!("failed to serialize result {}", idx + 1))?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                writeln!(out, "[ASSESSMENT {}] generated {generated}", idx + 1)?;
                writeln!(out, "{}\n", render_report(assessment, &result))?;
            }
        }
    }
    out.flush().context("failed to flush output")?;

    info!(
        "Scoring complete: total={}, high={}, medium={}, low={}, not_recommended={}",
        assessments.len(),
        per_tier[Tier::High as usize],
        per_tier[Tier::Medium as usize],
        per_tier[Tier::Low as usize],
        per_tier[Tier::NotRecommended as usize],
    );
    Ok(())
}
