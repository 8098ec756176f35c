use anyhow::{Context, Result, anyhow};
use capability_assessment::Assessment;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "text" => Ok(Self::Text),
            "json" | "jsonl" => Ok(Self::Json),
            other => Err(anyhow!("OUTPUT_FORMAT must be text or json, got {other:?}")),
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct ScoreCfg {
    pub input_path: String,
    pub format: OutputFormat,
    /// Stdout when unset.
    pub output_path: Option<String>,
}

pub(super) fn must_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow!("Missing env var {key}"))
}

pub(super) fn load_score_cfg() -> Result<ScoreCfg> {
    let format = match std::env::var("OUTPUT_FORMAT") {
        Ok(raw) => OutputFormat::parse(&raw)?,
        Err(_) => OutputFormat::Text,
    };
    Ok(ScoreCfg {
        input_path: must_env("ASSESSMENT_PATH")?,
        format,
        output_path: std::env::var("OUTPUT_PATH").ok().filter(|p| !p.trim().is_empty()),
    })
}

/// Buffered writer for `OUTPUT_PATH`, or stdout.
pub(super) fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create output file {path}"))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// One assessment per line; blank lines are skipped.
pub(super) fn load_assessments(path: &str) -> Result<Vec<Assessment>> {
    let file =
        File::open(path).with_context(|| format!("failed to open assessment file {path}"))?;
    parse_assessments(BufReader::new(file))
}

pub(super) fn parse_assessments(reader: impl BufRead) -> Result<Vec<Assessment>> {
    let mut assessments = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let assessment: Assessment = serde_json::from_str(&line)
            .with_context(|| format!("invalid JSON at line {}", idx + 1))?;
        assessments.push(assessment);
    }
    Ok(assessments)
}
