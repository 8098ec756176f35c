mod catalog;
mod score;
mod shared;

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunMode {
    Score,
    Catalog,
}

impl RunMode {
    fn from_env() -> Self {
        let raw = std::env::var("RUN_MODE").unwrap_or_else(|_| "score".into());
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "catalog" | "tables" => Self::Catalog,
            _ => Self::Score,
        }
    }
}

pub fn run_from_env() -> Result<()> {
    match RunMode::from_env() {
        RunMode::Score => score::run(),
        RunMode::Catalog => catalog::run(),
    }
}
