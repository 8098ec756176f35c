mod modes;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::Level;

/// `LOG_LEVEL` as a tracing level; anything unparsable falls back to `info`.
fn log_level_from_env() -> Level {
    std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level_from_env())
        .with_writer(std::io::stderr)
        .init();

    modes::run_from_env()
}
