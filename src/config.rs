use std::env;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded automatically at startup via dotenvy. Everything
/// has a default; the env vars exist for tuning, not for secrets.
pub struct Config {
    /// Per-file size cap in megabytes — larger files are skipped with a warning.
    pub max_file_mb: u64,
    /// SVG chart dimensions in pixels.
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            max_file_mb: env_parse("SHORTLIST_MAX_FILE_MB", 10)?,
            chart_width: env_parse("SHORTLIST_CHART_WIDTH", 900)?,
            chart_height: env_parse("SHORTLIST_CHART_HEIGHT", 420)?,
        })
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_mb * 1024 * 1024
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
