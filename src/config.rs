use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Batch and storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub schema_path: String,
    /// Number of worker threads used by the generation batch.
    pub workers: usize,
    /// Log a progress line after this many listings.
    pub progress_every: usize,
    /// How many regenerated descriptions to print at the end of a run.
    pub sample_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "guide.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            workers: 4,
            progress_every: 25,
            sample_count: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Config::default();

        Ok(Self {
            database_path: env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            schema_path: env::var("SCHEMA_PATH").unwrap_or(defaults.schema_path),
            workers: parse_var("GENERATE_WORKERS", defaults.workers)?.max(1),
            progress_every: parse_var("PROGRESS_EVERY", defaults.progress_every)?.max(1),
            sample_count: parse_var("SAMPLE_COUNT", defaults.sample_count)?,
        })
    }
}

fn parse_var(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
