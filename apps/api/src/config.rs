use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// The frontend shipped with the crate, independent of the working directory.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Application configuration loaded from environment variables.
/// Startup aborts if the provider credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub static_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.ensure_static_dir()?;
        Ok(config)
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            openai_api_key: require(&lookup, "OPENAI_API_KEY")?,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Fails unless `static_dir` is a directory holding `index.html`, so a
    /// misplaced frontend stops startup instead of serving 404s.
    pub fn ensure_static_dir(&self) -> Result<()> {
        let dir = &self.static_dir;
        if !dir.is_dir() {
            bail!(
                "STATIC_DIR '{}' does not exist or is not a directory",
                dir.display()
            );
        }
        let index = dir.join("index.html");
        if !index.is_file() {
            bail!("Index document '{}' is missing", index.display());
        }
        Ok(())
    }
}

// An empty value counts as missing.
fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}
