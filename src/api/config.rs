//! Runtime configuration read from environment variables.

use anyhow::{Context, bail};

const DEFAULT_PORT: u16 = 8081;

/// Settings the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen port (`PORT`, default 8081)
    pub port: u16,
    /// PostgreSQL connection string (`DATABASE_URL`); in-memory storage when absent
    pub database_url: Option<String>,
    /// Seed fake roles and employees into empty repositories (`SEED_FAKE_DATA`, default true)
    pub seed_fake_data: bool,
    /// Allowed CORS origins (`CORS_ALLOWED_ORIGINS`, comma separated); any origin when empty
    pub cors_allowed_origins: Vec<String>,
    /// Emit logs as JSON lines (`LOG_FORMAT=json`)
    pub json_logs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            seed_fake_data: true,
            cors_allowed_origins: Vec::new(),
            json_logs: false,
        }
    }
}

impl ApiConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value {:?}", port))?;
        }

        config.database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(seed) = lookup("SEED_FAKE_DATA") {
            config.seed_fake_data =
                parse_flag(&seed).with_context(|| "invalid SEED_FAKE_DATA value")?;
        }

        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.json_logs = match format.trim().to_lowercase().as_str() {
                "json" => true,
                "text" | "pretty" | "" => false,
                other => bail!("invalid LOG_FORMAT value {:?}, expected json or text", other),
            };
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {:?}", other),
    }
}
