use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENV_FILE: &str = ".env.local";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub convex: ConvexConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvexConfig {
    /// Deployment base URL, e.g. `https://happy-otter-123.convex.cloud`
    pub url: Option<String>,
    /// Request timeout; `None` leaves the HTTP client default in place
    pub timeout_secs: Option<u64>,
}

impl ConvexConfig {
    /// Base URL with an empty prefix when unset, so a missing
    /// `CONVEX_URL` surfaces as a request failure rather than a default.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| env::var(key).ok())
    }

    fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = var("CONVEX_URL") {
            let v = v.trim();
            if !v.is_empty() {
                self.convex.url = Some(v.to_string());
            }
        }
        if let Some(v) = var("CONVEX_TIMEOUT_SECS") {
            match v.trim().parse::<u64>() {
                Ok(0) => tracing::warn!("CONVEX_TIMEOUT_SECS=0 ignored; using the client default"),
                Ok(secs) => self.convex.timeout_secs = Some(secs),
                Err(_) => tracing::warn!("CONVEX_TIMEOUT_SECS '{}' is not a number of seconds; ignored", v),
            }
        }

        if self.convex.url.is_none() {
            tracing::warn!("CONVEX_URL is not set; requests will target a relative URL");
        }

        self
    }
}

/// Load variables from an env file if it exists. Variables already present in
/// the process environment are left untouched.
pub fn load_env_file(path: &Path) -> anyhow::Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Ok(true)
        }
        Err(e) if e.not_found() => {
            tracing::debug!("No env file at {}", path.display());
            Ok(false)
        }
        Err(e) => Err(anyhow::anyhow!("Failed to load {}: {}", path.display(), e)),
    }
}
