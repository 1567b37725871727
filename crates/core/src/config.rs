use std::env;

use serde::{Deserialize, Serialize};

use crate::record::FieldProfile;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub worker: WorkerConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            dataset: DatasetConfig::from_env(),
            worker: WorkerConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:   {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  dataset:  profile={}, source={}",
            self.dataset.profile,
            self.dataset.source_url.as_deref().unwrap_or("(none)")
        );
        tracing::info!("  workers:  {}", self.worker.count);
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3001),
        }
    }
}

// ── Dataset ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Default source fetched by `POST /data` when the request names none.
    pub source_url: Option<String>,
    /// Field profile preset name ("genes" or "plays").
    pub profile: String,
}

impl DatasetConfig {
    fn from_env() -> Self {
        Self {
            source_url: env_opt("DATASET_URL"),
            profile: env_or("DATASET_PROFILE", "genes"),
        }
    }

    /// Resolve the configured field profile, with per-field env overrides
    /// (`DATASET_ID_FIELD`, `DATASET_DATE_FIELD`, `DATASET_CATEGORY_FIELD`,
    /// `DATASET_DESCRIPTION_FIELD`).
    pub fn field_profile(&self) -> FieldProfile {
        let mut profile = FieldProfile::preset(&self.profile).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown DATASET_PROFILE '{}' — falling back to 'genes'",
                self.profile
            );
            FieldProfile::genes()
        });
        if let Some(f) = env_opt("DATASET_ID_FIELD") {
            profile.id_field = f;
        }
        if let Some(f) = env_opt("DATASET_DATE_FIELD") {
            profile.date_field = f;
        }
        if let Some(f) = env_opt("DATASET_CATEGORY_FIELD") {
            profile.category_field = f;
        }
        if let Some(f) = env_opt("DATASET_DESCRIPTION_FIELD") {
            profile.description_field = f;
        }
        profile
    }
}

// ── Workers ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Number of concurrent dequeue-process loops.
    pub count: usize,
}

impl WorkerConfig {
    fn from_env() -> Self {
        Self {
            count: env_usize("WORKER_COUNT", 1).max(1),
        }
    }
}
