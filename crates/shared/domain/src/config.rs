use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration for the `fhub` binaries.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub engine: EngineConfig,
}

/// Log output settings consumed by the logger builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    pub json: bool,
    /// Enables the rolling file layer when set.
    pub directory: Option<PathBuf>,
    pub env_filter: Option<String>,
}

/// Inference engine settings.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// TOML or JSON knowledge base replacing the compiled-in table.
    pub knowledge_base: Option<PathBuf>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None, env_filter: None }
    }
}
