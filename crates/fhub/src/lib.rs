//! Facade crate for the fertility hub.
//! Re-exports the inference core with its shared modules and builds engines from configuration.
//! Keep this crate thin: it should compose other crates, not implement inference logic.
//!
//! ## Usage
//! - Load an [`AppConfig`] with [`kernel::config::load_config`].
//! - Call [`engine_from_config`] to get an engine backed by the configured knowledge base.

pub use fhub_domain as domain;
pub use fhub_fertility as fertility;
pub use fhub_kernel as kernel;
pub use fhub_logger as logger;

use fhub_domain::config::AppConfig;
use fhub_fertility::{FertilityEngine, FertilityErrorExt, FertilityResult, KnowledgeBase, TracingObserver};
use tracing::info;

/// Builds an engine reporting through [`TracingObserver`].
///
/// Uses the knowledge base file named by `engine.knowledge_base` when set, otherwise the
/// compiled-in [`KnowledgeBase::V1`].
///
/// # Errors
/// Returns an error if the configured file cannot be read or fails validation.
pub fn engine_from_config(config: &AppConfig) -> FertilityResult<FertilityEngine> {
    let kb = match &config.engine.knowledge_base {
        Some(path) => {
            let kb = KnowledgeBase::load(path)?;
            info!(path = %path.display(), version = kb.version, "Using knowledge base from file");
            kb
        },
        None => KnowledgeBase::V1,
    };

    FertilityEngine::builder()
        .knowledge_base(kb)
        .observer(TracingObserver)
        .build()
        .context("Engine from configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::config::EngineConfig;
    use fhub_fertility::FertilityError;

    #[test]
    fn default_config_uses_compiled_table() {
        let engine = engine_from_config(&AppConfig::default()).unwrap();
        assert_eq!(engine.knowledge_base(), &KnowledgeBase::V1);
    }

    #[test]
    fn configured_file_replaces_the_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.toml");
        let mut kb = KnowledgeBase::V1;
        kb.version = 2;
        kb.heat_stress_threshold = 0.9;
        std::fs::write(&path, toml::to_string(&kb).unwrap()).unwrap();

        let config = AppConfig { engine: EngineConfig { knowledge_base: Some(path) }, ..AppConfig::default() };
        let engine = engine_from_config(&config).unwrap();
        assert_eq!(engine.knowledge_base().version, 2);
        assert_eq!(engine.knowledge_base().heat_stress_threshold, 0.9);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            engine: EngineConfig { knowledge_base: Some(dir.path().join("absent.toml")) },
            ..AppConfig::default()
        };
        let err = engine_from_config(&config).unwrap_err();
        assert!(matches!(err, FertilityError::Config { .. }));
    }
}
