//! Publish-target configuration.
//!
//! A project keeps content for a set of unified locales. The config names that
//! set; a [`PublishPlan`] narrows it to what one store can actually receive.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::locale::{self, Store, UnifiedLocale};

/// Locale targets as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfigFile {
    /// Locale used as the source of truth for content
    pub default_locale: String,
    /// Locales content is maintained for
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Validated locale targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    default_locale: UnifiedLocale,
    targets: Vec<UnifiedLocale>,
}

impl LocaleConfig {
    /// Validate a parsed config file.
    ///
    /// Target codes are resolved leniently (`pt_br` is accepted as `pt-BR`).
    /// Duplicates are removed keeping the first occurrence.
    pub fn from_file(file: &LocaleConfigFile) -> Result<Self, ConfigError> {
        let resolve = |code: &str| {
            locale::canonicalize_unified(code)
                .map_err(|e| ConfigError::InvalidLocale(e.to_string()))
        };

        let default_locale = resolve(&file.default_locale)?;

        let mut targets: Vec<UnifiedLocale> = Vec::with_capacity(file.targets.len());
        for code in &file.targets {
            let target = resolve(code)?;
            if !targets.contains(&target) {
                targets.push(target);
            }
        }

        if !targets.contains(&default_locale) {
            return Err(ConfigError::MissingDefault(default_locale.to_string()));
        }

        Ok(Self {
            default_locale,
            targets,
        })
    }

    /// Parse and validate TOML config content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: LocaleConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::from_file(&file)
    }

    pub fn default_locale(&self) -> UnifiedLocale {
        self.default_locale
    }

    pub fn targets(&self) -> &[UnifiedLocale] {
        &self.targets
    }

    /// Convert back into the on-disk representation.
    pub fn to_file(&self) -> LocaleConfigFile {
        LocaleConfigFile {
            default_locale: self.default_locale.to_string(),
            targets: self.targets.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Split the targets into what can be published to `store` and what is skipped.
    pub fn publish_plan(&self, store: Store) -> PublishPlan {
        let registry = locale::registry();
        let mut plan = PublishPlan {
            store,
            publish: Vec::new(),
            skipped: Vec::new(),
        };

        for target in &self.targets {
            match registry.to_store(store, *target) {
                Some(code) => plan.publish.push((*target, code)),
                None => {
                    tracing::warn!("{} is not available on {}, skipping", target, store);
                    plan.skipped.push(*target);
                }
            }
        }

        plan
    }
}

/// Targets resolved against one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    pub store: Store,
    /// Unified locale and the store code to publish it under, in target order
    pub publish: Vec<(UnifiedLocale, &'static str)>,
    /// Targets the store does not carry
    pub skipped: Vec<UnifiedLocale>,
}

impl PublishPlan {
    /// Store codes to publish, in target order.
    pub fn store_codes(&self) -> Vec<&'static str> {
        self.publish.iter().map(|(_, code)| *code).collect()
    }
}

/// Load locale configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LocaleConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
    LocaleConfig::from_toml_str(&content)
}

/// Save locale configuration to a TOML file.
pub fn save_config(config: &LocaleConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(&config.to_file())
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Default locale {0} is not listed in targets")]
    MissingDefault(String),
}
