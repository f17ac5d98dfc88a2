use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Reference '{0}' appears more than once in the priority list")]
    DuplicateReference(String),
}

/// Settings of a [`Resolver`](super::resolver::Resolver).
///
/// ```toml
/// reference-priority = ["deslattes2003", "bearden1967"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ResolverConfig {
    /// BibTeX keys tried in order when no reference is requested explicitly.
    #[serde(default)]
    pub reference_priority: Vec<String>,
}

impl ResolverConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        info!(
            path = %path.display(),
            references = config.reference_priority.len(),
            "Loaded resolver configuration."
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, key) in self.reference_priority.iter().enumerate() {
            if self.reference_priority[..index].contains(key) {
                return Err(ConfigError::DuplicateReference(key.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ResolverConfigBuilder {
    reference_priority: Vec<String>,
}

impl ResolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reference to the priority list.
    pub fn prefer(mut self, bibtexkey: impl Into<String>) -> Self {
        self.reference_priority.push(bibtexkey.into());
        self
    }

    pub fn reference_priority<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.reference_priority = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<ResolverConfig, ConfigError> {
        let config = ResolverConfig {
            reference_priority: self.reference_priority,
        };
        config.validate()?;
        Ok(config)
    }
}
