use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use xrayref::engine::{PropertyTable, Resolver, ResolverConfig, ResolverConfigBuilder};

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DataSection {
    #[serde(default)]
    pub elements: Vec<PathBuf>,
    #[serde(default)]
    pub subshells: Vec<PathBuf>,
    #[serde(default)]
    pub transitions: Vec<PathBuf>,
}

/// Contents of the `--config` file.
///
/// ```toml
/// [resolution]
/// reference-priority = ["ref2", "ref1"]
///
/// [data]
/// elements = ["elements.csv"]
/// transitions = ["transitions.csv"]
/// ```
///
/// Relative data paths are resolved against the directory of the config file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub resolution: ResolverConfig,
    #[serde(default)]
    pub data: DataSection,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.resolution.validate()?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for files in [
            &mut config.data.elements,
            &mut config.data.subshells,
            &mut config.data.transitions,
        ] {
            for file in files.iter_mut() {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        debug!(path = %path.display(), "Loaded CLI configuration.");
        Ok(config)
    }

    /// Builds the resolver: built-in symbols, then every configured data file,
    /// with `prefer` replacing the configured priority when non-empty.
    pub fn build_resolver(&self, prefer: &[String]) -> Result<Resolver> {
        let mut table = PropertyTable::builtin()?;
        for path in &self.data.elements {
            table.load_elements_csv(path)?;
        }
        for path in &self.data.subshells {
            table.load_subshells_csv(path)?;
        }
        for path in &self.data.transitions {
            table.load_transitions_csv(path)?;
        }

        let priority = if prefer.is_empty() {
            self.resolution.clone()
        } else {
            ResolverConfigBuilder::new()
                .reference_priority(prefer.iter().cloned())
                .build()?
        };
        info!(
            rows = table.len(),
            priority = ?priority.reference_priority,
            "Property table ready."
        );
        Ok(Resolver::with_config(table, &priority))
    }
}
