/// Configuration for course-analyzer
///
/// Loaded from TOML. Every field is optional in the file.

use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "course-analyzer.toml";

/// Overrides the dataset path from any config file
pub const DATASET_ENV_VAR: &str = "COURSE_ANALYZER_DATASET";

/// How query results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Dataset used when no --dataset flag is given
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
    /// K used by `top` when none is given
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    10
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            format: OutputFormat::default(),
            top_k: default_top_k(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AnalyzerConfig =
            toml::from_str(content).map_err(|e| AnalyzerError::Config(e.to_string()))?;

        if config.top_k == 0 {
            return Err(AnalyzerError::Config("top_k must be at least 1".to_string()));
        }

        Ok(config)
    }
}

/// Global config location, e.g. `~/.config/course-analyzer/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("course-analyzer").join("config.toml"))
}

/// Load config from an explicit path, or search the default locations
///
/// Search order:
/// 1. `path`, which must exist when given
/// 2. `course-analyzer.toml` in the current directory
/// 3. the global config file
///
/// `COURSE_ANALYZER_DATASET` then overrides the dataset path.
pub fn load_config_from(path: Option<&Path>) -> Result<AnalyzerConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            return Err(AnalyzerError::Config(format!(
                "config file not found: {}",
                p.display()
            )))
        }
        None => {
            let local = PathBuf::from(LOCAL_CONFIG_FILE);
            if local.exists() {
                Some(local)
            } else {
                global_config_path().filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "reading config");
            let content = std::fs::read_to_string(&path)?;
            AnalyzerConfig::from_toml(&content).map_err(|e| match e {
                AnalyzerError::Config(msg) => {
                    AnalyzerError::Config(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })?
        }
        None => AnalyzerConfig::default(),
    };

    if let Ok(dataset) = std::env::var(DATASET_ENV_VAR) {
        if !dataset.is_empty() {
            config.dataset = Some(PathBuf::from(dataset));
        }
    }

    Ok(config)
}
