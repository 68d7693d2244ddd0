use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CATALOG_PATH: &str = "recipes.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Emit ANSI colour codes; set when stdout is a terminal
    #[serde(default)]
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "Invalid OUTPUT_FORMAT value: {other} (expected text or json)"
            ))),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                path: DEFAULT_CATALOG_PATH.into(),
            },
            output: OutputConfig {
                format: OutputFormat::default(),
                color: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_overrides(None, None)
    }

    /// Load settings from environment variables, letting command-line values
    /// take precedence. An overridden variable is never read.
    pub fn from_env_with_overrides(
        catalog: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), catalog, format)
    }

    fn from_lookup<F>(
        lookup: F,
        catalog: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match catalog {
            Some(path) => path,
            None => lookup("RECIPES_PATH")
                .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
                .into(),
        };

        let format = match format {
            Some(format) => format,
            None => lookup("OUTPUT_FORMAT")
                .unwrap_or_else(|| "text".to_string())
                .parse()?,
        };

        Ok(Settings {
            catalog: CatalogConfig { path },
            output: OutputConfig {
                format,
                color: false,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(Error::Config("Catalog path cannot be empty".to_string()));
        }

        Ok(())
    }
}
