//! Configuration file support for fittrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fittrack/config.toml`.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Batch input configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Default JSONL packages file for batch mode when no --input is given
    #[serde(default)]
    pub packages_file: Option<PathBuf>,
}

/// Report output configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Emit reports as JSON lines instead of formatted text
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("fittrack").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.input.packages_file.is_none());
        assert!(!config.report.json);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[report]
json = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert!(config.report.json);
        assert!(config.input.packages_file.is_none()); // default
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.input.packages_file = Some(PathBuf::from("/tmp/packages.jsonl"));

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.input.packages_file, parsed.input.packages_file);
        assert_eq!(config.report.json, parsed.report.json);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[input]\npackages_file = \"packages.jsonl\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(
            config.input.packages_file,
            Some(PathBuf::from("packages.jsonl"))
        );
    }
}
