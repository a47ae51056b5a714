//! Configuration file loading for the exporter.
//!
//! The exporter reads `bghub.toml` from the current directory, or the
//! file given with `--config`. Both tables are optional:
//!
//! ```toml
//! [analysis]
//! close_cube_threshold = 0.16
//!
//! [analysis.skill]
//! very_bad = 0.16
//!
//! [output]
//! moves_shown = 5
//! ```

use bg_analysis::AnalysisConfig;
use bgh::OutputOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// The configuration file is not valid TOML for [`ExportConfig`].
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Exporter configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Classification thresholds.
    pub analysis: AnalysisConfig,
    /// What to include in the output and how to format it.
    pub output: OutputOptions,
}

impl ExportConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `bghub.toml` is read if
    /// present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Default configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("bghub.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[analysis]
close_cube_threshold = 0.1
rating_offset = 2000.0

[analysis.skill]
very_bad = 0.2
bad = 0.1
doubtful = 0.05

[analysis.luck]
very = 0.5
some = 0.25

[output]
digits = 4
moves_shown = 3
include_annotations = false
"#;
        let config: ExportConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.analysis.close_cube_threshold, 0.1);
        assert_eq!(config.analysis.rating_offset, 2000.0);
        assert_eq!(config.analysis.skill.very_bad, 0.2);
        assert_eq!(config.analysis.luck.some, 0.25);
        assert_eq!(config.output.digits, 4);
        assert_eq!(config.output.moves_shown, 3);
        assert!(!config.output.include_annotations);
        assert!(config.output.include_analysis);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: ExportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config: ExportConfig = toml::from_str("[analysis.skill]\nbad = 0.09\n").unwrap();
        assert_eq!(config.analysis.skill.bad, 0.09);
        assert_eq!(config.analysis.skill.very_bad, 0.16);
        assert_eq!(config.analysis.optional_double_epsilon, 1.0e-5);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nmoves_shown = 8").unwrap();
        let config = ExportConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.output.moves_shown, 8);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExportConfig::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\nmoves_shown = ").unwrap();
        let result = ExportConfig::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_path() {
        assert_eq!(ExportConfig::config_path(), PathBuf::from("bghub.toml"));
    }
}
