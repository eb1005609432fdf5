//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Clean pattern used when `--pattern` is not given.
    pub clean_pattern: String,

    /// Decimal places in human-readable output.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clean_pattern: "equalMidPoints".to_string(),
            precision: 4,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // TSA_PRECISION, TSA_CLEAN_PATTERN
        figment = figment.merge(Env::prefixed("TSA_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for tsa.
///
/// On Linux: `~/.config/tsa`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tsa"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_tsa() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "tsa");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.clean_pattern, "equalMidPoints");
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("tsa.toml");
        std::fs::write(&path, "precision = 2\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.clean_pattern, "equalMidPoints");
    }
}
