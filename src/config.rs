//! Configuration loading and validation.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default 256-color background index for highlighted lines.
pub const DEFAULT_BG_HIGHLIGHT: u8 = 239;

/// Default syntect theme for token coloring.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Environment variable overriding the config file location.
const CONFIG_ENV: &str = "COLORCAT_CONFIG";

/// Parsed configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Theme name for token coloring.
    pub theme: String,
    /// 256-color background index for highlighted lines.
    pub bg_highlight: u8,
    /// Apply the punctuation accent pass.
    pub accents: bool,
}

/// Raw config file structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    /// Theme name for token coloring.
    theme: Option<String>,
    /// 256-color background index for highlighted lines.
    bg_highlight: Option<u8>,
    /// Apply the punctuation accent pass.
    accents: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            bg_highlight: DEFAULT_BG_HIGHLIGHT,
            accents: true,
        }
    }
}

impl Config {
    /// Load the config from the default location, honoring `COLORCAT_CONFIG`.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    /// Load a config file from an explicit path. A missing file yields the
    /// defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source: error,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(&contents).map_err(|error| Error::ConfigParse {
                path: path.to_path_buf(),
                source: error,
            })?;

        let defaults = Self::default();
        Ok(Self {
            theme: raw.theme.unwrap_or(defaults.theme),
            bg_highlight: raw.bg_highlight.unwrap_or(defaults.bg_highlight),
            accents: raw.accents.unwrap_or(defaults.accents),
        })
    }
}

/// Resolve the config file path for the current environment.
fn config_path() -> Result<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_ENV) {
        let expanded = shellexpand::full(&raw).map_err(|error| Error::PathExpansion {
            path: raw.clone(),
            source: error,
        })?;
        return Ok(PathBuf::from(expanded.as_ref()));
    }
    let home = dirs::home_dir().ok_or(Error::HomeDirMissing)?;
    Ok(home.join(".config").join("colorcat").join("colorcat.yaml"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{Config, DEFAULT_BG_HIGHLIGHT, DEFAULT_THEME};
    use crate::error::Error;

    #[test]
    fn defaults_when_config_missing() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing.yaml");

        let config = Config::load_from(&path).expect("defaults expected");
        assert_eq!(config.theme, DEFAULT_THEME);
        assert_eq!(config.bg_highlight, DEFAULT_BG_HIGHLIGHT);
        assert!(config.accents);
    }

    #[test]
    fn reads_partial_config() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("colorcat.yaml");
        fs::write(&path, "bg-highlight: 52\n").expect("write config");

        let config = Config::load_from(&path).expect("config should parse");
        assert_eq!(config.bg_highlight, 52);
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn reads_full_config() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("colorcat.yaml");
        fs::write(&path, "theme: InspiredGitHub\nbg-highlight: 17\naccents: false\n")
            .expect("write config");

        let config = Config::load_from(&path).expect("config should parse");
        assert_eq!(config.theme, "InspiredGitHub");
        assert_eq!(config.bg_highlight, 17);
        assert!(!config.accents);
    }

    #[test]
    fn errors_on_malformed_yaml() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("colorcat.yaml");
        fs::write(&path, "theme: [unclosed\n").expect("write config");

        let error = Config::load_from(&path).expect_err("config should fail");
        assert!(matches!(error, Error::ConfigParse { .. }));
    }

    #[test]
    fn errors_on_out_of_range_background() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("colorcat.yaml");
        fs::write(&path, "bg-highlight: 300\n").expect("write config");

        let error = Config::load_from(&path).expect_err("config should fail");
        assert!(matches!(error, Error::ConfigParse { .. }));
    }
}
