//! Configuration loading
//!
//! Two optional TOML files live under ~/.reef: `portfolio.toml` replaces
//! portfolio content tables and `config.toml` holds UI settings. A
//! missing file means defaults; a broken file logs a warning and falls
//! back rather than blocking startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THEME;
use crate::content::Portfolio;
use crate::error::Error;
use crate::paths;

/// UI settings persisted in ~/.reef/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme name, resolved by the frontend's registry
    pub theme: String,
    /// Decorative animations on/off
    pub animations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            animations: true,
        }
    }
}

/// Load portfolio content, applying ~/.reef/portfolio.toml when present
///
/// Read or parse failures fall back to the built-in content with a
/// warning; startup never fails on a bad override file.
pub fn load_portfolio() -> Portfolio {
    let path = paths::portfolio_file();
    if !path.exists() {
        return Portfolio::built_in();
    }
    match read_portfolio(&path) {
        Ok(portfolio) => portfolio,
        Err(err) => {
            tracing::warn!("ignoring {}: {err}", path.display());
            Portfolio::built_in()
        }
    }
}

/// Read portfolio content from an explicit file (CLI argument)
pub fn read_portfolio(path: &Path) -> Result<Portfolio, Error> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Load UI settings from ~/.reef/config.toml, falling back to defaults
pub fn load_settings() -> Settings {
    let path = paths::settings_file();
    if !path.exists() {
        return Settings::default();
    }
    match read_settings(&path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("ignoring {}: {err}", path.display());
            Settings::default()
        }
    }
}

/// Read UI settings from an explicit file
pub fn read_settings(path: &Path) -> Result<Settings, Error> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Persist UI settings to ~/.reef/config.toml
pub fn save_settings(settings: &Settings) -> Result<(), Error> {
    save_settings_to(settings, &paths::settings_file())
}

/// Persist UI settings to an explicit file
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), Error> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| Error::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    // Settings serialization cannot fail: two scalar fields, no maps
    let raw = toml::to_string_pretty(settings).unwrap_or_default();
    std::fs::write(path, raw).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_temp(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_partial_override_keeps_other_tables() {
        let (_dir, path) = write_temp(
            r#"
            skills = ["Rust", "Verilog"]

            [header]
            name = "Jo Reef"
            "#,
        );
        let p = read_portfolio(&path).unwrap();
        assert_eq!(p.skills, vec!["Rust".to_string(), "Verilog".to_string()]);
        assert_eq!(p.header.name, "Jo Reef");
        // Untouched tables keep the built-in data
        assert_eq!(p.about, Portfolio::built_in().about);
        assert_eq!(p.contact, Portfolio::built_in().contact);
        // A present table with missing keys keeps per-field defaults
        assert_eq!(p.header.title, Portfolio::built_in().header.title);
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let (_dir, path) = write_temp("skills = [unterminated");
        let err = read_portfolio(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_portfolio(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let settings = Settings {
            theme: "circuit".to_string(),
            animations: false,
        };
        save_settings_to(&settings, &path).unwrap();
        assert_eq!(read_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "ocean");
        assert!(settings.animations);
    }
}
