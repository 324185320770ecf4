//! TOML-based host configuration.
//!
//! Stores presentation-host preferences:
//! - Whether report export is offered, and in which format
//! - Report title and default file name
//! - Flavor text toggles and the optional RNG seed
//!
//! Configuration is stored at `~/.config/readiness/config.toml`. It never
//! holds session data; every assessment starts from a fresh session.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::assessment::AssessmentOptions;
use crate::error::ConfigError;
use crate::report::{ReportFormat, ReportOptions, DEFAULT_TITLE};

/// Assessment behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default = "default_true")]
    pub report_export_enabled: bool,
    #[serde(default)]
    pub report_format: ReportFormat,
}

/// Exported report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// File name without extension, used when no output path is given.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

/// Quotes and snippets shown next to questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorConfig {
    #[serde(default = "default_true")]
    pub show_quotes: bool,
    #[serde(default = "default_true")]
    pub show_snippets: bool,
    /// Seed for the fallback quote RNG (random when unset).
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/readiness/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assessment: AssessmentConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub flavor: FlavorConfig,
}

fn default_true() -> bool {
    true
}
fn default_title() -> String {
    DEFAULT_TITLE.into()
}
fn default_file_name() -> String {
    "readiness_report".into()
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            report_export_enabled: true,
            report_format: ReportFormat::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            file_name: default_file_name(),
        }
    }
}

impl Default for FlavorConfig {
    fn default() -> Self {
        Self {
            show_quotes: true,
            show_snippets: true,
            seed: None,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            // "none" clears numeric values; the typed round-trip below rejects
            // it for fields that are not optional.
            let clears = matches!(value, "" | "none")
                && matches!(
                    existing,
                    serde_json::Value::Number(_) | serde_json::Value::Null
                );

            let new_value = match existing {
                _ if clears => serde_json::Value::Null,
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .parse::<u64>()
                        .map_err(|e| invalid(e.to_string()))?
                        .into(),
                ),
                // Unset optional values take a number.
                serde_json::Value::Null => serde_json::Value::Number(
                    value
                        .parse::<u64>()
                        .map_err(|e| invalid(e.to_string()))?
                        .into(),
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot set a table directly".into()));
                }
                serde_json::Value::String(_) => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving. Returns error if the key is
    /// unknown or the value does not fit the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default configuration");
            Self::default()
        })
    }

    /// Session options derived from this configuration.
    pub fn assessment_options(&self) -> AssessmentOptions {
        AssessmentOptions {
            report_export_enabled: self.assessment.report_export_enabled,
            report: ReportOptions {
                title: self.report.title.clone(),
                format: self.assessment.report_format,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(parsed.assessment.report_export_enabled);
        assert_eq!(parsed.assessment.report_format, ReportFormat::Pdf);
        assert_eq!(parsed.flavor.seed, None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[flavor]\nseed = 7\n").unwrap();
        assert_eq!(parsed.flavor.seed, Some(7));
        assert!(parsed.flavor.show_quotes);
        assert_eq!(parsed.report.title, DEFAULT_TITLE);
    }

    #[test]
    fn get_nested_values() {
        let cfg = Config::default();
        assert_eq!(cfg.get("assessment.report_format").as_deref(), Some("pdf"));
        assert_eq!(cfg.get("flavor.show_quotes").as_deref(), Some("true"));
        assert_eq!(cfg.get("flavor.seed").as_deref(), Some("null"));
        assert_eq!(cfg.get("flavor.nope"), None);
    }

    #[test]
    fn set_checks_types() {
        let mut cfg = Config::default();
        cfg.set("assessment.report_export_enabled", "false").unwrap();
        cfg.set("assessment.report_format", "markdown").unwrap();
        cfg.set("flavor.seed", "99").unwrap();
        assert!(!cfg.assessment.report_export_enabled);
        assert_eq!(cfg.assessment.report_format, ReportFormat::Markdown);
        assert_eq!(cfg.flavor.seed, Some(99));

        assert!(cfg.set("flavor.show_quotes", "sometimes").is_err());
        assert!(cfg.set("assessment.report_format", "docx").is_err());
        assert!(matches!(
            cfg.set("nope.key", "1"),
            Err(ConfigError::UnknownKey(_))
        ));

        cfg.set("flavor.seed", "none").unwrap();
        assert_eq!(cfg.flavor.seed, None);
    }

    #[test]
    fn seed_can_be_cleared_after_being_set() {
        let mut cfg = Config::default();
        cfg.set("flavor.seed", "99").unwrap();
        cfg.set("flavor.seed", "none").unwrap();
        assert_eq!(cfg.flavor.seed, None);

        cfg.set("flavor.seed", "5").unwrap();
        cfg.set("flavor.seed", "").unwrap();
        assert_eq!(cfg.get("flavor.seed").as_deref(), Some("null"));
    }

    #[test]
    fn none_is_a_plain_string_for_text_keys() {
        let mut cfg = Config::default();
        cfg.set("report.file_name", "none").unwrap();
        assert_eq!(cfg.report.file_name, "none");
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(cfg.assessment.report_export_enabled);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("report.title", "Quarterly Readiness").unwrap();
        cfg.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.report.title, "Quarterly Readiness");
        assert_eq!(loaded.assessment_options().report.title, "Quarterly Readiness");
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "assessment = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
