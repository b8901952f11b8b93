use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{AppError, TimeFormat};

/// Default configuration file name, looked up in the snapshot root.
pub const CONFIG_FILE: &str = "meta.toml";

/// Settings for reading a metadata snapshot, from `meta.toml`.
///
/// ```toml
/// datetime_format = "%Y-%m-%dT%H:%M:%SZ"
///
/// [files]
/// gains = "install/gains.csv"
/// streams = "install/streams.csv"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct MetaConfig {
    pub datetime_format: TimeFormat,
    pub files: MetaFiles,
}

/// Table locations relative to the snapshot root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct MetaFiles {
    pub gains: PathBuf,
    pub streams: PathBuf,
}

impl Default for MetaFiles {
    fn default() -> Self {
        Self {
            gains: PathBuf::from("install/gains.csv"),
            streams: PathBuf::from("install/streams.csv"),
        }
    }
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self { datetime_format: TimeFormat::default(), files: MetaFiles::default() }
    }
}

impl MetaConfig {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: MetaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        self.datetime_format.validate()?;
        for (name, path) in [("gains", &self.files.gains), ("streams", &self.files.streams)] {
            if path.as_os_str().is_empty() {
                return Err(AppError::config_error(format!("files.{name} must not be empty")));
            }
            if path.is_absolute() {
                return Err(AppError::config_error(format!(
                    "files.{name} must be relative to the snapshot root: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = MetaConfig::parse_toml("").unwrap();
        assert_eq!(config, MetaConfig::default());
        assert_eq!(config.datetime_format.as_str(), "%Y-%m-%dT%H:%M:%SZ");
        assert_eq!(config.files.gains, PathBuf::from("install/gains.csv"));
    }

    #[test]
    fn partial_config_overrides() {
        let config = MetaConfig::parse_toml(
            r#"
datetime_format = "%Y-%m-%d %H:%M:%S"

[files]
streams = "streams.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.datetime_format.as_str(), "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.files.streams, PathBuf::from("streams.csv"));
        assert_eq!(config.files.gains, PathBuf::from("install/gains.csv"));
    }

    #[test]
    fn unknown_keys_fail() {
        let err = MetaConfig::parse_toml("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn absolute_paths_fail() {
        let err = MetaConfig::parse_toml("[files]\ngains = \"/etc/gains.csv\"").unwrap_err();
        assert!(err.to_string().contains("files.gains"));
    }

    #[test]
    fn bad_datetime_format_fails() {
        let err = MetaConfig::parse_toml("datetime_format = \"%!\"").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn date_only_format_fails() {
        let err = MetaConfig::parse_toml("datetime_format = \"%Y-%m-%d\"").unwrap_err();
        assert!(err.to_string().contains("full date and time"));
    }
}
