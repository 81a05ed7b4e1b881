use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AddressBookError, AddressBookResult};

pub const DEFAULT_EXPORT_PATH: &str = "contacts.txt";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// How contact names are compared when listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Byte-wise, so upper case sorts before lower case.
    #[default]
    Ordinal,
    CaseInsensitive,
}

/// Runtime settings for the address book binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File used by `export` and `import` when no path is given.
    pub export_path: PathBuf,
    pub sort: SortPolicy,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            sort: SortPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> AddressBookResult<Self> {
        if !path.exists() {
            return Err(AddressBookError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> AddressBookResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AddressBookResult<()> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AddressBookError::Config(format!(
                "unsupported log level `{}`",
                self.log_level
            )));
        }
        if self.export_path.as_os_str().is_empty() {
            return Err(AddressBookError::Config("export_path cannot be blank".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sort, SortPolicy::Ordinal);
        assert_eq!(config.export_path, PathBuf::from("contacts.txt"));
    }

    #[test]
    fn parses_all_fields() {
        let config = Config::from_json(
            r#"{"export_path": "out/book.txt", "sort": "case_insensitive", "log_level": "debug"}"#,
        )
        .unwrap();
        assert_eq!(config.export_path, PathBuf::from("out/book.txt"));
        assert_eq!(config.sort, SortPolicy::CaseInsensitive);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            Config::from_json(r#"{"colour": "blue"}"#),
            Err(AddressBookError::Json(_))
        ));
    }

    #[test]
    fn rejects_unknown_sort_policy() {
        assert!(Config::from_json(r#"{"sort": "random"}"#).is_err());
    }

    #[test]
    fn rejects_bad_log_level() {
        assert!(matches!(
            Config::from_json(r#"{"log_level": "loud"}"#),
            Err(AddressBookError::Config(_))
        ));
    }

    #[test]
    fn rejects_blank_export_path() {
        assert!(matches!(
            Config::from_json(r#"{"export_path": ""}"#),
            Err(AddressBookError::Config(_))
        ));
    }

    #[test]
    fn load_missing_file_is_file_not_found() {
        let result = Config::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(AddressBookError::FileNotFound { .. })));
    }
}
