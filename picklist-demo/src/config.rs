//! Demo configuration, loaded from an optional JSON file.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use picklist::{OptionValue, SelectOption};
use serde::Deserialize;

use crate::error::DemoError;

/// Everything the demo reads from its config file. All fields are optional.
///
/// ```json
/// {
///   "log_file": "picklist-demo.log",
///   "log_level": "debug",
///   "options": [{ "label": "Red", "value": "red" }, { "label": "Blue", "value": "blue" }],
///   "multi_initial": ["red"],
///   "single_initial": "blue"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub log_file: PathBuf,
    pub log_level: String,
    pub options: Vec<SelectOption>,
    pub multi_initial: Vec<OptionValue>,
    pub single_initial: Option<OptionValue>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("picklist-demo.log"),
            log_level: "debug".into(),
            options: (1..=5)
                .map(|n| SelectOption::new(format!("Option {}", n), n))
                .collect(),
            multi_initial: vec![OptionValue::Number(1)],
            single_initial: Some(OptionValue::Number(1)),
        }
    }
}

impl DemoConfig {
    /// Load from the path given as the first argument, or use the defaults.
    pub fn from_args() -> Result<Self, DemoError> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| DemoError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn level(&self) -> Result<LevelFilter, DemoError> {
        self.log_level
            .parse()
            .map_err(|_| DemoError::LogLevel(self.log_level.clone()))
    }

    /// Initial value of the multi select.
    pub fn multi_value(&self) -> Result<Vec<SelectOption>, DemoError> {
        self.multi_initial.iter().map(|v| self.option(v)).collect()
    }

    /// Initial value of the single select.
    pub fn single_value(&self) -> Result<Option<SelectOption>, DemoError> {
        self.single_initial.as_ref().map(|v| self.option(v)).transpose()
    }

    fn option(&self, value: &OptionValue) -> Result<SelectOption, DemoError> {
        self.options
            .iter()
            .find(|o| &o.value == value)
            .cloned()
            .ok_or_else(|| DemoError::UnknownInitial(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.options.len(), 5);
        assert_eq!(config.options[0].label, "Option 1");
        assert_eq!(config.multi_value().unwrap(), vec![config.options[0].clone()]);
        assert_eq!(config.single_value().unwrap(), Some(config.options[0].clone()));
        assert_eq!(config.level().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = DemoConfig::parse(r#"{ "log_level": "warn" }"#).unwrap();
        assert_eq!(config.level().unwrap(), LevelFilter::Warn);
        assert_eq!(config.options.len(), 5);
    }

    #[test]
    fn test_text_values() {
        let config = DemoConfig::parse(
            r#"{
                "options": [
                    { "label": "Red", "value": "red" },
                    { "label": "Blue", "value": "blue" }
                ],
                "multi_initial": ["blue", "red"],
                "single_initial": null
            }"#,
        )
        .unwrap();

        let labels: Vec<_> = config
            .multi_value()
            .unwrap()
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["Blue", "Red"]);
        assert_eq!(config.single_value().unwrap(), None);
    }

    #[test]
    fn test_unknown_initial_value() {
        let config = DemoConfig::parse(r#"{ "single_initial": 42 }"#).unwrap();
        assert!(matches!(
            config.single_value(),
            Err(DemoError::UnknownInitial(OptionValue::Number(42)))
        ));
    }

    #[test]
    fn test_bad_level() {
        let config = DemoConfig::parse(r#"{ "log_level": "loud" }"#).unwrap();
        assert!(matches!(config.level(), Err(DemoError::LogLevel(_))));
    }
}
