//! Configuration types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Key prefix under which generator settings live
pub const CONFIG_PREFIX: &str = "generators.config";

/// Built-in generator settings, applied beneath every other source
pub const DEFAULT_SETTINGS: &[(&str, &str)] = &[
    ("model_target_path", "src/models"),
    ("model_template_path", "templates/generators/model.txt"),
    ("model_extension", "rs"),
    ("controller_target_path", "src/controllers"),
    ("controller_template_path", "templates/generators/controller.txt"),
    ("controller_extension", "rs"),
    ("view_target_path", "views"),
    ("view_template_path", "templates/generators/view.txt"),
    ("view_extension", "html"),
    ("seed_target_path", "db/seeds"),
    ("seed_template_path", "templates/generators/seed.txt"),
    ("seed_extension", "rs"),
];

/// Full configuration key for a generator setting name
pub fn config_key(name: &str) -> String {
    format!("{}.{}", CONFIG_PREFIX, name)
}

/// On-disk layout of `generators.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfigFile {
    /// The `[generators]` table
    #[serde(default)]
    pub generators: GeneratorsSection,
}

/// The `[generators]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneratorsSection {
    /// Settings under `[generators.config]`
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

impl ConfigFile {
    /// A config file holding the built-in defaults
    pub fn defaults() -> Self {
        Self {
            generators: GeneratorsSection {
                config: DEFAULT_SETTINGS
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
        }
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Immutable key/value view of the loaded configuration
///
/// Keys are fully qualified, e.g. `generators.config.model_target_path`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    values: BTreeMap<String, String>,
}

impl ConfigSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from fully qualified key/value pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a snapshot from generator settings keyed by short name
    pub fn from_generator_settings(settings: &BTreeMap<String, String>) -> Self {
        Self::from_pairs(settings.iter().map(|(k, v)| (config_key(k), v.clone())))
    }

    /// Look up a fully qualified key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a generator setting by short name
    pub fn generator_setting(&self, name: &str) -> Option<&str> {
        self.get(&config_key(name))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key() {
        assert_eq!(config_key("model_target_path"), "generators.config.model_target_path");
    }

    #[test]
    fn test_defaults_cover_every_setting() {
        let defaults = ConfigFile::defaults();
        assert_eq!(defaults.generators.config.len(), DEFAULT_SETTINGS.len());
        assert_eq!(
            defaults.generators.config.get("view_extension").map(String::as_str),
            Some("html")
        );
    }

    #[test]
    fn test_defaults_toml_round_trip() {
        let toml_text = ConfigFile::defaults().to_toml().unwrap();
        assert!(toml_text.contains("[generators.config]"));

        let parsed: ConfigFile = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed, ConfigFile::defaults());
    }

    #[test]
    fn test_snapshot_from_generator_settings() {
        let mut settings = BTreeMap::new();
        settings.insert("model_target_path".to_string(), "app/models".to_string());

        let snapshot = ConfigSnapshot::from_generator_settings(&settings);
        assert_eq!(snapshot.get("generators.config.model_target_path"), Some("app/models"));
        assert_eq!(snapshot.generator_setting("model_target_path"), Some("app/models"));
        assert_eq!(snapshot.generator_setting("missing"), None);
    }

    #[test]
    fn test_empty_file_deserializes() {
        let parsed: ConfigFile = toml::from_str("").unwrap();
        assert!(parsed.generators.config.is_empty());
    }
}
