//! Configuration manager implementation

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{config_key, ConfigSnapshot, CONFIG_PREFIX, DEFAULT_SETTINGS},
};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "generators.toml";

/// Loads configuration snapshots
///
/// Sources, lowest precedence first: built-in defaults, the global file, the
/// project file, then `STENCIL_*` environment variables using `__` between
/// key segments (e.g. `STENCIL_GENERATORS__CONFIG__MODEL_TARGET_PATH`).
pub struct ConfigManager {
    /// Project configuration file path
    project_path: PathBuf,
    /// Whether the project file must exist
    project_required: bool,
    /// Global configuration file path
    global_path: Option<PathBuf>,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading `./generators.toml` and the global file
    pub fn new() -> Self {
        Self {
            project_path: PathBuf::from(PROJECT_CONFIG_FILE),
            project_required: false,
            global_path: Self::default_global_path(),
            env_prefix: "STENCIL".to_string(),
        }
    }

    /// Create with an explicit project config file, which must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            project_path: path,
            project_required: true,
            ..Self::new()
        }
    }

    /// Override the global config file, or disable it with `None`
    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Project configuration file path
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Get default global config path
    fn default_global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stencil").join(PROJECT_CONFIG_FILE))
    }

    /// Load a snapshot of the generator settings
    pub fn load(&self) -> Result<ConfigSnapshot> {
        if self.project_required && !self.project_path.is_file() {
            return Err(ConfigError::NotFound(self.project_path.clone()));
        }

        let mut builder = Config::builder();
        for (name, value) in DEFAULT_SETTINGS {
            builder = builder.set_default(config_key(name), *value)?;
        }
        if let Some(global) = &self.global_path {
            debug!(path = %global.display(), "adding global config source");
            builder = builder.add_source(File::from(global.clone()).required(false));
        }
        debug!(path = %self.project_path.display(), "adding project config source");
        let loaded = builder
            .add_source(File::from(self.project_path.clone()).required(self.project_required))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let table = match loaded.get_table(CONFIG_PREFIX) {
            Ok(table) => table,
            Err(config::ConfigError::NotFound(_)) => Default::default(),
            Err(e) => return Err(e.into()),
        };

        let mut settings = BTreeMap::new();
        for (name, value) in table {
            settings.insert(name, value.into_string()?);
        }
        debug!(settings = settings.len(), "loaded generator settings");

        Ok(ConfigSnapshot::from_generator_settings(&settings))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
