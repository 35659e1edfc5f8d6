//! Option resolution: explicit flag, else configuration, else nothing

use tracing::debug;

use crate::types::{config_key, ConfigSnapshot};

/// Resolves command options against a configuration snapshot
///
/// Nothing is cached; every call re-reads the flag and the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct OptionResolver<'a> {
    config: &'a ConfigSnapshot,
}

impl<'a> OptionResolver<'a> {
    /// Create a resolver over a configuration snapshot
    pub fn new(config: &'a ConfigSnapshot) -> Self {
        Self { config }
    }

    /// Resolve an option value
    ///
    /// # Arguments
    /// * `flag` - Value given on the command line, if any; empty counts as absent
    /// * `name` - Setting name looked up as `generators.config.<name>`
    pub fn resolve(&self, flag: Option<&str>, name: &str) -> Option<String> {
        if let Some(value) = flag.filter(|v| !v.is_empty()) {
            debug!(setting = name, "using value from command line");
            return Some(value.to_string());
        }

        let key = config_key(name);
        let value = self.config.get(&key).map(str::to_string);
        debug!(key = %key, found = value.is_some(), "falling back to configuration");
        value
    }
}
