//! Stencil configuration
//!
//! Loads the `generators.config.*` settings once per process into an immutable
//! [`ConfigSnapshot`], and resolves command options against it with
//! [`OptionResolver`]: an explicit flag wins, otherwise the configured value.

pub mod error;
pub mod manager;
pub mod resolver;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use resolver::OptionResolver;
pub use types::{config_key, ConfigFile, ConfigSnapshot, GeneratorsSection, CONFIG_PREFIX};
