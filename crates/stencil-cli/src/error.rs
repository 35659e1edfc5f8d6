// CLI error types and user-facing messages

use stencil_config::ConfigError;
use stencil_generation::GenerationError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("No value for {option} and no `{key}` in configuration")]
    MissingOption { option: String, key: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'stencil --help' for usage information.", message)
            }
            CliError::MissingOption { option, key } => {
                format!(
                    "No value for {} and no `{}` in configuration.\n\nPass {} or set the key in generators.toml.",
                    option, key, option
                )
            }
            CliError::Config(e) => {
                format!("Configuration error: {}\n\nCheck generators.toml and STENCIL_* environment variables.", e)
            }
            CliError::Generation(GenerationError::TemplateNotFound { path, source }) => {
                format!(
                    "Template not found: {} ({})\n\nPass --templatePath or run 'stencil publish' to install the default templates.",
                    path.display(),
                    source
                )
            }
            CliError::Generation(GenerationError::MissingPlaceholder(name)) => {
                format!(
                    "Template placeholder ${}$ has no value.\n\nDrop --strict to leave unmatched placeholders in place.",
                    name
                )
            }
            CliError::Generation(e) => format!("File generation failed: {}", e),
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;
