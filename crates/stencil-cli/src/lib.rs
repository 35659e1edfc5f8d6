// Stencil CLI library

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use commands::{execute, CommandOutcome, GeneratorArgs, GeneratorCommand};
pub use error::{CliError, CliResult};
