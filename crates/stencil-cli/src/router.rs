// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stencil_config::{ConfigManager, ConfigSnapshot, OptionResolver};
use stencil_generation::{FileWriter, Generator, GeneratorOptions, PlaceholderPolicy};
use tracing::debug;

use crate::commands::*;
use crate::error::CliResult;

/// Stencil - render templates into new files, never overwriting
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(bin_name = "stencil")]
#[command(about = "Generate source files from templates without overwriting existing files")]
#[command(
    long_about = "Stencil renders $NAME$ templates into new files.\n\nEach generator takes a NAME plus --path and --templatePath; when a flag is omitted the value comes from generators.config.<kind>_target_path or <kind>_template_path in generators.toml.\n\nQuick start:\n  • stencil publish          Install default templates and generators.toml\n  • stencil model Widget     Create src/models/Widget.rs"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: ./generators.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Ignore the global configuration file
    #[arg(long, global = true)]
    pub no_global_config: bool,

    /// Fail when a template placeholder has no value
    #[arg(long, global = true)]
    pub strict: bool,

    /// Preview changes without writing files
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a model
    Model(GeneratorArgs),

    /// Generate a controller
    Controller(GeneratorArgs),

    /// Generate a view
    View(GeneratorArgs),

    /// Generate a table seeder
    Seed(GeneratorArgs),

    /// Install the default templates and generators.toml
    Publish {
        /// Project directory to publish into
        #[arg(long, default_value = ".", value_name = "DIR")]
        dir: PathBuf,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub fn route() -> CliResult<Vec<CommandOutcome>> {
        let cli = Cli::parse();

        // Initialize logging based on CLI flags
        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli)
    }

    /// Load the configuration snapshot selected by the CLI flags
    pub fn load_config(cli: &Cli) -> CliResult<ConfigSnapshot> {
        let manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        let manager = if cli.no_global_config {
            manager.with_global_path(None)
        } else {
            manager
        };
        debug!(path = %manager.project_path().display(), "loading configuration");
        Ok(manager.load()?)
    }

    /// Generator configured by the CLI flags
    pub fn generator(cli: &Cli) -> Generator {
        Generator::with_options(GeneratorOptions {
            policy: if cli.strict {
                PlaceholderPolicy::Strict
            } else {
                PlaceholderPolicy::Preserve
            },
            dry_run: cli.dry_run,
        })
    }

    /// Execute a command
    pub fn execute(cli: &Cli) -> CliResult<Vec<CommandOutcome>> {
        let generator = Self::generator(cli);

        match &cli.command {
            Commands::Publish { dir } => {
                let cmd = PublishCommand::new(dir.clone(), FileWriter::with_dry_run(cli.dry_run));
                cmd.execute()
            }
            Commands::Model(args) => {
                let config = Self::load_config(cli)?;
                let cmd = ModelCommand::new(args.clone(), OptionResolver::new(&config));
                Self::generate(&cmd, args, &generator)
            }
            Commands::Controller(args) => {
                let config = Self::load_config(cli)?;
                let cmd = ControllerCommand::new(args.clone(), OptionResolver::new(&config));
                Self::generate(&cmd, args, &generator)
            }
            Commands::View(args) => {
                let config = Self::load_config(cli)?;
                let cmd = ViewCommand::new(args.clone(), OptionResolver::new(&config));
                Self::generate(&cmd, args, &generator)
            }
            Commands::Seed(args) => {
                let config = Self::load_config(cli)?;
                let cmd = SeedCommand::new(args.clone(), OptionResolver::new(&config));
                Self::generate(&cmd, args, &generator)
            }
        }
    }

    fn generate(
        command: &dyn GeneratorCommand,
        args: &GeneratorArgs,
        generator: &Generator,
    ) -> CliResult<Vec<CommandOutcome>> {
        args.validate()?;
        Ok(vec![execute(command, generator)?])
    }
}
