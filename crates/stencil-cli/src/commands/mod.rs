// Generator commands for the stencil CLI

pub mod controller;
pub mod model;
pub mod publish;
pub mod seed;
pub mod view;

pub use controller::ControllerCommand;
pub use model::ModelCommand;
pub use publish::PublishCommand;
pub use seed::SeedCommand;
pub use view::ViewCommand;

use std::path::{Path, PathBuf};

use clap::Args;
use heck::ToSnakeCase;
use stencil_config::{config_key, OptionResolver};
use stencil_generation::{Generator, TemplateData};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};
use crate::output;

/// Capabilities a concrete generator supplies to [`execute`]
///
/// All three values are queried before the file is generated; implementations
/// must not depend on the order in which they are asked for.
pub trait GeneratorCommand {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Placeholder values for the template
    fn template_data(&self) -> TemplateData;

    /// Path of the file to create
    fn generation_path(&self) -> CliResult<PathBuf>;

    /// Path of the template to render
    fn template_path(&self) -> CliResult<PathBuf>;
}

/// How a generator invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The file was created
    Created(PathBuf),
    /// The destination already existed and was left alone
    Refused(PathBuf),
    /// Dry run: the file would have been created
    Previewed(PathBuf),
}

impl CommandOutcome {
    /// Path the outcome refers to
    pub fn path(&self) -> &Path {
        match self {
            CommandOutcome::Created(path)
            | CommandOutcome::Refused(path)
            | CommandOutcome::Previewed(path) => path,
        }
    }

    /// User-facing line describing the outcome
    pub fn message(&self) -> String {
        match self {
            CommandOutcome::Created(path) => format!("Created: {}", path.display()),
            CommandOutcome::Refused(path) => format!(
                "The file, {}, already exists! I don't want to overwrite it.",
                path.display()
            ),
            CommandOutcome::Previewed(path) => format!("Would create: {}", path.display()),
        }
    }

    /// Print the outcome message to the matching stream
    pub fn report(&self) {
        match self {
            CommandOutcome::Created(_) => output::print_success(&self.message()),
            CommandOutcome::Refused(_) => output::print_error(&self.message()),
            CommandOutcome::Previewed(_) => output::print_info(&self.message()),
        }
    }
}

/// Run one generator command through the engine
///
/// A destination that already exists becomes `Refused` and is not an error.
/// Every other failure propagates to the caller.
pub fn execute(command: &dyn GeneratorCommand, generator: &Generator) -> CliResult<CommandOutcome> {
    let destination = command.generation_path()?;
    let template = command.template_path()?;
    let data = command.template_data();
    debug!(
        command = command.name(),
        template = %template.display(),
        destination = %destination.display(),
        "executing generator"
    );

    let outcome = match generator.make(&template, &data, &destination) {
        Ok(file) if file.dry_run => CommandOutcome::Previewed(file.path),
        Ok(file) => CommandOutcome::Created(file.path),
        Err(e) if e.is_conflict() => {
            warn!(command = command.name(), path = %destination.display(), "refusing to overwrite");
            CommandOutcome::Refused(destination)
        }
        Err(e) => return Err(e.into()),
    };

    outcome.report();
    Ok(outcome)
}

/// Options shared by every generator command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorArgs {
    /// Name of the thing to generate
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Where should the file be created?
    #[arg(long, value_name = "DIR")]
    pub path: Option<String>,

    /// The location of the template for this generator
    #[arg(long = "templatePath", alias = "template-path", value_name = "FILE")]
    pub template_path: Option<String>,
}

impl GeneratorArgs {
    /// Create arguments for a name with no explicit options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the `--path` option
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the `--templatePath` option
    pub fn with_template_path(mut self, template_path: impl Into<String>) -> Self {
        self.template_path = Some(template_path.into());
        self
    }

    /// Reject names that are empty, have no letters or digits, or would escape
    /// the target directory
    pub fn validate(&self) -> CliResult<()> {
        let name = self.name.trim();
        let invalid = name.is_empty()
            || name.to_snake_case().is_empty()
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
            || name.starts_with('.')
            || name.starts_with('-');
        if invalid {
            return Err(CliError::InvalidArgument {
                message: format!("invalid name: \"{}\"", self.name),
            });
        }
        Ok(())
    }
}

/// Option lookups for one kind of generator (`model`, `view`, ...)
#[derive(Debug, Clone, Copy)]
pub struct KindSettings<'a> {
    kind: &'static str,
    default_extension: &'static str,
    resolver: OptionResolver<'a>,
}

impl<'a> KindSettings<'a> {
    pub fn new(
        kind: &'static str,
        default_extension: &'static str,
        resolver: OptionResolver<'a>,
    ) -> Self {
        Self {
            kind,
            default_extension,
            resolver,
        }
    }

    /// Generator kind
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Target directory from `--path` or `<kind>_target_path`
    pub fn target_dir(&self, args: &GeneratorArgs) -> CliResult<PathBuf> {
        self.required(args.path.as_deref(), "--path", "target_path")
    }

    /// Template from `--templatePath` or `<kind>_template_path`
    pub fn template_path(&self, args: &GeneratorArgs) -> CliResult<PathBuf> {
        self.required(args.template_path.as_deref(), "--templatePath", "template_path")
    }

    /// File path `<target_dir>/<stem>.<ext>`, extension from `<kind>_extension`
    pub fn file_path(&self, args: &GeneratorArgs, stem: &str) -> CliResult<PathBuf> {
        let extension = self
            .resolver
            .resolve(None, &format!("{}_extension", self.kind))
            .unwrap_or_else(|| self.default_extension.to_string());
        let extension = extension.trim_start_matches('.');
        let file_name = if extension.is_empty() {
            stem.to_string()
        } else {
            format!("{}.{}", stem, extension)
        };
        Ok(self.target_dir(args)?.join(file_name))
    }

    fn required(&self, flag: Option<&str>, option: &str, suffix: &str) -> CliResult<PathBuf> {
        let name = format!("{}_{}", self.kind, suffix);
        self.resolver
            .resolve(flag, &name)
            .map(PathBuf::from)
            .ok_or_else(|| CliError::MissingOption {
                option: option.to_string(),
                key: config_key(&name),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stencil_config::ConfigSnapshot;
    use stencil_generation::{GenerationError, GeneratorOptions, PlaceholderPolicy};
    use tempfile::TempDir;

    struct FixedCommand {
        template: PathBuf,
        destination: PathBuf,
        data: TemplateData,
    }

    impl GeneratorCommand for FixedCommand {
        fn name(&self) -> &str {
            "fixed"
        }

        fn template_data(&self) -> TemplateData {
            self.data.clone()
        }

        fn generation_path(&self) -> CliResult<PathBuf> {
            Ok(self.destination.clone())
        }

        fn template_path(&self) -> CliResult<PathBuf> {
            Ok(self.template.clone())
        }
    }

    fn fixed(temp_dir: &TempDir, template: &str) -> FixedCommand {
        let template_path = temp_dir.path().join("template.txt");
        fs::write(&template_path, template).unwrap();
        FixedCommand {
            template: template_path,
            destination: temp_dir.path().join("Widget.ext"),
            data: TemplateData::new().with("NAME", "Widget"),
        }
    }

    #[test]
    fn test_execute_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let command = fixed(&temp_dir, "class $NAME$ {}");

        let outcome = execute(&command, &Generator::new()).unwrap();

        assert_eq!(outcome, CommandOutcome::Created(command.destination.clone()));
        assert_eq!(
            fs::read_to_string(&command.destination).unwrap(),
            "class Widget {}"
        );
        assert!(outcome.message().starts_with("Created: "));
        assert!(outcome.message().contains("Widget.ext"));
    }

    #[test]
    fn test_execute_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let command = fixed(&temp_dir, "class $NAME$ {}");
        let generator = Generator::new();

        execute(&command, &generator).unwrap();
        let outcome = execute(&command, &generator).unwrap();

        assert_eq!(outcome, CommandOutcome::Refused(command.destination.clone()));
        assert!(outcome.message().contains("already exists"));
        assert!(outcome.message().contains("Widget.ext"));
        assert_eq!(
            fs::read_to_string(&command.destination).unwrap(),
            "class Widget {}"
        );
    }

    #[test]
    fn test_execute_propagates_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let mut command = fixed(&temp_dir, "class $NAME$ {}");
        command.template = temp_dir.path().join("missing.txt");

        let result = execute(&command, &Generator::new());

        assert!(matches!(
            result,
            Err(CliError::Generation(GenerationError::TemplateNotFound { .. }))
        ));
    }

    #[test]
    fn test_execute_propagates_strict_placeholder_failure() {
        let temp_dir = TempDir::new().unwrap();
        let command = fixed(&temp_dir, "class $NAME$ extends $PARENT$ {}");
        let generator = Generator::with_options(GeneratorOptions {
            policy: PlaceholderPolicy::Strict,
            dry_run: false,
        });

        let result = execute(&command, &generator);

        assert!(matches!(
            result,
            Err(CliError::Generation(GenerationError::MissingPlaceholder(_)))
        ));
        assert!(!command.destination.exists());
    }

    #[test]
    fn test_execute_dry_run_previews() {
        let temp_dir = TempDir::new().unwrap();
        let command = fixed(&temp_dir, "class $NAME$ {}");
        let generator = Generator::with_options(GeneratorOptions {
            dry_run: true,
            ..Default::default()
        });

        let outcome = execute(&command, &generator).unwrap();

        assert_eq!(outcome, CommandOutcome::Previewed(command.destination.clone()));
        assert!(outcome.message().starts_with("Would create: "));
        assert!(!command.destination.exists());
    }

    #[test]
    fn test_validate_names() {
        assert!(GeneratorArgs::new("Widget").validate().is_ok());
        assert!(GeneratorArgs::new("order_item").validate().is_ok());
        assert!(GeneratorArgs::new("").validate().is_err());
        assert!(GeneratorArgs::new("../Widget").validate().is_err());
        assert!(GeneratorArgs::new("a/b").validate().is_err());
        assert!(GeneratorArgs::new(".hidden").validate().is_err());
        assert!(GeneratorArgs::new("___").validate().is_err());
        assert!(GeneratorArgs::new("!!!").validate().is_err());
        assert!(GeneratorArgs::new("- _").validate().is_err());
    }

    #[test]
    fn test_kind_settings_flag_then_config() {
        let config = ConfigSnapshot::from_pairs([
            ("generators.config.model_target_path", "src/models"),
            ("generators.config.model_extension", "rs"),
        ]);
        let settings = KindSettings::new("model", "txt", OptionResolver::new(&config));

        let from_config = GeneratorArgs::new("Widget");
        assert_eq!(
            settings.file_path(&from_config, "Widget").unwrap(),
            PathBuf::from("src/models/Widget.rs")
        );

        let from_flag = GeneratorArgs::new("Widget").with_path("app");
        assert_eq!(
            settings.file_path(&from_flag, "Widget").unwrap(),
            PathBuf::from("app/Widget.rs")
        );
    }

    #[test]
    fn test_kind_settings_default_extension() {
        let config = ConfigSnapshot::new();
        let settings = KindSettings::new("view", "html", OptionResolver::new(&config));
        let args = GeneratorArgs::new("index").with_path("views");

        assert_eq!(
            settings.file_path(&args, "index").unwrap(),
            PathBuf::from("views/index.html")
        );
    }

    #[test]
    fn test_kind_settings_missing_option() {
        let config = ConfigSnapshot::new();
        let settings = KindSettings::new("model", "rs", OptionResolver::new(&config));

        match settings.template_path(&GeneratorArgs::new("Widget")) {
            Err(CliError::MissingOption { option, key }) => {
                assert_eq!(option, "--templatePath");
                assert_eq!(key, "generators.config.model_template_path");
            }
            other => panic!("expected MissingOption, got {:?}", other),
        }
    }
}
