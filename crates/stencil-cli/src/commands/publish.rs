// Publish the bundled templates and a default generators.toml

use std::path::{Path, PathBuf};

use stencil_config::{manager::PROJECT_CONFIG_FILE, ConfigFile};
use stencil_generation::FileWriter;
use tracing::warn;

use super::CommandOutcome;
use crate::error::CliResult;

/// Directory, relative to the publish root, that receives the templates
pub const TEMPLATE_DIR: &str = "templates/generators";

/// Templates shipped with stencil, by generator kind
pub const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    ("model", include_str!("../../templates/model.txt")),
    ("controller", include_str!("../../templates/controller.txt")),
    ("view", include_str!("../../templates/view.txt")),
    ("seed", include_str!("../../templates/seed.txt")),
];

/// Writes the bundled templates and default configuration into a project
///
/// Existing files are reported and left untouched, like any other generator.
pub struct PublishCommand {
    dir: PathBuf,
    writer: FileWriter,
}

impl PublishCommand {
    pub fn new(dir: PathBuf, writer: FileWriter) -> Self {
        Self { dir, writer }
    }

    /// Write every bundled file, continuing past ones that already exist
    pub fn execute(&self) -> CliResult<Vec<CommandOutcome>> {
        let mut outcomes = Vec::new();

        for (kind, content) in BUNDLED_TEMPLATES {
            let path = self.dir.join(TEMPLATE_DIR).join(format!("{}.txt", kind));
            outcomes.push(self.publish(&path, content)?);
        }

        let config = ConfigFile::defaults().to_toml()?;
        outcomes.push(self.publish(&self.dir.join(PROJECT_CONFIG_FILE), &config)?);

        Ok(outcomes)
    }

    fn publish(&self, path: &Path, content: &str) -> CliResult<CommandOutcome> {
        let outcome = match self.writer.write(path, content) {
            Ok(file) if file.dry_run => CommandOutcome::Previewed(file.path),
            Ok(file) => CommandOutcome::Created(file.path),
            Err(e) if e.is_conflict() => {
                warn!(path = %path.display(), "refusing to overwrite");
                CommandOutcome::Refused(path.to_path_buf())
            }
            Err(e) => return Err(e.into()),
        };
        outcome.report();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_publish_writes_templates_and_config() {
        let temp_dir = TempDir::new().unwrap();
        let command = PublishCommand::new(temp_dir.path().to_path_buf(), FileWriter::new());

        let outcomes = command.execute().unwrap();

        assert_eq!(outcomes.len(), BUNDLED_TEMPLATES.len() + 1);
        assert!(outcomes.iter().all(|o| matches!(o, CommandOutcome::Created(_))));
        let model = fs::read_to_string(temp_dir.path().join("templates/generators/model.txt")).unwrap();
        assert!(model.contains("$NAME$"));
        let config = fs::read_to_string(temp_dir.path().join("generators.toml")).unwrap();
        assert!(config.contains("model_template_path"));
    }

    #[test]
    fn test_publish_keeps_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("generators.toml");
        fs::write(&config_path, "# mine\n").unwrap();
        let command = PublishCommand::new(temp_dir.path().to_path_buf(), FileWriter::new());

        let outcomes = command.execute().unwrap();

        assert_eq!(outcomes.last(), Some(&CommandOutcome::Refused(config_path.clone())));
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine\n");
        assert!(temp_dir.path().join("templates/generators/seed.txt").exists());
    }

    #[test]
    fn test_publish_dry_run() {
        let temp_dir = TempDir::new().unwrap();
        let command =
            PublishCommand::new(temp_dir.path().to_path_buf(), FileWriter::with_dry_run(true));

        let outcomes = command.execute().unwrap();

        assert!(outcomes.iter().all(|o| matches!(o, CommandOutcome::Previewed(_))));
        assert!(!temp_dir.path().join("generators.toml").exists());
    }

    #[test]
    fn test_bundled_templates_use_placeholders() {
        for (kind, content) in BUNDLED_TEMPLATES {
            assert!(
                !stencil_generation::TemplateRenderer::placeholders(content).is_empty(),
                "{} template has no placeholders",
                kind
            );
        }
    }
}
