// Generate a controller

use std::path::PathBuf;

use heck::{ToPascalCase, ToSnakeCase};
use stencil_config::OptionResolver;
use stencil_generation::TemplateData;

use super::{GeneratorArgs, GeneratorCommand, KindSettings};
use crate::error::{CliError, CliResult};

/// Generates `<path>/<Name>Controller.<ext>` from the controller template
///
/// Template data: `CLASS`, `MODEL`, `RESOURCE` (snake_case) and `COLLECTION`
/// (snake_case plural).
pub struct ControllerCommand<'a> {
    args: GeneratorArgs,
    settings: KindSettings<'a>,
}

impl<'a> ControllerCommand<'a> {
    pub fn new(args: GeneratorArgs, resolver: OptionResolver<'a>) -> Self {
        Self {
            args,
            settings: KindSettings::new("controller", "rs", resolver),
        }
    }

    fn model(&self) -> String {
        self.args
            .name
            .trim_end_matches("Controller")
            .trim_end_matches("_controller")
            .to_pascal_case()
    }

    fn class_name(&self) -> String {
        format!("{}Controller", self.model())
    }
}

impl GeneratorCommand for ControllerCommand<'_> {
    fn name(&self) -> &str {
        self.settings.kind()
    }

    fn template_data(&self) -> TemplateData {
        let model = self.model();
        let resource = model.to_snake_case();
        TemplateData::new()
            .with("CLASS", self.class_name())
            .with("COLLECTION", format!("{}s", resource))
            .with("RESOURCE", resource)
            .with("MODEL", model)
    }

    fn generation_path(&self) -> CliResult<PathBuf> {
        if self.model().is_empty() {
            return Err(CliError::InvalidArgument {
                message: format!("controller name \"{}\" names no model", self.args.name),
            });
        }
        self.settings.file_path(&self.args, &self.class_name())
    }

    fn template_path(&self) -> CliResult<PathBuf> {
        self.settings.template_path(&self.args)
    }
}
