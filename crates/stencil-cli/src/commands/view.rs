// Generate a view

use std::path::PathBuf;

use heck::{ToSnakeCase, ToTitleCase};
use stencil_config::OptionResolver;
use stencil_generation::TemplateData;

use super::{GeneratorArgs, GeneratorCommand, KindSettings};
use crate::error::CliResult;

/// Generates `<path>/<name>.<ext>` from the view template
pub struct ViewCommand<'a> {
    args: GeneratorArgs,
    settings: KindSettings<'a>,
}

impl<'a> ViewCommand<'a> {
    pub fn new(args: GeneratorArgs, resolver: OptionResolver<'a>) -> Self {
        Self {
            args,
            settings: KindSettings::new("view", "html", resolver),
        }
    }
}

impl GeneratorCommand for ViewCommand<'_> {
    fn name(&self) -> &str {
        self.settings.kind()
    }

    fn template_data(&self) -> TemplateData {
        TemplateData::new()
            .with("NAME", self.args.name.to_snake_case())
            .with("TITLE", self.args.name.to_title_case())
    }

    fn generation_path(&self) -> CliResult<PathBuf> {
        self.settings
            .file_path(&self.args, &self.args.name.to_snake_case())
    }

    fn template_path(&self) -> CliResult<PathBuf> {
        self.settings.template_path(&self.args)
    }
}
