// Generate a model

use std::path::PathBuf;

use heck::ToPascalCase;
use stencil_config::OptionResolver;
use stencil_generation::TemplateData;

use super::{GeneratorArgs, GeneratorCommand, KindSettings};
use crate::error::CliResult;

/// Generates `<path>/<Name>.<ext>` from the model template
///
/// Template data: `NAME` (PascalCase).
pub struct ModelCommand<'a> {
    args: GeneratorArgs,
    settings: KindSettings<'a>,
}

impl<'a> ModelCommand<'a> {
    pub fn new(args: GeneratorArgs, resolver: OptionResolver<'a>) -> Self {
        Self {
            args,
            settings: KindSettings::new("model", "rs", resolver),
        }
    }

    fn class_name(&self) -> String {
        self.args.name.to_pascal_case()
    }
}

impl GeneratorCommand for ModelCommand<'_> {
    fn name(&self) -> &str {
        self.settings.kind()
    }

    fn template_data(&self) -> TemplateData {
        TemplateData::new().with("NAME", self.class_name())
    }

    fn generation_path(&self) -> CliResult<PathBuf> {
        self.settings.file_path(&self.args, &self.class_name())
    }

    fn template_path(&self) -> CliResult<PathBuf> {
        self.settings.template_path(&self.args)
    }
}
