// Generate a table seeder

use std::path::PathBuf;

use heck::{ToPascalCase, ToSnakeCase};
use stencil_config::OptionResolver;
use stencil_generation::TemplateData;

use super::{GeneratorArgs, GeneratorCommand, KindSettings};
use crate::error::CliResult;

/// Generates `<path>/<Name>TableSeeder.<ext>` from the seed template
///
/// The name is the table, e.g. `widgets`; the model is its singular form. Only
/// regular English plurals are singularized (`categories`, `addresses`,
/// `widgets`); a word such as `people` is kept as is.
pub struct SeedCommand<'a> {
    args: GeneratorArgs,
    settings: KindSettings<'a>,
}

impl<'a> SeedCommand<'a> {
    pub fn new(args: GeneratorArgs, resolver: OptionResolver<'a>) -> Self {
        Self {
            args,
            settings: KindSettings::new("seed", "rs", resolver),
        }
    }

    fn class_name(&self) -> String {
        format!("{}TableSeeder", self.args.name.to_pascal_case())
    }

    fn model(&self) -> String {
        singular(&self.args.name.to_snake_case()).to_pascal_case()
    }
}

/// Singular form of a snake_case plural, changing only its last word
fn singular(plural: &str) -> String {
    if let Some(stem) = plural.strip_suffix("ies").filter(|s| !s.is_empty()) {
        return format!("{}y", stem);
    }
    for suffix in ["sses", "shes", "ches", "xes", "uses"] {
        if plural.ends_with(suffix) {
            return plural[..plural.len() - 2].to_string();
        }
    }
    if plural.ends_with("ss") || plural.ends_with("us") {
        return plural.to_string();
    }
    match plural.strip_suffix('s').filter(|s| !s.is_empty()) {
        Some(stem) => stem.to_string(),
        None => plural.to_string(),
    }
}

impl GeneratorCommand for SeedCommand<'_> {
    fn name(&self) -> &str {
        self.settings.kind()
    }

    fn template_data(&self) -> TemplateData {
        TemplateData::new()
            .with("CLASS", self.class_name())
            .with("TABLE", self.args.name.to_snake_case())
            .with("MODEL", self.model())
    }

    fn generation_path(&self) -> CliResult<PathBuf> {
        self.settings.file_path(&self.args, &self.class_name())
    }

    fn template_path(&self) -> CliResult<PathBuf> {
        self.settings.template_path(&self.args)
    }
}
