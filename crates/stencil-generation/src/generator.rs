//! Generation engine: load, render, then write one file
//!
//! `make` is the single integration point for every generator command. Errors
//! from each step propagate unchanged. The destination is checked before any
//! write happens, so a conflict simply discards the rendered text.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    error::Result,
    models::{GeneratedFile, PlaceholderPolicy, TemplateData},
    output_writer::FileWriter,
    templates::{TemplateLoader, TemplateRenderer},
};

/// Options controlling a generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Treatment of placeholders without values
    pub policy: PlaceholderPolicy,
    /// Check and render, but write nothing
    pub dry_run: bool,
}

/// Renders templates and writes the results to new files
#[derive(Debug, Clone, Default)]
pub struct Generator {
    loader: TemplateLoader,
    renderer: TemplateRenderer,
    writer: FileWriter,
}

impl Generator {
    /// Create a generator with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom options
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            loader: TemplateLoader::new(),
            renderer: TemplateRenderer::with_policy(options.policy),
            writer: FileWriter::with_dry_run(options.dry_run),
        }
    }

    /// Options this generator was built with
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            policy: self.renderer.policy(),
            dry_run: self.writer.is_dry_run(),
        }
    }

    /// Generate one file
    ///
    /// # Arguments
    /// * `template_path` - Template to read
    /// * `data` - Placeholder values
    /// * `destination` - Path of the file to create
    ///
    /// # Returns
    /// The generated file, or `TemplateNotFound`, `MissingPlaceholder`,
    /// `FileAlreadyExists` or `FileSystem`
    pub fn make(
        &self,
        template_path: &Path,
        data: &TemplateData,
        destination: &Path,
    ) -> Result<GeneratedFile> {
        let template = self.loader.load(template_path)?;
        let rendered = self.renderer.render(&template, data)?;
        let unmatched = TemplateRenderer::unmatched(&template, data);
        if !unmatched.is_empty() {
            warn!(
                template = %template_path.display(),
                placeholders = ?unmatched,
                "leaving placeholders without values in place"
            );
        }
        debug!(
            template = %template_path.display(),
            placeholders = data.len(),
            "rendered template"
        );

        let generated = self.writer.write(destination, &rendered)?;
        info!(
            path = %generated.path.display(),
            bytes = generated.bytes_written,
            dry_run = generated.dry_run,
            "generated file"
        );
        Ok(generated)
    }
}
