//! Template loading from files
//!
//! Templates are read fresh on every call. Nothing is cached, so edits to a
//! template take effect on the next generation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GenerationError, Result};

/// Reads template text from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateLoader;

impl TemplateLoader {
    /// Create a new template loader
    pub fn new() -> Self {
        Self
    }

    /// Load a template's raw text
    ///
    /// Any failure to read the path, including it not existing or being a
    /// directory, is reported as `TemplateNotFound`.
    pub fn load(&self, path: &Path) -> Result<String> {
        debug!(template = %path.display(), "loading template");

        fs::read_to_string(path).map_err(|source| GenerationError::TemplateNotFound {
            path: path.to_path_buf(),
            source,
        })
    }
}
