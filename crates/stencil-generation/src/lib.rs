#![warn(missing_docs)]

//! File generation engine for stencil
//!
//! Renders `$NAME$` templates with substitution data and materializes the result
//! at a destination path, refusing to overwrite anything already there.

pub mod error;
pub mod generator;
pub mod models;
pub mod output_writer;
pub mod templates;

// Re-export public API
pub use error::{GenerationError, Result};
pub use generator::{Generator, GeneratorOptions};
pub use models::{GeneratedFile, PlaceholderPolicy, TemplateData};
pub use output_writer::FileWriter;
pub use templates::{TemplateLoader, TemplateRenderer};
