//! Template loading and rendering
//!
//! Templates are plain text with `$NAME$` placeholders, where NAME matches
//! `[A-Za-z_][A-Za-z0-9_]*`.

pub mod loader;
pub mod renderer;

// Re-export public API
pub use loader::TemplateLoader;
pub use renderer::TemplateRenderer;
