//! Error types for file generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors that can occur while generating a file
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Template could not be read
    #[error("Template not found: {}", path.display())]
    TemplateNotFound {
        /// Template location that was requested
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// Destination already holds a filesystem entry
    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    /// IO or permission failure while writing the destination
    #[error("Filesystem error at {}: {source}", path.display())]
    FileSystem {
        /// Path being written or created
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Placeholder without a value while rendering in strict mode
    #[error("Missing value for placeholder: ${0}$")]
    MissingPlaceholder(String),
}

impl GenerationError {
    /// Whether this is the recoverable "destination exists" case
    pub fn is_conflict(&self) -> bool {
        matches!(self, GenerationError::FileAlreadyExists(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_file_already_exists_is_conflict() {
        let conflict = GenerationError::FileAlreadyExists(PathBuf::from("a.rs"));
        let missing = GenerationError::TemplateNotFound {
            path: PathBuf::from("t.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let placeholder = GenerationError::MissingPlaceholder("NAME".to_string());

        assert!(conflict.is_conflict());
        assert!(!missing.is_conflict());
        assert!(!placeholder.is_conflict());
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = GenerationError::FileAlreadyExists(PathBuf::from("Widget.ext"));
        assert_eq!(err.to_string(), "File already exists: Widget.ext");

        let err = GenerationError::MissingPlaceholder("NAME".to_string());
        assert_eq!(err.to_string(), "Missing value for placeholder: $NAME$");
    }
}
