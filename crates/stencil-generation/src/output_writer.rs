//! Safe writer for generated files
//!
//! Writes rendered content to a destination that must not exist yet. The body is
//! staged in a temporary file beside the destination and moved into place with a
//! no-clobber persist, so the destination only ever holds a complete file. An
//! entry that appears between the existence check and the persist is reported as a
//! conflict rather than clobbered.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::{
    error::{GenerationError, Result},
    models::GeneratedFile,
};

/// Prefix of the staging file created next to each destination
const STAGING_PREFIX: &str = ".stencil-";

/// Writes generated content without ever overwriting
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter {
    /// Check for conflicts but write nothing
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that previews instead of writing
    pub fn with_dry_run(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Whether this writer previews instead of writing
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Fail with `FileAlreadyExists` if anything is at `path`
    ///
    /// Files, directories and dangling symlinks all count as existing.
    pub fn check(&self, path: &Path) -> Result<()> {
        match fs::symlink_metadata(path) {
            Ok(_) => Err(GenerationError::FileAlreadyExists(path.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(GenerationError::FileSystem {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write `content` as the complete body of a new file at `path`
    ///
    /// Missing parent directories are created first. Calling this twice with the
    /// same path always fails the second time with `FileAlreadyExists`.
    pub fn write(&self, path: &Path, content: &str) -> Result<GeneratedFile> {
        self.check(path)?;

        let generated = GeneratedFile {
            path: path.to_path_buf(),
            bytes_written: content.len(),
            dry_run: self.dry_run,
        };

        if self.dry_run {
            debug!(path = %path.display(), "dry run, skipping write");
            return Ok(generated);
        }

        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|source| GenerationError::FileSystem {
                    path: parent.to_path_buf(),
                    source,
                })?;
                parent
            }
            None => Path::new("."),
        };

        let staged = stage(dir, content)?;
        persist(staged, path)?;

        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(generated)
    }
}

/// Write `content` to a fresh temporary file inside `dir`
///
/// The temporary file is deleted when dropped, so a failed write leaves nothing
/// behind.
fn stage(dir: &Path, content: &str) -> Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(STAGING_PREFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // honours the process umask like a plain create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut staged = builder
        .tempfile_in(dir)
        .map_err(|source| GenerationError::FileSystem {
            path: dir.to_path_buf(),
            source,
        })?;

    staged
        .write_all(content.as_bytes())
        .and_then(|_| staged.flush())
        .map_err(|source| GenerationError::FileSystem {
            path: staged.path().to_path_buf(),
            source,
        })?;

    Ok(staged)
}

/// Move a staged file to `path`, refusing to replace anything already there
fn persist(staged: NamedTempFile, path: &Path) -> Result<()> {
    staged
        .persist_noclobber(path)
        .map(|_| ())
        .map_err(|e| match e.error.kind() {
            io::ErrorKind::AlreadyExists => GenerationError::FileAlreadyExists(path.to_path_buf()),
            _ => GenerationError::FileSystem {
                path: path.to_path_buf(),
                source: e.error,
            },
        })
}
