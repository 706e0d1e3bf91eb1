//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use readmegen_core::{
    application::{ApplicationError, ports::DirEntryInfo, ports::Filesystem},
    error::{ReadmeError, ReadmeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> ReadmeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    /// One level only; symlinked directories count as directories.
    fn read_dir(&self, path: &Path) -> ReadmeResult<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            match entry {
                Ok(entry) => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    let is_dir = entry.file_type().is_dir() || entry.path().is_dir();
                    entries.push(DirEntryInfo { name, is_dir });
                }
                // Failing to open the directory itself is reported at depth 0.
                Err(e) if e.depth() == 0 => {
                    return Err(ApplicationError::FilesystemError {
                        path: path.to_path_buf(),
                        reason: format!("Failed to list directory: {e}"),
                    }
                    .into());
                }
                Err(e) => debug!(path = %path.display(), error = %e, "skipping entry"),
            }
        }
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn canonicalize(&self, path: &Path) -> ReadmeResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| map_io_error(path, e, "resolve path"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ReadmeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ReadmeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
