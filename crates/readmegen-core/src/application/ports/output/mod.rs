//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `readmegen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{ProjectFacts, Template};
use crate::error::ReadmeResult;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `readmegen_adapters::filesystem::LocalFilesystem` (production)
/// - `readmegen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> ReadmeResult<String>;

    /// Immediate children of a directory, in no particular order.
    fn read_dir(&self, path: &Path) -> ReadmeResult<Vec<DirEntryInfo>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Absolute, normalized form of `path` (used for naming the root).
    fn canonicalize(&self, path: &Path) -> ReadmeResult<PathBuf>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ReadmeResult<()>;
}

/// Port for version-control remote lookup.
///
/// Implemented by:
/// - `readmegen_adapters::remote::GitCliRemote` (runs `git remote get-url origin`)
/// - `readmegen_adapters::remote::StaticRemote` (testing)
pub trait RemoteSource: Send + Sync {
    /// Whether version-control metadata exists for `root` at all.
    ///
    /// When this is `false` remote detection is skipped without a warning.
    fn is_available(&self, root: &Path) -> bool;

    /// URL of the default (`origin`) remote.
    fn origin_url(&self, root: &Path) -> ReadmeResult<String>;
}

/// Port for template lookup.
pub trait TemplateStore: Send + Sync {
    /// The template shipped with the binary.
    fn builtin(&self) -> Template;

    /// Load an external template from `path`, reading through `filesystem`.
    fn load(&self, path: &Path, filesystem: &dyn Filesystem) -> ReadmeResult<Template>;
}

/// Port for template rendering.
///
/// Implementations must render referenced-but-absent variables as empty
/// strings rather than failing.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &Template, facts: &ProjectFacts) -> ReadmeResult<String>;
}
