//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use readmegen_core::{
    application::{ApplicationError, ports::DirEntryInfo, ports::Filesystem},
    error::{ReadmeError, ReadmeResult},
};

/// In-memory filesystem for testing.
///
/// Adding a file or directory registers all of its ancestors as directories.
/// Paths marked unreadable fail every read and listing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.directories.insert(ancestor.to_path_buf());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) -> &Self {
        let path = normalize(path.as_ref());
        if let Ok(mut inner) = self.inner.write() {
            inner.add_ancestors(&path);
            inner.files.insert(path, content.into());
        }
        self
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        let path = normalize(path.as_ref());
        if let Ok(mut inner) = self.inner.write() {
            inner.add_ancestors(&path);
            inner.directories.insert(path);
        }
        self
    }

    /// Make reads and listings of `path` fail.
    pub fn mark_unreadable(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.unreadable.insert(normalize(path.as_ref()));
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(&normalize(path.as_ref())).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> ReadmeResult<String> {
        let path = normalize(path);
        let inner = self.inner.read().map_err(|_| lock_error(&path))?;
        if inner.unreadable.contains(&path) {
            return Err(fs_error(&path, "Permission denied"));
        }
        inner
            .files
            .get(&path)
            .cloned()
            .ok_or_else(|| fs_error(&path, "No such file"))
    }

    fn read_dir(&self, path: &Path) -> ReadmeResult<Vec<DirEntryInfo>> {
        let path = normalize(path);
        let inner = self.inner.read().map_err(|_| lock_error(&path))?;
        if inner.unreadable.contains(&path) {
            return Err(fs_error(&path, "Permission denied"));
        }
        if !inner.directories.contains(&path) {
            return Err(fs_error(&path, "No such directory"));
        }

        let name_of = |p: &PathBuf| p.file_name().map(|n| n.to_string_lossy().into_owned());
        let files = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path.as_path()))
            .filter_map(|p| name_of(p).map(DirEntryInfo::file));
        let dirs = inner
            .directories
            .iter()
            .filter(|p| p.parent() == Some(path.as_path()))
            .filter_map(|p| name_of(p).map(DirEntryInfo::dir));
        Ok(files.chain(dirs).collect())
    }

    fn exists(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(&path) || inner.directories.contains(&path))
            .unwrap_or(false)
    }

    fn canonicalize(&self, path: &Path) -> ReadmeResult<PathBuf> {
        let normalized = normalize(path);
        if self.exists(&normalized) {
            Ok(normalized)
        } else {
            Err(fs_error(path, "No such file or directory"))
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> ReadmeResult<()> {
        let path = normalize(path);
        let mut inner = self.inner.write().map_err(|_| lock_error(&path))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(fs_error(&path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path, content.to_string());
        Ok(())
    }
}

/// Drop `.` components so `proj/./setup.py` and `proj/setup.py` agree.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn fs_error(path: &Path, reason: &str) -> ReadmeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn lock_error(path: &Path) -> ReadmeError {
    fs_error(path, "In-memory filesystem lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_a_file_creates_its_directories() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/proj/src/app.py", "print()");
        assert!(fs.exists(Path::new("/proj")));
        assert!(fs.exists(Path::new("/proj/src")));
        assert_eq!(
            fs.read_to_string(Path::new("/proj/src/app.py")).unwrap(),
            "print()"
        );
    }

    #[test]
    fn read_dir_lists_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/proj/setup.py", "")
            .add_file("/proj/src/app.py", "")
            .add_dir("/proj/docs");

        let mut names: Vec<_> = fs
            .read_dir(Path::new("/proj"))
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.is_dir))
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                ("docs".to_string(), true),
                ("setup.py".to_string(), false),
                ("src".to_string(), true),
            ]
        );
    }

    #[test]
    fn unreadable_paths_fail() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/proj/locked/x.py", "").mark_unreadable("/proj/locked");
        assert!(fs.read_dir(Path::new("/proj/locked")).is_err());
        assert!(fs.exists(Path::new("/proj/locked")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nope/README.md"), "x").is_err());

        fs.add_dir("/proj");
        fs.write_file(Path::new("/proj/README.md"), "x").unwrap();
        assert_eq!(fs.read_file("/proj/README.md").as_deref(), Some("x"));
    }

    #[test]
    fn current_dir_components_are_ignored() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/proj/setup.py", "");
        assert!(fs.exists(Path::new("/proj/./setup.py")));
    }
}
