//! Project analysis over the `Filesystem` port.
//!
//! Everything here is best effort: a file that is missing, unreadable or
//! malformed contributes nothing and leaves a diagnostic, it never fails
//! the run.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        Diagnostics, ExclusionSet, Extraction, detect_entry_points,
        manifest::{self, PYPROJECT_TOML, REQUIREMENTS_TXT, SETUP_PY},
    },
};

/// Files whose absence `check` points out, with a short label.
const ESSENTIAL_FILES: [(&str, &str); 4] = [
    ("requirements.txt", "dependency list"),
    ("README.md", "README"),
    ("LICENSE", "license file"),
    (".gitignore", "git ignore rules"),
];

const TEST_DIRS: [&str; 2] = ["tests", "test"];

/// Merged result of the three manifest sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSummary {
    /// First name found: setup.py, then `[project]`, then `[tool.poetry]`.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Union of all sources, deduplicated by exact string.
    pub dependencies: BTreeSet<String>,
}

impl ManifestSummary {
    /// Keep what is already set; fill the gaps from a later source.
    fn offer(&mut self, name: Option<String>, description: Option<String>) {
        if self.name.is_none() {
            self.name = name.filter(|n| !n.is_empty());
        }
        if self.description.is_none() {
            self.description = description.filter(|d| !d.is_empty());
        }
    }
}

/// Reads one project root through a [`Filesystem`].
pub struct ProjectAnalyzer<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
    exclusions: &'a ExclusionSet,
}

impl<'a> ProjectAnalyzer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path, exclusions: &'a ExclusionSet) -> Self {
        Self {
            filesystem,
            root,
            exclusions,
        }
    }

    /// Directory name of the root; resolves `.` to the real name.
    pub fn root_name(&self) -> String {
        if let Some(name) = self.root.file_name() {
            return name.to_string_lossy().into_owned();
        }
        self.filesystem
            .canonicalize(self.root)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// ASCII tree of the project, root line first.
    ///
    /// Siblings are sorted by byte order of their names, so `C` sorts before
    /// `a`. Directories are entered only while `depth < max_depth`; deeper
    /// content is left out without a marker. Unreadable directories show no
    /// children.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn structure(&self, max_depth: usize) -> String {
        let mut lines = vec![format!("{}/", self.root_name())];
        self.walk(self.root, "", 0, max_depth, &mut lines);
        lines.join("\n")
    }

    fn walk(&self, dir: &Path, prefix: &str, depth: usize, max_depth: usize, lines: &mut Vec<String>) {
        let mut children = match self.filesystem.read_dir(dir) {
            Ok(children) => children,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };
        children.retain(|c| !self.exclusions.excluded(&c.name));
        children.sort_by(|a, b| a.name.cmp(&b.name));

        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{}", child.name));

            if child.is_dir && depth < max_depth {
                let extension = if is_last { "    " } else { "│   " };
                self.walk(
                    &dir.join(&child.name),
                    &format!("{prefix}{extension}"),
                    depth + 1,
                    max_depth,
                    lines,
                );
            }
        }
    }

    // -------------------------------------------------------------------------
    // Manifests
    // -------------------------------------------------------------------------

    /// Run all three manifest sources and merge them.
    ///
    /// `wants_metadata` is set when settings leave name or description to
    /// detection; only then is a setup.py without either worth a warning.
    #[instrument(skip(self, diagnostics), fields(root = %self.root.display()))]
    pub fn manifests(&self, wants_metadata: bool, diagnostics: &mut Diagnostics) -> ManifestSummary {
        let mut summary = ManifestSummary::default();

        if let Some(content) = report(SETUP_PY, self.read_source(SETUP_PY), diagnostics) {
            let name = manifest::setup_py_name(&content).found();
            let description = manifest::setup_py_description(&content).found();
            if wants_metadata && name.is_none() && description.is_none() {
                diagnostics.warn(SETUP_PY, "no `name` or `description` assignment found");
            }
            summary.offer(name, description);

            match manifest::setup_py_dependencies(&content) {
                Extraction::Found(deps) => summary.dependencies.extend(deps),
                _ => diagnostics.info(SETUP_PY, "no `install_requires` list found"),
            }
        }

        let pyproject = self
            .read_source(PYPROJECT_TOML)
            .and_then(|content| manifest::parse_pyproject(&content));
        if let Some(meta) = report(PYPROJECT_TOML, pyproject, diagnostics) {
            let name = meta.name().map(String::from);
            let description = meta.description().map(String::from);
            summary.offer(name, description);
            summary.dependencies.extend(meta.dependencies);
        }

        if let Some(content) = report(REQUIREMENTS_TXT, self.read_source(REQUIREMENTS_TXT), diagnostics)
        {
            summary
                .dependencies
                .extend(manifest::requirements_dependencies(&content));
        }

        debug!(
            name = summary.name.as_deref().unwrap_or("-"),
            dependencies = summary.dependencies.len(),
            "manifests merged"
        );
        summary
    }

    fn read_source(&self, file: &str) -> Extraction<String> {
        let path = self.root.join(file);
        if !self.filesystem.exists(&path) {
            debug!(file, "manifest not present");
            return Extraction::NotFound;
        }
        match self.filesystem.read_to_string(&path) {
            Ok(content) => Extraction::Found(content),
            Err(e) => Extraction::Failed(format!("could not read: {e}")),
        }
    }

    // -------------------------------------------------------------------------
    // Entry points and checks
    // -------------------------------------------------------------------------

    pub fn entry_points(&self) -> Vec<String> {
        detect_entry_points(|name| self.filesystem.exists(&self.root.join(name)))
    }

    /// Suggestions for a tidier project layout (used by `readmegen check`).
    pub fn suggestions(&self) -> Vec<String> {
        let mut suggestions: Vec<String> = ESSENTIAL_FILES
            .iter()
            .filter(|(file, _)| !self.filesystem.exists(&self.root.join(file)))
            .map(|(file, label)| format!("Consider adding {file} ({label})"))
            .collect();

        if !self.has_python_files(self.root) && !self.has_python_files(&self.root.join("src")) {
            suggestions.push("No Python source files found".into());
        }

        if !TEST_DIRS
            .iter()
            .any(|dir| self.filesystem.exists(&self.root.join(dir)))
        {
            suggestions.push("Consider adding a test directory (tests/)".into());
        }

        suggestions
    }

    fn has_python_files(&self, dir: &Path) -> bool {
        self.filesystem
            .read_dir(dir)
            .map(|entries| entries.iter().any(|e| !e.is_dir && e.name.ends_with(".py")))
            .unwrap_or(false)
    }
}

/// Unwrap a source outcome, recording failures.
fn report<T>(source: &str, outcome: Extraction<T>, diagnostics: &mut Diagnostics) -> Option<T> {
    match outcome {
        Extraction::Found(value) => Some(value),
        Extraction::NotFound => None,
        Extraction::Failed(reason) => {
            diagnostics.warn(source, reason);
            None
        }
    }
}
