//! Best-effort extraction from Python project manifests.
//!
//! Each function takes file *content* (never a path) and returns an
//! [`Extraction`], so every pattern can be tested on its own. Reading the
//! files and merging the outcomes is the analyzer's job.
//!
//! | File               | Extracts                                     |
//! |--------------------|----------------------------------------------|
//! | `setup.py`         | `name`, `description`, `install_requires`    |
//! | `pyproject.toml`   | `[project]` or `[tool.poetry]` metadata      |
//! | `requirements.txt` | one dependency per line                      |

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

pub const SETUP_PY: &str = "setup.py";
pub const PYPROJECT_TOML: &str = "pyproject.toml";
pub const REQUIREMENTS_TXT: &str = "requirements.txt";

/// Poetry lists the interpreter itself as a dependency; it never is one.
const PYTHON_PSEUDO_DEPENDENCY: &str = "python";

static SETUP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name\s*=\s*["']([^"']+)["']"#).expect("valid regex"));

static SETUP_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"description\s*=\s*["']([^"']+)["']"#).expect("valid regex"));

static INSTALL_REQUIRES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)install_requires\s*=\s*\[([^\]]+)\]").expect("valid regex")
});

static QUOTED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("valid regex"));

/// Outcome of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    Found(T),
    /// The source or the field is simply not there.
    NotFound,
    /// The source exists but could not be understood.
    Failed(String),
}

impl<T> Extraction<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        match self {
            Self::Found(v) => Extraction::Found(f(v)),
            Self::NotFound => Extraction::NotFound,
            Self::Failed(reason) => Extraction::Failed(reason),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Extraction<U>) -> Extraction<U> {
        match self {
            Self::Found(v) => f(v),
            Self::NotFound => Extraction::NotFound,
            Self::Failed(reason) => Extraction::Failed(reason),
        }
    }
}

impl<T> From<Option<T>> for Extraction<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

// ── setup.py ──────────────────────────────────────────────────────────────────

/// First `name = "..."` assignment.
pub fn setup_py_name(content: &str) -> Extraction<String> {
    first_capture(&SETUP_NAME, content)
}

/// First `description = "..."` assignment.
pub fn setup_py_description(content: &str) -> Extraction<String> {
    first_capture(&SETUP_DESCRIPTION, content)
}

/// Quoted items inside the first `install_requires = [...]` list.
pub fn setup_py_dependencies(content: &str) -> Extraction<Vec<String>> {
    let Some(caps) = INSTALL_REQUIRES.captures(content) else {
        return Extraction::NotFound;
    };
    let deps = QUOTED_ITEM
        .captures_iter(&caps[1])
        .map(|c| c[1].to_string())
        .collect();
    Extraction::Found(deps)
}

fn first_capture(re: &Regex, content: &str) -> Extraction<String> {
    re.captures(content).map(|c| c[1].to_string()).into()
}

// ── pyproject.toml ────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct PyProjectDocument {
    project: Option<ProjectTable>,
    tool: Option<ToolTable>,
}

/// PEP 621 `[project]`.
#[derive(Debug, Default, Deserialize)]
struct ProjectTable {
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    dependencies: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    poetry: Option<PoetryTable>,
}

/// `[tool.poetry]`; dependencies map a name to a constraint string or table.
#[derive(Debug, Default, Deserialize)]
struct PoetryTable {
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    dependencies: toml::Table,
}

/// What a `pyproject.toml` declared, across both supported shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PyProjectMetadata {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub poetry_name: Option<String>,
    pub poetry_description: Option<String>,
    /// `[tool.poetry]` entries first, then `[project]` entries.
    pub dependencies: Vec<String>,
}

impl PyProjectMetadata {
    /// `[project].name`, falling back to `[tool.poetry].name`.
    pub fn name(&self) -> Option<&str> {
        self.project_name
            .as_deref()
            .or(self.poetry_name.as_deref())
    }

    /// `[project].description`, falling back to `[tool.poetry].description`.
    pub fn description(&self) -> Option<&str> {
        self.project_description
            .as_deref()
            .or(self.poetry_description.as_deref())
    }
}

/// Decode a `pyproject.toml` document.
///
/// A document with neither `[project]` nor `[tool.poetry]` is still
/// `Found`, just empty. Only a decoding error is `Failed`.
pub fn parse_pyproject(content: &str) -> Extraction<PyProjectMetadata> {
    let doc: PyProjectDocument = match toml::from_str(content) {
        Ok(doc) => doc,
        Err(e) => return Extraction::Failed(e.message().to_string()),
    };

    let mut meta = PyProjectMetadata::default();

    if let Some(poetry) = doc.tool.and_then(|t| t.poetry) {
        meta.poetry_name = poetry.name;
        meta.poetry_description = poetry.description;
        meta.dependencies.extend(
            poetry
                .dependencies
                .iter()
                .filter(|(name, _)| name.as_str() != PYTHON_PSEUDO_DEPENDENCY)
                .map(|(name, constraint)| poetry_dependency(name, constraint)),
        );
    }

    if let Some(project) = doc.project {
        meta.project_name = project.name;
        meta.project_description = project.description;
        meta.dependencies.extend(project.dependencies);
    }

    Extraction::Found(meta)
}

/// `requests = "^2.28"` becomes `requests^2.28`; table-form entries
/// (`{ version = ..., extras = ... }`) keep just the name.
fn poetry_dependency(name: &str, constraint: &toml::Value) -> String {
    match constraint.as_str() {
        Some(version) => format!("{name}{version}"),
        None => name.to_string(),
    }
}

// ── requirements.txt ──────────────────────────────────────────────────────────

/// One token per non-blank, non-comment line.
pub fn requirements_dependencies(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
