use std::fmt;
use std::path::PathBuf;

/// Where a template's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Builtin,
    External(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in template"),
            Self::External(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Template text plus its origin.
///
/// Resolved fresh for every render; renderers never keep one across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub origin: TemplateOrigin,
    pub source: String,
}

impl Template {
    pub fn builtin(source: impl Into<String>) -> Self {
        Self {
            origin: TemplateOrigin::Builtin,
            source: source.into(),
        }
    }

    pub fn external(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            origin: TemplateOrigin::External(path.into()),
            source: source.into(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == TemplateOrigin::Builtin
    }
}
