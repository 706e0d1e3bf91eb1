//! Per-call diagnostics.
//!
//! Every optional source that is skipped or fails leaves a [`Diagnostic`]
//! behind. The collector is created per pipeline run and returned with the
//! facts, so callers (and tests) see exactly what happened in *their* call.
//! Each record is also emitted as a `tracing` event.

use std::fmt;

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What was being read, e.g. `setup.py` or `git remote`.
    pub source: String,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.source, self.message)
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let (source, message) = (source.into(), message.into());
        info!(source = %source, "{message}");
        self.records.push(Diagnostic {
            source,
            severity: Severity::Info,
            message,
        });
    }

    pub fn warn(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let (source, message) = (source.into(), message.into());
        warn!(source = %source, "{message}");
        self.records.push(Diagnostic {
            source,
            severity: Severity::Warning,
            message,
        });
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_with_severity() {
        let mut d = Diagnostics::new();
        d.info("git remote", "not a git repository");
        d.warn("pyproject.toml", "expected `=`");
        assert_eq!(d.warnings().count(), 1);

        let all = d.into_vec();
        assert_eq!(all[0].severity, Severity::Info);
        assert_eq!(all[1].source, "pyproject.toml");
        assert_eq!(
            all[1].to_string(),
            "[warning] pyproject.toml: expected `=`"
        );
    }
}
