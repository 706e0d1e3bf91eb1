//! Resolved generator settings.
//!
//! [`GeneratorSettings`] is the only configuration the core sees. The CLI
//! owns loading it (file, environment, flags); the core reads it and never
//! mutates or persists it.
//!
//! Every field is typed and defaulted. Unknown keys in a config document are
//! ignored at deserialization time rather than rejected, so config files
//! written for newer versions keep working.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, ExclusionSet};

/// Depth limit for the project-structure tree.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// A user-supplied section appended to the document verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Everything the pipeline needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    // Project metadata overrides; empty means "detect".
    pub project_name: String,
    pub project_description: String,
    pub author: String,
    pub license: String,
    pub python_version: String,

    // Paths
    pub project_root: PathBuf,
    pub output_path: PathBuf,
    /// External template; `None` or an empty path selects the built-in one.
    pub template_path: Option<PathBuf>,

    // Feature switches
    pub include_badges: bool,
    pub include_toc: bool,
    pub include_installation: bool,
    pub include_usage: bool,
    pub include_api_docs: bool,
    pub include_contributing: bool,
    pub include_changelog: bool,

    // Git
    pub git_auto_detect: bool,
    pub github_username: String,
    pub repository_name: String,

    // Structure
    pub exclude_files: Vec<String>,
    pub max_depth: usize,

    pub custom_sections: Vec<CustomSection>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            project_description: String::new(),
            author: String::new(),
            license: "MIT".into(),
            python_version: "3.8+".into(),
            project_root: PathBuf::from("."),
            output_path: PathBuf::from("README.md"),
            template_path: None,
            include_badges: true,
            include_toc: true,
            include_installation: true,
            include_usage: true,
            include_api_docs: false,
            include_contributing: true,
            include_changelog: false,
            git_auto_detect: true,
            github_username: String::new(),
            repository_name: String::new(),
            exclude_files: vec![".git".into(), "__pycache__".into(), ".vscode".into()],
            max_depth: DEFAULT_MAX_DEPTH,
            custom_sections: Vec::new(),
        }
    }
}

impl GeneratorSettings {
    pub fn exclusion_set(&self) -> ExclusionSet {
        self.exclude_files.iter().cloned().collect()
    }

    /// The configured external template, if one was actually given.
    pub fn external_template(&self) -> Option<&Path> {
        self.template_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Checks that must hold before anything is written.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "output_path",
            });
        }
        if self.project_root.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project_root",
            });
        }
        Ok(())
    }

    /// Exclusion entries that can never match a single path component.
    ///
    /// Names are compared literally, so `web/node_modules` is kept as
    /// configured and simply never excludes anything.
    pub fn unmatchable_exclusions(&self) -> impl Iterator<Item = &str> {
        self.exclude_files
            .iter()
            .map(String::as_str)
            .filter(|n| n.contains('/') || n.contains('\\'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let s = GeneratorSettings::default();
        assert_eq!(s.license, "MIT");
        assert_eq!(s.python_version, "3.8+");
        assert_eq!(s.output_path, PathBuf::from("README.md"));
        assert!(s.include_badges && s.include_toc && s.include_contributing);
        assert!(!s.include_api_docs && !s.include_changelog);
        assert!(s.git_auto_detect);
        assert_eq!(s.max_depth, 3);
        assert!(s.exclusion_set().excluded("__pycache__"));
    }

    #[test]
    fn partial_document_fills_defaults_and_ignores_unknown_keys() {
        let json = r#"{
            "project_name": "demo",
            "include_badges": false,
            "custom_sections": [{"title": "FAQ", "content": "Ask away."}],
            "some_future_key": 42
        }"#;
        let s: GeneratorSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.project_name, "demo");
        assert!(!s.include_badges);
        assert!(s.include_toc);
        assert_eq!(s.custom_sections[0].title, "FAQ");
        assert_eq!(s.license, "MIT");
    }

    #[test]
    fn empty_template_path_means_builtin() {
        let s = GeneratorSettings {
            template_path: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(s.external_template().is_none());

        let s = GeneratorSettings {
            template_path: Some(PathBuf::from("tpl.hbs")),
            ..Default::default()
        };
        assert_eq!(s.external_template(), Some(Path::new("tpl.hbs")));
    }

    #[test]
    fn validate_rejects_empty_output_path() {
        let s = GeneratorSettings {
            output_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            s.validate(),
            Err(DomainError::MissingRequiredField {
                field: "output_path"
            })
        );
    }

    #[test]
    fn path_like_exclusions_pass_validation_but_are_reported() {
        let s = GeneratorSettings {
            exclude_files: vec![".git".into(), "web/node_modules".into(), r"a\b".into()],
            ..Default::default()
        };
        assert!(s.validate().is_ok());
        assert_eq!(
            s.unmatchable_exclusions().collect::<Vec<_>>(),
            ["web/node_modules", r"a\b"]
        );
        assert!(!s.exclusion_set().excluded("node_modules"));
        assert_eq!(GeneratorSettings::default().unmatchable_exclusions().count(), 0);
    }
}
