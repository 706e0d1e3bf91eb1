use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{CustomSection, GeneratorSettings, RemoteOrigin};

/// Description used when neither settings nor manifests provide one.
pub const DEFAULT_DESCRIPTION: &str = "A Python project";

/// The fact mapping handed to the template renderer.
///
/// Field names are the variable names templates see. Every field is always
/// present (possibly empty or `false`); anything a template references that
/// is not listed here renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectFacts {
    pub project_name: String,
    pub project_description: String,
    pub author: String,
    pub license: String,
    pub python_version: String,
    pub generated_date: String,

    pub include_badges: bool,
    pub include_toc: bool,
    pub include_installation: bool,
    pub include_usage: bool,
    pub include_api_docs: bool,
    pub include_contributing: bool,
    pub include_changelog: bool,

    pub github_username: String,
    pub repository_name: String,
    pub git_url: String,

    pub project_structure: String,
    /// Exact-string set; serialized in sorted order.
    pub dependencies: BTreeSet<String>,
    /// Existing entry-point files, in detection priority order.
    pub entry_points: Vec<String>,
    pub badges: Vec<String>,
    pub custom_sections: Vec<CustomSection>,
}

impl ProjectFacts {
    /// Seed the facts that come straight from settings.
    ///
    /// Name and description are left empty: they need manifest detection
    /// when the settings do not override them.
    pub fn from_settings(settings: &GeneratorSettings, generated_date: impl Into<String>) -> Self {
        Self {
            author: settings.author.clone(),
            license: settings.license.clone(),
            python_version: settings.python_version.clone(),
            generated_date: generated_date.into(),
            include_badges: settings.include_badges,
            include_toc: settings.include_toc,
            include_installation: settings.include_installation,
            include_usage: settings.include_usage,
            include_api_docs: settings.include_api_docs,
            include_contributing: settings.include_contributing,
            include_changelog: settings.include_changelog,
            custom_sections: settings.custom_sections.clone(),
            ..Self::default()
        }
    }

    pub fn apply_remote(&mut self, origin: &RemoteOrigin) {
        self.github_username = origin.owner.clone();
        self.repository_name = origin.repo.clone();
        self.git_url = origin.web_url();
    }

    pub fn has_remote(&self) -> bool {
        !self.github_username.is_empty() && !self.repository_name.is_empty()
    }
}
