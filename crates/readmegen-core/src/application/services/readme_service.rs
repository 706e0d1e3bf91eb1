//! Readme Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Analyze the project (structure, manifests, entry points)
//! 2. Resolve the git remote and fall back to configured overrides
//! 3. Compose badges and resolve the template
//! 4. Render, then write the finished text in one step

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, RemoteSource, TemplateRenderer, TemplateStore},
        services::analyzer::ProjectAnalyzer,
    },
    domain::{
        DEFAULT_DESCRIPTION, Diagnostic, Diagnostics, GeneratorSettings, ProjectFacts,
        RemoteOrigin, Template, compose_badges, parse_remote_url,
    },
    error::{ReadmeError, ReadmeResult},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const REMOTE_SOURCE: &str = "git remote";
const EXCLUSION_SOURCE: &str = "exclude_files";

/// Facts gathered in one call, with what went wrong along the way.
#[derive(Debug, Clone)]
pub struct Collected {
    pub facts: ProjectFacts,
    pub diagnostics: Vec<Diagnostic>,
}

/// Main README service.
///
/// Holds immutable settings and the adapters; every call re-reads the
/// project, so nothing is cached between calls.
pub struct ReadmeService {
    settings: GeneratorSettings,
    filesystem: Box<dyn Filesystem>,
    remote: Box<dyn RemoteSource>,
    templates: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ReadmeService {
    pub fn new(
        settings: GeneratorSettings,
        filesystem: Box<dyn Filesystem>,
        remote: Box<dyn RemoteSource>,
        templates: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            settings,
            filesystem,
            remote,
            templates,
            renderer,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Gather every fact the template can reference.
    ///
    /// Never fails: each optional source either contributes or leaves a
    /// diagnostic.
    #[instrument(skip(self), fields(root = %self.settings.project_root.display()))]
    pub fn collect(&self) -> Collected {
        let settings = &self.settings;
        let mut diagnostics = Diagnostics::new();
        let mut facts =
            ProjectFacts::from_settings(settings, Local::now().format(TIMESTAMP_FORMAT).to_string());

        for name in settings.unmatchable_exclusions() {
            diagnostics.warn(
                EXCLUSION_SOURCE,
                format!("`{name}` contains a path separator and never matches an entry name"),
            );
        }
        let exclusions = settings.exclusion_set();
        let analyzer = ProjectAnalyzer::new(
            self.filesystem.as_ref(),
            &settings.project_root,
            &exclusions,
        );

        facts.project_structure = analyzer.structure(settings.max_depth);

        let wants_metadata =
            settings.project_name.is_empty() || settings.project_description.is_empty();
        let manifests = analyzer.manifests(wants_metadata, &mut diagnostics);

        facts.project_name = first_non_empty([
            settings.project_name.clone(),
            manifests.name.unwrap_or_default(),
            analyzer.root_name(),
        ]);
        facts.project_description = first_non_empty([
            settings.project_description.clone(),
            manifests.description.unwrap_or_default(),
            DEFAULT_DESCRIPTION.to_string(),
        ]);
        facts.dependencies = manifests.dependencies;
        facts.entry_points = analyzer.entry_points();

        match self.detect_remote(&mut diagnostics) {
            Some(origin) => facts.apply_remote(&origin),
            None => self.apply_overrides(&mut facts),
        }

        if settings.include_badges {
            facts.badges = compose_badges(&facts);
        }

        info!(
            project = %facts.project_name,
            dependencies = facts.dependencies.len(),
            entry_points = facts.entry_points.len(),
            badges = facts.badges.len(),
            "Project facts collected"
        );

        Collected {
            facts,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Pick the template for this render.
    ///
    /// A configured path that does not exist falls back to the built-in
    /// template; one that exists but cannot be read is an error.
    pub fn resolve_template(&self) -> ReadmeResult<Template> {
        match self.settings.external_template() {
            Some(path) if self.filesystem.exists(path) => {
                debug!(path = %path.display(), "using external template");
                self.templates.load(path, self.filesystem.as_ref())
            }
            Some(path) => {
                info!(path = %path.display(), "template not found, using built-in template");
                Ok(self.templates.builtin())
            }
            None => Ok(self.templates.builtin()),
        }
    }

    /// Render the README without writing it.
    #[instrument(skip(self))]
    pub fn preview(&self) -> ReadmeResult<String> {
        let collected = self.collect();
        self.render(&collected.facts)
    }

    /// Render with already collected facts.
    pub fn render(&self, facts: &ProjectFacts) -> ReadmeResult<String> {
        let template = self.resolve_template()?;
        debug!(template = %template.origin, "rendering");
        self.renderer.render(&template, facts)
    }

    /// Render and write the README to the configured output path.
    ///
    /// The text is fully rendered before anything touches the output file.
    pub fn generate(&self) -> ReadmeResult<PathBuf> {
        let collected = self.collect();
        self.write(&collected.facts)
    }

    /// Render `facts` and write the result to the configured output path.
    #[instrument(skip_all, fields(output = %self.settings.output_path.display()))]
    pub fn write(&self, facts: &ProjectFacts) -> ReadmeResult<PathBuf> {
        self.settings.validate().map_err(ReadmeError::Domain)?;

        let content = self.render(facts)?;
        let output = self.settings.output_path.clone();
        self.filesystem.write_file(&output, &content)?;

        info!(bytes = content.len(), "README written");
        Ok(output)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn detect_remote(&self, diagnostics: &mut Diagnostics) -> Option<RemoteOrigin> {
        let root = &self.settings.project_root;
        if !self.settings.git_auto_detect {
            debug!("git auto-detection disabled");
            return None;
        }
        if !self.remote.is_available(root) {
            debug!("no version-control metadata, skipping remote detection");
            return None;
        }

        let url = match self.remote.origin_url(root) {
            Ok(url) => url,
            Err(e) => {
                diagnostics.warn(REMOTE_SOURCE, remote_reason(&e));
                return None;
            }
        };

        let origin = parse_remote_url(&url);
        if origin.is_none() {
            diagnostics.info(REMOTE_SOURCE, format!("`{url}` is not a GitHub remote"));
        }
        origin
    }

    fn apply_overrides(&self, facts: &mut ProjectFacts) {
        let owner = self.settings.github_username.trim();
        let repo = self.settings.repository_name.trim();
        if owner.is_empty() && repo.is_empty() {
            return;
        }
        if !owner.is_empty() && !repo.is_empty() {
            facts.apply_remote(&RemoteOrigin::new(owner, repo));
        } else {
            facts.github_username = owner.to_string();
            facts.repository_name = repo.to_string();
        }
    }
}

fn first_non_empty<const N: usize>(candidates: [String; N]) -> String {
    candidates
        .into_iter()
        .find(|c| !c.trim().is_empty())
        .unwrap_or_default()
}

fn remote_reason(error: &ReadmeError) -> String {
    match error {
        ReadmeError::Application(ApplicationError::RemoteLookup { reason }) => reason.clone(),
        other => other.to_string(),
    }
}
