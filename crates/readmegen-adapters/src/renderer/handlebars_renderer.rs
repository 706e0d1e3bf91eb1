//! Handlebars-backed template renderer.

use handlebars::{Handlebars, handlebars_helper, no_escape};
use tracing::instrument;

use readmegen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{ProjectFacts, Template},
    error::ReadmeResult,
};

// `My-Project` -> `my_project`, for Python import lines.
handlebars_helper!(snake_case: |name: str| name.to_lowercase().replace('-', "_"));

/// Renders templates with Handlebars.
///
/// Non-strict: a variable the facts do not define renders as an empty
/// string. Output is Markdown, so HTML escaping is off.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_escape_fn(no_escape);
        registry.register_helper("snake_case", Box::new(snake_case));
        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip_all, fields(template = %template.origin))]
    fn render(&self, template: &Template, facts: &ProjectFacts) -> ReadmeResult<String> {
        let data = serde_json::to_value(facts).map_err(|e| ApplicationError::RenderingFailed {
            reason: format!("facts could not be serialized: {e}"),
        })?;

        self.registry
            .render_template(&template.source, &data)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    reason: format!("{}: {}", template.origin, e),
                }
                .into()
            })
    }
}
