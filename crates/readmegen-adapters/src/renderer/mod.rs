//! Template renderers.

mod handlebars_renderer;

pub use handlebars_renderer::HandlebarsRenderer;
