//! Command handlers, one module per subcommand.

use readmegen_adapters::{BuiltinTemplateStore, GitCliRemote, HandlebarsRenderer, LocalFilesystem};
use readmegen_core::{application::ReadmeService, domain::GeneratorSettings};

use crate::{
    cli::RenderArgs,
    error::{CliError, CliResult},
};

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod preview;

/// The service wired with the production adapters.
fn readme_service(settings: GeneratorSettings) -> ReadmeService {
    ReadmeService::new(
        settings,
        Box::new(LocalFilesystem::new()),
        Box::new(GitCliRemote::new()),
        Box::new(BuiltinTemplateStore::new()),
        Box::new(HandlebarsRenderer::new()),
    )
}

/// Apply `--root` / `--template` and check the root is a directory.
fn apply_render_args(settings: &mut GeneratorSettings, args: &RenderArgs) -> CliResult<()> {
    if let Some(root) = &args.root {
        settings.project_root = root.clone();
    }
    if let Some(template) = &args.template {
        settings.template_path = Some(template.clone());
    }
    ensure_project_root(settings)
}

fn ensure_project_root(settings: &GeneratorSettings) -> CliResult<()> {
    if settings.project_root.is_dir() {
        Ok(())
    } else {
        Err(CliError::InvalidInput {
            message: format!(
                "project root '{}' is not a directory",
                settings.project_root.display()
            ),
        })
    }
}
