//! `readmegen preview`: render the README to stdout.

use tracing::instrument;

use crate::{cli::RenderArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut settings = config.settings;
    super::apply_render_args(&mut settings, &args)?;

    let text = super::readme_service(settings).preview()?;
    output.document(&text)?;
    Ok(())
}
