//! `readmegen generate`: render the README and write it.

use tracing::{debug, info, instrument};

use readmegen_core::domain::Severity;

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `readmegen generate` command.
///
/// 1. Apply flag overrides on top of the loaded settings
/// 2. Collect facts (warnings are logged as they happen)
/// 3. Render; with `--dry-run` print instead of writing
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut settings = config.settings;
    super::apply_render_args(&mut settings, &args.render)?;
    if let Some(path) = args.output {
        settings.output_path = path;
    }
    debug!(
        root = %settings.project_root.display(),
        output = %settings.output_path.display(),
        "settings resolved"
    );

    let service = super::readme_service(settings);
    let collected = service.collect();
    let skipped = collected
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    if args.dry_run {
        output.info("Dry run: the README below was not written")?;
        let text = service.render(&collected.facts)?;
        output.document(&text)?;
        return Ok(());
    }

    let path = service.write(&collected.facts)?;
    info!(path = %path.display(), "README generated");

    output.success(&format!("README generated: {}", path.display()))?;
    if skipped > 0 {
        output.warning(&format!(
            "{skipped} warning(s) while collecting facts; see above"
        ))?;
    }

    Ok(())
}
