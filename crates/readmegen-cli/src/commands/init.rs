//! `readmegen init`: write a configuration file with every default.

use readmegen_core::domain::GeneratorSettings;

use crate::{
    cli::InitArgs,
    config::{AppConfig, ConfigFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    // Reject unsupported extensions before looking at the filesystem.
    ConfigFormat::from_path(&args.path)?;

    if args.path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            args.path.display(),
        ))?;
        return Ok(());
    }

    AppConfig::save(&GeneratorSettings::default(), &args.path)?;

    output.success(&format!("Configuration created at {}", args.path.display()))?;
    output.print("Edit it, then run: readmegen generate")?;
    Ok(())
}
