//! `readmegen config`: inspect the resolved configuration.

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, DEFAULT_CONFIG_FILE},
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show { format } => {
            let text = format.serialize(&config.settings)?;
            output.document(&text)?;
        }

        ConfigCommands::Path => {
            let active = config
                .source
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none (built-in defaults)".into());
            output.print(&format!("active:  {active}"))?;
            output.print(&format!("local:   ./{DEFAULT_CONFIG_FILE}"))?;
            output.print(&format!(
                "user:    {}",
                AppConfig::user_config_path().display()
            ))?;
        }
    }

    Ok(())
}
