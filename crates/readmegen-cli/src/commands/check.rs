//! `readmegen check`: suggest files a tidy Python project usually has.

use readmegen_adapters::LocalFilesystem;
use readmegen_core::application::ProjectAnalyzer;

use crate::{cli::CheckArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut settings = config.settings;
    if let Some(root) = args.root {
        settings.project_root = root;
    }
    super::ensure_project_root(&settings)?;

    let filesystem = LocalFilesystem::new();
    let exclusions = settings.exclusion_set();
    let analyzer = ProjectAnalyzer::new(&filesystem, &settings.project_root, &exclusions);
    let suggestions = analyzer.suggestions();

    output.header(&format!("Checking {}", settings.project_root.display()))?;
    if suggestions.is_empty() {
        output.success("Project layout looks complete")?;
    } else {
        for suggestion in &suggestions {
            output.warning(suggestion)?;
        }
    }

    Ok(())
}
