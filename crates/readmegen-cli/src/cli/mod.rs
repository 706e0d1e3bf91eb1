//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

use crate::config::ConfigFormat;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "readmegen",
    bin_name = "readmegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a README for a Python project",
    long_about = "readmegen reads what a Python project already declares \
                  (setup.py, pyproject.toml, requirements.txt, the git remote, \
                  the file tree) and renders it into a README.",
    after_help = "EXAMPLES:\n\
        \x20 readmegen generate\n\
        \x20 readmegen generate --root ../my-lib --output ../my-lib/README.md\n\
        \x20 readmegen preview --template docs/README.hbs\n\
        \x20 readmegen init readmegen.toml",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the README and write it.
    #[command(
        visible_alias = "gen",
        about = "Generate the README",
        after_help = "EXAMPLES:\n\
            \x20 readmegen generate\n\
            \x20 readmegen generate --dry-run\n\
            \x20 readmegen generate -o docs/README.md -t templates/readme.hbs"
    )]
    Generate(GenerateArgs),

    /// Render the README to stdout.
    #[command(about = "Print the README without writing it")]
    Preview(RenderArgs),

    /// Write a configuration file with every default spelled out.
    #[command(
        about = "Create a configuration file",
        after_help = "EXAMPLES:\n\
            \x20 readmegen init                 # ./config.yaml\n\
            \x20 readmegen init readmegen.toml  # format follows the extension\n\
            \x20 readmegen init --force"
    )]
    Init(InitArgs),

    /// Suggest missing project files.
    #[command(about = "Check the project layout")]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 readmegen completions bash > ~/.local/share/bash-completion/completions/readmegen\n\
            \x20 readmegen completions zsh  > ~/.zfunc/_readmegen\n\
            \x20 readmegen completions fish > ~/.config/fish/completions/readmegen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(about = "Configuration management", subcommand)]
    Config(ConfigCommands),
}

// ── generate / preview ────────────────────────────────────────────────────────

/// Overrides shared by every command that renders.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Project directory to analyze.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Custom template file.
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Custom Handlebars template"
    )]
    pub template: Option<PathBuf>,
}

/// Arguments for `readmegen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Where to write the README.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: README.md)"
    )]
    pub output: Option<PathBuf>,

    /// Print instead of writing.
    #[arg(long = "dry-run", help = "Preview only, do not write the file")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `readmegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target file; its extension picks the format.
    #[arg(value_name = "FILE", default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `readmegen check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Project directory to check.
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `readmegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `readmegen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration.
    Show {
        /// Serialization to print in.
        #[arg(long = "format", value_enum, default_value = "yaml")]
        format: ConfigFormat,
    },
    /// Print where configuration is read from.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
