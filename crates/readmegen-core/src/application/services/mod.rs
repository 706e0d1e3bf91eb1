//! Application services - orchestrate use cases.
//!
//! `ProjectAnalyzer` reads the project through the `Filesystem` port;
//! `ReadmeService` combines its output with settings, the git remote and the
//! template into the final document.

pub mod analyzer;
pub mod readme_service;

pub use analyzer::{ManifestSummary, ProjectAnalyzer};
pub use readme_service::{Collected, ReadmeService};
