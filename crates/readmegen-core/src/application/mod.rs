//! Application layer for readmegen.
//!
//! This layer contains:
//! - **Services**: the collection/render pipeline (`ReadmeService`) and the
//!   filesystem-facing analysis it drives (`ProjectAnalyzer`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Parsing rules live in `crate::domain`; this layer decides what to read
//! and how the outcomes are merged.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Collected, ManifestSummary, ProjectAnalyzer, ReadmeService};

pub use ports::{DirEntryInfo, Filesystem, RemoteSource, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
