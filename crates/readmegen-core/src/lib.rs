//! Readmegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `readmegen`,
//! the tool that scans a Python project and renders a README from what the
//! project already declares.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          readmegen-cli (CLI)            │
//! │   (resolves settings, wires adapters)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ReadmeService, ProjectAnalyzer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, RemoteSource, TemplateStore│
//! │           TemplateRenderer)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    readmegen-adapters (Infrastructure)  │
//! │  (LocalFilesystem, GitCliRemote, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (manifest extraction, remote parsing,  │
//! │        badges, exclusion, facts)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use readmegen_core::{application::ReadmeService, domain::GeneratorSettings};
//!
//! let service = ReadmeService::new(
//!     GeneratorSettings::default(),
//!     filesystem, // impl Filesystem
//!     remote,     // impl RemoteSource
//!     templates,  // impl TemplateStore
//!     renderer,   // impl TemplateRenderer
//! );
//! let markdown = service.preview()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Collected, ProjectAnalyzer, ReadmeService,
        ports::{DirEntryInfo, Filesystem, RemoteSource, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        CustomSection, Diagnostic, ExclusionSet, GeneratorSettings, ProjectFacts, RemoteOrigin,
        Severity, Template, TemplateOrigin,
    };
    pub use crate::error::{ReadmeError, ReadmeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
