// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for readmegen.
//!
//! Pure logic only. Everything here works on strings and values handed in
//! by the application layer; file and git access go through ports.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: manifest extractors take file *content*, not paths
//! - **No async**: everything is synchronous
//! - **Best effort**: optional sources report [`Extraction`] outcomes
//!   instead of errors
pub mod badges;
pub mod diagnostics;
pub mod entry_points;
pub mod error;
pub mod exclusion;
pub mod facts;
pub mod manifest;
pub mod remote;
pub mod settings;
pub mod template;

pub use badges::compose_badges;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use entry_points::{ENTRY_POINT_CANDIDATES, detect_entry_points};
pub use error::{DomainError, ErrorCategory};
pub use exclusion::{ExclusionSet, excluded};
pub use facts::{DEFAULT_DESCRIPTION, ProjectFacts};
pub use manifest::{Extraction, PyProjectMetadata};
pub use remote::{RemoteOrigin, parse_remote_url};
pub use settings::{CustomSection, DEFAULT_MAX_DEPTH, GeneratorSettings};
pub use template::{Template, TemplateOrigin};
