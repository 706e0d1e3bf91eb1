//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `readmegen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: project reads and the final write
//!   - `RemoteSource`: git `origin` lookup
//!   - `TemplateStore`: built-in and external templates
//!   - `TemplateRenderer`: template rendering

pub mod output;

pub use output::{DirEntryInfo, Filesystem, RemoteSource, TemplateRenderer, TemplateStore};
