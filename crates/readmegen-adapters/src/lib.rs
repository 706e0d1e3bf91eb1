//! Infrastructure adapters for readmegen.
//!
//! This crate implements the ports defined in `readmegen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod remote;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use remote::{GitCliRemote, StaticRemote};
pub use renderer::HandlebarsRenderer;
pub use template_store::BuiltinTemplateStore;
