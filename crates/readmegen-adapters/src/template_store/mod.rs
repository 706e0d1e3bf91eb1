//! Template stores.

mod builtin;

pub use builtin::BuiltinTemplateStore;
