//! Built-in template plus external templates read through the filesystem port.

use std::path::Path;

use tracing::{debug, instrument};

use readmegen_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::Template,
    error::ReadmeResult,
};

use crate::builtin_templates;

/// Serves the built-in template; external ones come from the given filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn builtin(&self) -> Template {
        builtin_templates::default_template()
    }

    #[instrument(skip(self, filesystem), fields(path = %path.display()))]
    fn load(&self, path: &Path, filesystem: &dyn Filesystem) -> ReadmeResult<Template> {
        if !filesystem.exists(path) {
            return Err(ApplicationError::TemplateNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let source = filesystem.read_to_string(path)?;
        debug!(bytes = source.len(), "external template loaded");
        Ok(Template::external(path, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::{LocalFilesystem, MemoryFilesystem};
    use readmegen_core::{domain::TemplateOrigin, error::ReadmeError};
    use tempfile::TempDir;

    #[test]
    fn builtin_is_marked_builtin() {
        let template = BuiltinTemplateStore.builtin();
        assert!(template.is_builtin());
        assert!(template.source.contains("{{project_name}}"));
    }

    #[test]
    fn loads_external_template_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.md");
        std::fs::write(&path, "# {{project_name}} (custom)").unwrap();

        let template = BuiltinTemplateStore.load(&path, &LocalFilesystem::new()).unwrap();
        assert_eq!(template.origin, TemplateOrigin::External(path));
        assert_eq!(template.source, "# {{project_name}} (custom)");
    }

    #[test]
    fn loads_external_template_from_memory() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/work").add_file("/work/tpl.md", "{{author}}");

        let template = BuiltinTemplateStore.load(Path::new("/work/tpl.md"), &fs).unwrap();
        assert_eq!(template.source, "{{author}}");
    }

    #[test]
    fn missing_external_template_is_not_found() {
        let fs = MemoryFilesystem::new();
        let err = BuiltinTemplateStore
            .load(Path::new("/work/gone.md"), &fs)
            .unwrap_err();
        assert!(matches!(
            err,
            ReadmeError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn unreadable_external_template_is_filesystem_error() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/work/tpl.md", "x").mark_unreadable("/work/tpl.md");

        let err = BuiltinTemplateStore
            .load(Path::new("/work/tpl.md"), &fs)
            .unwrap_err();
        assert!(matches!(
            err,
            ReadmeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
