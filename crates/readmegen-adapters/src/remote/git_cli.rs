//! Git remote lookup through the `git` command line.
//!
//! Asking git itself means `include`/`includeIf` files, `insteadOf` URL
//! rewrites, worktrees and `$GIT_DIR` all resolve the way they do for the
//! user's own `git` invocations.

use std::path::Path;
use std::process::{Command, Output};

use tracing::{debug, instrument};

use readmegen_core::{
    application::{ApplicationError, ports::RemoteSource},
    error::{ReadmeError, ReadmeResult},
};

const GIT: &str = "git";
const ORIGIN: &str = "origin";

/// Resolves the `origin` remote by running `git` in the project root.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCliRemote;

impl GitCliRemote {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteSource for GitCliRemote {
    /// `false` when `root` is not inside a repository or `git` is not installed.
    fn is_available(&self, root: &Path) -> bool {
        match git(root, &["rev-parse", "--git-dir"]) {
            Ok(output) => output.status.success(),
            Err(e) => {
                debug!(error = %e, "git is not runnable");
                false
            }
        }
    }

    #[instrument(skip(self), fields(root = %root.display()))]
    fn origin_url(&self, root: &Path) -> ReadmeResult<String> {
        // `remote get-url` applies `url.<base>.insteadOf` rewrites.
        let output = git(root, &["remote", "get-url", ORIGIN])
            .map_err(|e| lookup_error(format!("could not run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("no `{ORIGIN}` remote configured"),
                msg => msg.to_string(),
            };
            return Err(lookup_error(reason));
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if url.is_empty() {
            return Err(lookup_error(format!("`{ORIGIN}` remote has no url")));
        }
        debug!(url = %url, "origin remote found");
        Ok(url)
    }
}

fn git(root: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(GIT).args(args).current_dir(root).output()
}

fn lookup_error(reason: String) -> ReadmeError {
    ApplicationError::RemoteLookup { reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A fresh repository, or `None` when no `git` binary is installed.
    fn repo() -> Option<TempDir> {
        let dir = TempDir::new().unwrap();
        let ok = Command::new(GIT)
            .args(["init", "--quiet"])
            .current_dir(dir.path())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        ok.then_some(dir)
    }

    fn run(dir: &Path, args: &[&str]) {
        let status = Command::new(GIT).args(args).current_dir(dir).status().unwrap();
        assert!(status.success(), "git {args:?}");
    }

    #[test]
    fn reads_origin_url() {
        let Some(dir) = repo() else { return };
        run(dir.path(), &["remote", "add", "upstream", "https://github.com/upstream/proj.git"]);
        run(dir.path(), &["remote", "add", "origin", "git@github.com:alice/proj.git"]);

        let remote = GitCliRemote::new();
        assert!(remote.is_available(dir.path()));
        assert_eq!(
            remote.origin_url(dir.path()).unwrap(),
            "git@github.com:alice/proj.git"
        );
    }

    #[test]
    fn applies_instead_of_rewrites() {
        let Some(dir) = repo() else { return };
        run(dir.path(), &["config", "url.https://github.com/.insteadOf", "gh:"]);
        run(dir.path(), &["remote", "add", "origin", "gh:alice/proj.git"]);

        assert_eq!(
            GitCliRemote.origin_url(dir.path()).unwrap(),
            "https://github.com/alice/proj.git"
        );
    }

    #[test]
    fn missing_origin_is_lookup_error() {
        let Some(dir) = repo() else { return };
        let err = GitCliRemote.origin_url(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ReadmeError::Application(ApplicationError::RemoteLookup { .. })
        ));
    }

    #[test]
    fn missing_root_is_not_available() {
        let dir = TempDir::new().unwrap();
        assert!(!GitCliRemote.is_available(&dir.path().join("missing")));
    }
}
