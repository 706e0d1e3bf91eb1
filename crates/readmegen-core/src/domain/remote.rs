//! GitHub remote URL parsing.

use std::sync::LazyLock;

use regex::Regex;

pub const GITHUB_HOST: &str = "github.com";

// git@github.com:owner/repo(.git)
static SSH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s/]+@github\.com:([^/\s]+)/([^/\s]+?)(?:\.git)?/?$").expect("valid regex")
});

// https://github.com/owner/repo(.git) or ssh://git@github.com[:port]/owner/repo(.git),
// optionally with credentials
static SCHEME_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?|ssh|git\+ssh)://(?:[^@/\s]+@)?github\.com(?::\d+)?/([^/\s]+)/([^/\s]+?)(?:\.git)?/?$",
    )
    .expect("valid regex")
});

/// Owner/repository pair of a GitHub-hosted remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOrigin {
    pub owner: String,
    pub repo: String,
}

impl RemoteOrigin {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Canonical browser URL, `https://github.com/<owner>/<repo>`.
    pub fn web_url(&self) -> String {
        format!("https://{GITHUB_HOST}/{}/{}", self.owner, self.repo)
    }
}

/// Parse a remote URL in scp-like SSH (`git@github.com:o/r`) or URL form
/// (`https://`, `ssh://`).
///
/// Returns `None` for URLs on other hosts and for shapes that are not one of
/// the two recognised forms. A trailing `.git` is stripped from the repo;
/// other dots in the repo name are kept.
pub fn parse_remote_url(url: &str) -> Option<RemoteOrigin> {
    let url = url.trim();
    if !url.contains(GITHUB_HOST) {
        return None;
    }

    let caps = if url.contains("://") {
        SCHEME_URL.captures(url)?
    } else {
        SSH_URL.captures(url)?
    };

    Some(RemoteOrigin::new(&caps[1], &caps[2]))
}
