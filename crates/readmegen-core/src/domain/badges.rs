//! Shields.io badge markup.
//!
//! Badges are Markdown image links; the viewer's renderer fetches the live
//! images. Nothing here touches the network.

use crate::domain::ProjectFacts;

pub const BADGE_HOST: &str = "img.shields.io";

/// Compose the six badges for a GitHub-hosted project.
///
/// Returns an empty list unless both owner and repository are known. The
/// order is fixed: python version, stars, forks, issues, license, last commit.
pub fn compose_badges(facts: &ProjectFacts) -> Vec<String> {
    if !facts.has_remote() {
        return Vec::new();
    }

    let slug = format!("{}/{}", facts.github_username, facts.repository_name);
    vec![
        format!(
            "![Python Version](https://{BADGE_HOST}/badge/python-{}-blue.svg)",
            static_badge_segment(&facts.python_version)
        ),
        format!("![GitHub stars](https://{BADGE_HOST}/github/stars/{slug})"),
        format!("![GitHub forks](https://{BADGE_HOST}/github/forks/{slug})"),
        format!("![GitHub issues](https://{BADGE_HOST}/github/issues/{slug})"),
        format!("![License](https://{BADGE_HOST}/github/license/{slug})"),
        format!("![Last Commit](https://{BADGE_HOST}/github/last-commit/{slug})"),
    ]
}

/// Escape a value for a `/badge/<label>-<message>-<color>` path segment.
///
/// Shields reads `-` as the field separator, so literal dashes and
/// underscores are doubled and spaces become `_`.
fn static_badge_segment(value: &str) -> String {
    value
        .replace('-', "--")
        .replace('_', "__")
        .replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(owner: &str, repo: &str) -> ProjectFacts {
        ProjectFacts {
            github_username: owner.into(),
            repository_name: repo.into(),
            python_version: "3.8+".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_without_owner_or_repo() {
        assert!(compose_badges(&facts("", "proj")).is_empty());
        assert!(compose_badges(&facts("alice", "")).is_empty());
        assert!(compose_badges(&facts("", "")).is_empty());
    }

    #[test]
    fn six_badges_in_fixed_order() {
        let badges = compose_badges(&facts("alice", "proj"));
        assert_eq!(badges.len(), 6);
        let labels: Vec<_> = badges
            .iter()
            .map(|b| b.split(']').next().unwrap().trim_start_matches("!["))
            .collect();
        assert_eq!(
            labels,
            [
                "Python Version",
                "GitHub stars",
                "GitHub forks",
                "GitHub issues",
                "License",
                "Last Commit"
            ]
        );
    }

    #[test]
    fn markup_embeds_owner_repo_and_version() {
        let badges = compose_badges(&facts("alice", "proj"));
        assert_eq!(
            badges[0],
            "![Python Version](https://img.shields.io/badge/python-3.8+-blue.svg)"
        );
        assert_eq!(
            badges[1],
            "![GitHub stars](https://img.shields.io/github/stars/alice/proj)"
        );
        assert_eq!(
            badges[5],
            "![Last Commit](https://img.shields.io/github/last-commit/alice/proj)"
        );
    }

    #[test]
    fn version_dashes_are_escaped_for_static_badges() {
        let mut f = facts("alice", "proj");
        f.python_version = "3.8 - 3.12".into();
        assert!(compose_badges(&f)[0].contains("/badge/python-3.8_--_3.12-blue.svg"));
    }
}
