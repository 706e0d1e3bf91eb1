//! Literal name denylist applied while walking the project tree.

use std::collections::HashSet;

/// Set of base names hidden from analysis.
///
/// Matching is exact and case-sensitive against the entry's base name only:
/// no globbing, no path-prefix matching. `node_modules` hides every directory
/// called `node_modules` at any depth, and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` iff `name` is a literal member of the set.
    pub fn excluded(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Free-function form; an absent set excludes nothing.
pub fn excluded(name: &str, set: Option<&ExclusionSet>) -> bool {
    set.is_some_and(|s| s.excluded(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> ExclusionSet {
        ExclusionSet::new([".git", "__pycache__", ".vscode"])
    }

    #[test]
    fn exact_members_are_excluded() {
        let s = set();
        assert!(s.excluded(".git"));
        assert!(s.excluded("__pycache__"));
    }

    #[test]
    fn no_partial_or_glob_matching() {
        let s = ExclusionSet::new(["*.pyc", "build"]);
        assert!(!s.excluded("module.pyc"));
        assert!(s.excluded("*.pyc"));
        assert!(!s.excluded("build-tools"));
        assert!(!s.excluded("prebuild"));
        assert!(!s.excluded("src/build"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!set().excluded(".GIT"));
    }

    #[test]
    fn absent_set_excludes_nothing() {
        assert!(!excluded(".git", None));
        assert!(excluded(".git", Some(&set())));
    }

    #[test]
    fn membership_matches_excluded_for_every_name() {
        let names = [".git", "src", "", "a b", "__pycache__", ".Git"];
        let s = set();
        for n in names {
            assert_eq!(s.excluded(n), s.names.contains(n), "name {n:?}");
        }
    }

    #[test]
    fn collects_from_iterator() {
        let s: ExclusionSet = vec!["a", "b", "a"].into_iter().collect();
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
    }
}
