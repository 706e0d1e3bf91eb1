//! Fixed remote answers for tests.

use std::path::Path;

use readmegen_core::{
    application::{ApplicationError, ports::RemoteSource},
    error::ReadmeResult,
};

/// A [`RemoteSource`] that answers the same way for every root.
#[derive(Debug, Clone, Default)]
pub struct StaticRemote {
    answer: Option<Result<String, String>>,
}

impl StaticRemote {
    /// No repository at all: detection is skipped.
    pub fn none() -> Self {
        Self { answer: None }
    }

    /// A repository whose origin is `url`.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            answer: Some(Ok(url.into())),
        }
    }

    /// A repository whose lookup fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            answer: Some(Err(reason.into())),
        }
    }
}

impl RemoteSource for StaticRemote {
    fn is_available(&self, _root: &Path) -> bool {
        self.answer.is_some()
    }

    fn origin_url(&self, _root: &Path) -> ReadmeResult<String> {
        match &self.answer {
            Some(Ok(url)) => Ok(url.clone()),
            Some(Err(reason)) => Err(ApplicationError::RemoteLookup {
                reason: reason.clone(),
            }
            .into()),
            None => Err(ApplicationError::RemoteLookup {
                reason: "not a repository".into(),
            }
            .into()),
        }
    }
}
