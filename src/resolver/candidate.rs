//! Candidate directories produced by resolution.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A directory proposed as a match for a user query.
///
/// Candidates are produced only by the resolver and are immutable once
/// created. The `absolute_path` is always canonical (symlinks followed,
/// `.`/`..` eliminated) and has already passed directory validation.
/// The score is match confidence, never an authorization signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Canonical absolute path of the directory.
    absolute_path: PathBuf,
    /// The directory's base name, for presentation.
    display_name: String,
    /// Match confidence, 0-100.
    score: u8,
}

impl Candidate {
    pub(crate) fn new(absolute_path: PathBuf, display_name: String, score: u8) -> Self {
        Self {
            absolute_path,
            display_name,
            score,
        }
    }

    /// The canonical absolute path of the candidate directory.
    #[must_use]
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// The base name shown to the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Match confidence against the query, 0-100.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }
}
