//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Traversal and ranking limits for [`super::DirectoryResolver`].
///
/// Passed in at construction rather than read from process-wide state, so
/// resolution stays deterministic and testable in isolation. All fields
/// have defaults and can be set individually in a TOML config file:
///
/// ```toml
/// [resolver]
/// max_depth = 4
/// score_threshold = 60
/// limit = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// How many directory levels below each search root to enumerate.
    /// Bounded traversal keeps latency predictable on large trees.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Minimum match confidence (0-100) a directory needs to be
    /// considered. Low-confidence matches are worse than no match: they
    /// invite destructive operations on the wrong folder.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: u8,

    /// Maximum number of candidates returned, keeping the result set
    /// human-reviewable.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_max_depth() -> usize {
    4
}

fn default_score_threshold() -> u8 {
    60
}

fn default_limit() -> usize {
    10
}

impl ResolverConfig {
    /// Creates a configuration with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enumeration depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the minimum acceptance score.
    #[must_use]
    pub fn with_score_threshold(mut self, threshold: u8) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Sets the result count cap.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            score_threshold: default_score_threshold(),
            limit: default_limit(),
        }
    }
}
