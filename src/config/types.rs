//! Configuration types.

use crate::logging::LoggingConfig;
use crate::resolver::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for dirward.
///
/// Maps directly to the TOML configuration file format:
///
/// ```toml
/// search_roots = ["/home/user", "/mnt/shared"]
///
/// [resolver]
/// max_depth = 4
/// score_threshold = 60
/// limit = 10
///
/// [logging]
/// level = "info"
/// log_to_file = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirwardConfig {
    /// Directories to search when resolving queries.
    ///
    /// When empty, resolution falls back to the user's home directory.
    #[serde(default)]
    pub search_roots: Vec<PathBuf>,

    /// Resolver traversal and ranking limits.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging setup.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DirwardConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a search root.
    #[must_use]
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_roots.push(root.into());
        self
    }

    /// Sets the resolver limits.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Sets the logging configuration.
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Returns the configured search roots, falling back to the user's
    /// home directory when none are configured.
    #[must_use]
    pub fn effective_search_roots(&self) -> Vec<PathBuf> {
        if !self.search_roots.is_empty() {
            return self.search_roots.clone();
        }
        dirs::home_dir().into_iter().collect()
    }

    /// Returns true if no search roots are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_roots.is_empty()
    }
}
