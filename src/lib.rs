//! # Dirward: directory resolution with a safety boundary
//!
//! The core of a filesystem-maintenance assistant: turn an imprecise,
//! user-supplied directory hint into a ranked list of real, accessible
//! directories, and guarantee that every subsequent filesystem mutation
//! stays inside an authorized boundary. The tool/protocol layer that
//! presents candidates, collects confirmation, and performs the actual
//! operations consumes this crate; none of that lives here.
//!
//! ## Architecture
//!
//! - **Guard**: strict path, boundary, and filename validation — the
//!   authorizing side ([`guard::PathGuard`])
//! - **Resolver**: bounded enumeration plus fuzzy scoring and ranking —
//!   the advisory side ([`resolver::DirectoryResolver`])
//! - **Inspect**: read-only listing and statistics, guard-first
//! - **Config**: TOML configuration at XDG locations
//! - **Logging**: tracing to stderr, optionally to a rolling file
//!
//! Search is advisory and degrades gracefully; validation is authorizing
//! and fails closed. A high match score never substitutes for a passing
//! validation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dirward::prelude::*;
//!
//! let config = dirward::config::load()?;
//! let resolver = DirectoryResolver::new(config.resolver.clone());
//! let guard = PathGuard::new();
//!
//! // 1. Resolve the user's hint into candidates and present them.
//! let candidates = resolver.resolve("downloads", &config.effective_search_roots());
//!
//! // 2. Immediately before acting on the chosen one, re-validate it.
//! let chosen = &candidates[0];
//! let canonical = guard.validate_directory(
//!     &chosen.absolute_path().to_string_lossy(),
//!     Some(&base_dir),
//! )?;
//! // ...hand `canonical` (never the raw input) to the operation.
//! ```

pub mod config;
pub mod guard;
pub mod inspect;
pub mod logging;
pub mod resolver;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::DirwardConfig;
    pub use crate::guard::{GuardError, PathGuard};
    pub use crate::inspect::{DirectoryStats, EntryInfo, EntryKind};
    pub use crate::logging::{LogLevel, LoggingConfig};
    pub use crate::resolver::{
        Candidate, DirectoryResolver, LevenshteinScorer, ResolverConfig, Scorer,
    };
}
