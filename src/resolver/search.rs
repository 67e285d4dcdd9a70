//! Directory enumeration, scoring, and ranking.

use crate::guard::PathGuard;
use crate::resolver::candidate::Candidate;
use crate::resolver::config::ResolverConfig;
use crate::resolver::score::{LevenshteinScorer, Scorer};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Resolves a vague textual query against one or more search roots into a
/// ranked list of real, validated directories.
///
/// Each call performs a fresh enumeration — nothing is cached between
/// calls, because the filesystem can change underneath us. Enumeration is
/// best-effort: unreadable or vanished entries shrink the candidate set
/// but never fail the resolution. Validation, by contrast, is strict:
/// every returned candidate has passed [`PathGuard::validate_directory`].
///
/// # Example
///
/// ```rust,ignore
/// use dirward::resolver::{DirectoryResolver, ResolverConfig};
///
/// let resolver = DirectoryResolver::new(ResolverConfig::default());
/// let candidates = resolver.resolve("downloads", &[home_dir]);
/// for candidate in &candidates {
///     println!("{:3}  {}", candidate.score(), candidate.absolute_path().display());
/// }
/// ```
pub struct DirectoryResolver {
    config: ResolverConfig,
    scorer: Box<dyn Scorer>,
    guard: PathGuard,
}

/// A directory that cleared the score threshold, before ranking.
struct ScoredDir {
    path: PathBuf,
    display_name: String,
    depth: usize,
    score: u8,
}

impl DirectoryResolver {
    /// Creates a resolver with the given limits and the default
    /// [`LevenshteinScorer`].
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            scorer: Box::new(LevenshteinScorer::new()),
            guard: PathGuard::new(),
        }
    }

    /// Replaces the scoring strategy.
    #[must_use]
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Returns the resolver's configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves `query` to a ranked list of matching directories under
    /// `roots`.
    ///
    /// Directories are enumerated up to `max_depth` levels below each
    /// root, scored against both their base name and their path relative
    /// to the root (users think in leaf names and in fuller descriptions;
    /// scoring both avoids biasing toward either), filtered by
    /// `score_threshold`, ranked, truncated to `limit`, and finally
    /// validated. Ordering is score descending, then shallower directory
    /// first, then path — fully deterministic for a fixed tree.
    ///
    /// A root that does not exist or is not a directory contributes zero
    /// candidates without aborting the remaining roots. A symlink that
    /// would revisit an already-seen real directory is skipped.
    #[must_use]
    pub fn resolve(&self, query: &str, roots: &[PathBuf]) -> Vec<Candidate> {
        let query = query.trim();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut scored: Vec<ScoredDir> = Vec::new();

        for root in roots {
            let root = match std::fs::canonicalize(root) {
                Ok(resolved) => resolved,
                Err(e) => {
                    debug!(root = %root.display(), error = %e, "skipping unresolvable search root");
                    continue;
                }
            };
            if !root.is_dir() {
                debug!(root = %root.display(), "skipping non-directory search root");
                continue;
            }
            visited.insert(root.clone());
            self.scan_root(query, &root, &mut visited, &mut scored);
        }

        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.depth.cmp(&b.depth))
                .then_with(|| a.path.cmp(&b.path))
        });
        scored.truncate(self.config.limit);

        // Final safety pass: anything that became inaccessible since
        // enumeration is dropped, not surfaced as an error.
        scored
            .into_iter()
            .filter_map(|dir| {
                self.guard
                    .validate_directory(&dir.path.to_string_lossy(), None)
                    .ok()
                    .map(|canonical| Candidate::new(canonical, dir.display_name, dir.score))
            })
            .collect()
    }

    /// Enumerates and scores directories under one canonical root.
    fn scan_root(
        &self,
        query: &str,
        root: &Path,
        visited: &mut HashSet<PathBuf>,
        scored: &mut Vec<ScoredDir>,
    ) {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(self.config.max_depth)
            .follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(root = %root.display(), error = %e, "skipping unreadable subtree");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            // Resolve before scoring so candidates always carry canonical
            // paths, and so a symlink back into visited territory is
            // detected and skipped.
            let canonical = match std::fs::canonicalize(entry.path()) {
                Ok(resolved) => resolved,
                Err(_) => continue,
            };
            if !visited.insert(canonical.clone()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path())
                .to_string_lossy();

            let score = self
                .scorer
                .score(query, &name)
                .max(self.scorer.score(query, &relative));
            if score < self.config.score_threshold {
                continue;
            }

            scored.push(ScoredDir {
                path: canonical,
                display_name: name.into_owned(),
                depth: entry.depth(),
                score,
            });
        }
    }
}

impl fmt::Debug for DirectoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
