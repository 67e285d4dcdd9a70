//! Read-only directory introspection.
//!
//! Listing and statistics for a single directory level — the
//! non-destructive half of the assistant's toolset. Every path is run
//! through [`PathGuard`] before it is touched, so the same rejection
//! taxonomy applies here as to any mutating operation.

use crate::guard::{GuardError, PathGuard};
use serde::Serialize;
use std::path::Path;

/// What kind of node a directory entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Symbolic link (not followed).
    Symlink,
}

/// One entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    /// Entry name.
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Size in bytes, for files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modified timestamp, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// Aggregate counts over a directory's direct children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DirectoryStats {
    /// Number of regular files.
    pub files: usize,
    /// Number of subdirectories.
    pub dirs: usize,
    /// Number of symbolic links.
    pub symlinks: usize,
    /// Total size of the regular files, in bytes.
    pub total_bytes: u64,
}

/// Lists the direct children of `dir`, sorted by name.
///
/// The path is validated through `guard` first (with `base` as the
/// boundary when given); listing is then best-effort — entries whose
/// metadata cannot be read are still included, with `size`/`modified`
/// unset, and entries that vanish mid-listing are skipped.
///
/// # Errors
///
/// Returns the [`GuardError`] from validation if `dir` is not a real,
/// readable directory inside the boundary.
pub fn list_entries(
    guard: &PathGuard,
    dir: &str,
    base: Option<&Path>,
) -> Result<Vec<EntryInfo>, GuardError> {
    let canonical = guard.validate_directory(dir, base)?;

    let read_dir = std::fs::read_dir(&canonical)
        .map_err(|e| GuardError::permission_denied(&canonical, e.to_string()))?;

    let mut entries: Vec<EntryInfo> = read_dir
        .filter_map(Result::ok)
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let kind = match entry.file_type() {
                Ok(ft) if ft.is_symlink() => EntryKind::Symlink,
                Ok(ft) if ft.is_dir() => EntryKind::Dir,
                _ => EntryKind::File,
            };
            let metadata = entry.metadata().ok();
            let size = metadata.as_ref().and_then(|m| {
                if m.is_file() {
                    Some(m.len())
                } else {
                    None
                }
            });
            let modified = metadata
                .as_ref()
                .and_then(|m| m.modified().ok())
                .map(format_time);

            EntryInfo {
                name,
                kind,
                size,
                modified,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Computes aggregate statistics over the direct children of `dir`.
///
/// Same guard-first contract as [`list_entries`]. Does not descend into
/// subdirectories.
///
/// # Errors
///
/// Returns the [`GuardError`] from validation.
pub fn directory_stats(
    guard: &PathGuard,
    dir: &str,
    base: Option<&Path>,
) -> Result<DirectoryStats, GuardError> {
    let entries = list_entries(guard, dir, base)?;

    let mut stats = DirectoryStats::default();
    for entry in &entries {
        match entry.kind {
            EntryKind::File => {
                stats.files += 1;
                stats.total_bytes += entry.size.unwrap_or(0);
            }
            EntryKind::Dir => stats.dirs += 1,
            EntryKind::Symlink => stats.symlinks += 1,
        }
    }
    Ok(stats)
}

/// Formats a system time as ISO 8601.
fn format_time(time: std::time::SystemTime) -> String {
    let datetime = chrono::DateTime::<chrono::Utc>::from(time);
    datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
