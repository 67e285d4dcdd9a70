//! Rejection taxonomy for path and filename validation.
//!
//! Every way a path or name can fail validation maps to exactly one
//! `GuardError` variant. The set is closed: callers can match on it, and
//! the stable [`GuardError::code`] tokens are part of the crate's
//! externally observable contract (they are surfaced verbatim to users by
//! the tool layer).

use std::fmt;
use std::path::PathBuf;

/// Error returned when a path or filename fails validation.
///
/// Variants carry enough context for user-facing messaging: the offending
/// path or name, and for OS-level failures the underlying error text as
/// diagnostic detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// Input was empty or whitespace-only.
    EmptyInput,
    /// Path could not be resolved to an existing location.
    Nonexistent {
        /// The path that failed to resolve.
        path: PathBuf,
        /// The underlying OS error text.
        reason: String,
    },
    /// Path resolved to something other than a directory.
    NotADirectory {
        /// The resolved path.
        path: PathBuf,
    },
    /// Path exists but cannot be read.
    PermissionDenied {
        /// The resolved path.
        path: PathBuf,
        /// The underlying OS error text.
        reason: String,
    },
    /// Path resolved to a location outside the authorized base directory.
    EscapesBase {
        /// The resolved path.
        path: PathBuf,
        /// The base directory it must stay within.
        base: PathBuf,
    },
    /// Filename is structurally invalid (empty, a separator, `.` or `..`).
    MalformedName {
        /// The rejected name.
        name: String,
        /// Which rule it broke.
        reason: String,
    },
    /// Filename collides with a platform-reserved device name.
    ReservedName {
        /// The rejected name.
        name: String,
        /// The reserved stem it matched (extension stripped, uppercased).
        stem: String,
    },
    /// Filename contains a control character.
    ControlCharacter {
        /// The rejected name.
        name: String,
        /// The first offending codepoint.
        codepoint: u32,
    },
}

impl GuardError {
    /// Creates a nonexistent-path error.
    #[must_use]
    pub fn nonexistent(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Nonexistent {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a not-a-directory error.
    #[must_use]
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Creates a permission-denied error.
    #[must_use]
    pub fn permission_denied(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates an escapes-base error.
    #[must_use]
    pub fn escapes_base(path: impl Into<PathBuf>, base: impl Into<PathBuf>) -> Self {
        Self::EscapesBase {
            path: path.into(),
            base: base.into(),
        }
    }

    /// Creates a malformed-name error.
    #[must_use]
    pub fn malformed_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a reserved-name error.
    #[must_use]
    pub fn reserved_name(name: impl Into<String>, stem: impl Into<String>) -> Self {
        Self::ReservedName {
            name: name.into(),
            stem: stem.into(),
        }
    }

    /// Creates a control-character error.
    #[must_use]
    pub fn control_character(name: impl Into<String>, codepoint: u32) -> Self {
        Self::ControlCharacter {
            name: name.into(),
            codepoint,
        }
    }

    /// Returns the stable machine-readable rejection code.
    ///
    /// These tokens are part of the crate's contract with the tool layer
    /// and never change for an existing variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty-input",
            Self::Nonexistent { .. } => "nonexistent",
            Self::NotADirectory { .. } => "not-a-directory",
            Self::PermissionDenied { .. } => "permission-denied",
            Self::EscapesBase { .. } => "escapes-base",
            Self::MalformedName { .. } => "malformed-name",
            Self::ReservedName { .. } => "reserved-name",
            Self::ControlCharacter { .. } => "control-character",
        }
    }

    /// Returns true if this rejection is a security boundary violation
    /// rather than a data-quality issue.
    ///
    /// Boundary violations should block the requested action outright;
    /// name-quality rejections are better reported as rename suggestions.
    #[must_use]
    pub fn is_boundary_violation(&self) -> bool {
        matches!(self, Self::EscapesBase { .. })
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "path is empty; provide a directory path or hint")
            }
            Self::Nonexistent { path, reason } => {
                write!(
                    f,
                    "cannot resolve path '{}': {}; verify the path exists and is accessible",
                    path.display(),
                    reason
                )
            }
            Self::NotADirectory { path } => {
                write!(
                    f,
                    "path '{}' is not a directory; only directories can be operated on",
                    path.display()
                )
            }
            Self::PermissionDenied { path, reason } => {
                write!(
                    f,
                    "cannot read directory '{}': {}; check its permissions",
                    path.display(),
                    reason
                )
            }
            Self::EscapesBase { path, base } => {
                write!(
                    f,
                    "path '{}' is outside the authorized directory '{}'; \
                     operations are restricted to that location",
                    path.display(),
                    base.display()
                )
            }
            Self::MalformedName { name, reason } => {
                write!(f, "invalid filename '{}': {}", name.escape_debug(), reason)
            }
            Self::ReservedName { name, stem } => {
                write!(
                    f,
                    "filename '{}' collides with the reserved device name '{}'; \
                     choose a different name",
                    name, stem
                )
            }
            Self::ControlCharacter { name, codepoint } => {
                write!(
                    f,
                    "filename '{}' contains the control character U+{:04X}; \
                     control characters are not allowed in names",
                    name.escape_debug(),
                    codepoint
                )
            }
        }
    }
}

impl std::error::Error for GuardError {}
