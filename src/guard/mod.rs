//! Path and filename safety checks.
//!
//! This module is the authorization boundary of the crate. Nothing here
//! searches or suggests; it only answers, strictly and deterministically,
//! whether a given path or name is safe to hand to a mutating operation:
//!
//! - **Directory validation**: [`PathGuard::validate_directory`] resolves a
//!   raw path to canonical form and checks existence, type, readability,
//!   and (optionally) containment in a base directory.
//! - **Boundary predicate**: [`PathGuard::is_within_boundary`] answers the
//!   containment question alone, and never raises — an unprovable answer
//!   is `false`.
//! - **Filename validation**: [`PathGuard::validate_filename`] is a pure
//!   lexical check for rename/move target names.
//!
//! Rejections use the closed [`GuardError`] taxonomy; its `Display` output
//! and [`GuardError::code`] tokens are surfaced verbatim by callers.
//!
//! ```rust,ignore
//! use dirward::guard::PathGuard;
//!
//! let guard = PathGuard::new();
//! match guard.validate_directory("~/Downloads", None) {
//!     Ok(canonical) => println!("validated: {}", canonical.display()),
//!     Err(e) => eprintln!("rejected ({}): {}", e.code(), e),
//! }
//! ```

mod error;
mod filename;
mod path;

pub use error::GuardError;
pub use filename::RESERVED_NAMES;
pub use path::PathGuard;
