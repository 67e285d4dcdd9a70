//! Bare filename validation.
//!
//! A purely lexical check over a single name, with no path components
//! implied. Unlike the structural checks in [`super::path`], a failure
//! here is a data-quality issue (report it as a rename suggestion), not a
//! security boundary violation.

use crate::guard::error::GuardError;
use crate::guard::path::PathGuard;

/// Device names reserved by Windows, matched case-insensitively against a
/// name with its extension stripped.
///
/// Enforced on every platform: names this crate emits or accepts may later
/// be consumed in a reserved-name-sensitive environment.
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", //
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9", //
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

impl PathGuard {
    /// Validates a bare filename.
    ///
    /// Stateless and pure: the filesystem is never consulted. Rejects
    /// empty names, names containing a path separator, the literal `.`
    /// and `..`, any codepoint below U+0020 (the NUL byte included), and
    /// the platform-reserved device names in [`RESERVED_NAMES`].
    ///
    /// # Errors
    ///
    /// Returns `MalformedName`, `ControlCharacter`, or `ReservedName`
    /// describing the first rule the name broke.
    pub fn validate_filename(&self, name: &str) -> Result<(), GuardError> {
        if name.is_empty() {
            return Err(GuardError::malformed_name(name, "name is empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(GuardError::malformed_name(
                name,
                "name contains a path separator",
            ));
        }
        if name == "." || name == ".." {
            return Err(GuardError::malformed_name(
                name,
                "'.' and '..' refer to directories, not names",
            ));
        }
        for c in name.chars() {
            // NUL falls under the same rule but is the one attackers reach
            // for; keep the check explicit.
            if c == '\0' || (c as u32) < 0x20 {
                return Err(GuardError::control_character(name, c as u32));
            }
        }

        let stem = name.split('.').next().unwrap_or(name);
        if let Some(reserved) = self.reserved_match(stem) {
            return Err(GuardError::reserved_name(name, reserved));
        }

        Ok(())
    }

    /// Convenience predicate form of [`Self::validate_filename`].
    #[must_use]
    pub fn is_valid_filename(&self, name: &str) -> bool {
        self.validate_filename(name).is_ok()
    }

    /// Returns the reserved stem `stem` collides with, if any, in its
    /// canonical uppercase form.
    fn reserved_match(&self, stem: &str) -> Option<String> {
        RESERVED_NAMES
            .iter()
            .copied()
            .chain(self.extra_reserved.iter().map(String::as_str))
            .find(|reserved| reserved.eq_ignore_ascii_case(stem))
            .map(str::to_ascii_uppercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        let guard = PathGuard::new();
        assert!(guard.is_valid_filename("report.txt"));
        assert!(guard.is_valid_filename("my-folder_v2"));
        assert!(guard.is_valid_filename("photo (1).jpg"));
        assert!(guard.is_valid_filename(".hidden"));
    }

    #[test]
    fn rejects_empty_name() {
        let guard = PathGuard::new();
        let result = guard.validate_filename("");
        assert!(matches!(result, Err(GuardError::MalformedName { .. })));
    }

    #[test]
    fn rejects_path_separators() {
        let guard = PathGuard::new();
        assert!(!guard.is_valid_filename("a/b"));
        assert!(!guard.is_valid_filename("a\\b"));
        assert!(!guard.is_valid_filename("/leading"));
    }

    #[test]
    fn rejects_dot_and_dotdot_exactly() {
        let guard = PathGuard::new();
        assert!(!guard.is_valid_filename("."));
        assert!(!guard.is_valid_filename(".."));
        // A leading dot alone is not a directory reference.
        assert!(guard.is_valid_filename("...three"));
    }

    #[test]
    fn rejects_null_byte() {
        let guard = PathGuard::new();
        let result = guard.validate_filename("evil\0name");
        assert_eq!(
            result,
            Err(GuardError::control_character("evil\0name", 0))
        );
    }

    #[test]
    fn rejects_every_codepoint_below_space() {
        let guard = PathGuard::new();
        for code in 0u32..0x20 {
            let c = char::from_u32(code).unwrap();
            let name = format!("bad{c}name");
            assert!(
                matches!(
                    guard.validate_filename(&name),
                    Err(GuardError::ControlCharacter { .. })
                ),
                "U+{code:04X} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_reserved_names_case_insensitively() {
        let guard = PathGuard::new();
        assert!(!guard.is_valid_filename("CON"));
        assert!(!guard.is_valid_filename("con"));
        assert!(!guard.is_valid_filename("Nul"));
        assert!(!guard.is_valid_filename("lpt9"));
    }

    #[test]
    fn rejects_reserved_names_with_extension() {
        let guard = PathGuard::new();
        let result = guard.validate_filename("com1.txt");
        assert_eq!(result, Err(GuardError::reserved_name("com1.txt", "COM1")));
    }

    #[test]
    fn reserved_check_only_strips_the_extension() {
        let guard = PathGuard::new();
        // "console" merely starts with a reserved stem; it is fine.
        assert!(guard.is_valid_filename("console.log"));
        assert!(guard.is_valid_filename("com10"));
    }

    #[test]
    fn extra_reserved_names_extend_the_table() {
        let guard = PathGuard::new().with_reserved_name("CLOCK$");
        assert!(!guard.is_valid_filename("clock$.dat"));

        let plain = PathGuard::new();
        assert!(plain.is_valid_filename("clock$.dat"));
    }

    #[test]
    fn builtin_table_covers_all_documented_devices() {
        assert_eq!(RESERVED_NAMES.len(), 22);
        assert!(RESERVED_NAMES.contains(&"CON"));
        assert!(RESERVED_NAMES.contains(&"COM9"));
        assert!(RESERVED_NAMES.contains(&"LPT1"));
    }
}
