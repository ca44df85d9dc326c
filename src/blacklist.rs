//! Common-password lookup
//!
//! Holds the fixed list of well-known passwords that trigger the
//! "very common" warning.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Well-known passwords, lowercase and trimmed.
pub const COMMON_PASSWORDS: [&str; 15] = [
    "123456",
    "123456789",
    "password",
    "12345",
    "12345678",
    "qwerty",
    "1234567",
    "111111",
    "123123",
    "abc123",
    "password1",
    "iloveyou",
    "admin",
    "welcome",
    "letmein",
];

static BLACKLIST: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_PASSWORDS.into_iter().collect());

/// Returns the common-password set.
pub fn get_blacklist() -> &'static HashSet<&'static str> {
    &BLACKLIST
}

/// Checks if a password is in the common-password list.
///
/// The password is lowercased and trimmed before an exact lookup, so
/// `"  PassWord "` matches `"password"`. An empty or blank password is
/// never common.
pub fn is_common(password: &str) -> bool {
    let normalized = password.trim().to_lowercase();
    !normalized.is_empty() && BLACKLIST.contains(normalized.as_str())
}
