//! String predicates
//!
//! Predicates over the raw text of a form field.

use std::sync::LazyLock;

use regex::Regex;

use super::Predicate;

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot after it.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Predicate that checks a string has content once surrounding whitespace is trimmed.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Create a predicate that rejects empty and whitespace-only strings.
///
/// # Example
///
/// ```rust
/// use trial_signup::predicate::*;
///
/// assert!(not_blank().check("Ada"));
/// assert!(!not_blank().check(""));
/// assert!(!not_blank().check("  \t"));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate that checks the text has at least `min` characters.
#[derive(Clone, Copy, Debug)]
pub struct MinLen {
    min: usize,
}

impl Predicate<str> for MinLen {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().count() >= self.min
    }
}

/// Create a predicate that checks if length is at least min.
///
/// Length is counted in characters, not bytes.
pub fn len_min(min: usize) -> MinLen {
    MinLen { min }
}

/// Predicate that checks a string looks like an email address.
#[derive(Clone, Copy, Default, Debug)]
pub struct Email;

impl Predicate<str> for Email {
    #[inline]
    fn check(&self, value: &str) -> bool {
        EMAIL_PATTERN.is_match(value)
    }
}

/// Create a predicate matching `^[^@\s]+@[^@\s]+\.[^@\s]+$`.
///
/// The empty string does not match, so this doubles as the required check.
///
/// # Example
///
/// ```rust
/// use trial_signup::predicate::*;
///
/// assert!(email().check("ada@example.com"));
/// assert!(!email().check("ada@example"));
/// assert!(!email().check(""));
/// ```
pub fn email() -> Email {
    Email
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank().check(" Ada "));
        assert!(!not_blank().check(""));
        assert!(!not_blank().check(" \n\t "));
    }

    #[test]
    fn test_len_counts_chars_not_bytes() {
        assert!(len_min(3).check("Zoë"));
        assert!(!len_min(4).check("Zoë"));
        assert!(len_min(0).check(""));
    }

    #[test]
    fn test_email_accepts() {
        for value in [
            "ada@example.com",
            "a@b.c",
            "first.last+tag@mail.example.co.uk",
            "ada@localhost.localdomain",
        ] {
            assert!(email().check(value), "{value} should be accepted");
        }
    }

    #[test]
    fn test_email_rejects() {
        for value in [
            "",
            " ",
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "ada@@example.com",
            "ada @example.com",
            "ada@example .com",
            "ada@example.com ",
            "ada@exam@ple.com",
        ] {
            assert!(!email().check(value), "{value:?} should be rejected");
        }
    }
}
