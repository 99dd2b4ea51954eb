//! Predicates for field rules
//!
//! Every form rule is a predicate over the field's text. The crate ships the
//! ones the registration schema needs; any `Fn(&str) -> bool` closure works
//! as a predicate too.
//!
//! # Example
//!
//! ```rust
//! use trial_signup::predicate::*;
//!
//! assert!(not_blank().check("Ada"));
//! assert!(!not_blank().check("   "));
//!
//! assert!(email().check("ada@example.com"));
//! assert!(!email().check("ada.example.com"));
//!
//! let no_digits = |s: &str| !s.chars().any(|c| c.is_ascii_digit());
//! assert!(!no_digits.check("L0velace"));
//! ```

mod string;

pub use string::{email, len_min, not_blank, Email, MinLen, NotBlank};

/// A predicate over values of type T.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}
