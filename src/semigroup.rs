//! Semigroup trait for accumulating validation errors
//!
//! A Semigroup is a type with an associative binary operation. Form validation
//! uses it to collect the errors of every failing field instead of stopping at
//! the first one.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use trial_signup::Semigroup;
//!
//! let v1 = vec!["First Name cannot be empty"];
//! let v2 = vec!["Password cannot be empty"];
//! assert_eq!(
//!     v1.combine(v2),
//!     vec!["First Name cannot be empty", "Password cannot be empty"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
