//! Validation type for accumulating errors
//!
//! `Validation` is similar to `Result`, but combining two failures keeps both
//! errors instead of stopping at the first. A registration form wants every
//! bad field reported at once, so the whole form check is built on it.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use trial_signup::Validation;
//!
//! let v1 = Validation::<&str, _>::failure(vec!["First Name cannot be empty"]);
//! let v2 = Validation::<&str, _>::failure(vec!["Last Name cannot be empty"]);
//!
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Failure(vec!["First Name cannot be empty", "Last Name cannot be empty"])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_signup::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["Password cannot be empty"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both succeed, returns a tuple of both values. If either or both fail,
    /// the errors are joined with `Semigroup::combine`, left first.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns every success value in order if all succeed. Otherwise the errors
    /// of every failure are combined, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_signup::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::<i32, _>::failure(vec!["error2"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        validations
            .into_iter()
            .fold(Validation::Success(Vec::new()), |acc, next| {
                acc.and(next).map(|(mut values, value)| {
                    values.push(value);
                    values
                })
            })
    }
}
