//! Testing utilities for code that hosts the registration form
//!
//! - [`RecordingHandler`]: a submit handler that remembers every call
//! - `assert_success!`, `assert_failure!`, `assert_validation_errors!`
//! - with the `proptest` feature, [`strategies`] for form values
//!
//! # Example
//!
//! ```rust
//! use trial_signup::testing::RecordingHandler;
//! use trial_signup::{assert_failure, FormValues, RegistrationForm, ValidationSchema};
//!
//! let mut form = RegistrationForm::new();
//! let mut handler = RecordingHandler::new();
//! form.submit(&mut handler);
//! assert!(handler.is_empty());
//!
//! assert_failure!(ValidationSchema::registration().check(FormValues::new()));
//! ```

use crate::submit::SubmitHandler;
use crate::values::FormValues;

/// A submit handler that records every submission.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    calls: Vec<FormValues>,
}

impl RecordingHandler {
    /// No calls recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission, oldest first.
    pub fn calls(&self) -> &[FormValues] {
        &self.calls
    }

    /// Number of submissions.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the handler was never called.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The most recent submission.
    pub fn last(&self) -> Option<&FormValues> {
        self.calls.last()
    }
}

impl SubmitHandler for RecordingHandler {
    fn submit(&mut self, values: &FormValues) {
        self.calls.push(values.clone());
    }
}

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with specific errors.
///
/// # Example
///
/// ```rust
/// use trial_signup::{assert_validation_errors, Field, FormValues, ValidationSchema};
///
/// let values = FormValues::new()
///     .with(Field::Firstname, "Ada")
///     .with(Field::Lastname, "Lovelace")
///     .with(Field::Email, "ada@example.com");
/// let result = ValidationSchema::registration()
///     .check(values)
///     .map_err(|errors| errors.fields());
/// assert_validation_errors!(result, vec![Field::Password]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Proptest strategies for form values.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::values::FormValues;

    /// Text with at least one non-whitespace character.
    pub fn filled_text() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z '-]{0,23}"
    }

    /// Empty or whitespace-only text.
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\n\r]{0,6}"
    }

    /// Addresses of the form `local@domain.tld`.
    pub fn email_address() -> impl Strategy<Value = String> {
        ("[a-z0-9._+-]{1,12}", "[a-z0-9-]{1,12}", "[a-z]{2,6}")
            .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
    }

    /// Values that pass the registration schema.
    pub fn valid_values() -> impl Strategy<Value = FormValues> {
        (filled_text(), filled_text(), email_address(), filled_text()).prop_map(
            |(firstname, lastname, email, password)| FormValues {
                firstname,
                lastname,
                email,
                password,
            },
        )
    }
}
