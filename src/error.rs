//! Field validation errors
//!
//! Validation failures are ordinary, expected values. They are shown next to
//! the field and never escalate past the form.

use std::fmt;

use crate::field::Field;
use crate::Semigroup;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Required text is absent or whitespace-only.
    EmptyField,
    /// Text is present but does not match the expected pattern.
    InvalidFormat,
}

/// A single field's validation failure, carrying the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// The offending field
    pub field: Field,
    /// Failure category
    pub kind: ErrorKind,
    /// User-facing message
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: Field, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// A field name that is not part of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

/// Errors accumulated across several fields, in the order they were found.
///
/// This is the error side of [`crate::Validation`] for whole-form checks. It is
/// never empty when it comes out of a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Errors for a single field.
    pub fn one(error: FieldError) -> Self {
        FieldErrors(vec![error])
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// The fields that failed.
    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// The user-facing messages.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }
}

impl Semigroup for FieldErrors {
    fn combine(self, other: Self) -> Self {
        FieldErrors(self.0.combine(other.0))
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        FieldErrors::one(error)
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = FieldError::new(Field::Email, ErrorKind::InvalidFormat, "Look like this is not email");
        assert_eq!(error.to_string(), "email: Look like this is not email");
        assert_eq!(
            UnknownField("age".into()).to_string(),
            "unknown form field 'age'"
        );
    }

    #[test]
    fn test_combine_keeps_order() {
        let first = FieldErrors::one(FieldError::new(
            Field::Firstname,
            ErrorKind::EmptyField,
            "First Name cannot be empty",
        ));
        let password = FieldErrors::one(FieldError::new(
            Field::Password,
            ErrorKind::EmptyField,
            "Password cannot be empty",
        ));

        let combined = first.combine(password);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.fields(), vec![Field::Firstname, Field::Password]);
        assert_eq!(
            combined.to_string(),
            "firstname: First Name cannot be empty; password: Password cannot be empty"
        );
    }
}
