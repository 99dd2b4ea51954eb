//! Per-field validation outcome

use std::collections::BTreeMap;

use crate::error::{FieldError, FieldErrors};
use crate::field::Field;

/// Maps each field to its current error, if any.
///
/// A field with no entry is currently valid. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error for a field.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// The user-facing message for a field.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Whether a field currently has an error.
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`ValidationResult::is_valid`].
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Replace one field's entry: `Some` records the error, `None` clears it.
    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Drop every error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> + '_ {
        self.errors.values()
    }

    /// Fields with an error, in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// Messages in form order.
    pub fn messages(&self) -> Vec<&str> {
        self.iter().map(|e| e.message.as_str()).collect()
    }

    /// Convert into an accumulated error list, in form order.
    pub fn into_field_errors(self) -> FieldErrors {
        self.errors
            .into_values()
            .map(FieldErrors::one)
            .fold(FieldErrors::default(), crate::Semigroup::combine)
    }
}

impl FromIterator<FieldError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut result = ValidationResult::new();
        for error in iter {
            // first error for a field wins
            result.errors.entry(error.field).or_insert(error);
        }
        result
    }
}
