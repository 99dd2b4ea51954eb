//! Declarative validation schema
//!
//! A schema maps each field to an ordered list of rules. A rule is a predicate
//! over the field's text plus the message shown when it fails. Fields are
//! checked independently, and the first failing rule of a field wins.
//!
//! ```
//! use trial_signup::{Field, FormValues, ValidationSchema};
//!
//! let schema = ValidationSchema::registration();
//! let result = schema.validate(&FormValues::new().with(Field::Email, "ada@example"));
//!
//! assert_eq!(result.message(Field::Email), Some("Look like this is not email"));
//! assert_eq!(result.len(), 4);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ErrorKind, FieldError, FieldErrors};
use crate::field::Field;
use crate::predicate::{email, not_blank, Predicate};
use crate::result::ValidationResult;
use crate::values::FormValues;
use crate::Validation;

/// Message for a blank first name.
pub const FIRSTNAME_EMPTY: &str = "First Name cannot be empty";
/// Message for a blank last name.
pub const LASTNAME_EMPTY: &str = "Last Name cannot be empty";
/// Message for an email that does not look like one.
pub const EMAIL_INVALID: &str = "Look like this is not email";
/// Message for a blank password.
pub const PASSWORD_EMPTY: &str = "Password cannot be empty";

/// A predicate over a field's text, paired with what to report when it fails.
pub struct Rule {
    predicate: Box<dyn Predicate<str>>,
    kind: ErrorKind,
    message: String,
}

impl Rule {
    /// A rule from any string predicate.
    pub fn new<P>(predicate: P, kind: ErrorKind, message: impl Into<String>) -> Self
    where
        P: Predicate<str> + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            kind,
            message: message.into(),
        }
    }

    /// Fails with [`ErrorKind::EmptyField`] on empty or whitespace-only text.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(not_blank(), ErrorKind::EmptyField, message)
    }

    /// Fails with [`ErrorKind::InvalidFormat`] unless the text looks like an email.
    ///
    /// Empty text fails too.
    pub fn email(message: impl Into<String>) -> Self {
        Self::new(email(), ErrorKind::InvalidFormat, message)
    }

    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check `value`, producing this rule's error for `field` on failure.
    pub fn check(&self, field: Field, value: &str) -> Option<FieldError> {
        if self.predicate.check(value) {
            None
        } else {
            Some(FieldError::new(field, self.kind, self.message.clone()))
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Field rules for the whole form.
#[derive(Debug, Default)]
pub struct ValidationSchema {
    rules: BTreeMap<Field, Vec<Rule>>,
}

impl ValidationSchema {
    /// A schema with no rules; every value passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The landing page schema: names and password required, email well-formed.
    pub fn registration() -> Self {
        Self::new()
            .rule(Field::Firstname, Rule::required(FIRSTNAME_EMPTY))
            .rule(Field::Lastname, Rule::required(LASTNAME_EMPTY))
            .rule(Field::Email, Rule::email(EMAIL_INVALID))
            .rule(Field::Password, Rule::required(PASSWORD_EMPTY))
    }

    /// Append a rule to a field. Rules run in the order they were added.
    pub fn rule(mut self, field: Field, rule: Rule) -> Self {
        self.rules.entry(field).or_default().push(rule);
        self
    }

    /// The rules of one field.
    pub fn rules(&self, field: Field) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check one field's text. Returns the first failing rule's error.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<FieldError> {
        self.rules(field)
            .iter()
            .find_map(|rule| rule.check(field, value))
    }

    /// Check every field.
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        let result: ValidationResult = values
            .iter()
            .filter_map(|(field, value)| self.validate_field(field, value))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(errors = result.len(), "validated registration form");

        result
    }

    /// Check every field as an accumulating [`Validation`].
    ///
    /// Succeeds with the values unchanged, or fails with one error per failing
    /// field in form order.
    pub fn check(&self, values: FormValues) -> Validation<FormValues, FieldErrors> {
        let per_field: Vec<Validation<Field, FieldErrors>> = Field::ALL
            .into_iter()
            .map(|field| match self.validate_field(field, values.get(field)) {
                Some(error) => Validation::failure(FieldErrors::one(error)),
                None => Validation::success(field),
            })
            .collect();

        Validation::all_vec(per_field).map(|_| values)
    }
}
