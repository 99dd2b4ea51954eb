//! The record of field values submitted by the form

use std::fmt;

use crate::field::Field;

/// The four user-editable strings of the registration form.
///
/// With the `serde` feature this serializes to exactly
/// `{"firstname", "lastname", "email", "password"}`. `Debug` never prints the
/// password.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormValues {
    /// First name
    pub firstname: String,
    /// Last name
    pub lastname: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

impl FormValues {
    /// All fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    ///
    /// ```
    /// use trial_signup::{Field, FormValues};
    ///
    /// let values = FormValues::new()
    ///     .with(Field::Firstname, "Ada")
    ///     .with(Field::Lastname, "Lovelace");
    /// assert_eq!(values.get(Field::Lastname), "Lovelace");
    /// ```
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Current text of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Firstname => &self.firstname,
            Field::Lastname => &self.lastname,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Replace the text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Firstname => &mut self.firstname,
            Field::Lastname => &mut self.lastname,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Whether every field is the empty string.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }

    /// A copy with surrounding whitespace removed from every field but the password.
    pub fn trimmed(&self) -> Self {
        Self {
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> FormValues {
        FormValues::new()
            .with(Field::Firstname, "Ada")
            .with(Field::Lastname, "Lovelace")
            .with(Field::Email, "ada@example.com")
            .with(Field::Password, "enigma")
    }

    #[test]
    fn test_new_is_empty() {
        let values = FormValues::new();
        assert!(values.is_empty());
        assert_eq!(values.get(Field::Email), "");
    }

    #[test]
    fn test_get_set_each_field() {
        let values = ada();
        assert_eq!(values.firstname, "Ada");
        assert_eq!(values.lastname, "Lovelace");
        assert_eq!(values.email, "ada@example.com");
        assert_eq!(values.password, "enigma");
        assert!(!values.is_empty());
    }

    #[test]
    fn test_iter_in_form_order() {
        let fields: Vec<Field> = ada().iter().map(|(field, _)| field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", ada());
        assert!(debug.contains("Lovelace"));
        assert!(!debug.contains("enigma"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn test_trimmed_keeps_password_verbatim() {
        let values = FormValues::new()
            .with(Field::Firstname, "  Ada ")
            .with(Field::Email, " ada@example.com\n")
            .with(Field::Password, " enigma ");
        let trimmed = values.trimmed();
        assert_eq!(trimmed.firstname, "Ada");
        assert_eq!(trimmed.email, "ada@example.com");
        assert_eq!(trimmed.password, " enigma ");
    }
}
