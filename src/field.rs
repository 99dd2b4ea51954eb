//! The four fields of the registration form

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownField;

/// One of the four named inputs of the registration form.
///
/// Variants are declared in display order; `Ord` follows it, so maps keyed by
/// `Field` iterate top to bottom the way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// First name
    Firstname,
    /// Last name
    Lastname,
    /// Email address
    Email,
    /// Password
    Password,
}

/// The kind of input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Plain text
    Text,
    /// Email-typed input
    Email,
    /// Masked input
    Password,
}

impl InputType {
    /// The HTML `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [
        Field::Firstname,
        Field::Lastname,
        Field::Email,
        Field::Password,
    ];

    /// The name used for the input's `name` attribute and the submitted record key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Firstname => "firstname",
            Field::Lastname => "lastname",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Human-readable label, also used as the placeholder text.
    pub fn label(self) -> &'static str {
        match self {
            Field::Firstname => "First Name",
            Field::Lastname => "Last Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
        }
    }

    /// Input control kind.
    pub fn input_type(self) -> InputType {
        match self {
            Field::Email => InputType::Email,
            Field::Password => InputType::Password,
            Field::Firstname | Field::Lastname => InputType::Text,
        }
    }

    /// Whether the value must never be echoed back into markup or logs.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
