//! Form state and the registration form component
//!
//! [`FormState`] is plain data with discrete transitions. [`RegistrationForm`]
//! owns one, together with its schema and config, and turns UI events into
//! those transitions.
//!
//! ```
//! use trial_signup::{Field, RegistrationForm, SubmitOutcome};
//!
//! let mut form = RegistrationForm::new();
//! let mut received = Vec::new();
//!
//! // nothing filled in: four messages, handler not called
//! let outcome = form.submit(&mut |v: &trial_signup::FormValues| received.push(v.clone()));
//! assert!(matches!(outcome, SubmitOutcome::Rejected(ref errors) if errors.len() == 4));
//!
//! form.set_value(Field::Firstname, "Ada");
//! form.set_value(Field::Lastname, "Lovelace");
//! form.set_value(Field::Email, "ada@example.com");
//! form.set_value(Field::Password, "enigma");
//!
//! let outcome = form.submit(&mut |v: &trial_signup::FormValues| received.push(v.clone()));
//! assert!(outcome.is_submitted());
//! assert_eq!(received.len(), 1);
//! assert!(form.state().values().is_empty());
//! ```

use std::collections::BTreeSet;

use crate::config::FormConfig;
use crate::error::UnknownField;
use crate::field::Field;
use crate::result::ValidationResult;
use crate::schema::ValidationSchema;
use crate::submit::SubmitHandler;
use crate::values::FormValues;

/// Everything the form remembers between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: ValidationResult,
    is_submitted: bool,
    submit_count: u32,
    touched: BTreeSet<Field>,
}

impl FormState {
    /// All fields empty, no errors, nothing submitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current errors.
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Whether a submit has been attempted since the last reset.
    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    /// Submit attempts since the last reset.
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Whether a field has lost focus since the last reset.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Store a field's text. Errors are left as they are.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Record that a field lost focus.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Recompute one field's error.
    pub fn validate_field(&mut self, field: Field, schema: &ValidationSchema) -> Option<&str> {
        let error = schema.validate_field(field, self.values.get(field));
        self.errors.set(field, error);
        self.errors.message(field)
    }

    /// Recompute every error.
    pub fn validate_all(&mut self, schema: &ValidationSchema) -> &ValidationResult {
        self.errors = schema.validate(&self.values);
        &self.errors
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn mark_submit_attempt(&mut self) {
        self.is_submitted = true;
        self.submit_count = self.submit_count.saturating_add(1);
    }
}

/// A UI event the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A keystroke changed a field's text.
    Input {
        /// The edited field
        field: Field,
        /// Its full new text
        value: String,
    },
    /// A field lost focus.
    Blur(Field),
    /// The submit control was activated.
    Submit,
    /// The form was cleared.
    Reset,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the handler received these values and the form was reset.
    Submitted(FormValues),
    /// At least one field failed; the handler was not called and values were kept.
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    /// Whether the handler was called.
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// The landing page's registration form.
#[derive(Debug)]
pub struct RegistrationForm {
    state: FormState,
    schema: ValidationSchema,
    config: FormConfig,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// The standard four-field form with default settings.
    pub fn new() -> Self {
        Self::with_schema(ValidationSchema::registration(), FormConfig::default())
    }

    /// A form with custom rules and settings.
    pub fn with_schema(schema: ValidationSchema, config: FormConfig) -> Self {
        Self {
            state: FormState::new(),
            schema,
            config,
        }
    }

    /// Replace the settings.
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The rules in use.
    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// The settings in use.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Store new text for a field, validating it live when the config says so.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.state.set_value(field, value);

        #[cfg(feature = "tracing")]
        tracing::trace!(field = %field, "field changed");

        let touched = self.state.is_touched(field);
        if self
            .config
            .validates_on_change(self.state.is_submitted(), touched)
        {
            self.state.validate_field(field, &self.schema);
        }
    }

    /// Like [`RegistrationForm::set_value`], keyed by the input's `name` attribute.
    pub fn set_value_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<Field>()?;
        self.set_value(field, value);
        Ok(())
    }

    /// A field lost focus.
    pub fn blur(&mut self, field: Field) {
        self.state.touch(field);
        if self.config.validates_on_blur(self.state.is_submitted()) {
            self.state.validate_field(field, &self.schema);
        }
    }

    /// Validate everything and, if it all passes, hand the values to `handler`.
    ///
    /// On success the handler is called exactly once and the form is reset. On
    /// failure the errors are stored and the values are left for the user to fix.
    pub fn submit<H>(&mut self, handler: &mut H) -> SubmitOutcome
    where
        H: SubmitHandler + ?Sized,
    {
        self.state.mark_submit_attempt();
        let errors = self.state.validate_all(&self.schema).clone();

        if !errors.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                errors = errors.len(),
                attempt = self.state.submit_count(),
                "submit rejected"
            );
            return SubmitOutcome::Rejected(errors);
        }

        let snapshot = if self.config.trim_before_submit {
            self.state.values().trimmed()
        } else {
            self.state.values().clone()
        };

        handler.submit(&snapshot);
        self.state.reset();
        SubmitOutcome::Submitted(snapshot)
    }

    /// Clear values, errors and submit status.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Apply one UI event. Returns the outcome for [`FormEvent::Submit`].
    pub fn dispatch<H>(&mut self, event: FormEvent, handler: &mut H) -> Option<SubmitOutcome>
    where
        H: SubmitHandler + ?Sized,
    {
        match event {
            FormEvent::Input { field, value } => {
                self.set_value(field, value);
                None
            }
            FormEvent::Blur(field) => {
                self.blur(field);
                None
            }
            FormEvent::Submit => Some(self.submit(handler)),
            FormEvent::Reset => {
                self.reset();
                None
            }
        }
    }
}
