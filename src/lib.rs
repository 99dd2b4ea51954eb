//! # Trial Signup
//!
//! The registration form of a free-trial landing page: four required fields,
//! declarative rules, inline error presentation and a fire-and-forget submit.
//!
//! The crate keeps a **pure core** (schema, validation, rendering) apart from
//! the **imperative shell** (the [`SubmitHandler`] that receives valid values).
//!
//! ## Quick Example
//!
//! ```rust
//! use trial_signup::{Field, FormValues, LandingPage, RegistrationForm, SubmitOutcome};
//!
//! let mut form = RegistrationForm::new();
//! form.set_value(Field::Firstname, "Ada");
//! form.set_value(Field::Email, "ada@example");
//!
//! let mut submitted = Vec::new();
//! match form.submit(&mut |values: &FormValues| submitted.push(values.clone())) {
//!     SubmitOutcome::Rejected(errors) => {
//!         assert_eq!(
//!             errors.messages(),
//!             vec![
//!                 "Last Name cannot be empty",
//!                 "Look like this is not email",
//!                 "Password cannot be empty",
//!             ]
//!         );
//!     }
//!     SubmitOutcome::Submitted(_) => unreachable!(),
//! }
//! assert!(submitted.is_empty());
//!
//! let page = LandingPage::render(form.state());
//! assert!(page.contains("Look like this is not email"));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod predicate;
pub mod presenter;
pub mod result;
pub mod schema;
pub mod semigroup;
pub mod submit;
pub mod testing;
pub mod validation;
pub mod values;

// Re-exports
pub use config::{FormConfig, RevalidateMode, ValidationMode};
pub use error::{ErrorKind, FieldError, FieldErrors, UnknownField};
pub use field::{Field, InputType};
pub use form::{FormEvent, FormState, RegistrationForm, SubmitOutcome};
pub use presenter::{FieldView, FormView, LandingPage};
pub use result::ValidationResult;
pub use schema::{Rule, ValidationSchema};
pub use semigroup::Semigroup;
pub use submit::SubmitHandler;
#[cfg(feature = "tracing")]
pub use submit::LogSubmission;
pub use validation::Validation;
pub use values::FormValues;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{FormConfig, RevalidateMode, ValidationMode};
    pub use crate::error::{ErrorKind, FieldError, FieldErrors};
    pub use crate::field::Field;
    pub use crate::form::{FormEvent, FormState, RegistrationForm, SubmitOutcome};
    pub use crate::presenter::LandingPage;
    pub use crate::schema::{Rule, ValidationSchema};
    pub use crate::semigroup::Semigroup;
    pub use crate::submit::SubmitHandler;
    #[cfg(feature = "tracing")]
    pub use crate::submit::LogSubmission;
    pub use crate::validation::Validation;
    pub use crate::values::FormValues;
}
