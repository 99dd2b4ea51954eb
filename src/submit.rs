//! The collaborator that receives a valid submission
//!
//! The form hands a fully valid snapshot to a [`SubmitHandler`] and expects
//! nothing back. With the `tracing` feature (on by default) the crate ships
//! `LogSubmission`, a handler that only logs.

use crate::values::FormValues;

/// Receives the values of a successful submit. Fire-and-forget.
///
/// Any `FnMut(&FormValues)` closure is a handler:
///
/// ```
/// use trial_signup::{FormValues, SubmitHandler};
///
/// let mut seen = Vec::new();
/// let mut handler = |values: &FormValues| seen.push(values.email.clone());
/// handler.submit(&FormValues::default());
/// assert_eq!(seen, vec![String::new()]);
/// ```
pub trait SubmitHandler {
    /// Handle one valid submission.
    fn submit(&mut self, values: &FormValues);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&FormValues),
{
    fn submit(&mut self, values: &FormValues) {
        self(values)
    }
}

/// Logs each submission at INFO with the password redacted.
///
/// Requires the `tracing` feature.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmission;

#[cfg(feature = "tracing")]
impl SubmitHandler for LogSubmission {
    fn submit(&mut self, values: &FormValues) {
        tracing::info!(
            firstname = %values.firstname,
            lastname = %values.lastname,
            email = %values.email,
            password = "[redacted]",
            "registration submitted"
        );
    }
}
