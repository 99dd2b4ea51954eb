//! What the form writes to the log, and what it keeps out of it

#![cfg(feature = "tracing")]

use tracing_test::traced_test;
use trial_signup::prelude::*;

fn never(_: &FormValues) {
    panic!("handler must not be called");
}

/// The line of the first event whose text contains `message`.
fn event_line<'a>(lines: &[&'a str], message: &str) -> Result<&'a str, String> {
    lines
        .iter()
        .copied()
        .find(|line| line.contains(message))
        .ok_or_else(|| format!("no '{message}' event in {lines:?}"))
}

#[traced_test]
#[test]
fn value_changes_name_the_field_but_not_the_text() {
    let mut form = RegistrationForm::new();
    form.set_value(Field::Lastname, "Lovelace");
    form.set_value(Field::Password, "correct-horse-battery");

    assert!(logs_contain("field changed"));
    assert!(logs_contain("field=lastname"));
    assert!(logs_contain("field=password"));
    assert!(!logs_contain("Lovelace"));
    assert!(!logs_contain("correct-horse-battery"));
}

#[traced_test]
#[test]
fn rejected_submits_report_error_counts() {
    let mut form = RegistrationForm::new();
    form.submit(&mut never);

    logs_assert(|lines: &[&str]| {
        let validated = event_line(lines, "validated registration form")?;
        if !validated.contains("errors=4") {
            return Err(format!("expected errors=4 in {validated:?}"));
        }
        let rejected = event_line(lines, "submit rejected")?;
        if !(rejected.contains("errors=4") && rejected.contains("attempt=1")) {
            return Err(format!("expected errors=4 attempt=1 in {rejected:?}"));
        }
        Ok(())
    });
}

#[traced_test]
#[test]
fn second_attempt_reports_what_is_left() {
    let mut form = RegistrationForm::new();
    form.submit(&mut never);

    form.set_value(Field::Firstname, "Ada");
    form.set_value(Field::Password, "enigma");
    form.submit(&mut never);

    logs_assert(|lines: &[&str]| {
        let second = lines
            .iter()
            .find(|line| line.contains("submit rejected") && line.contains("attempt=2"))
            .ok_or_else(|| "no second rejection".to_string())?;
        if second.contains("errors=2") {
            Ok(())
        } else {
            Err(format!("expected errors=2 in {second:?}"))
        }
    });
    assert!(!logs_contain("enigma"));
}

#[traced_test]
#[test]
fn accepted_submit_logs_at_info_with_password_redacted() {
    let mut form = RegistrationForm::new();
    form.set_value(Field::Firstname, "Ada");
    form.set_value(Field::Lastname, "Lovelace");
    form.set_value(Field::Email, "ada@example.com");
    form.set_value(Field::Password, "enigma");

    let outcome = form.submit(&mut LogSubmission);

    assert!(outcome.is_submitted());
    assert!(logs_contain("validated registration form"));
    assert!(logs_contain("errors=0"));
    assert!(logs_contain("registration submitted"));
    assert!(logs_contain("[redacted]"));
    assert!(!logs_contain("enigma"));
    assert!(!logs_contain("submit rejected"));
}
