//! End-to-end tests of the registration form, driven the way the page drives it.

use trial_signup::prelude::*;
use trial_signup::presenter::{FormView, ERROR_ICON_SRC};
use trial_signup::testing::RecordingHandler;
use trial_signup::{assert_failure, assert_validation_errors};

fn ada() -> FormValues {
    FormValues {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "enigma".to_string(),
    }
}

fn type_in(form: &mut RegistrationForm, values: &FormValues) {
    for (field, value) in values.iter() {
        form.set_value(field, value);
        form.blur(field);
    }
}

#[test]
fn empty_submit_shows_four_messages_and_skips_handler() {
    let mut form = RegistrationForm::new();
    let mut handler = RecordingHandler::new();

    let outcome = form.submit(&mut handler);

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("empty form must be rejected");
    };
    assert_eq!(
        errors.messages(),
        vec![
            "First Name cannot be empty",
            "Last Name cannot be empty",
            "Look like this is not email",
            "Password cannot be empty",
        ]
    );
    assert!(handler.is_empty());

    let view = FormView::from_state(form.state());
    let email = view.field(Field::Email).expect("email view");
    assert!(email.class.contains("border-2"));
    assert!(!email.class.contains("border-[1px]"));
    assert!(!email.class.contains("border-gray-400"));

    let html = view.to_html();
    assert_eq!(html.matches(ERROR_ICON_SRC).count(), 4);
}

#[test]
fn valid_submit_hands_exact_values_to_handler_and_resets() {
    let mut form = RegistrationForm::new();
    let mut handler = RecordingHandler::new();
    type_in(&mut form, &ada());

    let outcome = form.submit(&mut handler);

    assert_eq!(outcome, SubmitOutcome::Submitted(ada()));
    assert_eq!(handler.calls(), &[ada()]);
    assert_eq!(form.state().values(), &FormValues::new());
    assert!(form.state().errors().is_valid());
    assert!(!form.state().is_submitted());
}

#[test]
fn correcting_fields_after_rejection_then_submitting() {
    let mut form = RegistrationForm::new();
    let mut handler = RecordingHandler::new();

    form.set_value(Field::Firstname, "Ada");
    form.set_value(Field::Lastname, "Lovelace");
    form.set_value(Field::Email, "ada.example.com");
    form.set_value(Field::Password, "enigma");
    assert!(!form.submit(&mut handler).is_submitted());
    assert_eq!(form.state().errors().fields(), vec![Field::Email]);

    // live re-validation after the failed attempt
    form.set_value(Field::Email, "ada@example.com");
    assert!(form.state().errors().is_valid());

    assert!(form.submit(&mut handler).is_submitted());
    assert_eq!(handler.len(), 1);
    assert_eq!(handler.last(), Some(&ada()));
}

#[test]
fn events_drive_the_form() {
    let mut form = RegistrationForm::new();
    let mut handler = RecordingHandler::new();

    for (name, value) in [
        ("firstname", "Ada"),
        ("lastname", "Lovelace"),
        ("email", "ada@example.com"),
        ("password", "enigma"),
    ] {
        let field: Field = name.parse().expect("known field");
        form.dispatch(
            FormEvent::Input {
                field,
                value: value.to_string(),
            },
            &mut handler,
        );
    }

    let outcome = form.dispatch(FormEvent::Submit, &mut handler);
    assert_eq!(outcome, Some(SubmitOutcome::Submitted(ada())));
    assert_eq!(handler.len(), 1);
}

#[test]
fn schema_check_matches_form_validation() {
    let schema = ValidationSchema::registration();
    let mut values = ada();
    values.firstname = "   ".to_string();
    values.password.clear();

    let result = schema.validate(&values);
    let checked = schema.check(values).map_err(|errors| errors.fields());
    assert_validation_errors!(checked, vec![Field::Firstname, Field::Password]);
    assert_eq!(result.len(), 2);

    assert_failure!(schema.check(FormValues::new()));
}

#[test]
fn custom_schema_extends_the_registration_rules() {
    let schema = ValidationSchema::registration().rule(
        Field::Password,
        Rule::new(
            trial_signup::predicate::len_min(8),
            ErrorKind::InvalidFormat,
            "Password must be at least 8 characters",
        ),
    );
    let mut form = RegistrationForm::with_schema(schema, FormConfig::default());
    let mut handler = RecordingHandler::new();
    type_in(&mut form, &ada());

    let outcome = form.submit(&mut handler);
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("short password must be rejected");
    };
    assert_eq!(
        errors.message(Field::Password),
        Some("Password must be at least 8 characters")
    );
    assert!(handler.is_empty());
}

#[test]
fn unknown_field_name_is_reported() {
    let mut form = RegistrationForm::new();
    let err = form.set_value_by_name("nickname", "ada").unwrap_err();
    assert_eq!(err.to_string(), "unknown form field 'nickname'");
    assert!(form.state().values().is_empty());
}
