//! Walks the landing page form through a rejected and an accepted submission
//!
//! Run with: cargo run --example landing_page

use trial_signup::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut form = RegistrationForm::new();
    let mut handler = LogSubmission;

    // ========================================================================
    // First attempt: half-filled form
    // ========================================================================
    form.set_value(Field::Firstname, "Ada");
    form.set_value(Field::Email, "ada@example");

    match form.submit(&mut handler) {
        SubmitOutcome::Rejected(errors) => {
            for error in errors.iter() {
                println!("  {:<10} {}", error.field, error.message);
            }
        }
        SubmitOutcome::Submitted(values) => println!("unexpected submit: {:?}", values),
    }

    println!("\n{}\n", LandingPage::render(form.state()));

    // ========================================================================
    // Fix the fields; errors clear as the user types
    // ========================================================================
    form.set_value(Field::Lastname, "Lovelace");
    form.set_value(Field::Email, "ada@example.com");
    form.set_value(Field::Password, "enigma");
    println!(
        "errors after corrections: {}",
        form.state().errors().len()
    );

    match form.submit(&mut handler) {
        SubmitOutcome::Submitted(values) => println!("submitted {:?}", values),
        SubmitOutcome::Rejected(errors) => println!("still invalid: {:?}", errors.messages()),
    }

    println!("form cleared: {}", form.state().values().is_empty());
}
