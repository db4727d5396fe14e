//! End-to-end tests driving a mounted session over in-memory fields.

use signup_form::prelude::*;
use signup_form::session::{
    ENTER_PASSWORD_FIRST_MESSAGE, PASSWORDS_MISMATCH_MESSAGE, SELECT_COUNTRY_FIRST_MESSAGE,
    SELECT_FROM_LIST_MESSAGE,
};
use signup_form::validation::{DOT_MESSAGE, InvalidMarker, REQUIRED_MESSAGE};

fn mount() -> (MemoryForm, FormSession) {
    let form = MemoryForm::new();
    let session = FormSession::mount(
        form.surface(),
        Services::bundled().unwrap(),
        &FormConfig::default(),
    )
    .unwrap();
    (form, session)
}

fn type_into(form: &MemoryForm, session: &mut FormSession, id: FieldId, value: &str) {
    form.field(id).set_value(value);
    session.dispatch(FormEvent::Input(id)).unwrap();
}

fn choose_country(form: &MemoryForm, session: &mut FormSession, name: &str) {
    type_into(form, session, FieldId::Country, name);
    let index = form
        .country_suggestions
        .items()
        .iter()
        .position(|s| s == name)
        .expect("country should be suggested");
    session
        .dispatch(FormEvent::SuggestionClicked(index))
        .unwrap();
}

#[test]
fn test_email_double_dot_shows_only_dot_rule() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Email, "a..b@example.com");

    assert_eq!(form.email_errors.items(), vec![DOT_MESSAGE]);
    assert!(form.email.is_invalid());
    assert_eq!(form.email.marker(), Some(InvalidMarker::Constraint));
}

#[test]
fn test_valid_email_shows_nothing() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Email, "a..b@example.com");
    type_into(&form, &mut session, FieldId::Email, "a.b@example.com");

    assert!(form.email_errors.is_empty());
    assert!(!form.email.is_invalid());
}

#[test]
fn test_country_typing_opens_suggestions() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Country, "germ");

    assert!(session.autocomplete().is_open());
    let shown = form.country_suggestions.items();
    assert!(!shown.is_empty());
    assert!(shown.len() <= 6);
    assert!(shown.contains(&"Germany".to_string()));
}

#[test]
fn test_focus_with_empty_country_lists_first_six() {
    let (form, mut session) = mount();
    session
        .dispatch(FormEvent::Focus(FieldId::Country))
        .unwrap();

    assert_eq!(form.country_suggestions.len(), 6);
    assert_eq!(form.country_suggestions.items()[0], "Afghanistan");
}

#[test]
fn test_selecting_suggestion_commits_exact_text() {
    let (form, mut session) = mount();
    choose_country(&form, &mut session, "Germany");

    assert_eq!(form.country.value(), "Germany");
    assert!(!session.autocomplete().is_open());
    assert!(form.country_suggestions.is_empty());
    assert!(!form.country.is_invalid());
}

#[test]
fn test_closing_with_unknown_country_is_rejected() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Country, "Atlantis");
    session.dispatch(FormEvent::ClickOutside).unwrap();

    assert_eq!(form.country.value(), "Atlantis");
    assert_eq!(form.country_errors.items(), vec![SELECT_FROM_LIST_MESSAGE]);
    assert_eq!(form.country.marker(), Some(InvalidMarker::Class));
}

#[test]
fn test_closing_with_exact_name_is_accepted() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Country, "France");
    session.dispatch(FormEvent::ClickOutside).unwrap();

    assert!(form.country_errors.is_empty());
    assert!(!form.country.is_invalid());
}

#[test]
fn test_keyboard_selection() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Country, "");
    session
        .dispatch(FormEvent::SuggestionKey(SuggestionKey::Down))
        .unwrap();
    session
        .dispatch(FormEvent::SuggestionKey(SuggestionKey::Enter))
        .unwrap();

    assert_eq!(form.country.value(), "Åland Islands");
    assert!(!session.autocomplete().is_open());
}

#[test]
fn test_changing_country_clears_postal_code() {
    let (form, mut session) = mount();
    choose_country(&form, &mut session, "Germany");
    type_into(&form, &mut session, FieldId::PostalCode, "10115");
    assert!(form.postal_code_errors.is_empty());

    type_into(&form, &mut session, FieldId::Country, "Fra");
    assert_eq!(form.postal_code.value(), "");

    form.postal_code.set_value("75001");
    choose_country(&form, &mut session, "France");
    assert_eq!(form.postal_code.value(), "");
}

#[test]
fn test_postal_code_needs_country() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::PostalCode, "12345");

    assert_eq!(
        form.postal_code_errors.items(),
        vec![SELECT_COUNTRY_FIRST_MESSAGE]
    );
}

#[test]
fn test_postal_code_needs_valid_country() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Country, "Atlantis");
    session.dispatch(FormEvent::ClickOutside).unwrap();
    type_into(&form, &mut session, FieldId::PostalCode, "12345");

    assert_eq!(
        form.postal_code_errors.items(),
        vec![SELECT_COUNTRY_FIRST_MESSAGE]
    );
}

#[test]
fn test_postal_code_message_is_verbatim() {
    let (form, mut session) = mount();
    choose_country(&form, &mut session, "Germany");
    type_into(&form, &mut session, FieldId::PostalCode, "1234");

    assert_eq!(
        form.postal_code_errors.items(),
        vec!["Postal code 1234 is not valid for country DE."]
    );
    assert!(form.postal_code.is_invalid());
}

#[test]
fn test_confirm_without_password() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::ConfirmPassword, "abc");

    assert_eq!(
        form.confirm_password_errors.items(),
        vec![ENTER_PASSWORD_FIRST_MESSAGE]
    );
}

#[test]
fn test_confirm_mismatch_and_match() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Password, "longpw1");
    type_into(&form, &mut session, FieldId::ConfirmPassword, "longpw2");
    assert_eq!(
        form.confirm_password_errors.items(),
        vec![PASSWORDS_MISMATCH_MESSAGE]
    );

    type_into(&form, &mut session, FieldId::ConfirmPassword, "longpw1");
    assert!(form.confirm_password_errors.is_empty());
    assert!(!form.confirm_password.is_invalid());
}

#[test]
fn test_confirm_follows_password_changes() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Password, "longpw1");
    type_into(&form, &mut session, FieldId::ConfirmPassword, "longpw1");
    type_into(&form, &mut session, FieldId::Password, "longpw12");

    assert_eq!(
        form.confirm_password_errors.items(),
        vec![PASSWORDS_MISMATCH_MESSAGE]
    );
}

#[test]
fn test_password_is_truncated() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Password, &"x".repeat(25));

    assert_eq!(form.password.value().len(), 20);
    assert!(form.password_errors.is_empty());
}

#[test]
fn test_submit_reports_fields_in_form_order() {
    let (form, mut session) = mount();
    form.email.set_value("user@example.com");
    form.password.set_value("longpw1");

    let result = session.submit().unwrap();
    let fields: Vec<FieldId> = result.errors().iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            FieldId::Country,
            FieldId::PostalCode,
            FieldId::ConfirmPassword
        ]
    );
    assert_eq!(
        result.error_for(FieldId::Country).and_then(|e| e.message()),
        Some(REQUIRED_MESSAGE)
    );
    assert_eq!(result.first_invalid_field(), Some(FieldId::Country));
}

#[test]
fn test_submit_complete_form() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Email, "user@example.com");
    choose_country(&form, &mut session, "United States");
    type_into(&form, &mut session, FieldId::PostalCode, "90210");
    type_into(&form, &mut session, FieldId::Password, "longpw1");
    type_into(&form, &mut session, FieldId::ConfirmPassword, "longpw1");

    assert!(session.submit().unwrap().is_valid());
}

#[test]
fn test_teardown_clears_and_rejects_events() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Email, "bad@");
    assert!(form.email.is_invalid());

    session.teardown();
    assert!(!session.is_mounted());
    assert!(!form.email.is_invalid());
    assert!(form.email_errors.is_empty());
    assert!(matches!(
        session.dispatch(FormEvent::Input(FieldId::Email)),
        Err(FormError::TornDown)
    ));
}

#[test]
fn test_mount_rejects_bad_config() {
    let form = MemoryForm::new();
    let config = FormConfig {
        suggestion_limit: 0,
        ..FormConfig::default()
    };
    let result = FormSession::mount(form.surface(), Services::bundled().unwrap(), &config);
    assert!(matches!(result, Err(FormError::InvalidConfig(_))));
}

#[test]
fn test_cleared_confirm_stays_invalid() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::Password, "longpw1");
    type_into(&form, &mut session, FieldId::ConfirmPassword, "longpw2");
    type_into(&form, &mut session, FieldId::ConfirmPassword, "");

    assert!(form.confirm_password.is_invalid());
    assert_eq!(
        form.confirm_password_errors.items(),
        vec![PASSWORDS_MISMATCH_MESSAGE]
    );
    assert_eq!(
        form.confirm_password.validation_message().as_deref(),
        Some(PASSWORDS_MISMATCH_MESSAGE)
    );
}

#[test]
fn test_cleared_postal_code_without_country() {
    let (form, mut session) = mount();
    type_into(&form, &mut session, FieldId::PostalCode, "1");
    form.postal_code.pop_char();
    session
        .dispatch(FormEvent::Input(FieldId::PostalCode))
        .unwrap();

    assert_eq!(form.postal_code.value(), "");
    assert_eq!(
        form.postal_code_errors.items(),
        vec![SELECT_COUNTRY_FIRST_MESSAGE]
    );
}

#[test]
fn test_keystrokes_refine_suggestions() {
    let (form, mut session) = mount();
    for c in "swe".chars() {
        form.country.push_char(c);
        session
            .dispatch(FormEvent::Input(FieldId::Country))
            .unwrap();
    }
    assert!(form.country_suggestions.items().contains(&"Sweden".to_string()));

    form.country.pop_char();
    session
        .dispatch(FormEvent::Input(FieldId::Country))
        .unwrap();
    assert_eq!(form.country.value(), "sw");
    assert!(session.autocomplete().is_open());
}

#[test]
fn test_closing_empty_country_is_rejected() {
    let (form, mut session) = mount();
    session
        .dispatch(FormEvent::Focus(FieldId::Country))
        .unwrap();
    session.dispatch(FormEvent::ClickOutside).unwrap();

    assert_eq!(form.country_errors.items(), vec![SELECT_FROM_LIST_MESSAGE]);
    assert!(!session.autocomplete().is_option(""));
}
