//! Lead schema tests

use lead_intake_api::core::validation::{
    EMAIL_MESSAGE, LeadSubmission, NAME_MESSAGE, STORE_NAME_MESSAGE, WHATSAPP_MESSAGE,
    is_valid_email, validate_lead,
};

fn submission(name: &str, whatsapp: &str, store_name: &str) -> LeadSubmission {
    LeadSubmission {
        name: Some(name.to_owned()),
        whatsapp: Some(whatsapp.to_owned()),
        store_name: Some(store_name.to_owned()),
        ..LeadSubmission::default()
    }
}

fn failing_fields(submission: &LeadSubmission) -> Vec<&'static str> {
    validate_lead(submission).unwrap_err().fields().collect()
}

#[test]
fn test_minimum_lengths_accepted() {
    let valid = validate_lead(&submission("Jo", "1199999999", "Lj")).unwrap();
    assert_eq!(valid.name, "Jo");
    assert_eq!(valid.whatsapp, "1199999999");
    assert_eq!(valid.store_name, "Lj");
    assert_eq!(valid.email, None);
    assert_eq!(valid.city, None);
    assert_eq!(valid.message, None);
}

#[test]
fn test_below_minimum_lengths_rejected() {
    assert_eq!(failing_fields(&submission("J", "11999999999", "Loja")), vec!["name"]);
    assert_eq!(failing_fields(&submission("Jo", "119999999", "Loja")), vec!["whatsapp"]);
    assert_eq!(failing_fields(&submission("Jo", "11999999999", "L")), vec!["storeName"]);
    assert_eq!(
        failing_fields(&submission("J", "1", "L")),
        vec!["name", "whatsapp", "storeName"]
    );
}

#[test]
fn test_missing_required_fields_use_form_messages() {
    let errors = validate_lead(&LeadSubmission::default()).unwrap_err();
    let messages: Vec<&str> = errors.errors().iter().map(|e| e.message.as_str()).collect();

    assert_eq!(
        messages,
        vec![NAME_MESSAGE, WHATSAPP_MESSAGE, STORE_NAME_MESSAGE]
    );
    assert_eq!(NAME_MESSAGE, "Nome é obrigatório");
    assert_eq!(WHATSAPP_MESSAGE, "WhatsApp inválido");
}

#[test]
fn test_short_values_use_form_messages() {
    let errors = validate_lead(&submission("J", "1", "L")).unwrap_err();
    let messages: Vec<&str> = errors.errors().iter().map(|e| e.message.as_str()).collect();

    assert_eq!(
        messages,
        vec!["Nome é obrigatório", "WhatsApp inválido", "Nome da loja é obrigatório"]
    );
}

#[test]
fn test_values_are_trimmed_before_length_checks() {
    assert_eq!(failing_fields(&submission(" J ", "11999999999", "Loja")), vec!["name"]);

    let valid = validate_lead(&submission("  Jo  ", "11999999999", " Loja ")).unwrap();
    assert_eq!(valid.name, "Jo");
    assert_eq!(valid.store_name, "Loja");
}

#[test]
fn test_lengths_count_characters_not_bytes() {
    // one character, two bytes
    assert_eq!(failing_fields(&submission("É", "11999999999", "Loja")), vec!["name"]);
    assert!(validate_lead(&submission("Zé", "11999999999", "Lá")).is_ok());
}

#[test]
fn test_blank_optionals_become_none() {
    let mut input = submission("Jo", "11999999999", "Lj");
    input.email = Some(String::new());
    input.city = Some("  ".to_owned());
    input.message = Some(" Olá ".to_owned());

    let valid = validate_lead(&input).unwrap();
    assert_eq!(valid.email, None);
    assert_eq!(valid.city, None);
    assert_eq!(valid.message.as_deref(), Some("Olá"));
}

#[test]
fn test_invalid_email_rejected() {
    let mut input = submission("Jo", "11999999999", "Lj");
    input.email = Some("not-an-email".to_owned());

    let errors = validate_lead(&input).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
    assert_eq!(errors.errors()[0].message, EMAIL_MESSAGE);
    assert_eq!(errors.to_string(), "email: Email inválido");
}

#[test]
fn test_email_shapes() {
    for good in ["a@b.co", "maria.souza@loja.com.br", "x+tag@sub.example.org"] {
        assert!(is_valid_email(good), "{good} should be accepted");
    }

    for bad in [
        "not-an-email",
        "@loja.com",
        "maria@",
        "maria@loja",
        "maria@@loja.com",
        "maria@loja..com",
        "maria@.loja.com",
        "maria souza@loja.com",
    ] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}
