//! Validation tests: schema evaluation and the live password checklist.
//!
//! Covers:
//! - Valid records for both forms
//! - One violating field yields exactly that field's message
//! - First error per field, every field checked
//! - Cross-field password confirmation
//! - Live feedback agrees with the validator on password rules

mod common;

use startupit::forms::password::{self, PASSWORD_REQUIREMENTS};
use startupit::forms::{CONTACT_SCHEMA, SIGNUP_SCHEMA, ValidationResult, validate};
use common::*;

fn contact_errors(record: startupit::forms::ContactRecord) -> Vec<(&'static str, &'static str)> {
    match validate(record, &CONTACT_SCHEMA) {
        ValidationResult::Valid(_) => Vec::new(),
        ValidationResult::Invalid(errors) => errors
            .fields()
            .filter_map(|f| errors.get(f).map(|m| (f, m)))
            .collect(),
    }
}

fn signup_errors(record: startupit::forms::SignupRecord) -> Vec<(&'static str, &'static str)> {
    match validate(record, &SIGNUP_SCHEMA) {
        ValidationResult::Valid(_) => Vec::new(),
        ValidationResult::Invalid(errors) => errors
            .fields()
            .filter_map(|f| errors.get(f).map(|m| (f, m)))
            .collect(),
    }
}

// ============================================================================
// VALID RECORDS
// ============================================================================

#[test]
fn test_valid_contact_record_passes() {
    let record = valid_contact();
    match validate(record.clone(), &CONTACT_SCHEMA) {
        ValidationResult::Valid(accepted) => assert_eq!(accepted, record),
        ValidationResult::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
    }
}

#[test]
fn test_valid_signup_record_passes() {
    assert!(validate(valid_signup(), &SIGNUP_SCHEMA).is_valid());
}

#[test]
fn test_boundary_lengths_pass() {
    let mut record = valid_contact();
    record.firstname = "Jo".into();
    record.lastname = "x".repeat(50);
    record.subject = "Hello".into();
    record.message = "m".repeat(1000);
    assert!(contact_errors(record).is_empty());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let mut record = valid_contact();
    // 50 two-byte characters
    record.firstname = "é".repeat(50);
    assert!(contact_errors(record).is_empty());
}

// ============================================================================
// SINGLE-FIELD VIOLATIONS
// ============================================================================

#[test]
fn test_single_contact_violation_reports_only_that_field() {
    let long_first = "J".repeat(51);
    let long_subject = "s".repeat(101);
    let long_message = "m".repeat(1001);
    let cases = [
        ("firstname", "J", "Le prénom doit contenir au moins 2 caractères"),
        ("firstname", long_first.as_str(), "Le prénom ne peut pas dépasser 50 caractères"),
        ("lastname", "D", "Le nom doit contenir au moins 2 caractères"),
        ("email", "john.example.com", "Format d'email invalide"),
        ("subject", "Hey", "Le sujet doit contenir au moins 5 caractères"),
        ("subject", long_subject.as_str(), "Le sujet ne peut pas dépasser 100 caractères"),
        ("message", "Trop court", "Le message doit contenir au moins 20 caractères"),
        ("message", long_message.as_str(), "Le message ne peut pas dépasser 1000 caractères"),
    ];

    for (field, value, expected) in cases {
        let mut record = valid_contact();
        match field {
            "firstname" => record.firstname = value.into(),
            "lastname" => record.lastname = value.into(),
            "email" => record.email = value.into(),
            "subject" => record.subject = value.into(),
            _ => record.message = value.into(),
        }
        assert_eq!(contact_errors(record), vec![(field, expected)], "case for {field}");
    }
}

#[test]
fn test_single_signup_violation_reports_only_that_field() {
    let long_email = format!("{}@example.com", "a".repeat(100));
    let cases = [
        ("name", "J", "Le nom doit contenir au moins 2 caractères"),
        ("email", "john@localhost", "Format d'email invalide"),
        ("email", long_email.as_str(), "L'email ne peut pas dépasser 100 caractères"),
    ];

    for (field, value, expected) in cases {
        let mut record = valid_signup();
        match field {
            "name" => record.name = value.into(),
            _ => record.email = value.into(),
        }
        assert_eq!(signup_errors(record), vec![(field, expected)], "case for {field}");
    }
}

// ============================================================================
// FIRST ERROR PER FIELD
// ============================================================================

#[test]
fn test_short_password_reports_only_first_failure() {
    let mut record = valid_signup();
    record.password = "abc".into();
    record.confirm_password = "abc".into();

    assert_eq!(
        signup_errors(record),
        vec![("password", "Le mot de passe doit contenir au moins 8 caractères")]
    );
}

#[test]
fn test_password_rules_checked_in_declared_order() {
    let cases = [
        ("abcdefgh", "Le mot de passe doit contenir au moins une majuscule"),
        ("ABCDEFGH", "Le mot de passe doit contenir au moins une minuscule"),
        ("Abcdefgh", "Le mot de passe doit contenir au moins un chiffre"),
        ("Abcdefg1", "Le mot de passe doit contenir au moins un caractère spécial"),
    ];
    for (pwd, expected) in cases {
        let mut record = valid_signup();
        record.password = pwd.into();
        record.confirm_password = pwd.into();
        assert_eq!(signup_errors(record), vec![("password", expected)], "password {pwd}");
    }
}

#[test]
fn test_every_invalid_field_gets_its_own_message() {
    let record = startupit::forms::ContactRecord::default();
    let errors = contact_errors(record);

    assert_eq!(errors.len(), 5);
    assert_eq!(errors[0], ("firstname", "Le prénom doit contenir au moins 2 caractères"));
    assert_eq!(errors[2], ("email", "Format d'email invalide"));
    assert_eq!(errors[4], ("message", "Le message doit contenir au moins 20 caractères"));
}

// ============================================================================
// CROSS-FIELD
// ============================================================================

#[test]
fn test_password_mismatch_reported_on_confirmation_only() {
    let mut record = valid_signup();
    record.password = "Abcd123!".into();
    record.confirm_password = "Abcd123?".into();

    assert_eq!(
        signup_errors(record),
        vec![("confirmPassword", "Les mots de passe ne correspondent pas")]
    );
}

#[test]
fn test_mismatch_not_checked_while_fields_fail() {
    let mut record = valid_signup();
    record.name = "J".into();
    record.confirm_password = "different".into();

    let errors = signup_errors(record);
    assert_eq!(errors, vec![("name", "Le nom doit contenir au moins 2 caractères")]);
}

// ============================================================================
// LIVE FEEDBACK EQUIVALENCE
// ============================================================================

#[test]
fn test_valid_password_satisfies_every_requirement() {
    let statuses = password::evaluate(VALID_PASSWORD);
    assert_eq!(statuses.len(), PASSWORD_REQUIREMENTS.len());
    assert!(statuses.iter().all(|s| s.satisfied));

    let mut record = valid_signup();
    record.password = VALID_PASSWORD.into();
    record.confirm_password = VALID_PASSWORD.into();
    assert!(validate(record, &SIGNUP_SCHEMA).is_valid());
}

#[test]
fn test_live_feedback_agrees_with_validator() {
    let samples = [
        "", "abc", "Abcd123!", "Abcd123?", "abcdefgh", "ABCDEFGH", "Abcdefgh", "Abcdefg1",
        "Abc 1234", "Passw0rd#", "ÉTÉété12!", "12345678", "!!!!!!!!", "aB3$", "Très1Long€",
        "Abcdefg1_",
    ];

    for pwd in samples {
        let mut record = valid_signup();
        record.password = pwd.to_string();
        record.confirm_password = pwd.to_string();
        let accepted = validate(record, &SIGNUP_SCHEMA).is_valid();
        assert_eq!(password::all_met(pwd), accepted, "password {pwd:?}");
    }
}

#[test]
fn test_live_feedback_is_idempotent() {
    assert_eq!(password::evaluate("Abc1"), password::evaluate("Abc1"));
}

#[test]
fn test_partial_password_reports_each_requirement() {
    let statuses = password::evaluate("abc");
    let satisfied: Vec<_> = statuses.iter().filter(|s| s.satisfied).map(|s| s.id).collect();
    assert_eq!(satisfied, vec!["lowercase"]);
}

// ============================================================================
// TRIMMING AT CAPTURE
// ============================================================================

#[test]
fn test_padded_password_is_measured_after_trim() {
    let form = startupit::forms::SignupForm {
        name: TEST_NAME.into(),
        email: TEST_EMAIL.into(),
        password: "Ab1!    ".into(),
        confirm_password: "Ab1!    ".into(),
        csrf_token: String::new(),
    };
    let record = startupit::forms::SignupRecord::from(form);

    assert_eq!(
        signup_errors(record),
        vec![("password", "Le mot de passe doit contenir au moins 8 caractères")]
    );
}

#[test]
fn test_padded_valid_password_is_accepted_after_trim() {
    let form = startupit::forms::SignupForm {
        name: format!("  {TEST_NAME} "),
        email: TEST_EMAIL.into(),
        password: format!(" {VALID_PASSWORD} "),
        confirm_password: format!("{VALID_PASSWORD}  "),
        csrf_token: String::new(),
    };
    let record = startupit::forms::SignupRecord::from(form);
    assert!(validate(record, &SIGNUP_SCHEMA).is_valid());
}
