//! Shared test infrastructure for form and HTTP tests.
//!
//! # Helpers
//! - `valid_contact()` / `valid_signup()` - records that pass their schema
//! - `instant_effect()` / `failing_effect()` - submission backends without delay
//! - `test_app!` - the full route table behind a fresh session middleware
//! - `session_cookie()` / `extract_csrf()` - carry a session across requests
#![allow(dead_code, unused_macros, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use regex::Regex;

use startupit::forms::{ContactRecord, SignupRecord, SimulatedEffect, SubmissionEffect};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const VALID_PASSWORD: &str = "Abcd123!";
pub const TEST_EMAIL: &str = "john@example.com";
pub const TEST_NAME: &str = "John Doe";
pub const LONG_MESSAGE: &str = "Bonjour, je souhaite en savoir plus sur vos offres.";

// ============================================================================
// RECORDS
// ============================================================================

pub fn valid_contact() -> ContactRecord {
    ContactRecord {
        firstname: "John".into(),
        lastname: "Doe".into(),
        email: TEST_EMAIL.into(),
        subject: "Demande de devis".into(),
        message: LONG_MESSAGE.into(),
    }
}

pub fn valid_signup() -> SignupRecord {
    SignupRecord {
        name: TEST_NAME.into(),
        email: TEST_EMAIL.into(),
        password: VALID_PASSWORD.into(),
        confirm_password: VALID_PASSWORD.into(),
    }
}

/// The form body a browser would post for `valid_contact()`.
pub fn contact_params(csrf_token: &str) -> Vec<(&'static str, String)> {
    let record = valid_contact();
    vec![
        ("firstname", record.firstname),
        ("lastname", record.lastname),
        ("email", record.email),
        ("subject", record.subject),
        ("message", record.message),
        ("csrf_token", csrf_token.to_string()),
    ]
}

pub fn signup_params(csrf_token: &str) -> Vec<(&'static str, String)> {
    let record = valid_signup();
    vec![
        ("name", record.name),
        ("email", record.email),
        ("password", record.password),
        ("confirmPassword", record.confirm_password),
        ("csrf_token", csrf_token.to_string()),
    ]
}

/// Replace one field of a form body.
pub fn with_param(
    mut params: Vec<(&'static str, String)>,
    name: &str,
    value: &str,
) -> Vec<(&'static str, String)> {
    for (key, current) in params.iter_mut() {
        if *key == name {
            *current = value.to_string();
        }
    }
    params
}

// ============================================================================
// SUBMISSION BACKENDS
// ============================================================================

pub fn instant_effect() -> Arc<dyn SubmissionEffect> {
    Arc::new(SimulatedEffect::new(Duration::ZERO))
}

pub fn failing_effect() -> Arc<dyn SubmissionEffect> {
    Arc::new(SimulatedEffect::rejecting(Duration::ZERO))
}

// ============================================================================
// HTTP
// ============================================================================

/// Initialise the application with the given submission backend.
macro_rules! test_app {
    ($effect:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(startupit::session::middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(actix_web::web::Data::new(startupit::config::AppConfig::default()))
                .app_data(actix_web::web::Data::from($effect))
                .app_data(actix_web::web::Data::new(startupit::forms::InFlightRegistry::new()))
                .configure(startupit::handlers::configure)
                .default_service(actix_web::web::to(
                    startupit::handlers::landing_handlers::not_found,
                )),
        )
        .await
    };
}
pub(crate) use test_app;

/// The session cookie set by a response, if any.
pub fn session_cookie<B: MessageBody>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

/// First CSRF token rendered in a page.
pub fn extract_csrf(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should render a CSRF token")
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
