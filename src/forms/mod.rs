//! Contact and signup form pipeline.
//!
//! A [`schema::FormSchema`] declares per-field constraints, the
//! [`validator`] applies it to a captured record, [`submission::FormState`]
//! drives a valid record through a [`submission::SubmissionEffect`], and
//! [`password`] evaluates the live password checklist.

pub mod in_flight;
pub mod notification;
pub mod password;
pub mod record;
pub mod schema;
pub mod submission;
pub mod validator;

pub use in_flight::InFlightRegistry;
pub use notification::{Notification, NotificationVariant};
pub use record::{ContactForm, ContactRecord, FormRecord, SignupForm, SignupRecord};
pub use schema::{CONTACT_SCHEMA, FormSchema, SIGNUP_SCHEMA};
pub use submission::{FormKind, FormState, SimulatedEffect, SubmissionEffect, SubmissionError, SubmitStatus};
pub use validator::{FieldErrors, ValidationResult, validate};
