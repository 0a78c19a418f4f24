use serde::{Deserialize, Serialize};

use super::submission::FormKind;

/// Field values captured from one form at submit time.
///
/// `FIELDS` lists the record's keys in display order; the form's schema must
/// declare exactly these names.
pub trait FormRecord: Clone + Default + Send + Sync {
    const KIND: FormKind;
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;

    /// Field/value pairs handed to the submission effect.
    fn payload(&self) -> Vec<(&'static str, String)> {
        Self::FIELDS
            .iter()
            .map(|name| (*name, self.field(name).unwrap_or_default().to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormRecord for ContactRecord {
    const KIND: FormKind = FormKind::Contact;
    const FIELDS: &'static [&'static str] = &["firstname", "lastname", "email", "subject", "message"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "firstname" => Some(&self.firstname),
            "lastname" => Some(&self.lastname),
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormRecord for SignupRecord {
    const KIND: FormKind = FormKind::Signup;
    const FIELDS: &'static [&'static str] = &["name", "email", "password", "confirmPassword"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "confirmPassword" => Some(&self.confirm_password),
            _ => None,
        }
    }
}

/// Contact form body as posted by the browser.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl From<ContactForm> for ContactRecord {
    fn from(form: ContactForm) -> Self {
        Self {
            firstname: form.firstname.trim().to_string(),
            lastname: form.lastname.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message.trim().to_string(),
        }
    }
}

/// Signup form body as posted by the browser.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default, rename = "csrf_token")]
    pub csrf_token: String,
}

impl From<SignupForm> for SignupRecord {
    fn from(form: SignupForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.trim().to_string(),
            confirm_password: form.confirm_password.trim().to_string(),
        }
    }
}
