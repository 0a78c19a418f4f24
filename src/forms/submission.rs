use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::notification::{CONTACT_SENT, Notification, NotificationCopy, SIGNUP_CREATED};
use super::record::FormRecord;
use super::schema::{CONTACT_SCHEMA, FormSchema, SIGNUP_SCHEMA};
use super::validator::{FieldErrors, ValidationResult, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Signup,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Signup => "signup",
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        match self {
            FormKind::Contact => &*CONTACT_SCHEMA,
            FormKind::Signup => &*SIGNUP_SCHEMA,
        }
    }

    pub fn success_copy(&self) -> &'static NotificationCopy {
        match self {
            FormKind::Contact => &CONTACT_SENT,
            FormKind::Signup => &SIGNUP_CREATED,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque rejection from a submission effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError(pub String);

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Submission rejected: {}", self.0)
    }
}

impl std::error::Error for SubmissionError {}

/// Side effect run for a validated record: `Ok(())` on acknowledgement.
///
/// Callers only pass records that already passed validation.
#[async_trait]
pub trait SubmissionEffect: Send + Sync {
    async fn deliver(
        &self,
        kind: FormKind,
        payload: &[(&'static str, String)],
    ) -> Result<(), SubmissionError>;
}

/// Stand-in backend: waits a fixed delay, then acknowledges (or rejects when
/// built with [`SimulatedEffect::rejecting`]).
#[derive(Debug, Clone)]
pub struct SimulatedEffect {
    delay: Duration,
    reject: bool,
}

impl SimulatedEffect {
    pub fn new(delay: Duration) -> Self {
        Self { delay, reject: false }
    }

    pub fn rejecting(delay: Duration) -> Self {
        Self { delay, reject: true }
    }
}

#[async_trait]
impl SubmissionEffect for SimulatedEffect {
    async fn deliver(
        &self,
        kind: FormKind,
        payload: &[(&'static str, String)],
    ) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        if self.reject {
            return Err(SubmissionError(format!("simulated rejection of {kind} form")));
        }
        log::debug!("Simulated delivery of {kind} form ({} fields)", payload.len());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Effect acknowledged; form reset.
    Accepted,
    /// Validation failed; field errors set.
    Invalid,
    /// Effect rejected; values kept.
    Failed,
    /// A submission of this instance is still pending.
    Busy,
}

/// State owned by one form instance.
///
/// Values, errors, the submitting flag and the pending notification change
/// only through the transition methods below.
#[derive(Debug, Clone, Default)]
pub struct FormState<R> {
    values: R,
    errors: FieldErrors,
    submitting: bool,
    notification: Option<Notification>,
}

impl<R: FormRecord> FormState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: R) -> Self {
        Self { values, ..Self::default() }
    }

    pub fn values(&self) -> &R {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Replaces the values; ignored while a submission is pending.
    pub fn edit(&mut self, values: R) -> bool {
        if self.submitting {
            return false;
        }
        self.values = values;
        true
    }

    /// Validates the current values and, when they pass, marks the instance
    /// as submitting and hands back the record to deliver.
    pub fn begin_submit(&mut self) -> Result<R, SubmitStatus> {
        if self.submitting {
            return Err(SubmitStatus::Busy);
        }
        match validate(self.values.clone(), R::KIND.schema()) {
            ValidationResult::Valid(record) => {
                self.errors.clear();
                self.submitting = true;
                Ok(record)
            }
            ValidationResult::Invalid(errors) => {
                log::debug!("{} form rejected with {} field error(s)", R::KIND, errors.len());
                self.errors = errors;
                Err(SubmitStatus::Invalid)
            }
        }
    }

    /// Applies the effect's terminal outcome and re-enables submission.
    pub fn finish(&mut self, outcome: Result<(), SubmissionError>) -> SubmitStatus {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                log::info!("{} form submitted", R::KIND);
                self.values = R::default();
                self.errors.clear();
                self.notification = Some(Notification::success(R::KIND.success_copy()));
                SubmitStatus::Accepted
            }
            Err(e) => {
                log::warn!("{} form submission failed: {e}", R::KIND);
                self.notification = Some(Notification::failure());
                SubmitStatus::Failed
            }
        }
    }

    pub async fn submit(&mut self, effect: &dyn SubmissionEffect) -> SubmitStatus {
        let record = match self.begin_submit() {
            Ok(record) => record,
            Err(status) => return status,
        };
        let outcome = effect.deliver(R::KIND, &record.payload()).await;
        self.finish(outcome)
    }
}
