use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::forms::password;
use crate::forms::{FormKind, FormState, InFlightRegistry, SignupForm, SignupRecord, SubmissionEffect, SubmitStatus};
use crate::session::{self, csrf};
use crate::templates_structs::{PageContext, SignupTemplate};

const PAGE_TITLE: &str = "Créer un compte - StartupIT";

#[derive(Deserialize)]
pub struct PasswordInput {
    #[serde(default)]
    pub password: String,
}

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/signup")?.titled(PAGE_TITLE);
    render(SignupTemplate::new(ctx, FormState::new()))
}

pub async fn submit(
    session: Session,
    form: web::Form<SignupForm>,
    effect: web::Data<dyn SubmissionEffect>,
    in_flight: web::Data<InFlightRegistry>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let _guard = in_flight
        .try_acquire(FormKind::Signup, &form.csrf_token)
        .ok_or(AppError::SubmissionInFlight)?;

    let mut state = FormState::with_values(SignupRecord::from(form.into_inner()));
    match state.submit(effect.get_ref()).await {
        SubmitStatus::Accepted => {
            if let Some(notification) = state.take_notification() {
                session::set_notification(&session, &notification)?;
            }
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/signup"))
                .finish())
        }
        _ => {
            let ctx = PageContext::build(&session, "/signup")?
                .titled(PAGE_TITLE)
                .with_notification(state.take_notification());
            render(SignupTemplate::new(ctx, state))
        }
    }
}

/// Live checklist for the password being typed. Read-only, so no CSRF check.
/// Trimmed like the submitted record.
pub async fn password_requirements(form: web::Form<PasswordInput>) -> HttpResponse {
    HttpResponse::Ok().json(password::evaluate(form.password.trim()))
}
