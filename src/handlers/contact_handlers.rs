use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::forms::{ContactForm, ContactRecord, FormKind, FormState, InFlightRegistry, SubmissionEffect, SubmitStatus};
use crate::session::{self, csrf};
use crate::templates_structs::{ContactTemplate, PageContext};

const PAGE_TITLE: &str = "Contact - StartupIT";

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/contact")?.titled(PAGE_TITLE);
    render(ContactTemplate::new(ctx, FormState::new()))
}

pub async fn submit(
    session: Session,
    form: web::Form<ContactForm>,
    effect: web::Data<dyn SubmissionEffect>,
    in_flight: web::Data<InFlightRegistry>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let _guard = in_flight
        .try_acquire(FormKind::Contact, &form.csrf_token)
        .ok_or(AppError::SubmissionInFlight)?;

    let mut state = FormState::with_values(ContactRecord::from(form.into_inner()));
    match state.submit(effect.get_ref()).await {
        SubmitStatus::Accepted => {
            if let Some(notification) = state.take_notification() {
                session::set_notification(&session, &notification)?;
            }
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/contact"))
                .finish())
        }
        _ => {
            let ctx = PageContext::build(&session, "/contact")?
                .titled(PAGE_TITLE)
                .with_notification(state.take_notification());
            render(ContactTemplate::new(ctx, state))
        }
    }
}
