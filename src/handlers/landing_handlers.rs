use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, render, not_found_response};
use crate::templates_structs::{HomeTemplate, PageContext};

pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/")?;
    render(HomeTemplate::new(ctx))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    not_found_response()
}
