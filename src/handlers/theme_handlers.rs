use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::theme::Theme;
use crate::session::{self, csrf};

#[derive(Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    pub csrf_token: String,
    #[serde(default)]
    pub redirect_to: String,
}

pub async fn set(
    session: Session,
    form: web::Form<ThemeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let Some(theme) = Theme::parse(&form.theme) else {
        return Ok(HttpResponse::BadRequest().body("Unknown theme"));
    };
    session::set_theme(&session, theme)?;

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", safe_redirect(&form.redirect_to)))
        .finish())
}

/// Only same-site absolute paths are followed; anything else goes home.
fn safe_redirect(target: &str) -> &str {
    if target.starts_with('/') && !target.starts_with("//") && !target.contains('\\') {
        target
    } else {
        "/"
    }
}
