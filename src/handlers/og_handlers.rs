use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::errors::AppError;
use crate::templates_structs::OgImageTemplate;

#[derive(Deserialize)]
pub struct OgQuery {
    pub title: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

/// SVG preview card for social shares.
pub async fn image(query: web::Query<OgQuery>) -> Result<HttpResponse, AppError> {
    let OgQuery { title, category, author } = query.into_inner();
    let Some(title) = title.filter(|t| !t.trim().is_empty()) else {
        return Ok(HttpResponse::BadRequest().body("Missing title parameter"));
    };

    let body = OgImageTemplate::new(&title, category, author).render()?;
    Ok(HttpResponse::Ok()
        .content_type("image/svg+xml")
        .insert_header(("Cache-Control", "public, max-age=86400"))
        .body(body))
}
