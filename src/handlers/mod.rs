pub mod blog_handlers;
pub mod contact_handlers;
pub mod landing_handlers;
pub mod og_handlers;
pub mod signup_handlers;
pub mod theme_handlers;

use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::forms::{SimulatedEffect, SubmissionEffect};

/// Page and form routes. Static files and the 404 fallback are attached by
/// the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(landing_handlers::index))
        // Blog
        .route("/blog", web::get().to(blog_handlers::list))
        .route("/blog/{slug}", web::get().to(blog_handlers::show))
        .route("/api/og", web::get().to(og_handlers::image))
        // Forms
        .route("/contact", web::get().to(contact_handlers::form))
        .route("/contact", web::post().to(contact_handlers::submit))
        .route("/signup", web::get().to(signup_handlers::form))
        .route("/signup", web::post().to(signup_handlers::submit))
        .route("/signup/password-requirements", web::post().to(signup_handlers::password_requirements))
        // Preferences
        .route("/theme", web::post().to(theme_handlers::set));
}

/// The submission backend selected by the configuration.
pub fn submission_effect(config: &AppConfig) -> web::Data<dyn SubmissionEffect> {
    let effect: Arc<dyn SubmissionEffect> = if config.simulate_failure {
        log::warn!("Form submissions will be rejected (SUBMIT_SIMULATE_FAILURE)");
        Arc::new(SimulatedEffect::rejecting(config.submit_delay))
    } else {
        Arc::new(SimulatedEffect::new(config.submit_delay))
    };
    web::Data::from(effect)
}
