pub mod csrf;

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::errors::AppError;
use crate::forms::Notification;
use crate::models::theme::Theme;

const NOTIFICATION_KEY: &str = "notification";
const THEME_KEY: &str = "theme";

/// Cookie-backed session holding the CSRF token, the theme and one pending
/// notification.
pub fn middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(secure)
        .cookie_http_only(true)
        .build()
}

/// Queue a notification for the next rendered page.
pub fn set_notification(session: &Session, notification: &Notification) -> Result<(), AppError> {
    session.insert(NOTIFICATION_KEY, notification)?;
    Ok(())
}

/// Remove and return the pending notification, so it is shown only once.
pub fn take_notification(session: &Session) -> Option<Notification> {
    session.remove_as::<Notification>(NOTIFICATION_KEY).and_then(Result::ok)
}

pub fn get_theme(session: &Session) -> Theme {
    session.get::<Theme>(THEME_KEY).unwrap_or(None).unwrap_or_default()
}

pub fn set_theme(session: &Session, theme: Theme) -> Result<(), AppError> {
    session.insert(THEME_KEY, theme)?;
    Ok(())
}
