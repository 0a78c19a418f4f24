// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::errors::AppError;
use crate::forms::Notification;
use crate::models::nav_item::{self, NavLink};
use crate::models::theme::Theme;
use crate::session::{self, csrf};

mod blog;
mod common;
mod forms;
mod landing;

pub use self::blog::{BlogListTemplate, BlogPostTemplate, OgImageTemplate, wrap_title};
pub use self::common::ArticleMeta;
pub use self::forms::{ContactTemplate, SignupTemplate};
pub use self::landing::HomeTemplate;

pub const SITE_NAME: &str = "StartupIT";
pub const DEFAULT_TITLE: &str = "StartupIT - Solutions Innovantes";
pub const DEFAULT_DESCRIPTION: &str = "Découvrez nos solutions innovantes pour votre entreprise.";

/// Common context shared by all pages.
/// Templates access these as `ctx.title`, `ctx.nav`, etc.
pub struct PageContext {
    pub site_name: &'static str,
    pub title: String,
    pub description: String,
    pub current_path: String,
    pub nav: Vec<NavLink>,
    pub theme: Theme,
    pub themes: [Theme; 3],
    pub csrf_token: String,
    pub notification: Option<Notification>,
    pub article: Option<ArticleMeta>,
}

impl PageContext {
    /// Also consumes any notification queued in the session.
    pub fn build(session: &Session, current_path: &str) -> Result<Self, AppError> {
        let csrf_token = csrf::get_or_create_token(session)?;
        Ok(Self {
            site_name: SITE_NAME,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            current_path: current_path.to_string(),
            nav: nav_item::find_navigation(current_path),
            theme: session::get_theme(session),
            themes: Theme::ALL,
            csrf_token,
            notification: session::take_notification(session),
            article: None,
        })
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_article(mut self, article: ArticleMeta) -> Self {
        self.article = Some(article);
        self
    }

    /// A notification produced by this request takes precedence over a queued one.
    pub fn with_notification(mut self, notification: Option<Notification>) -> Self {
        if notification.is_some() {
            self.notification = notification;
        }
        self
    }
}
