use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::blog;
use crate::templates_structs::{ArticleMeta, BlogListTemplate, BlogPostTemplate, PageContext};

pub async fn list(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/blog")?
        .titled("Blog & Actualités - StartupIT")
        .described("Découvrez nos derniers articles, guides et actualités sur l'IT et l'innovation.");
    let tmpl = BlogListTemplate {
        ctx,
        featured: blog::find_featured(),
        recent: blog::find_recent(),
    };
    render(tmpl)
}

pub async fn show(
    session: Session,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let post = blog::find_by_slug(&slug).ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&session, &post.url())?
        .titled(format!("{} - Blog StartupIT", post.title))
        .described(post.description)
        .with_article(ArticleMeta::for_post(post, &config.site_url)?);
    let tmpl = BlogPostTemplate {
        ctx,
        post,
        related: blog::find_related(post, blog::RELATED_LIMIT),
    };
    render(tmpl)
}
