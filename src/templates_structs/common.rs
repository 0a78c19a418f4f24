use crate::errors::AppError;
use crate::models::blog::BlogPost;

/// OpenGraph / Twitter card metadata for an article page.
pub struct ArticleMeta {
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_time: String,
    pub author: String,
    pub image_url: String,
    pub image_alt: String,
}

impl ArticleMeta {
    pub const IMAGE_WIDTH: u32 = 1200;
    pub const IMAGE_HEIGHT: u32 = 630;

    /// The preview image points at `/api/og` on `site_url`.
    pub fn for_post(post: &BlogPost, site_url: &str) -> Result<Self, AppError> {
        let query = serde_urlencoded::to_string([
            ("title", post.title),
            ("category", post.category),
            ("author", post.author.name),
        ])?;
        Ok(Self {
            title: post.title.to_string(),
            description: post.description.to_string(),
            url: format!("{site_url}{}", post.url()),
            published_time: post.date.to_string(),
            author: post.author.name.to_string(),
            image_url: format!("{site_url}/api/og?{query}"),
            image_alt: post.title.to_string(),
        })
    }

    pub fn image_width(&self) -> u32 {
        Self::IMAGE_WIDTH
    }

    pub fn image_height(&self) -> u32 {
        Self::IMAGE_HEIGHT
    }
}
