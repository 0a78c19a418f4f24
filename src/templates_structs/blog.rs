use askama::Template;

use crate::models::blog::BlogPost;
use super::PageContext;

const OG_LINE_WIDTH: usize = 28;
const OG_MAX_LINES: usize = 3;

#[derive(Template)]
#[template(path = "blog/list.html")]
pub struct BlogListTemplate {
    pub ctx: PageContext,
    pub featured: Vec<&'static BlogPost>,
    pub recent: Vec<&'static BlogPost>,
}

#[derive(Template)]
#[template(path = "blog/post.html")]
pub struct BlogPostTemplate {
    pub ctx: PageContext,
    pub post: &'static BlogPost,
    pub related: Vec<&'static BlogPost>,
}

/// 1200x630 social preview card.
#[derive(Template)]
#[template(path = "og.svg", escape = "html")]
pub struct OgImageTemplate {
    pub site_name: &'static str,
    pub lines: Vec<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl OgImageTemplate {
    pub fn new(title: &str, category: Option<String>, author: Option<String>) -> Self {
        Self {
            site_name: super::SITE_NAME,
            lines: wrap_title(title, OG_LINE_WIDTH, OG_MAX_LINES),
            category: category.filter(|c| !c.trim().is_empty()),
            author: author.filter(|a| !a.trim().is_empty()),
        }
    }

    /// Baseline of the n-th title line (0-based), in SVG user units.
    pub fn line_y(&self, index: usize) -> usize {
        300 + index * 72
    }
}

/// Greedy word wrap on character counts. Text beyond `max_lines` is cut and
/// the last kept line ends with an ellipsis.
pub fn wrap_title(title: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in title.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_title_stays_on_one_line() {
        assert_eq!(wrap_title("Sécurité IT", 28, 3), vec!["Sécurité IT"]);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_title("Comment optimiser votre workflow IT en 2024", 28, 3);
        assert_eq!(lines, vec!["Comment optimiser votre", "workflow IT en 2024"]);
    }

    #[test]
    fn overflow_is_truncated_with_ellipsis() {
        let lines = wrap_title("one two three four five", 3, 2);
        assert_eq!(lines, vec!["one", "two…"]);
    }

    #[test]
    fn blank_title_has_no_lines() {
        assert!(wrap_title("   ", 28, 3).is_empty());
    }

    #[test]
    fn blank_category_is_dropped() {
        let card = OgImageTemplate::new("Titre", Some(" ".into()), Some("Marie".into()));
        assert!(card.category.is_none());
        assert_eq!(card.author.as_deref(), Some("Marie"));
    }
}
