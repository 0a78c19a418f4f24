use chrono::{Datelike, NaiveDate};

const FRENCH_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub image: &'static str,
    pub role: &'static str,
}

/// A blog article. `content` is trusted HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub featured: bool,
    pub author: Author,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Publication date in French long form, e.g. "4 avril 2024".
    pub fn date_label(&self) -> String {
        match self.published_on() {
            Some(d) => format!("{} {} {}", d.day(), FRENCH_MONTHS[d.month0() as usize], d.year()),
            None => self.date.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    pub fn shares_topic_with(&self, other: &BlogPost) -> bool {
        self.category == other.category || self.tags.iter().any(|t| other.has_tag(t))
    }
}
