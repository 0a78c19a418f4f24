use serde::{Deserialize, Serialize};

/// Colour scheme chosen by the visitor. `System` follows the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Clair",
            Theme::Dark => "Sombre",
            Theme::System => "Système",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_values_case_insensitively() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" Light "), Some(Theme::Light));
        assert_eq!(Theme::parse("SYSTEM"), Some(Theme::System));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn default_follows_system() {
        assert_eq!(Theme::default(), Theme::System);
        assert_eq!(Theme::default().as_str(), "system");
    }
}
