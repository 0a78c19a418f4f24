use std::time::Duration;

use actix_web::cookie::Key;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SITE_URL: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Absolute base URL used for OpenGraph links. No trailing slash.
    pub site_url: String,
    pub static_dir: String,
    pub session_key: Option<String>,
    pub submit_delay: Duration,
    pub simulate_failure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            session_key: None,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            simulate_failure: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values fall back
    /// to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let submit_delay = match lookup("SUBMIT_DELAY_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    log::warn!("Invalid SUBMIT_DELAY_MS '{raw}', using {DEFAULT_SUBMIT_DELAY_MS}");
                    defaults.submit_delay
                }
            },
            None => defaults.submit_delay,
        };

        let simulate_failure = match lookup("SUBMIT_SIMULATE_FAILURE") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    log::warn!("Invalid SUBMIT_SIMULATE_FAILURE '{raw}', using false");
                    false
                }
            },
            None => defaults.simulate_failure,
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            site_url: lookup("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_url),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            session_key: lookup("SESSION_KEY"),
            submit_delay,
            simulate_failure,
        }
    }

    /// Session encryption key. Generated at random (sessions lost on restart)
    /// when SESSION_KEY is missing or shorter than 64 bytes.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }

    /// Cookies are marked secure when the site is served over https.
    pub fn secure_cookies(&self) -> bool {
        self.site_url.starts_with("https://")
    }
}
