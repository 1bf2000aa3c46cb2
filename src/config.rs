//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default sign-up endpoint
const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8787/newsletter";
const DEFAULT_SUBJECT: &str = "GossipYah Newsletter Sign-Up - Gurgaon";
const DEFAULT_CONTACT_EMAIL: &str = "contact@gossipyah.com";
const DEFAULT_FOLLOW_UP_DELAY_MS: u64 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Environment variable overriding the endpoint URL
pub const ENDPOINT_ENV: &str = "GOSSIPYAH_ENDPOINT_URL";
/// Environment variable overriding the content file
pub const CONTENT_ENV: &str = "GOSSIPYAH_CONTENT_PATH";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Where sign-ups are posted
    pub endpoint_url: Option<String>,
    /// Subject line attached to every sign-up
    pub subject: Option<String>,
    /// Address offered when a submission fails
    pub contact_email: Option<String>,
    /// Delay before the welcome message follows a successful sign-up
    pub follow_up_delay_ms: Option<u64>,
    /// Request timeout for the endpoint
    pub request_timeout_secs: Option<u64>,
    /// JSON file with blog posts and FAQ entries
    pub content_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "gossipyah", "gossipyah-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENDPOINT_ENV).filter(|v| !v.is_empty()) {
            self.endpoint_url = Some(url);
        }
        if let Some(path) = lookup(CONTENT_ENV).filter(|v| !v.is_empty()) {
            self.content_path = Some(PathBuf::from(path));
        }
        self
    }

    pub fn endpoint_url(&self) -> &str {
        self.endpoint_url.as_deref().unwrap_or(DEFAULT_ENDPOINT_URL)
    }

    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or(DEFAULT_SUBJECT)
    }

    pub fn contact_email(&self) -> &str {
        self.contact_email.as_deref().unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms.unwrap_or(DEFAULT_FOLLOW_UP_DELAY_MS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
