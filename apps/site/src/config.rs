use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::layout::PageSize;

/// Which export backend the "Download" control uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Html,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "html" => Ok(ExportFormat::Html),
            other => Err(anyhow!("unknown export format '{other}' (expected pdf or html)")),
        }
    }
}

/// Site owner details shown in the navigation bar and footer.
#[derive(Debug, Clone, Serialize)]
pub struct SiteOwner {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Image shown beside the name on the About page.
    pub avatar: Option<String>,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub owner: SiteOwner,
    pub export_format: ExportFormat,
    pub page_size: PageSize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            owner: SiteOwner {
                name: "Your Name".to_string(),
                email: "you@example.com".to_string(),
                linkedin: "https://www.linkedin.com/in/your-profile".to_string(),
                github: "https://github.com/your-handle".to_string(),
                avatar: None,
            },
            export_format: ExportFormat::Pdf,
            page_size: PageSize::Letter,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing keys take the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let text = |key: &str, default: String| lookup(key).unwrap_or(default);

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: text("RUST_LOG", defaults.rust_log),
            owner: SiteOwner {
                name: text("SITE_OWNER", defaults.owner.name),
                email: text("SITE_EMAIL", defaults.owner.email),
                linkedin: text("SITE_LINKEDIN", defaults.owner.linkedin),
                github: text("SITE_GITHUB", defaults.owner.github),
                avatar: lookup("SITE_AVATAR").filter(|url| !url.trim().is_empty()),
            },
            export_format: match lookup("EXPORT_FORMAT") {
                Some(v) => v
                    .parse::<ExportFormat>()
                    .context("EXPORT_FORMAT is invalid")?,
                None => defaults.export_format,
            },
            page_size: match lookup("PAGE_SIZE") {
                Some(v) => v
                    .parse::<PageSize>()
                    .map_err(|e: String| anyhow!(e))
                    .context("PAGE_SIZE is invalid")?,
                None => defaults.page_size,
            },
        })
    }
}
