use serde::{Deserialize, Serialize};

/// A card on the projects page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    /// Route inside the site, e.g. `/resume`.
    pub to: Option<String>,
    /// External URL, opened in a new tab.
    pub href: Option<String>,
}

/// Where clicking a project card leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum CardLink {
    Internal(String),
    External(String),
    None,
}

impl Project {
    /// Resolves the card target. The internal route wins when both are set.
    pub fn link(&self) -> CardLink {
        match (&self.to, &self.href) {
            (Some(to), _) if !to.is_empty() => CardLink::Internal(to.clone()),
            (_, Some(href)) if !href.is_empty() => CardLink::External(href.clone()),
            _ => CardLink::None,
        }
    }
}

impl CardLink {
    pub fn is_clickable(&self) -> bool {
        !matches!(self, CardLink::None)
    }
}

/// The static project list shown on `/projects`.
pub fn projects() -> Vec<Project> {
    vec![Project {
        title: "Real-time Resume Builder".to_string(),
        description: "Single-template builder with live preview and PDF export.".to_string(),
        tech: vec![
            "Rust".to_string(),
            "axum".to_string(),
            "handlebars".to_string(),
            "lopdf".to_string(),
        ],
        to: Some("/resume".to_string()),
        href: None,
    }]
}
