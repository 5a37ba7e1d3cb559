//! Server-rendered pages.
//!
//! Page bodies are rendered first and then wrapped in the site shell
//! (`layout.hbs`). The print view is a standalone document with the
//! stylesheet inlined so it also works when saved to disk.

pub mod editor;
pub mod handlers;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use handlebars::Handlebars;
use serde::Serialize;

use crate::config::SiteOwner;
use crate::errors::AppError;
use crate::layout::PageSize;
use crate::models::project::{CardLink, Project};
use crate::models::resume::ResumeDocument;
use crate::resume::preview::ResumePreview;
use editor::EditorContext;

pub const STYLESHEET: &str = include_str!("../../assets/site.css");

const TEMPLATES: &[(&str, &str)] = &[
    ("layout", include_str!("../../templates/layout.hbs")),
    ("home", include_str!("../../templates/home.hbs")),
    ("projects", include_str!("../../templates/projects.hbs")),
    ("resume", include_str!("../../templates/resume.hbs")),
    ("print", include_str!("../../templates/print.hbs")),
];

const PARTIALS: &[(&str, &str)] = &[
    ("project_card", include_str!("../../templates/partials/project_card.hbs")),
    ("preview", include_str!("../../templates/partials/preview.hbs")),
    ("editor_header", include_str!("../../templates/partials/editor_header.hbs")),
    ("editor_summary", include_str!("../../templates/partials/editor_summary.hbs")),
    ("editor_strengths", include_str!("../../templates/partials/editor_strengths.hbs")),
    ("editor_experience", include_str!("../../templates/partials/editor_experience.hbs")),
    ("editor_education", include_str!("../../templates/partials/editor_education.hbs")),
    ("editor_skills", include_str!("../../templates/partials/editor_skills.hbs")),
];

/// Which navigation link is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Home,
    Projects,
    Resume,
}

#[derive(Serialize)]
struct Shell<'a> {
    title: &'a str,
    owner: &'a SiteOwner,
    year: i32,
    home_active: bool,
    projects_active: bool,
    resume_active: bool,
    body: String,
}

#[derive(Serialize)]
struct HomeContext<'a> {
    owner: &'a SiteOwner,
}

/// A project card with its link already resolved.
#[derive(Debug, Serialize)]
pub struct ProjectCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub tech: &'a [String],
    pub href: Option<String>,
    pub internal: bool,
    pub external: bool,
    pub clickable: bool,
}

impl<'a> ProjectCard<'a> {
    pub fn new(project: &'a Project) -> Self {
        let link = project.link();
        let (href, internal, external) = match &link {
            CardLink::Internal(to) => (Some(to.clone()), true, false),
            CardLink::External(url) => (Some(url.clone()), false, true),
            CardLink::None => (None, false, false),
        };
        ProjectCard {
            title: &project.title,
            description: &project.description,
            tech: &project.tech,
            href,
            internal,
            external,
            clickable: link.is_clickable(),
        }
    }
}

#[derive(Serialize)]
struct ProjectsContext<'a> {
    projects: Vec<ProjectCard<'a>>,
}

#[derive(Serialize)]
struct PrintContext<'a> {
    title: &'a str,
    stylesheet: &'static str,
    page_size: &'static str,
    preview: &'a ResumePreview,
}

/// The compiled template registry.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry
                .register_partial(name, *source)
                .with_context(|| format!("Failed to register partial '{name}'"))?;
        }
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, *source)
                .with_context(|| format!("Failed to compile template '{name}'"))?;
        }
        Ok(Self { registry })
    }

    fn page<T: Serialize>(
        &self,
        template: &str,
        title: &str,
        owner: &SiteOwner,
        active: NavLink,
        data: &T,
    ) -> Result<String, AppError> {
        let body = self.registry.render(template, data)?;
        let shell = Shell {
            title,
            owner,
            year: Utc::now().year(),
            home_active: active == NavLink::Home,
            projects_active: active == NavLink::Projects,
            resume_active: active == NavLink::Resume,
            body,
        };
        Ok(self.registry.render("layout", &shell)?)
    }

    pub fn home(&self, owner: &SiteOwner) -> Result<String, AppError> {
        self.page("home", &owner.name, owner, NavLink::Home, &HomeContext { owner })
    }

    pub fn projects(&self, owner: &SiteOwner, projects: &[Project]) -> Result<String, AppError> {
        let ctx = ProjectsContext {
            projects: projects.iter().map(ProjectCard::new).collect(),
        };
        self.page("projects", "Projects", owner, NavLink::Projects, &ctx)
    }

    /// The builder: editor forms next to the live preview.
    pub fn resume(
        &self,
        owner: &SiteOwner,
        doc: &ResumeDocument,
        export_label: &str,
    ) -> Result<String, AppError> {
        let ctx = EditorContext::build(doc, export_label);
        self.page("resume", "Resume Builder", owner, NavLink::Resume, &ctx)
    }

    /// Standalone print-ready page for the preview.
    pub fn print(&self, preview: &ResumePreview, page_size: PageSize) -> Result<String, AppError> {
        let title = preview.title();
        let ctx = PrintContext {
            title: &title,
            stylesheet: STYLESHEET,
            page_size: page_size.css_name(),
            preview,
        };
        Ok(self.registry.render("print", &ctx)?)
    }
}
