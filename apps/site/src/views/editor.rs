//! Form models for the builder page.
//!
//! Each list entry carries its own index so the templates can build form
//! actions without reaching into parent scopes.

use serde::Serialize;

use crate::models::resume::{Header, ResumeDocument, SkillCategory};
use crate::resume::preview::{render_preview, ResumePreview};

#[derive(Debug, Serialize)]
pub struct IndexedValue {
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct BulletField {
    pub role: usize,
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct RoleForm {
    pub index: usize,
    /// 1-based position shown as "Role #n".
    pub number: usize,
    pub company: String,
    pub location: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<BulletField>,
}

#[derive(Debug, Serialize)]
pub struct SchoolForm {
    pub index: usize,
    pub number: usize,
    pub school: String,
    pub degree: String,
    pub grad: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct SkillField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct EditorContext<'a> {
    pub header: &'a Header,
    pub summary: String,
    pub strengths: Vec<IndexedValue>,
    pub roles: Vec<RoleForm>,
    pub schools: Vec<SchoolForm>,
    pub skills: Vec<SkillField>,
    pub preview: ResumePreview,
    pub export_label: &'a str,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl<'a> EditorContext<'a> {
    pub fn build(doc: &'a ResumeDocument, export_label: &'a str) -> Self {
        EditorContext {
            header: &doc.header,
            summary: text(&doc.summary),
            strengths: doc
                .strengths
                .iter()
                .enumerate()
                .map(|(index, value)| IndexedValue {
                    index,
                    value: value.clone(),
                })
                .collect(),
            roles: doc
                .experience
                .iter()
                .enumerate()
                .map(|(index, role)| RoleForm {
                    index,
                    number: index + 1,
                    company: role.company.clone(),
                    location: text(&role.location),
                    title: role.title.clone(),
                    start: text(&role.start),
                    end: text(&role.end),
                    bullets: role
                        .bullets
                        .iter()
                        .enumerate()
                        .map(|(bullet, value)| BulletField {
                            role: index,
                            index: bullet,
                            value: value.clone(),
                        })
                        .collect(),
                })
                .collect(),
            schools: doc
                .education
                .iter()
                .enumerate()
                .map(|(index, school)| SchoolForm {
                    index,
                    number: index + 1,
                    school: school.school.clone(),
                    degree: school.degree.clone(),
                    grad: text(&school.grad),
                    location: text(&school.location),
                })
                .collect(),
            skills: SkillCategory::ALL
                .into_iter()
                .map(|category| SkillField {
                    key: category.key(),
                    label: category.form_label(),
                    value: doc.skills.get(category).unwrap_or_default().to_string(),
                })
                .collect(),
            preview: render_preview(doc),
            export_label,
        }
    }
}
