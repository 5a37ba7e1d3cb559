//! Preview projection: turns a `ResumeDocument` into the read-only structure the
//! builder page, the print view and the PDF printer all render from.
//!
//! Everything here is a pure function of the document. Sections whose data is
//! empty are dropped, blank bullets are skipped, and header contact fields are
//! joined so that absent values leave no stray separators. The document itself
//! keeps every value, blank bullets included.

use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeDocument, Role, School, SkillCategory};

/// Separator between header contact fields and between school location and date.
pub const FIELD_SEPARATOR: &str = " | ";
/// Separator between a role's start and end.
pub const PERIOD_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumePreview {
    pub name: String,
    pub contact_line: String,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub experience: Vec<RolePreview>,
    pub education: Vec<SchoolPreview>,
    pub skills: Vec<SkillRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePreview {
    pub company: String,
    pub location: Option<String>,
    pub title: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolPreview {
    pub school: String,
    pub degree: String,
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub label: String,
    pub value: String,
}

/// Keeps the present, non-empty values and joins them with `separator`.
pub fn join_present<'a, I>(values: I, separator: &str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn preview_role(role: &Role) -> RolePreview {
    RolePreview {
        company: role.company.clone(),
        location: non_empty(role.location.as_deref()),
        title: role.title.clone(),
        period: join_present(
            [role.start.as_deref(), role.end.as_deref()],
            PERIOD_SEPARATOR,
        ),
        bullets: role
            .bullets
            .iter()
            .filter(|b| !b.trim().is_empty())
            .cloned()
            .collect(),
    }
}

fn preview_school(school: &School) -> SchoolPreview {
    SchoolPreview {
        school: school.school.clone(),
        degree: school.degree.clone(),
        meta: join_present(
            [school.location.as_deref(), school.grad.as_deref()],
            FIELD_SEPARATOR,
        ),
    }
}

/// Projects the document into its rendered form.
pub fn render_preview(doc: &ResumeDocument) -> ResumePreview {
    let header = &doc.header;
    ResumePreview {
        name: header.name.clone(),
        contact_line: join_present(
            [
                header.location.as_deref(),
                header.phone.as_deref(),
                header.email.as_deref(),
                header.linkedin.as_deref(),
            ],
            FIELD_SEPARATOR,
        ),
        summary: non_empty(doc.summary.as_deref()),
        strengths: doc.strengths.clone(),
        experience: doc.experience.iter().map(preview_role).collect(),
        education: doc.education.iter().map(preview_school).collect(),
        skills: SkillCategory::ALL
            .into_iter()
            .filter_map(|category| {
                non_empty(doc.skills.get(category)).map(|value| SkillRow {
                    label: category.label().to_string(),
                    value,
                })
            })
            .collect(),
    }
}

impl ResumePreview {
    /// Title used for the exported document.
    pub fn title(&self) -> String {
        export_title(&self.name)
    }

    pub fn has_strengths(&self) -> bool {
        !self.strengths.is_empty()
    }

    pub fn has_experience(&self) -> bool {
        !self.experience.is_empty()
    }

    pub fn has_education(&self) -> bool {
        !self.education.is_empty()
    }
}

pub fn export_title(name: &str) -> String {
    format!("{name} - Resume")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Header, Skills};

    fn jane() -> ResumeDocument {
        ResumeDocument {
            header: Header {
                name: "Jane Doe".to_string(),
                location: Some("NYC".to_string()),
                phone: None,
                email: Some("j@x.com".to_string()),
                linkedin: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let doc = ResumeDocument::sample();
        assert_eq!(render_preview(&doc), render_preview(&doc));
    }

    #[test]
    fn test_contact_line_skips_absent_fields() {
        assert_eq!(render_preview(&jane()).contact_line, "NYC | j@x.com");
    }

    #[test]
    fn test_contact_line_skips_empty_strings() {
        let mut doc = jane();
        doc.header.phone = Some(String::new());
        doc.header.linkedin = Some("in/jane".to_string());
        assert_eq!(render_preview(&doc).contact_line, "NYC | j@x.com | in/jane");
    }

    #[test]
    fn test_no_contact_fields_gives_empty_line() {
        let doc = ResumeDocument::default();
        let preview = render_preview(&doc);
        assert_eq!(preview.contact_line, "");
        assert_eq!(preview.name, "");
    }

    #[test]
    fn test_empty_strengths_section_omitted() {
        let preview = render_preview(&jane());
        assert!(!preview.has_strengths());
    }

    #[test]
    fn test_strengths_listed_in_order() {
        let mut doc = jane();
        doc.strengths = vec!["A".to_string(), "B".to_string()];
        let preview = render_preview(&doc);
        assert!(preview.has_strengths());
        assert_eq!(preview.strengths, vec!["A", "B"]);
    }

    #[test]
    fn test_blank_bullets_filtered_but_kept_in_document() {
        let mut doc = jane();
        doc.experience = vec![Role {
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            bullets: vec![String::new(), "Did X".to_string(), String::new()],
            ..Default::default()
        }];
        let preview = render_preview(&doc);
        assert_eq!(preview.experience[0].bullets, vec!["Did X"]);
        assert_eq!(doc.experience[0].bullets.len(), 3);
    }

    #[test]
    fn test_whitespace_bullet_is_blank() {
        let mut doc = jane();
        doc.experience = vec![Role {
            bullets: vec!["   ".to_string()],
            ..Default::default()
        }];
        assert!(render_preview(&doc).experience[0].bullets.is_empty());
    }

    #[test]
    fn test_summary_omitted_when_empty() {
        let mut doc = jane();
        doc.summary = Some(String::new());
        assert_eq!(render_preview(&doc).summary, None);
        doc.summary = Some("Builder of things".to_string());
        assert_eq!(
            render_preview(&doc).summary.as_deref(),
            Some("Builder of things")
        );
    }

    #[test]
    fn test_role_period_joins_present_ends() {
        let role = Role {
            start: Some("Jan 2020".to_string()),
            end: Some("Present".to_string()),
            ..Default::default()
        };
        assert_eq!(preview_role(&role).period, "Jan 2020 - Present");

        let open = Role {
            start: Some("Jan 2020".to_string()),
            ..Default::default()
        };
        assert_eq!(preview_role(&open).period, "Jan 2020");
    }

    #[test]
    fn test_school_meta_puts_location_before_date() {
        let school = School {
            school: "State U".to_string(),
            degree: "BSc".to_string(),
            grad: Some("2018".to_string()),
            location: Some("Austin, TX".to_string()),
        };
        assert_eq!(preview_school(&school).meta, "Austin, TX | 2018");
    }

    #[test]
    fn test_experience_and_education_sections_omitted_when_empty() {
        let preview = render_preview(&jane());
        assert!(!preview.has_experience());
        assert!(!preview.has_education());
    }

    #[test]
    fn test_skill_rows_skip_empty_categories() {
        let mut doc = jane();
        doc.skills = Skills {
            languages: Some("Rust".to_string()),
            cloud: Some(String::new()),
            security: Some("TLS".to_string()),
            ..Default::default()
        };
        let rows = render_preview(&doc).skills;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Languages & Frameworks");
        assert_eq!(rows[1].label, "Security");
    }

    #[test]
    fn test_export_title() {
        assert_eq!(render_preview(&jane()).title(), "Jane Doe - Resume");
    }
}
