use serde::{Deserialize, Serialize};

/// The complete résumé state edited by the builder.
///
/// Every field has a default so any partial JSON payload still yields a
/// document the preview can render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub header: Header,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub experience: Vec<Role>,
    pub education: Vec<School>,
    pub skills: Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub name: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
}

/// One work-experience entry. Period fields are free text and never parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub company: String,
    pub location: Option<String>,
    pub title: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct School {
    pub school: String,
    pub degree: String,
    pub grad: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub languages: Option<String>,
    pub databases: Option<String>,
    pub realtime: Option<String>,
    pub cloud: Option<String>,
    pub testing: Option<String>,
    pub security: Option<String>,
}

/// The fixed skill categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Databases,
    Realtime,
    Cloud,
    Testing,
    Security,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Databases,
        SkillCategory::Realtime,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Security,
    ];

    /// Heading used in the rendered résumé.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages & Frameworks",
            SkillCategory::Databases => "Databases",
            SkillCategory::Realtime => "Real-Time Processing",
            SkillCategory::Cloud => "Cloud & DevOps",
            SkillCategory::Testing => "Testing & Tools",
            SkillCategory::Security => "Security",
        }
    }

    /// Label shown next to the editor input. Differs from `label` only for realtime.
    pub fn form_label(self) -> &'static str {
        match self {
            SkillCategory::Realtime => "Real-time / Streaming",
            other => other.label(),
        }
    }

    /// Form field name, matching the serde name of the `Skills` field.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Databases => "databases",
            SkillCategory::Realtime => "realtime",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Testing => "testing",
            SkillCategory::Security => "security",
        }
    }
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> Option<&str> {
        match category {
            SkillCategory::Languages => self.languages.as_deref(),
            SkillCategory::Databases => self.databases.as_deref(),
            SkillCategory::Realtime => self.realtime.as_deref(),
            SkillCategory::Cloud => self.cloud.as_deref(),
            SkillCategory::Testing => self.testing.as_deref(),
            SkillCategory::Security => self.security.as_deref(),
        }
    }
}

impl Role {
    /// A blank role as appended by "Add Role". Carries one empty bullet so the
    /// editor has an input to type into.
    pub fn empty() -> Self {
        Role {
            bullets: vec![String::new()],
            ..Default::default()
        }
    }
}

impl School {
    pub fn empty() -> Self {
        School::default()
    }
}

impl ResumeDocument {
    /// Placeholder document the builder starts from.
    pub fn sample() -> Self {
        ResumeDocument {
            header: Header {
                name: "Your Name".to_string(),
                location: Some("City, ST".to_string()),
                phone: Some("(000) 000-0000".to_string()),
                email: Some("you@example.com".to_string()),
                linkedin: Some("linkedin.com/in/your-profile".to_string()),
            },
            summary: Some(
                "Impact-focused engineer with experience in real-time systems and clean, scalable code."
                    .to_string(),
            ),
            strengths: vec![
                "Distributed Systems".to_string(),
                "API Design".to_string(),
                "Cloud & CI/CD".to_string(),
                "Real-time Streaming".to_string(),
            ],
            experience: vec![Role::empty()],
            education: vec![School::empty()],
            skills: Skills {
                languages: Some("TypeScript, React, Node.js, Java, Python".to_string()),
                databases: Some("PostgreSQL, MongoDB".to_string()),
                realtime: Some("Kafka, WebSockets".to_string()),
                cloud: Some("AWS, GCP, Docker, GitHub Actions".to_string()),
                testing: Some("Jest, Playwright, Postman".to_string()),
                security: Some("OAuth 2.0, JWT".to_string()),
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Partial updates
// ────────────────────────────────────────────────────────────────────────────

/// Replaces `target` when the patch carries a value. `Some("")` clears the text
/// but keeps the field present.
fn merge(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

fn merge_opt(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = Some(v.clone());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
}

impl HeaderPatch {
    pub fn apply_to(&self, header: &Header) -> Header {
        let mut next = header.clone();
        merge(&mut next.name, &self.name);
        merge_opt(&mut next.location, &self.location);
        merge_opt(&mut next.phone, &self.phone);
        merge_opt(&mut next.email, &self.email);
        merge_opt(&mut next.linkedin, &self.linkedin);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolePatch {
    pub company: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RolePatch {
    pub fn apply_to(&self, role: &Role) -> Role {
        let mut next = role.clone();
        merge(&mut next.company, &self.company);
        merge_opt(&mut next.location, &self.location);
        merge(&mut next.title, &self.title);
        merge_opt(&mut next.start, &self.start);
        merge_opt(&mut next.end, &self.end);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub grad: Option<String>,
    pub location: Option<String>,
}

impl SchoolPatch {
    pub fn apply_to(&self, school: &School) -> School {
        let mut next = school.clone();
        merge(&mut next.school, &self.school);
        merge(&mut next.degree, &self.degree);
        merge_opt(&mut next.grad, &self.grad);
        merge_opt(&mut next.location, &self.location);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsPatch {
    pub languages: Option<String>,
    pub databases: Option<String>,
    pub realtime: Option<String>,
    pub cloud: Option<String>,
    pub testing: Option<String>,
    pub security: Option<String>,
}

impl SkillsPatch {
    pub fn apply_to(&self, skills: &Skills) -> Skills {
        let mut next = skills.clone();
        merge_opt(&mut next.languages, &self.languages);
        merge_opt(&mut next.databases, &self.databases);
        merge_opt(&mut next.realtime, &self.realtime);
        merge_opt(&mut next.cloud, &self.cloud);
        merge_opt(&mut next.testing, &self.testing);
        merge_opt(&mut next.security, &self.security);
        next
    }
}
