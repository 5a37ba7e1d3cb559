//! Whole-document edit operations.
//!
//! Every editor action is one `Edit`. `Edit::apply` is pure: it reads the old
//! document and builds a new one, leaving the input untouched so any snapshot
//! held elsewhere stays valid. Indices are positional; an index that does not
//! resolve leaves the document unchanged.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    HeaderPatch, ResumeDocument, Role, RolePatch, School, SchoolPatch, SkillsPatch,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    PatchHeader { patch: HeaderPatch },
    SetSummary { summary: String },
    AddStrength { value: String },
    RemoveStrength { index: usize },
    AddRole,
    RemoveRole { index: usize },
    PatchRole { index: usize, patch: RolePatch },
    AddBullet { role: usize },
    UpdateBullet { role: usize, bullet: usize, value: String },
    RemoveBullet { role: usize, bullet: usize },
    AddSchool,
    RemoveSchool { index: usize },
    PatchSchool { index: usize, patch: SchoolPatch },
    PatchSkills { patch: SkillsPatch },
}

fn without<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

fn with_replaced<T: Clone>(items: &[T], index: usize, f: impl Fn(&T) -> T) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| if i == index { f(item) } else { item.clone() })
        .collect()
}

fn with_pushed<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

impl Edit {
    /// Builds the document that results from applying this edit to `doc`.
    pub fn apply(&self, doc: &ResumeDocument) -> ResumeDocument {
        match self {
            Edit::PatchHeader { patch } => ResumeDocument {
                header: patch.apply_to(&doc.header),
                ..doc.clone()
            },
            Edit::SetSummary { summary } => ResumeDocument {
                summary: Some(summary.clone()),
                ..doc.clone()
            },
            Edit::AddStrength { value } => {
                let value = value.trim();
                if value.is_empty() {
                    return doc.clone();
                }
                ResumeDocument {
                    strengths: with_pushed(&doc.strengths, value.to_string()),
                    ..doc.clone()
                }
            }
            Edit::RemoveStrength { index } => ResumeDocument {
                strengths: without(&doc.strengths, *index),
                ..doc.clone()
            },
            Edit::AddRole => ResumeDocument {
                experience: with_pushed(&doc.experience, Role::empty()),
                ..doc.clone()
            },
            Edit::RemoveRole { index } => ResumeDocument {
                experience: without(&doc.experience, *index),
                ..doc.clone()
            },
            Edit::PatchRole { index, patch } => ResumeDocument {
                experience: with_replaced(&doc.experience, *index, |role| patch.apply_to(role)),
                ..doc.clone()
            },
            Edit::AddBullet { role } => ResumeDocument {
                experience: with_replaced(&doc.experience, *role, |r| Role {
                    bullets: with_pushed(&r.bullets, String::new()),
                    ..r.clone()
                }),
                ..doc.clone()
            },
            Edit::UpdateBullet {
                role,
                bullet,
                value,
            } => ResumeDocument {
                experience: with_replaced(&doc.experience, *role, |r| Role {
                    bullets: with_replaced(&r.bullets, *bullet, |_| value.clone()),
                    ..r.clone()
                }),
                ..doc.clone()
            },
            Edit::RemoveBullet { role, bullet } => ResumeDocument {
                experience: with_replaced(&doc.experience, *role, |r| Role {
                    bullets: without(&r.bullets, *bullet),
                    ..r.clone()
                }),
                ..doc.clone()
            },
            Edit::AddSchool => ResumeDocument {
                education: with_pushed(&doc.education, School::empty()),
                ..doc.clone()
            },
            Edit::RemoveSchool { index } => ResumeDocument {
                education: without(&doc.education, *index),
                ..doc.clone()
            },
            Edit::PatchSchool { index, patch } => ResumeDocument {
                education: with_replaced(&doc.education, *index, |s| patch.apply_to(s)),
                ..doc.clone()
            },
            Edit::PatchSkills { patch } => ResumeDocument {
                skills: patch.apply_to(&doc.skills),
                ..doc.clone()
            },
        }
    }

    /// True when every index this edit addresses exists in `doc`.
    pub fn targets_existing(&self, doc: &ResumeDocument) -> bool {
        match self {
            Edit::RemoveStrength { index } => *index < doc.strengths.len(),
            Edit::RemoveRole { index } | Edit::PatchRole { index, .. } => {
                *index < doc.experience.len()
            }
            Edit::AddBullet { role } => *role < doc.experience.len(),
            Edit::UpdateBullet { role, bullet, .. } | Edit::RemoveBullet { role, bullet } => doc
                .experience
                .get(*role)
                .is_some_and(|r| *bullet < r.bullets.len()),
            Edit::RemoveSchool { index } | Edit::PatchSchool { index, .. } => {
                *index < doc.education.len()
            }
            Edit::PatchHeader { .. }
            | Edit::SetSummary { .. }
            | Edit::AddStrength { .. }
            | Edit::AddRole
            | Edit::AddSchool
            | Edit::PatchSkills { .. } => true,
        }
    }

    /// Short operation name for logs.
    pub fn op(&self) -> &'static str {
        match self {
            Edit::PatchHeader { .. } => "patch_header",
            Edit::SetSummary { .. } => "set_summary",
            Edit::AddStrength { .. } => "add_strength",
            Edit::RemoveStrength { .. } => "remove_strength",
            Edit::AddRole => "add_role",
            Edit::RemoveRole { .. } => "remove_role",
            Edit::PatchRole { .. } => "patch_role",
            Edit::AddBullet { .. } => "add_bullet",
            Edit::UpdateBullet { .. } => "update_bullet",
            Edit::RemoveBullet { .. } => "remove_bullet",
            Edit::AddSchool => "add_school",
            Edit::RemoveSchool { .. } => "remove_school",
            Edit::PatchSchool { .. } => "patch_school",
            Edit::PatchSkills { .. } => "patch_skills",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(company: &str, bullets: &[&str]) -> Role {
        Role {
            company: company.to_string(),
            title: "Engineer".to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    fn doc() -> ResumeDocument {
        ResumeDocument {
            strengths: vec!["A".to_string(), "B".to_string()],
            experience: vec![role("Acme", &["Did X"]), role("Globex", &["Did Y", "Did Z"])],
            education: vec![School {
                school: "State U".to_string(),
                degree: "BSc".to_string(),
                ..Default::default()
            }],
            ..ResumeDocument::sample()
        }
    }

    #[test]
    fn test_add_then_remove_tail_restores_strengths() {
        let before = doc();
        let added = Edit::AddStrength {
            value: "C".to_string(),
        }
        .apply(&before);
        assert_eq!(added.strengths, vec!["A", "B", "C"]);
        let removed = Edit::RemoveStrength { index: 2 }.apply(&added);
        assert_eq!(removed, before);
    }

    #[test]
    fn test_add_then_remove_tail_restores_roles() {
        let before = doc();
        let added = Edit::AddRole.apply(&before);
        assert_eq!(added.experience.len(), 3);
        assert_eq!(added.experience[2], Role::empty());
        let removed = Edit::RemoveRole { index: 2 }.apply(&added);
        assert_eq!(removed, before);
    }

    #[test]
    fn test_add_then_remove_tail_restores_bullets_and_schools() {
        let before = doc();
        let with_bullet = Edit::AddBullet { role: 1 }.apply(&before);
        assert_eq!(with_bullet.experience[1].bullets, vec!["Did Y", "Did Z", ""]);
        assert_eq!(
            Edit::RemoveBullet { role: 1, bullet: 2 }.apply(&with_bullet),
            before
        );

        let with_school = Edit::AddSchool.apply(&before);
        assert_eq!(Edit::RemoveSchool { index: 1 }.apply(&with_school), before);
    }

    #[test]
    fn test_add_strength_trims_and_ignores_blank() {
        let before = doc();
        let after = Edit::AddStrength {
            value: "   ".to_string(),
        }
        .apply(&before);
        assert_eq!(after, before);

        let after = Edit::AddStrength {
            value: "  Rust ".to_string(),
        }
        .apply(&before);
        assert_eq!(after.strengths.last().map(String::as_str), Some("Rust"));
    }

    #[test]
    fn test_duplicate_strengths_allowed() {
        let after = Edit::AddStrength {
            value: "A".to_string(),
        }
        .apply(&doc());
        assert_eq!(after.strengths, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_remove_shifts_later_items_down() {
        let after = Edit::RemoveRole { index: 0 }.apply(&doc());
        assert_eq!(after.experience.len(), 1);
        assert_eq!(after.experience[0].company, "Globex");
    }

    #[test]
    fn test_patch_role_isolated_from_siblings() {
        let before = doc();
        let after = Edit::PatchRole {
            index: 0,
            patch: RolePatch {
                company: Some("Initech".to_string()),
                ..Default::default()
            },
        }
        .apply(&before);
        assert_eq!(after.experience[0].company, "Initech");
        assert_eq!(after.experience[0].title, before.experience[0].title);
        assert_eq!(after.experience[0].bullets, before.experience[0].bullets);
        assert_eq!(after.experience[1], before.experience[1]);
    }

    #[test]
    fn test_update_bullet_isolated() {
        let before = doc();
        let after = Edit::UpdateBullet {
            role: 1,
            bullet: 0,
            value: "Did W".to_string(),
        }
        .apply(&before);
        assert_eq!(after.experience[1].bullets, vec!["Did W", "Did Z"]);
        assert_eq!(after.experience[0], before.experience[0]);
    }

    #[test]
    fn test_patch_school_isolated() {
        let mut before = doc();
        before.education.push(School::empty());
        let after = Edit::PatchSchool {
            index: 1,
            patch: SchoolPatch {
                grad: Some("2019".to_string()),
                ..Default::default()
            },
        }
        .apply(&before);
        assert_eq!(after.education[0], before.education[0]);
        assert_eq!(after.education[1].grad.as_deref(), Some("2019"));
    }

    #[test]
    fn test_input_document_untouched() {
        let before = doc();
        let snapshot = before.clone();
        let _ = Edit::RemoveRole { index: 0 }.apply(&before);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let before = doc();
        for edit in [
            Edit::RemoveStrength { index: 9 },
            Edit::RemoveRole { index: 9 },
            Edit::AddBullet { role: 9 },
            Edit::RemoveBullet { role: 0, bullet: 9 },
            Edit::UpdateBullet {
                role: 9,
                bullet: 0,
                value: "x".to_string(),
            },
            Edit::PatchSchool {
                index: 9,
                patch: SchoolPatch::default(),
            },
        ] {
            assert!(!edit.targets_existing(&before), "{}", edit.op());
            assert_eq!(edit.apply(&before), before, "{}", edit.op());
        }
    }

    #[test]
    fn test_remove_from_empty_does_not_panic() {
        let empty = ResumeDocument::default();
        assert_eq!(Edit::RemoveStrength { index: 0 }.apply(&empty), empty);
        assert_eq!(Edit::RemoveSchool { index: 0 }.apply(&empty), empty);
    }

    #[test]
    fn test_edit_json_shape() {
        let edit: Edit = serde_json::from_str(
            r#"{"op": "update_bullet", "role": 0, "bullet": 1, "value": "Did X"}"#,
        )
        .unwrap();
        assert_eq!(
            edit,
            Edit::UpdateBullet {
                role: 0,
                bullet: 1,
                value: "Did X".to_string()
            }
        );
        let add: Edit = serde_json::from_str(r#"{"op": "add_role"}"#).unwrap();
        assert_eq!(add, Edit::AddRole);
    }
}
