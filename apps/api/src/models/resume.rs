//! Structured resume model shared by the builder frontend, persistence, and
//! the ATS review pipeline. Wire format is camelCase to match the existing
//! client contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    Certification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// A full structured resume as assembled by the step wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub title: String,
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub template_id: String,
}

/// Persisted resume row. `content` holds the full `Resume` as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) fn sample_resume() -> Resume {
    Resume {
        title: "Backend Engineer".to_string(),
        personal_info: PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            location: "Austin TX".to_string(),
            linkedin: None,
            portfolio: None,
        },
        professional_summary: "Rust engineer focused on reliability".to_string(),
        work_experience: vec![WorkExperience {
            id: "w1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "January 2020".to_string(),
            end_date: String::new(),
            current: true,
            description: "Built billing services".to_string(),
            achievements: vec!["Cut latency 40%".to_string()],
        }],
        education: vec![Education {
            id: "e1".to_string(),
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2014".to_string(),
            end_date: "2018".to_string(),
            gpa: None,
        }],
        skills: vec![Skill {
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
            category: SkillCategory::Technical,
        }],
        projects: vec![Project {
            id: "p1".to_string(),
            name: "resumeforge".to_string(),
            description: "Resume builder backend".to_string(),
            technologies: vec!["Rust".to_string()],
            url: None,
            github: None,
        }],
        template_id: "modern-professional".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_resume()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("professionalSummary").is_some());
        assert!(json["personalInfo"].get("fullName").is_some());
        assert!(json["workExperience"][0].get("startDate").is_some());
    }

    #[test]
    fn test_resume_round_trips_through_json() {
        let resume = sample_resume();
        let json = serde_json::to_string(&resume).unwrap();
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(resume, back);
    }

    #[test]
    fn test_skill_level_uses_display_names() {
        let skill: Skill = serde_json::from_str(
            r#"{"name": "SQL", "level": "Intermediate", "category": "Technical"}"#,
        )
        .unwrap();
        assert_eq!(skill.level, SkillLevel::Intermediate);
        assert_eq!(skill.category, SkillCategory::Technical);
    }

    #[test]
    fn test_optional_collections_default_to_empty() {
        let resume: Resume = serde_json::from_str(
            r#"{
                "title": "Minimal",
                "personalInfo": {
                    "fullName": "A", "email": "a@b.c", "phone": "1", "location": "X"
                },
                "templateId": "modern-professional"
            }"#,
        )
        .unwrap();
        assert!(resume.work_experience.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.professional_summary.is_empty());
    }
}
