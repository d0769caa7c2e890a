//! Structural validation of incoming resumes before persistence. Mirrors
//! what the builder UI enforces, so a well-behaved client never sees these
//! messages.

use crate::models::resume::Resume;

/// Returns every violation found; an empty list means the resume is valid.
pub fn validate_resume(resume: &Resume) -> Vec<String> {
    let mut violations = Vec::new();

    if resume.title.trim().is_empty() {
        violations.push("title is required".to_string());
    }

    let p = &resume.personal_info;
    if p.full_name.trim().is_empty() {
        violations.push("personalInfo.fullName is required".to_string());
    }
    if !is_plausible_email(&p.email) {
        violations.push("personalInfo.email must be a valid email address".to_string());
    }
    if p.phone.trim().is_empty() {
        violations.push("personalInfo.phone is required".to_string());
    }
    if p.location.trim().is_empty() {
        violations.push("personalInfo.location is required".to_string());
    }

    for (idx, exp) in resume.work_experience.iter().enumerate() {
        if exp.id.trim().is_empty() {
            violations.push(format!("workExperience[{idx}].id is required"));
        }
        if exp.company.trim().is_empty() {
            violations.push(format!("workExperience[{idx}].company is required"));
        }
        if exp.position.trim().is_empty() {
            violations.push(format!("workExperience[{idx}].position is required"));
        }
        if exp.start_date.trim().is_empty() {
            violations.push(format!("workExperience[{idx}].startDate is required"));
        }
    }

    for (idx, edu) in resume.education.iter().enumerate() {
        if edu.id.trim().is_empty() {
            violations.push(format!("education[{idx}].id is required"));
        }
        if edu.institution.trim().is_empty() {
            violations.push(format!("education[{idx}].institution is required"));
        }
        if edu.degree.trim().is_empty() {
            violations.push(format!("education[{idx}].degree is required"));
        }
        if edu.field.trim().is_empty() {
            violations.push(format!("education[{idx}].field is required"));
        }
    }

    for (idx, skill) in resume.skills.iter().enumerate() {
        if skill.name.trim().is_empty() {
            violations.push(format!("skills[{idx}].name is required"));
        }
    }

    for (idx, project) in resume.projects.iter().enumerate() {
        if project.id.trim().is_empty() {
            violations.push(format!("projects[{idx}].id is required"));
        }
        if project.name.trim().is_empty() {
            violations.push(format!("projects[{idx}].name is required"));
        }
        if project.description.trim().is_empty() {
            violations.push(format!("projects[{idx}].description is required"));
        }
    }

    violations
}

/// Cheap shape check: something before '@', a '.' somewhere after it. Real
/// verification happens by sending mail, not by regex.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::sample_resume;

    #[test]
    fn test_sample_resume_is_valid() {
        assert!(validate_resume(&sample_resume()).is_empty());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut resume = sample_resume();
        resume.title = "  ".to_string();
        let violations = validate_resume(&resume);
        assert_eq!(violations, vec!["title is required"]);
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut resume = sample_resume();
        for bad in ["", "no-at-sign", "a@nodot", "a@.com", "@missing.local"] {
            resume.personal_info.email = bad.to_string();
            assert!(
                validate_resume(&resume)
                    .iter()
                    .any(|v| v.contains("email")),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_plausible_emails_accepted() {
        for good in ["a@b.c", "jane.doe@corp.example.com"] {
            assert!(is_plausible_email(good), "{good:?} should be accepted");
        }
    }

    #[test]
    fn test_work_experience_fields_indexed_in_messages() {
        let mut resume = sample_resume();
        resume.work_experience[0].company.clear();
        let violations = validate_resume(&resume);
        assert_eq!(violations, vec!["workExperience[0].company is required"]);
    }

    #[test]
    fn test_multiple_violations_collected() {
        let mut resume = sample_resume();
        resume.title.clear();
        resume.skills[0].name.clear();
        resume.projects[0].description.clear();
        let violations = validate_resume(&resume);
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_empty_collections_are_valid() {
        let mut resume = sample_resume();
        resume.work_experience.clear();
        resume.education.clear();
        resume.skills.clear();
        resume.projects.clear();
        assert!(validate_resume(&resume).is_empty());
    }
}
