//! Flattens a structured resume into the plain-text form the analyzer
//! consumes: one line per logical field, newline-joined, in a fixed section
//! order. Order only affects density and line-oriented heuristics — keyword
//! presence is unaffected.

use crate::models::resume::Resume;

pub fn flatten_resume(resume: &Resume) -> String {
    let mut parts: Vec<String> = Vec::new();

    let p = &resume.personal_info;
    parts.push(format!(
        "{} {} {} {}",
        p.full_name, p.email, p.phone, p.location
    ));

    if !resume.professional_summary.is_empty() {
        parts.push(resume.professional_summary.clone());
    }

    for exp in &resume.work_experience {
        parts.push(format!("{} {} {}", exp.position, exp.company, exp.description));
    }

    for edu in &resume.education {
        parts.push(format!("{} {} {}", edu.degree, edu.field, edu.institution));
    }

    for skill in &resume.skills {
        parts.push(skill.name.clone());
    }

    for project in &resume.projects {
        parts.push(format!("{} {}", project.name, project.description));
    }

    parts.join("\n")
}
