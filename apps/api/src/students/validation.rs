use std::collections::HashSet;

use serde::Deserialize;

use crate::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub username: String,
    pub name: String,
    pub email: String,
    pub branch: String,
    pub skills: Vec<String>,
    pub github_username: Option<String>,
}

pub fn validate_new_student(student: NewStudent) -> Result<NewStudent, AppError> {
    let username = student.username.trim().to_string();
    if username.is_empty() || username.chars().any(char::is_whitespace) {
        return Err(AppError::Validation(
            "username must be non-empty and contain no spaces".to_string(),
        ));
    }

    let name = student.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let email = student.email.trim().to_string();
    if !looks_like_email(&email) {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }

    let branch = student.branch.trim().to_string();
    if branch.is_empty() {
        return Err(AppError::Validation("Branch is required".to_string()));
    }

    let skills = validate_skills(student.skills)?;

    let github_username = student
        .github_username
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty());

    Ok(NewStudent {
        username,
        name,
        email,
        branch,
        skills,
        github_username,
    })
}

/// Trims, drops blanks and case-insensitive duplicates. First spelling wins.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

/// `normalize_skills`, then at least one skill must remain.
pub fn validate_skills(skills: Vec<String>) -> Result<Vec<String>, AppError> {
    let skills = normalize_skills(skills);
    if skills.is_empty() {
        return Err(AppError::Validation(
            "At least one skill is required".to_string(),
        ));
    }
    Ok(skills)
}

/// One '@' with something on both sides and a dot in the domain.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
