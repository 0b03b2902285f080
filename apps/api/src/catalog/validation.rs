//! Data-entry validation for catalog projects.
//!
//! A project must declare at least one required skill; the scorer would otherwise
//! have nothing to measure overlap against.

use serde::Deserialize;

use crate::errors::AppError;
use crate::recommendation::strategy::Difficulty;
use crate::students::validation::normalize_skills;

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    pub estimated_hours: Option<i32>,
    pub repo_url: Option<String>,
}

/// Trims every field, drops blank and repeated skills, rejects anything unusable.
pub fn validate_new_project(project: NewProject) -> Result<NewProject, AppError> {
    let name = project.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let description = project.description.trim().to_string();
    if description.is_empty() {
        return Err(AppError::Validation("description cannot be empty".to_string()));
    }

    let skills = normalize_skills(project.skills);
    if skills.is_empty() {
        return Err(AppError::Validation(
            "At least one skill tag is required".to_string(),
        ));
    }

    if let Some(hours) = project.estimated_hours {
        if hours <= 0 {
            return Err(AppError::Validation(
                "estimated_hours must be positive".to_string(),
            ));
        }
    }

    let repo_url = project
        .repo_url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());

    Ok(NewProject {
        name,
        description,
        skills,
        difficulty: project.difficulty,
        estimated_hours: project.estimated_hours,
        repo_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project(skills: &[&str], hours: Option<i32>) -> NewProject {
        NewProject {
            name: "  Weather Forecast App ".to_string(),
            description: "Fetch forecasts from external APIs".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Beginner,
            estimated_hours: hours,
            repo_url: Some("   ".to_string()),
        }
    }

    #[test]
    fn test_valid_project_is_normalized() {
        let project = validate_new_project(new_project(&["JavaScript", " ", "React "], Some(20))).unwrap();
        assert_eq!(project.name, "Weather Forecast App");
        assert_eq!(project.skills, vec!["JavaScript".to_string(), "React".to_string()]);
        assert!(project.repo_url.is_none());
    }

    #[test]
    fn test_skills_deduplicated_ignoring_case() {
        let project =
            validate_new_project(new_project(&["React", "react", " REACT ", "Node.js"], None)).unwrap();
        assert_eq!(project.skills, vec!["React".to_string(), "Node.js".to_string()]);
    }

    #[test]
    fn test_project_without_skills_is_rejected() {
        let result = validate_new_project(new_project(&["", "  "], Some(20)));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_non_positive_hours_rejected() {
        assert!(validate_new_project(new_project(&["CSS"], Some(0))).is_err());
    }

    #[test]
    fn test_hours_optional() {
        assert!(validate_new_project(new_project(&["CSS"], None)).is_ok());
    }

    #[test]
    fn test_unknown_difficulty_rejected_at_deserialization() {
        let result: Result<NewProject, _> = serde_json::from_value(serde_json::json!({
            "name": "X",
            "description": "Y",
            "skills": ["Rust"],
            "difficulty": "Expert"
        }));
        assert!(result.is_err());
    }
}
