//! Learning plan template: the fixed five steps created when a student starts a project.

use crate::models::project::ProjectRow;

/// Step descriptions in order; step numbers are 1-based positions in this list.
pub fn learning_plan_steps(project: &ProjectRow) -> Vec<String> {
    let fundamentals = if project.skills.is_empty() {
        "Study the project's core concepts".to_string()
    } else {
        format!("Study {} fundamentals", project.skills.join(" and "))
    };

    vec![
        fundamentals,
        "Set up the development environment".to_string(),
        "Implement core features".to_string(),
        "Add testing and documentation".to_string(),
        "Deploy and showcase the project".to_string(),
    ]
}
