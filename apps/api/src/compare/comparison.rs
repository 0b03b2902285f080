//! Student comparison. Skill matching here is exact (case-sensitive), unlike the scorer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dashboard::stats::total_resume_points;
use crate::models::progress::ProgressRow;
use crate::models::recommendation::RecommendationRow;
use crate::models::student::StudentRow;
use crate::progress::stats::{completed_project_ids, open_project_ids};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub branch: String,
    pub skills: Vec<String>,
    pub completed_projects: usize,
    pub in_progress_projects: usize,
    pub total_skills: usize,
    pub resume_points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub student1: StudentSummary,
    pub student2: StudentSummary,
    pub shared_skills: Vec<String>,
    pub unique_to_student1: Vec<String>,
    pub unique_to_student2: Vec<String>,
}

pub fn summarize_student(
    student: &StudentRow,
    steps: &[ProgressRow],
    recommendations: &[RecommendationRow],
) -> StudentSummary {
    StudentSummary {
        name: student.name.clone(),
        branch: student.branch.clone(),
        skills: student.skills.clone(),
        completed_projects: completed_project_ids(steps).len(),
        in_progress_projects: open_project_ids(steps).len(),
        total_skills: student.skills.len(),
        resume_points: total_resume_points(recommendations),
    }
}

pub fn compare_students(student1: StudentSummary, student2: StudentSummary) -> ComparisonResult {
    let skills1: HashSet<&str> = student1.skills.iter().map(String::as_str).collect();
    let skills2: HashSet<&str> = student2.skills.iter().map(String::as_str).collect();

    let shared_skills = student1
        .skills
        .iter()
        .filter(|s| skills2.contains(s.as_str()))
        .cloned()
        .collect();
    let unique_to_student1 = student1
        .skills
        .iter()
        .filter(|s| !skills2.contains(s.as_str()))
        .cloned()
        .collect();
    let unique_to_student2 = student2
        .skills
        .iter()
        .filter(|s| !skills1.contains(s.as_str()))
        .cloned()
        .collect();

    ComparisonResult {
        student1,
        student2,
        shared_skills,
        unique_to_student1,
        unique_to_student2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::stats::fixtures::step;
    use chrono::Utc;
    use uuid::Uuid;

    fn summary(name: &str, skills: &[&str]) -> StudentSummary {
        StudentSummary {
            name: name.to_string(),
            branch: "Computer Science".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            completed_projects: 0,
            in_progress_projects: 0,
            total_skills: skills.len(),
            resume_points: 0,
        }
    }

    #[test]
    fn test_shared_and_unique_skills() {
        let result = compare_students(
            summary("Jane", &["JavaScript", "React", "Python"]),
            summary("John", &["Java", "Python", "React"]),
        );
        assert_eq!(result.shared_skills, vec!["React".to_string(), "Python".to_string()]);
        assert_eq!(result.unique_to_student1, vec!["JavaScript".to_string()]);
        assert_eq!(result.unique_to_student2, vec!["Java".to_string()]);
    }

    #[test]
    fn test_matching_is_exact() {
        let result = compare_students(summary("A", &["react"]), summary("B", &["React"]));
        assert!(result.shared_skills.is_empty());
        assert_eq!(result.unique_to_student1.len(), 1);
    }

    #[test]
    fn test_summary_counts_progress_and_resume_points() {
        let student = StudentRow {
            id: Uuid::new_v4(),
            username: "jane".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@college.edu".to_string(),
            branch: "Information Technology".to_string(),
            skills: vec!["React".to_string()],
            github_username: None,
            created_at: Utc::now(),
        };
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let steps = vec![step(a, 1, Some(Utc::now())), step(a, 2, None), step(b, 1, None)];
        let recs = vec![RecommendationRow {
            id: Uuid::new_v4(),
            student_id: student.id,
            project_id: a,
            match_percentage: 80,
            resume_points: vec!["x".to_string(), "y".to_string(), "z".to_string()],
            reasoning: None,
            created_at: Utc::now(),
        }];

        let summary = summarize_student(&student, &steps, &recs);
        assert_eq!(summary.completed_projects, 1);
        assert_eq!(summary.in_progress_projects, 2);
        assert_eq!(summary.total_skills, 1);
        assert_eq!(summary.resume_points, 3);
    }
}
