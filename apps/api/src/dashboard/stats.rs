//! Dashboard aggregation. Pure functions over rows the handler has already loaded.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use crate::models::progress::ProgressRow;
use crate::models::project::ProjectRow;
use crate::models::recommendation::RecommendationRow;
use crate::models::student::StudentRow;
use crate::progress::stats::{completed_project_ids, started_project_ids};

const RECENT_ACTIVITY_LIMIT: usize = 5;
/// The streak is approximated by recent activity, capped at a week.
const MAX_LEARNING_STREAK: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub activity_type: &'static str,
    pub message: String,
    /// YYYY-MM-DD
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub in_progress_projects: usize,
    pub total_skills: usize,
    pub resume_points: usize,
    pub learning_streak: usize,
    pub recent_activity: Vec<RecentActivity>,
    pub skills_acquired: Vec<String>,
}

/// Sum of resume points across a student's stored recommendations.
pub fn total_resume_points(recommendations: &[RecommendationRow]) -> usize {
    recommendations.iter().map(|r| r.resume_points.len()).sum()
}

/// `projects` must contain every project referenced by a completed step;
/// missing ones simply contribute no skills.
pub fn compute_dashboard(
    student: &StudentRow,
    steps: &[ProgressRow],
    recommendations: &[RecommendationRow],
    projects: &HashMap<Uuid, ProjectRow>,
) -> DashboardStats {
    let total_projects = started_project_ids(steps).len();
    let completed = completed_project_ids(steps);

    let recent_activity = recent_activity(steps);

    let mut seen = HashSet::new();
    let skills_acquired = completed
        .iter()
        .filter_map(|id| projects.get(id))
        .flat_map(|p| p.skills.iter())
        .filter(|s| seen.insert(s.as_str()))
        .cloned()
        .collect();

    DashboardStats {
        total_projects,
        completed_projects: completed.len(),
        in_progress_projects: total_projects - completed.len(),
        total_skills: student.skills.len(),
        resume_points: total_resume_points(recommendations),
        learning_streak: recent_activity.len().min(MAX_LEARNING_STREAK),
        recent_activity,
        skills_acquired,
    }
}

/// Most recently completed steps first.
fn recent_activity(steps: &[ProgressRow]) -> Vec<RecentActivity> {
    let mut completed: Vec<&ProgressRow> = steps.iter().filter(|s| s.completed_date.is_some()).collect();
    completed.sort_by(|a, b| b.completed_date.cmp(&a.completed_date));

    completed
        .into_iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .filter_map(|s| {
            let date = s.completed_date?;
            Some(RecentActivity {
                id: s.id,
                activity_type: "progress",
                message: format!("Completed step {}: {}", s.step_number, s.step_description),
                timestamp: date.format("%Y-%m-%d").to_string(),
            })
        })
        .collect()
}
