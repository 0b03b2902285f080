//! Fallback scorer: deterministic skill-overlap ranking, no LLM call.
//!
//! Algorithm:
//! 1. Lower-case both sides; a student skill matches when its lower-cased form is a
//!    required skill of the project.
//! 2. match = min(round(|common| / |required| × 100), 95). Zero required skills → 0.
//! 3. Three templated resume points and a templated reasoning string per project.
//! 4. Stable sort descending by match, keep the first `MAX_FALLBACK_RESULTS`.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::recommendation::strategy::{
    rank_entries, CandidateProject, RecommendationEntry, RecommendationStrategy, SkillProfile,
};

pub const MAX_FALLBACK_RESULTS: usize = 6;
/// A rule-based score never claims a perfect match.
pub const FALLBACK_MATCH_CAP: u8 = 95;
/// Above this the closing clause says "well-suited".
const WELL_SUITED_THRESHOLD: u8 = 70;

pub struct FallbackScorer;

#[async_trait]
impl RecommendationStrategy for FallbackScorer {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn recommend(
        &self,
        profile: &SkillProfile,
        candidates: &[CandidateProject],
    ) -> Result<Vec<RecommendationEntry>, AppError> {
        Ok(score_candidates(profile, candidates))
    }
}

/// Scores every candidate, ranks, and truncates. Empty input gives empty output.
pub fn score_candidates(
    profile: &SkillProfile,
    candidates: &[CandidateProject],
) -> Vec<RecommendationEntry> {
    let mut entries: Vec<RecommendationEntry> = candidates
        .iter()
        .map(|project| score_project(profile, project))
        .collect();

    rank_entries(&mut entries);
    entries.truncate(MAX_FALLBACK_RESULTS);
    entries
}

fn score_project(profile: &SkillProfile, project: &CandidateProject) -> RecommendationEntry {
    let required: HashSet<String> = project
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let common_skills: Vec<&str> = profile
        .skills()
        .iter()
        .filter(|s| required.contains(&s.to_lowercase()))
        .map(String::as_str)
        .collect();

    let match_percentage = match_percentage(common_skills.len(), project.required_skills.len());

    RecommendationEntry {
        project_id: project.id,
        match_percentage,
        resume_points: resume_points(project, &common_skills),
        reasoning: reasoning(project, match_percentage, &common_skills),
    }
}

fn match_percentage(common: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    let pct = ((common as f64 / required as f64) * 100.0).round();
    pct.min(FALLBACK_MATCH_CAP as f64) as u8
}

fn resume_points(project: &CandidateProject, common_skills: &[&str]) -> Vec<String> {
    let headline_skills = project
        .required_skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let built = if headline_skills.is_empty() {
        format!("Built {}", project.name)
    } else {
        format!(
            "Built {} demonstrating proficiency in {}",
            project.name, headline_skills
        )
    };

    let difficulty = project.difficulty.as_str().to_lowercase();
    let completed = match project.estimated_hours {
        Some(hours) => format!(
            "Completed {difficulty}-level project requiring {hours} hours of development"
        ),
        None => format!("Completed {difficulty}-level project"),
    };

    let applied_skills = if !common_skills.is_empty() {
        common_skills.join(", ")
    } else {
        project
            .required_skills
            .first()
            .cloned()
            .unwrap_or_else(|| "core development practices".to_string())
    };
    let applied = format!("Applied {applied_skills} to solve real-world problems");

    vec![built, completed, applied]
}

fn reasoning(project: &CandidateProject, match_percentage: u8, common_skills: &[&str]) -> String {
    let mut reasoning = format!("This project matches {match_percentage}% of your skills. ");

    if !common_skills.is_empty() {
        reasoning.push_str(&format!(
            "You already have experience with {}, which will help you get started quickly. ",
            common_skills.join(", ")
        ));
    }

    let fit = if match_percentage > WELL_SUITED_THRESHOLD {
        "well-suited"
    } else {
        "challenging but achievable"
    };
    reasoning.push_str(&format!(
        "The {} difficulty level is {fit} for your current skill set.",
        project.difficulty.as_str().to_lowercase()
    ));

    reasoning
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::strategy::Difficulty;
    use uuid::Uuid;

    fn project(name: &str, skills: &[&str], difficulty: Difficulty, hours: Option<u32>) -> CandidateProject {
        CandidateProject {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: format!("{name} description"),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            difficulty,
            estimated_hours: hours,
        }
    }

    fn student(skills: &[&str]) -> SkillProfile {
        SkillProfile::new(skills.iter().copied(), "Computer Science")
    }

    fn task_manager() -> CandidateProject {
        project(
            "Task Management Web App",
            &["React", "Node.js", "Express", "MongoDB", "JWT"],
            Difficulty::Intermediate,
            Some(40),
        )
    }

    #[test]
    fn test_two_of_five_skills_scores_40() {
        let entries = score_candidates(&student(&["React", "Node.js", "Python"]), &[task_manager()]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].match_percentage, 40);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let p = project("Landing Page", &["react"], Difficulty::Beginner, Some(10));
        let entries = score_candidates(&student(&["React"]), &[p]);
        assert_eq!(entries[0].match_percentage, 95);
        assert!(entries[0].reasoning.contains("You already have experience with React"));
    }

    #[test]
    fn test_full_overlap_is_capped_at_95() {
        let p = project("Portfolio Website", &["HTML", "CSS", "JavaScript", "React"], Difficulty::Beginner, Some(25));
        let entries = score_candidates(&student(&["html", "css", "javascript", "react"]), &[p]);
        assert_eq!(entries[0].match_percentage, FALLBACK_MATCH_CAP);
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 1/8 = 12.5% → 13
        assert_eq!(match_percentage(1, 8), 13);
        // 2/3 = 66.67% → 67
        assert_eq!(match_percentage(2, 3), 67);
    }

    #[test]
    fn test_zero_required_skills_scores_zero() {
        let p = project("Mystery", &[], Difficulty::Advanced, None);
        let entries = score_candidates(&student(&["Rust"]), &[p]);
        assert_eq!(entries[0].match_percentage, 0);
        assert_eq!(entries[0].resume_points.len(), 3);
        assert_eq!(entries[0].resume_points[0], "Built Mystery");
        assert_eq!(
            entries[0].resume_points[2],
            "Applied core development practices to solve real-world problems"
        );
    }

    #[test]
    fn test_zero_overlap_entry_shape() {
        let entries = score_candidates(&student(&["Go"]), &[task_manager()]);
        let entry = &entries[0];
        assert_eq!(entry.match_percentage, 0);
        assert_eq!(entry.resume_points.len(), 3);
        assert!(!entry.reasoning.contains("You already have experience"));
        assert_eq!(
            entry.resume_points[2],
            "Applied React to solve real-world problems"
        );
        assert!(entry.reasoning.ends_with(
            "The intermediate difficulty level is challenging but achievable for your current skill set."
        ));
    }

    #[test]
    fn test_resume_points_templates() {
        let entries = score_candidates(&student(&["React", "Node.js"]), &[task_manager()]);
        let points = &entries[0].resume_points;
        assert_eq!(
            points[0],
            "Built Task Management Web App demonstrating proficiency in React, Node.js, Express"
        );
        assert_eq!(
            points[1],
            "Completed intermediate-level project requiring 40 hours of development"
        );
        assert_eq!(points[2], "Applied React, Node.js to solve real-world problems");
    }

    #[test]
    fn test_missing_hours_omits_hours_clause() {
        let p = project("Weather App", &["JavaScript"], Difficulty::Beginner, None);
        let entries = score_candidates(&student(&[]), &[p]);
        assert_eq!(entries[0].resume_points[1], "Completed beginner-level project");
    }

    #[test]
    fn test_common_skills_keep_student_casing_and_order() {
        let p = project("Chat", &["websockets", "react", "node.js"], Difficulty::Advanced, Some(50));
        let entries = score_candidates(&student(&["Node.js", "WebSockets", "Python"]), &[p]);
        assert!(entries[0]
            .reasoning
            .contains("You already have experience with Node.js, WebSockets,"));
    }

    #[test]
    fn test_well_suited_only_above_70() {
        let high = project("High", &["A", "B", "C", "D"], Difficulty::Beginner, None); // 4/4, capped
        let edge = project("Edge", &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"], Difficulty::Beginner, None);
        let profile = student(&["A", "B", "C", "D", "E", "F", "G"]); // edge: 7/10 = 70
        let entries = score_candidates(&profile, &[high, edge]);
        assert_eq!(entries[0].match_percentage, 95);
        assert!(entries[0].reasoning.contains("well-suited"));
        assert_eq!(entries[1].match_percentage, 70);
        assert!(entries[1].reasoning.contains("challenging but achievable"));
    }

    #[test]
    fn test_reasoning_states_percentage_first() {
        let entries = score_candidates(&student(&["React", "Node.js"]), &[task_manager()]);
        assert!(entries[0]
            .reasoning
            .starts_with("This project matches 40% of your skills. "));
    }

    #[test]
    fn test_output_sorted_descending_and_capped_at_six() {
        let profile = student(&["Python", "React"]);
        let catalog: Vec<CandidateProject> = (0..9)
            .map(|i| {
                let skills: Vec<&str> = if i % 3 == 0 {
                    vec!["Python", "Django"]
                } else if i % 3 == 1 {
                    vec!["Python", "React"]
                } else {
                    vec!["Haskell"]
                };
                project(&format!("P{i}"), &skills, Difficulty::Intermediate, Some(10))
            })
            .collect();

        let entries = score_candidates(&profile, &catalog);
        assert_eq!(entries.len(), MAX_FALLBACK_RESULTS);
        assert!(entries
            .windows(2)
            .all(|w| w[0].match_percentage >= w[1].match_percentage));
        assert!(entries.iter().all(|e| e.match_percentage <= FALLBACK_MATCH_CAP));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let a = project("A", &["Rust"], Difficulty::Beginner, None);
        let b = project("B", &["Rust"], Difficulty::Beginner, None);
        let c = project("C", &["Rust"], Difficulty::Beginner, None);
        let ids = vec![a.id, b.id, c.id];
        let entries = score_candidates(&student(&["Go"]), &[a, b, c]);
        let got: Vec<Uuid> = entries.iter().map(|e| e.project_id).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn test_fewer_candidates_than_cap() {
        let entries = score_candidates(&student(&["React"]), &[task_manager(), task_manager()]);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_catalog_gives_empty_output() {
        assert!(score_candidates(&student(&["React"]), &[]).is_empty());
    }

    #[tokio::test]
    async fn test_strategy_impl_matches_free_function() {
        let profile = student(&["React"]);
        let catalog = vec![task_manager()];
        let via_trait = FallbackScorer.recommend(&profile, &catalog).await.unwrap();
        assert_eq!(via_trait, score_candidates(&profile, &catalog));
    }
}
