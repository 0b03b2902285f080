//! Project-level rollups over progress steps. Order is first appearance in the input.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::progress::ProgressRow;

/// Every project the student has steps for.
pub fn started_project_ids(steps: &[ProgressRow]) -> Vec<Uuid> {
    distinct_project_ids(steps.iter())
}

/// Projects with at least one completed step.
pub fn completed_project_ids(steps: &[ProgressRow]) -> Vec<Uuid> {
    distinct_project_ids(steps.iter().filter(|s| s.is_completed))
}

/// Projects with at least one open step. A project can be both completed and in progress.
pub fn open_project_ids(steps: &[ProgressRow]) -> Vec<Uuid> {
    distinct_project_ids(steps.iter().filter(|s| !s.is_completed))
}

fn distinct_project_ids<'a>(steps: impl Iterator<Item = &'a ProgressRow>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    steps
        .map(|s| s.project_id)
        .filter(|id| seen.insert(*id))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::step;
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_rollups() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let steps = vec![
            step(a, 1, Some(Utc::now())),
            step(a, 2, None),
            step(b, 1, Some(Utc::now())),
            step(b, 2, Some(Utc::now())),
            step(c, 1, None),
        ];
        assert_eq!(started_project_ids(&steps), vec![a, b, c]);
        assert_eq!(completed_project_ids(&steps), vec![a, b]);
        assert_eq!(open_project_ids(&steps), vec![a, c]);
    }

    #[test]
    fn test_empty_progress() {
        assert!(started_project_ids(&[]).is_empty());
        assert!(completed_project_ids(&[]).is_empty());
    }
}
