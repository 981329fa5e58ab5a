//! Per-session completion tracking and the derived achievement set.
//!
//! Entries are keyed by (step name, profile) so each profile keeps its own
//! checklist over the same ten steps. State lives only for the lifetime of a
//! guide session; nothing here touches disk.

use crate::catalog;
use crate::types::{Achievement, Profile};
use serde::Serialize;
use std::collections::BTreeMap;

pub const STEP_COUNT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct CompletionState {
    entries: BTreeMap<(String, Profile), bool>,
}

/// Summary of one profile's progress, shaped for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub profile: Profile,
    pub total_completed: usize,
    pub is_complete: bool,
    pub achievements: Vec<AchievementView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementView {
    pub achievement: Achievement,
    pub name: &'static str,
    pub criteria: String,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the completion flag for a (step, profile) pair. Overwrites any
    /// prior value; setting the same value twice is a no-op.
    pub fn set(&mut self, step_name: &str, profile: Profile, completed: bool) {
        self.entries
            .insert((step_name.to_string(), profile), completed);
    }

    /// Absent entries read as not completed.
    pub fn is_completed(&self, step_name: &str, profile: Profile) -> bool {
        self.entries
            .get(&(step_name.to_string(), profile))
            .copied()
            .unwrap_or(false)
    }

    /// Count of completed catalog steps for the profile. Only names in the
    /// fixed catalog are counted, so the result is always in [0, 10].
    pub fn total_completed(&self, profile: Profile) -> usize {
        catalog::steps()
            .iter()
            .filter(|s| self.is_completed(s.name, profile))
            .count()
    }

    pub fn is_complete(&self, profile: Profile) -> bool {
        self.total_completed(profile) == STEP_COUNT
    }

    /// Apply the unlock table in listing order.
    ///
    /// "Milestone Achiever" and "Completionist" are listed regardless of
    /// progress; their criteria text carries the gate. "Master Entrepreneur"
    /// only appears once every step is done.
    pub fn achievements(&self, profile: Profile) -> Vec<Achievement> {
        let total = self.total_completed(profile);
        let mut unlocked = Vec::new();
        if total >= 1 {
            unlocked.push(Achievement::ProgressStarter);
        }
        unlocked.push(Achievement::MilestoneAchiever);
        unlocked.push(Achievement::Completionist);
        if total == STEP_COUNT {
            unlocked.push(Achievement::MasterEntrepreneur);
        }
        unlocked
    }

    /// Chart-ready series: one (name, completed) point per catalog step.
    pub fn completion_series(&self, profile: Profile) -> Vec<(&'static str, bool)> {
        catalog::steps()
            .iter()
            .map(|s| (s.name, self.is_completed(s.name, profile)))
            .collect()
    }

    pub fn summary(&self, profile: Profile) -> ProgressSummary {
        let total = self.total_completed(profile);
        let achievements = self
            .achievements(profile)
            .into_iter()
            .map(|a| AchievementView {
                achievement: a,
                name: a.display_name(),
                criteria: a.criteria(total),
            })
            .collect();
        ProgressSummary {
            profile,
            total_completed: total,
            is_complete: total == STEP_COUNT,
            achievements,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_all(state: &mut CompletionState, profile: Profile) {
        for step in catalog::steps() {
            state.set(step.name, profile, true);
        }
    }

    #[test]
    fn empty_state_counts_zero() {
        let state = CompletionState::new();
        assert_eq!(state.total_completed(Profile::Beginner), 0);
        assert!(!state.is_complete(Profile::Beginner));
    }

    #[test]
    fn total_tracks_set_entries() {
        let mut state = CompletionState::new();
        state.set("Define Your Business Idea", Profile::Beginner, true);
        state.set("Secure Funding", Profile::Beginner, true);
        assert_eq!(state.total_completed(Profile::Beginner), 2);
    }

    #[test]
    fn toggling_is_idempotent() {
        let mut state = CompletionState::new();
        state.set("Secure Funding", Profile::Beginner, true);
        state.set("Secure Funding", Profile::Beginner, true);
        assert_eq!(state.total_completed(Profile::Beginner), 1);

        state.set("Secure Funding", Profile::Beginner, false);
        state.set("Secure Funding", Profile::Beginner, false);
        assert_eq!(state.total_completed(Profile::Beginner), 0);
    }

    #[test]
    fn profiles_are_independent() {
        let mut state = CompletionState::new();
        state.set("Build Your Team", Profile::Beginner, true);
        assert_eq!(state.total_completed(Profile::Beginner), 1);
        assert_eq!(state.total_completed(Profile::Advanced), 0);
    }

    #[test]
    fn non_catalog_names_never_count() {
        let mut state = CompletionState::new();
        state.set("Made Up Step", Profile::Beginner, true);
        assert_eq!(state.total_completed(Profile::Beginner), 0);
    }

    #[test]
    fn complete_then_undo_one() {
        let mut state = CompletionState::new();
        complete_all(&mut state, Profile::Intermediate);
        assert!(state.is_complete(Profile::Intermediate));

        state.set("Launch Your Business", Profile::Intermediate, false);
        assert!(!state.is_complete(Profile::Intermediate));
        assert_eq!(state.total_completed(Profile::Intermediate), 9);
    }

    #[test]
    fn achievements_at_zero() {
        let state = CompletionState::new();
        let unlocked = state.achievements(Profile::Beginner);
        assert_eq!(
            unlocked,
            vec![Achievement::MilestoneAchiever, Achievement::Completionist]
        );
    }

    #[test]
    fn progress_starter_unlocks_at_one() {
        let mut state = CompletionState::new();
        state.set("Define Your Business Idea", Profile::Beginner, true);
        let unlocked = state.achievements(Profile::Beginner);
        assert_eq!(unlocked[0], Achievement::ProgressStarter);
        assert!(!unlocked.contains(&Achievement::MasterEntrepreneur));
    }

    #[test]
    fn master_entrepreneur_only_at_ten() {
        let mut state = CompletionState::new();
        complete_all(&mut state, Profile::Advanced);
        assert!(state
            .achievements(Profile::Advanced)
            .contains(&Achievement::MasterEntrepreneur));

        state.set("Secure Funding", Profile::Advanced, false);
        assert!(!state
            .achievements(Profile::Advanced)
            .contains(&Achievement::MasterEntrepreneur));
    }

    #[test]
    fn completion_series_covers_all_steps() {
        let mut state = CompletionState::new();
        state.set("Conduct Market Research", Profile::Beginner, true);
        let series = state.completion_series(Profile::Beginner);
        assert_eq!(series.len(), 10);
        assert!(!series[0].1);
        assert!(series[1].1);
    }

    #[test]
    fn summary_interpolates_criteria() {
        let mut state = CompletionState::new();
        state.set("Define Your Business Idea", Profile::Beginner, true);
        state.set("Conduct Market Research", Profile::Beginner, true);
        let summary = state.summary(Profile::Beginner);
        assert_eq!(summary.total_completed, 2);
        let milestone = summary
            .achievements
            .iter()
            .find(|a| a.achievement == Achievement::MilestoneAchiever)
            .unwrap();
        assert_eq!(milestone.criteria, "Reach halfway with 2 steps completed.");
    }
}
