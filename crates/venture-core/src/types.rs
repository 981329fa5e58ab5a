use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Beginner,
    Intermediate,
    Advanced,
}

impl Profile {
    pub fn all() -> &'static [Profile] {
        &[Profile::Beginner, Profile::Intermediate, Profile::Advanced]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Beginner => "beginner",
            Profile::Intermediate => "intermediate",
            Profile::Advanced => "advanced",
        }
    }

    /// Human-facing label, e.g. for the "Engagement Level" line.
    pub fn display_name(self) -> &'static str {
        match self {
            Profile::Beginner => "Beginner",
            Profile::Intermediate => "Intermediate",
            Profile::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = crate::error::GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Profile::Beginner),
            "intermediate" => Ok(Profile::Intermediate),
            "advanced" => Ok(Profile::Advanced),
            _ => Err(crate::error::GuideError::InvalidProfile(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// Guides the tool knows how to walk through. Only one exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Project {
    NewBusiness,
}

impl Project {
    pub fn as_str(self) -> &'static str {
        match self {
            Project::NewBusiness => "New Business",
        }
    }

    /// Lenient lookup for user-supplied project selections. Unrecognized
    /// values are a silent no-op at the view layer, so this returns `None`
    /// rather than an error.
    pub fn parse_opt(s: &str) -> Option<Project> {
        match s {
            "New Business" | "new-business" | "new_business" => Some(Project::NewBusiness),
            _ => None,
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Achievement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    ProgressStarter,
    MilestoneAchiever,
    Completionist,
    MasterEntrepreneur,
}

impl Achievement {
    pub fn all() -> &'static [Achievement] {
        &[
            Achievement::ProgressStarter,
            Achievement::MilestoneAchiever,
            Achievement::Completionist,
            Achievement::MasterEntrepreneur,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Achievement::ProgressStarter => "progress_starter",
            Achievement::MilestoneAchiever => "milestone_achiever",
            Achievement::Completionist => "completionist",
            Achievement::MasterEntrepreneur => "master_entrepreneur",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Achievement::ProgressStarter => "Progress Starter",
            Achievement::MilestoneAchiever => "Milestone Achiever",
            Achievement::Completionist => "Completionist",
            Achievement::MasterEntrepreneur => "Master Entrepreneur",
        }
    }

    /// The criteria line shown next to the badge. The Milestone Achiever text
    /// interpolates the current completed-step total.
    pub fn criteria(self, total_completed: usize) -> String {
        match self {
            Achievement::ProgressStarter => {
                "Begin your journey by completing your first step.".to_string()
            }
            Achievement::MilestoneAchiever => {
                format!("Reach halfway with {total_completed} steps completed.")
            }
            Achievement::Completionist => "Complete all steps!".to_string(),
            Achievement::MasterEntrepreneur => {
                "Successfully complete all steps and launch your business!".to_string()
            }
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn profile_roundtrip() {
        for profile in Profile::all() {
            let parsed = Profile::from_str(profile.as_str()).unwrap();
            assert_eq!(*profile, parsed);
        }
    }

    #[test]
    fn profile_parse_is_case_insensitive() {
        assert_eq!(Profile::from_str("Beginner").unwrap(), Profile::Beginner);
        assert_eq!(Profile::from_str("ADVANCED").unwrap(), Profile::Advanced);
    }

    #[test]
    fn unknown_profile_rejected() {
        assert!(Profile::from_str("expert").is_err());
        assert!(Profile::from_str("").is_err());
    }

    #[test]
    fn project_parse_opt() {
        assert_eq!(Project::parse_opt("New Business"), Some(Project::NewBusiness));
        assert_eq!(Project::parse_opt("new-business"), Some(Project::NewBusiness));
        assert_eq!(Project::parse_opt("Old Business"), None);
    }

    #[test]
    fn achievement_criteria_interpolates_total() {
        let line = Achievement::MilestoneAchiever.criteria(5);
        assert_eq!(line, "Reach halfway with 5 steps completed.");
    }

    #[test]
    fn achievement_all_complete() {
        assert_eq!(Achievement::all().len(), 4);
    }
}
