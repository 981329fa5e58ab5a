//! Fixed advice lines per profile.

use crate::types::Profile;

/// Exactly two advice lines for each profile.
pub fn recommend(profile: Profile) -> &'static [&'static str] {
    match profile {
        Profile::Beginner => &[
            "As a beginner, focus on understanding your target market and refining your business idea.",
            "Consider seeking mentorship from experienced entrepreneurs to guide you.",
        ],
        Profile::Intermediate => &[
            "Explore various funding options and fine-tune your business plan.",
            "Networking events and industry conferences can help you expand your connections.",
        ],
        Profile::Advanced => &[
            "Optimize your operational processes and invest in advanced marketing strategies.",
            "Consider partnerships and collaborations for business growth.",
        ],
    }
}
