//! Static catalog of the ten steps in the new-business guide.
//!
//! The catalog is fixed at compile time: steps are never created, reordered,
//! or removed at runtime. Display order is the 1-indexed order below.

use serde::Serialize;

/// Returned by [`description`] when the step name is not in the catalog.
pub const FALLBACK_DESCRIPTION: &str = "No detailed information available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: u8,
    pub name: &'static str,
    pub description: &'static str,
}

const STEPS: [Step; 10] = [
    Step {
        index: 1,
        name: "Define Your Business Idea",
        description: "Start by brainstorming and refining your business concept. Identify your target audience and unique value proposition.",
    },
    Step {
        index: 2,
        name: "Conduct Market Research",
        description: "Research your industry, competitors, and target market. Understand customer needs, preferences, and trends.",
    },
    Step {
        index: 3,
        name: "Create a Business Plan",
        description: "Develop a comprehensive business plan outlining your goals, strategies, financial projections, and marketing plan.",
    },
    Step {
        index: 4,
        name: "Legal Structure and Registration",
        description: "Choose a legal structure for your business (e.g., LLC, corporation) and complete the necessary registrations and licenses.",
    },
    Step {
        index: 5,
        name: "Secure Funding",
        description: "Explore funding options such as loans, investors, or bootstrap. Develop a financial plan to support your business needs.",
    },
    Step {
        index: 6,
        name: "Build Your Team",
        description: "Assemble a skilled and motivated team. Clearly define roles and responsibilities, fostering a positive and collaborative culture.",
    },
    Step {
        index: 7,
        name: "Develop Your Product or Service",
        description: "Create a high-quality product or service that meets customer needs. Test and iterate to ensure quality and relevance.",
    },
    Step {
        index: 8,
        name: "Create a Marketing Plan",
        description: "Craft a marketing strategy to promote your business. Utilize online and offline channels to reach your target audience.",
    },
    Step {
        index: 9,
        name: "Set Up Operations",
        description: "Establish efficient operational processes, including inventory management, supply chain, and customer service.",
    },
    Step {
        index: 10,
        name: "Launch Your Business",
        description: "Execute your launch plan, leveraging marketing channels and engaging with your audience. Monitor and adapt based on feedback.",
    },
];

/// All ten steps in display order.
pub fn steps() -> &'static [Step] {
    &STEPS
}

/// Look up a step by its catalog name.
pub fn find(name: &str) -> Option<&'static Step> {
    STEPS.iter().find(|s| s.name == name)
}

/// Look up a step by its 1-based display index.
pub fn by_index(index: usize) -> Option<&'static Step> {
    if (1..=STEPS.len()).contains(&index) {
        Some(&STEPS[index - 1])
    } else {
        None
    }
}

/// Detailed description for a step name, with a defensive default for names
/// outside the fixed set.
pub fn description(name: &str) -> &'static str {
    find(name).map(|s| s.description).unwrap_or(FALLBACK_DESCRIPTION)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
