//! Synthetic engagement series for the demo chart.
//!
//! The values are a fixed fixture standing in for real analytics; nothing is
//! measured. Keep the numbers as-is for output compatibility.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngagementPoint {
    pub index: usize,
    pub page_views: u32,
    pub time_spent_minutes: u32,
}

const PAGE_VIEWS: [u32; 5] = [100, 150, 200, 180, 220];
const TIME_SPENT_MINUTES: [u32; 5] = [10, 15, 18, 12, 20];

/// The five-point fixture, indexed from 0.
pub fn sample() -> Vec<EngagementPoint> {
    PAGE_VIEWS
        .iter()
        .zip(TIME_SPENT_MINUTES.iter())
        .enumerate()
        .map(|(index, (&page_views, &time_spent_minutes))| EngagementPoint {
            index,
            page_views,
            time_spent_minutes,
        })
        .collect()
}
