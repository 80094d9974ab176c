use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Star levels in display order, best first.
pub const STAR_LEVELS: [u8; 5] = [5, 4, 3, 2, 1];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub movie_id: u64,
    #[serde(default)]
    pub movie_title: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    /// Keyed by star level as a string, "1" through "5".
    #[serde(default)]
    pub rating_distribution: HashMap<String, u64>,
}

impl RatingSummary {
    pub fn count_for(&self, stars: u8) -> u64 {
        self.rating_distribution
            .get(&stars.to_string())
            .copied()
            .unwrap_or(0)
    }

    pub fn is_consistent(&self) -> bool {
        let sum: u64 = STAR_LEVELS.iter().map(|s| self.count_for(*s)).sum();
        sum == self.total_reviews
    }
}
