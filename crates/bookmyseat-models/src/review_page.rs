use serde::{Deserialize, Serialize};
use crate::review::Review;

/// One page of a movie's reviews. Pages are 0-based.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl ReviewPage {
    /// `last` must be set exactly on the final page, or whenever there are no reviews.
    pub fn is_consistent(&self) -> bool {
        if self.total_reviews == 0 {
            return self.last;
        }
        self.last == (self.total_pages > 0 && self.page == self.total_pages - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, total_pages: u32, total_reviews: u64, last: bool) -> ReviewPage {
        ReviewPage {
            reviews: Vec::new(),
            average_rating: 0.0,
            total_reviews,
            page,
            total_pages,
            size: 10,
            first: page == 0,
            last,
        }
    }

    #[test]
    fn test_last_flag_consistency() {
        assert!(page(2, 3, 25, true).is_consistent());
        assert!(page(1, 3, 25, false).is_consistent());
        assert!(!page(1, 3, 25, true).is_consistent());
        assert!(!page(2, 3, 25, false).is_consistent());
    }

    #[test]
    fn test_empty_page_must_be_last() {
        assert!(page(0, 0, 0, true).is_consistent());
        assert!(!page(0, 0, 0, false).is_consistent());
    }
}
