use crate::state::{cancellable, FetchScope};
use bookmyseat_client::{ApiError, ReviewClient};
use bookmyseat_models::{RatingSummary, STAR_LEVELS};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// One row of the rating histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBar {
    pub stars: u8,
    pub count: u64,
    pub percentage: f64,
}

/// Histogram rows from 5 stars down to 1. Empty when there are no reviews.
pub fn rating_bars(summary: Option<&RatingSummary>) -> Vec<RatingBar> {
    let summary = match summary {
        Some(summary) if summary.total_reviews > 0 => summary,
        _ => return Vec::new(),
    };

    let total = summary.total_reviews as f64;
    STAR_LEVELS
        .iter()
        .map(|&stars| {
            let count = summary.count_for(stars);
            RatingBar {
                stars,
                count,
                percentage: count as f64 * 100.0 / total,
            }
        })
        .collect()
}

pub struct RatingSummaryView {
    client: ReviewClient,
    movie_id: u64,
    summary: Option<RatingSummary>,
    is_loading: bool,
    scope: FetchScope,
}

impl RatingSummaryView {
    pub fn new(client: ReviewClient, movie_id: u64) -> Self {
        Self {
            client,
            movie_id,
            summary: None,
            is_loading: false,
            scope: FetchScope::new(),
        }
    }

    pub fn summary(&self) -> Option<&RatingSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Derived from the latest fetched summary on every call
    pub fn distribution(&self) -> Vec<RatingBar> {
        rating_bars(self.summary.as_ref())
    }

    pub async fn load(&mut self) {
        self.is_loading = true;
        let token = self.scope.restart();
        let result = cancellable(token, self.client.get_rating_summary(self.movie_id)).await;
        self.is_loading = false;

        match result {
            Ok(summary) => {
                if !summary.is_consistent() {
                    debug!(movie_id = self.movie_id, "Rating distribution does not add up to the review total");
                }
                self.summary = Some(summary);
            }
            Err(ApiError::Cancelled) => debug!(movie_id = self.movie_id, "Rating summary load cancelled"),
            Err(e) => error!(movie_id = self.movie_id, kind = ?e.kind(), "Error loading rating summary: {}", e),
        }
    }

    /// Re-fetch after a review was submitted elsewhere in the page
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    pub fn cancel(&self) {
        self.scope.cancel();
    }

    /// Ties this view's fetches to `parent`'s cancellation
    pub fn attach(&mut self, parent: &CancellationToken) {
        self.scope = FetchScope::within(parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{harness, rating_summary};
    use serde_json::json;

    #[test]
    fn test_percentages_for_twenty_reviews() {
        let summary: RatingSummary = serde_json::from_value(rating_summary(
            1,
            20,
            json!({"5": 10, "4": 5, "3": 3, "2": 1, "1": 1}),
        ))
        .unwrap();

        let bars = rating_bars(Some(&summary));

        let stars: Vec<u8> = bars.iter().map(|b| b.stars).collect();
        let percentages: Vec<f64> = bars.iter().map(|b| b.percentage).collect();
        assert_eq!(stars, vec![5, 4, 3, 2, 1]);
        assert_eq!(percentages, vec![50.0, 25.0, 15.0, 5.0, 5.0]);
        assert_eq!(bars[2].count, 3);
    }

    #[test]
    fn test_no_reviews_gives_empty_chart() {
        let summary: RatingSummary = serde_json::from_value(rating_summary(1, 0, json!({}))).unwrap();
        assert!(rating_bars(Some(&summary)).is_empty());
        assert!(rating_bars(None).is_empty());
    }

    #[test]
    fn test_percentages_never_exceed_hundred() {
        let summary: RatingSummary =
            serde_json::from_value(rating_summary(1, 3, json!({"5": 1, "3": 1, "1": 1}))).unwrap();
        let total: f64 = rating_bars(Some(&summary)).iter().map(|b| b.percentage).sum();
        assert!(total <= 100.0 + 1e-9);
    }

    #[tokio::test]
    async fn test_refresh_recomputes_from_latest_summary() {
        let h = harness();
        h.stub.respond_json("GET", "/reviews/movie/9/rating", 200, rating_summary(9, 1, json!({"5": 1})));
        h.stub.respond_json("GET", "/reviews/movie/9/rating", 200, rating_summary(9, 2, json!({"5": 1, "1": 1})));
        let mut view = RatingSummaryView::new(h.services.reviews.clone(), 9);

        view.load().await;
        assert_eq!(view.distribution()[0].percentage, 100.0);

        view.refresh().await;
        assert_eq!(view.distribution()[0].percentage, 50.0);
        assert_eq!(view.distribution()[4].count, 1);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_failure_clears_loading_and_keeps_summary() {
        let h = harness();
        h.stub.respond_json("GET", "/reviews/movie/9/rating", 200, rating_summary(9, 1, json!({"4": 1})));
        h.stub.respond_status("GET", "/reviews/movie/9/rating", 503);
        let mut view = RatingSummaryView::new(h.services.reviews.clone(), 9);

        view.load().await;
        view.refresh().await;

        assert!(!view.is_loading());
        assert_eq!(view.summary().unwrap().total_reviews, 1);
        assert_eq!(h.notifier.messages().len(), 1);
        assert!(h.notifier.messages()[0].starts_with("Error 503: "));
    }
}
