use crate::api::ApiClient;
use crate::error::ApiError;
use crate::loading::LoadingFlag;
use bookmyseat_models::{RatingSummary, Review, ReviewPage, ReviewSubmission};

pub const DEFAULT_PAGE_SIZE: u32 = bookmyseat_config::DEFAULT_PAGE_SIZE;

/// Client for the review service.
///
/// Reads and writes are tracked by separate flags so a submission in flight
/// does not block unrelated read views.
#[derive(Clone)]
pub struct ReviewClient {
    api: ApiClient,
    loading: LoadingFlag,
    submitting: LoadingFlag,
}

impl ReviewClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            loading: LoadingFlag::new(),
            submitting: LoadingFlag::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn submitting_flag(&self) -> LoadingFlag {
        self.submitting.clone()
    }

    pub async fn list_reviews(&self, movie_id: u64, page: u32, size: u32) -> Result<ReviewPage, ApiError> {
        let _in_flight = self.loading.begin();
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("size".to_string(), size.to_string()),
        ];
        self.api.get(&format!("/reviews/movie/{}", movie_id), query).await
    }

    /// Not tracked by the loading flag, matching the deployed frontend.
    pub async fn get_rating_summary(&self, movie_id: u64) -> Result<RatingSummary, ApiError> {
        self.api.get(&format!("/reviews/movie/{}/rating", movie_id), Vec::new()).await
    }

    /// Posts a submission and returns the review as stored by the server.
    /// Validation is the caller's job.
    pub async fn submit_review(&self, submission: &ReviewSubmission) -> Result<Review, ApiError> {
        let _in_flight = self.submitting.begin();
        self.api.post("/reviews", submission).await
    }
}
