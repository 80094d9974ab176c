use crate::review_form::{ReviewFormView, SubmitOutcome};
use crate::state::{cancellable, FetchScope};
use bookmyseat_client::{ApiError, ReviewClient};
use bookmyseat_config::ReviewOptions;
use bookmyseat_models::Review;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Notifications for the view that embeds the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewListEvent {
    ReviewSubmitted,
}

/// Paged reviews for one movie with the submission form underneath.
///
/// Loading a page replaces the displayed reviews; pages are not accumulated.
pub struct ReviewListView {
    client: ReviewClient,
    movie_id: u64,
    page_size: u32,
    refresh_delay: Duration,
    reviews: Vec<Review>,
    current_page: u32,
    total_pages: u32,
    total_reviews: u64,
    is_last_page: bool,
    is_loading: bool,
    form: ReviewFormView,
    events: Vec<ReviewListEvent>,
    scope: FetchScope,
}

impl ReviewListView {
    pub fn new(client: ReviewClient, movie_id: u64, options: &ReviewOptions) -> Self {
        let form = ReviewFormView::new(client.clone(), movie_id, options.success_message_duration());
        Self {
            client,
            movie_id,
            page_size: options.page_size,
            refresh_delay: options.refresh_delay(),
            reviews: Vec::new(),
            current_page: 0,
            total_pages: 0,
            total_reviews: 0,
            is_last_page: false,
            is_loading: false,
            form,
            events: Vec::new(),
            scope: FetchScope::new(),
        }
    }

    pub async fn init(&mut self) {
        self.load_reviews().await;
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_reviews(&self) -> u64 {
        self.total_reviews
    }

    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn form(&self) -> &ReviewFormView {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReviewFormView {
        &mut self.form
    }

    /// Drains notifications raised since the last call
    pub fn take_events(&mut self) -> Vec<ReviewListEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fetches the current page and replaces the displayed reviews with it
    pub async fn load_reviews(&mut self) {
        self.is_loading = true;
        let token = self.scope.restart();
        let result = cancellable(
            token,
            self.client.list_reviews(self.movie_id, self.current_page, self.page_size),
        )
        .await;
        self.is_loading = false;

        match result {
            Ok(page) => {
                debug!(movie_id = self.movie_id, page = page.page, count = page.reviews.len(), "Reviews loaded");
                self.reviews = page.reviews;
                self.total_pages = page.total_pages;
                self.total_reviews = page.total_reviews;
                self.is_last_page = page.last;
            }
            Err(ApiError::Cancelled) => debug!(movie_id = self.movie_id, "Review load cancelled"),
            Err(e) => {
                error!(movie_id = self.movie_id, kind = ?e.kind(), "Error loading reviews: {}", e);
                self.reviews.clear();
                self.total_reviews = 0;
            }
        }
    }

    /// Advances to the next page. Does nothing on the last page.
    pub async fn load_more(&mut self) -> bool {
        if self.is_last_page {
            return false;
        }
        self.current_page += 1;
        self.load_reviews().await;
        true
    }

    /// Jumps straight to `page` (0-based)
    pub async fn load_page(&mut self, page: u32) {
        self.current_page = page;
        self.load_reviews().await;
    }

    /// Back to the first page once the backend has had time to store the new review,
    /// then tells the parent so sibling views can refresh.
    /// Nothing is raised if the view is cancelled meanwhile.
    pub async fn on_review_submitted(&mut self) {
        self.current_page = 0;
        let view = self.scope.handle();
        tokio::select! {
            biased;
            _ = view.cancelled() => {
                debug!(movie_id = self.movie_id, "Review refresh cancelled");
                return;
            }
            _ = tokio::time::sleep(self.refresh_delay) => {}
        }
        self.load_reviews().await;
        if self.scope.is_cancelled() {
            return;
        }
        self.events.push(ReviewListEvent::ReviewSubmitted);
    }

    pub async fn submit_review(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit().await;
        if outcome.is_submitted() {
            self.on_review_submitted().await;
        }
        outcome
    }

    pub fn cancel(&self) {
        self.scope.cancel();
        self.form.cancel();
    }

    /// Ties this view's fetches to `parent`'s cancellation
    pub fn attach(&mut self, parent: &CancellationToken) {
        self.scope = FetchScope::within(parent);
        self.form.attach(parent);
    }
}
