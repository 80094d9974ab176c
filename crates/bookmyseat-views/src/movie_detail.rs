use crate::rating_summary::RatingSummaryView;
use crate::review_form::SubmitOutcome;
use crate::review_list::{ReviewListEvent, ReviewListView};
use crate::state::{cancellable, FetchScope, RequestState};
use bookmyseat_client::{ApiError, ErrorKind, MovieCatalogClient, Services};
use bookmyseat_config::ReviewOptions;
use bookmyseat_models::{MovieDetail, Showtime};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// One movie with its showtimes, rating histogram and reviews.
///
/// The three sections load concurrently and each only touches its own state.
pub struct MovieDetailView {
    movies: MovieCatalogClient,
    movie_id: u64,
    movie: RequestState<MovieDetail>,
    rating_summary: RatingSummaryView,
    reviews: ReviewListView,
    scope: FetchScope,
}

impl MovieDetailView {
    pub fn new(services: &Services, movie_id: u64, options: &ReviewOptions) -> Self {
        let scope = FetchScope::new();
        let handle = scope.handle();

        let mut rating_summary = RatingSummaryView::new(services.reviews.clone(), movie_id);
        rating_summary.attach(&handle);
        let mut reviews = ReviewListView::new(services.reviews.clone(), movie_id, options);
        reviews.attach(&handle);

        Self {
            movies: services.movies.clone(),
            movie_id,
            movie: RequestState::Idle,
            rating_summary,
            reviews,
            scope,
        }
    }

    pub fn movie_id(&self) -> u64 {
        self.movie_id
    }

    pub fn movie(&self) -> Option<&MovieDetail> {
        self.movie.value()
    }

    pub fn movie_state(&self) -> &RequestState<MovieDetail> {
        &self.movie
    }

    pub fn showtimes(&self) -> &[Showtime] {
        self.movie().map(|m| m.showtimes.as_slice()).unwrap_or_default()
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.movie.error()
    }

    pub fn is_loading(&self) -> bool {
        self.movies.is_loading()
    }

    pub fn rating_summary(&self) -> &RatingSummaryView {
        &self.rating_summary
    }

    pub fn reviews(&self) -> &ReviewListView {
        &self.reviews
    }

    pub fn reviews_mut(&mut self) -> &mut ReviewListView {
        &mut self.reviews
    }

    /// Cancels every fetch of this view, including the embedded sections
    pub fn cancel_handle(&self) -> CancellationToken {
        self.scope.handle()
    }

    pub async fn init(&mut self) {
        let Self {
            movies,
            movie_id,
            movie,
            rating_summary,
            reviews,
            scope,
        } = self;

        let previous = std::mem::replace(movie, RequestState::Pending);
        let token = scope.restart();
        let fetch = cancellable(token, movies.get_movie(*movie_id));
        let (result, (), ()) = tokio::join!(fetch, rating_summary.load(), reviews.init());

        *movie = match result {
            Ok(detail) => {
                debug!(movie_id = *movie_id, showtimes = detail.showtimes.len(), "Movie loaded");
                RequestState::Ready(detail)
            }
            Err(ApiError::Cancelled) => {
                debug!(movie_id = *movie_id, "Movie load cancelled");
                previous
            }
            Err(e) => {
                error!(movie_id = *movie_id, kind = ?e.kind(), "Error loading movie: {}", e);
                RequestState::Failed(e.kind())
            }
        };
    }

    /// Submits the embedded review form and refreshes the histogram once the list reports it
    pub async fn submit_review(&mut self) -> SubmitOutcome {
        let outcome = self.reviews.submit_review().await;
        for event in self.reviews.take_events() {
            match event {
                ReviewListEvent::ReviewSubmitted => self.on_review_submitted().await,
            }
        }
        outcome
    }

    pub async fn on_review_submitted(&mut self) {
        self.rating_summary.refresh().await;
    }

    pub fn cancel(&self) {
        self.scope.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{harness, movie_detail, rating_summary, review, review_page};
    use serde_json::json;

    fn script_detail(h: &crate::fixtures::Harness) {
        h.stub.respond_json("GET", "/movies/7", 200, movie_detail(7, "Heat"));
        h.stub.respond_json(
            "GET",
            "/reviews/movie/7/rating",
            200,
            rating_summary(7, 2, json!({"5": 1, "4": 1})),
        );
        h.stub.respond_json("GET", "/reviews/movie/7", 200, review_page(7, 0, 1, 2, &[1, 2]));
    }

    #[tokio::test]
    async fn test_init_loads_every_section() {
        let h = harness();
        script_detail(&h);
        let mut view = MovieDetailView::new(&h.services, 7, &ReviewOptions::default());

        view.init().await;

        assert_eq!(view.movie().unwrap().movie.title, "Heat");
        assert_eq!(view.showtimes().len(), 1);
        assert_eq!(view.rating_summary().summary().unwrap().total_reviews, 2);
        assert_eq!(view.reviews().reviews().len(), 2);
        assert!(view.error().is_none());
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_sections_are_requested_concurrently() {
        let h = harness();
        script_detail(&h);
        let gate = h.stub.hold();
        let mut view = MovieDetailView::new(&h.services, 7, &ReviewOptions::default());

        {
            let init = view.init();
            futures::pin_mut!(init);
            assert!(futures::poll!(init.as_mut()).is_pending());
            assert_eq!(h.stub.requests().len(), 3);

            gate.release(3);
            init.await;
        }

        assert!(view.movie().is_some());
    }

    #[tokio::test]
    async fn test_missing_movie_shows_nothing_and_notifies() {
        let h = harness();
        h.stub.respond_status("GET", "/movies/42", 404);
        let mut view = MovieDetailView::new(&h.services, 42, &ReviewOptions::default());

        view.init().await;

        assert!(view.movie().is_none());
        assert_eq!(view.error(), Some(ErrorKind::NotFound));
        assert!(h.notifier.messages().contains(&"Resource not found".to_string()));
    }

    #[tokio::test]
    async fn test_cancel_handle_stops_all_sections() {
        let h = harness();
        script_detail(&h);
        let _gate = h.stub.hold();
        let mut view = MovieDetailView::new(&h.services, 7, &ReviewOptions::default());
        let handle = view.cancel_handle();

        {
            let init = view.init();
            futures::pin_mut!(init);
            assert!(futures::poll!(init.as_mut()).is_pending());
            handle.cancel();
            init.await;
        }

        assert_eq!(view.movie_state(), &RequestState::Idle);
        assert!(view.rating_summary().summary().is_none());
        assert!(view.reviews().reviews().is_empty());
        assert!(!view.is_loading());
        assert!(!h.services.reviews.is_loading());
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitted_review_refreshes_rating_summary() {
        let h = harness();
        script_detail(&h);
        h.stub.respond_json(
            "GET",
            "/reviews/movie/7/rating",
            200,
            rating_summary(7, 3, json!({"5": 2, "4": 1})),
        );
        h.stub.respond_json("POST", "/reviews", 201, review(3, 7, 5));
        let mut view = MovieDetailView::new(&h.services, 7, &ReviewOptions::default());
        view.init().await;

        let form = view.reviews_mut().form_mut();
        form.set_user_name("ash");
        form.rating_input_mut().click(5);
        let outcome = view.submit_review().await;

        assert!(outcome.is_submitted());
        assert_eq!(h.stub.request_count("GET", "/reviews/movie/7/rating"), 2);
        assert_eq!(view.rating_summary().summary().unwrap().total_reviews, 3);
    }
}
