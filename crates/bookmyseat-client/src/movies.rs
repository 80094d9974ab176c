use crate::api::ApiClient;
use crate::error::ApiError;
use crate::loading::LoadingFlag;
use bookmyseat_models::{Movie, MovieDetail, MovieFilter, MoviesResponse, Showtime, ShowtimeFilter, ShowtimesResponse};
use tracing::debug;

/// Client for the movie catalog service.
#[derive(Clone)]
pub struct MovieCatalogClient {
    api: ApiClient,
    loading: LoadingFlag,
}

impl MovieCatalogClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            loading: LoadingFlag::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// `GET /movies`, sending only the filter values that narrow the list
    pub async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, ApiError> {
        let _in_flight = self.loading.begin();
        let response: MoviesResponse = self.api.get("/movies", filter.query_pairs()).await?;
        debug!(count = response.movies.len(), "Loaded movies");
        Ok(response.movies)
    }

    pub async fn get_movie(&self, id: u64) -> Result<MovieDetail, ApiError> {
        let _in_flight = self.loading.begin();
        self.api.get(&format!("/movies/{}", id), Vec::new()).await
    }

    /// Not tracked by the loading flag, matching the deployed frontend.
    pub async fn list_showtimes(&self, filter: &ShowtimeFilter) -> Result<Vec<Showtime>, ApiError> {
        let response: ShowtimesResponse = self.api.get("/showtimes", filter.query_pairs()).await?;
        Ok(response.showtimes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingNotifier, StubTransport};
    use crate::notify::ErrorHandler;
    use crate::transport::Transport;
    use serde_json::json;
    use std::sync::Arc;

    fn client(stub: &StubTransport) -> (MovieCatalogClient, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let errors = ErrorHandler::new(notifier.clone());
        let transport: Arc<dyn Transport> = Arc::new(crate::ErrorInterceptor::new(stub.clone(), errors.clone()));
        (MovieCatalogClient::new(ApiClient::new(transport, errors, "http://catalog/api/v1/")), notifier)
    }

    fn movie_json(id: u64, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "description": "",
            "durationMinutes": 120,
            "genre": "Drama",
            "language": "English",
            "releaseDate": "2024-05-01"
        })
    }

    #[tokio::test]
    async fn test_list_movies_sends_only_selected_filters() {
        let stub = StubTransport::new();
        stub.respond_json("GET", "/movies", 200, json!({ "movies": [movie_json(1, "Heat")] }));
        let (client, _) = client(&stub);

        let movies = client.list_movies(&MovieFilter::new("Drama", "All")).await.unwrap();

        assert_eq!(movies.len(), 1);
        let request = &stub.requests()[0];
        assert_eq!(request.url, "http://catalog/api/v1/movies");
        assert_eq!(request.query_value("genre"), Some("Drama"));
        assert_eq!(request.query_value("language"), None);
        assert!(!client.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_set_while_pending() {
        let stub = StubTransport::new();
        let gate = stub.hold();
        stub.respond_json("GET", "/movies/1", 200, movie_json(1, "Heat"));
        let (client, _) = client(&stub);

        let pending = client.get_movie(1);
        futures::pin_mut!(pending);
        assert!(futures::poll!(pending.as_mut()).is_pending());
        assert!(client.is_loading());

        gate.release(1);
        let detail = pending.await.unwrap();
        assert_eq!(detail.movie.title, "Heat");
        assert!(detail.showtimes.is_empty());
        assert!(!client.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_cleared_after_failure() {
        let stub = StubTransport::new();
        stub.respond_status("GET", "/movies/42", 404);
        stub.respond_status("GET", "/movies", 500);
        let (client, notifier) = client(&stub);

        let err = client.get_movie(42).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert!(!client.is_loading());

        assert!(client.list_movies(&MovieFilter::default()).await.is_err());
        assert!(!client.is_loading());

        assert_eq!(
            notifier.messages(),
            vec!["Resource not found".to_string(), "Server error. Please try again later.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_dropped_call_clears_flag() {
        let stub = StubTransport::new();
        let _gate = stub.hold();
        stub.respond_json("GET", "/movies", 200, json!({ "movies": [] }));
        let (client, _) = client(&stub);

        {
            let filter = MovieFilter::default();
            let pending = client.list_movies(&filter);
            futures::pin_mut!(pending);
            assert!(futures::poll!(pending.as_mut()).is_pending());
            assert!(client.is_loading());
        }

        assert!(!client.is_loading());
    }

    #[tokio::test]
    async fn test_showtimes_are_untracked() {
        let stub = StubTransport::new();
        let gate = stub.hold();
        stub.respond_json(
            "GET",
            "/showtimes",
            200,
            json!({ "showtimes": [{
                "id": 3, "movieId": 1, "movieTitle": "Heat",
                "showDateTime": "2025-11-02T19:30:00", "theater": "Screen 2", "availableSeats": 0
            }] }),
        );
        let (client, _) = client(&stub);

        let filter = ShowtimeFilter {
            movie_id: Some(1),
            date: None,
            theater: Some(String::new()),
        };
        let pending = client.list_showtimes(&filter);
        futures::pin_mut!(pending);
        assert!(futures::poll!(pending.as_mut()).is_pending());
        assert!(!client.is_loading());

        gate.release(1);
        let showtimes = pending.await.unwrap();
        assert!(showtimes[0].is_sold_out());

        let request = &stub.requests()[0];
        assert_eq!(request.query, vec![("movieId".to_string(), "1".to_string())]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let stub = StubTransport::new();
        stub.respond_json("GET", "/movies", 200, json!({ "movies": "nope" }));
        let (client, notifier) = client(&stub);

        let err = client.list_movies(&MovieFilter::default()).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(notifier.messages().len(), 1);
        assert!(notifier.messages()[0].starts_with("Error: "));
        assert!(!client.is_loading());
    }
}
