use crate::movie_card::MovieCard;
use crate::state::{cancellable, FetchScope};
use bookmyseat_client::{ApiError, ErrorKind, MovieCatalogClient};
use bookmyseat_models::{Movie, MovieFilter, ALL_OPTION};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

pub const GENRES: [&str; 8] = [ALL_OPTION, "Action", "Comedy", "Drama", "Horror", "Sci-Fi", "Thriller", "Crime"];
pub const LANGUAGES: [&str; 4] = [ALL_OPTION, "English", "Hindi", "Spanish"];

/// Catalog listing with genre and language pickers.
pub struct MovieListView {
    client: MovieCatalogClient,
    movies: Vec<Movie>,
    selected_genre: String,
    selected_language: String,
    last_error: Option<ErrorKind>,
    scope: FetchScope,
}

impl MovieListView {
    pub fn new(client: MovieCatalogClient) -> Self {
        Self {
            client,
            movies: Vec::new(),
            selected_genre: ALL_OPTION.to_string(),
            selected_language: ALL_OPTION.to_string(),
            last_error: None,
            scope: FetchScope::new(),
        }
    }

    pub async fn init(&mut self) {
        self.load_movies().await;
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn cards(&self) -> Vec<MovieCard<'_>> {
        self.movies.iter().map(MovieCard::new).collect()
    }

    pub fn selected_genre(&self) -> &str {
        &self.selected_genre
    }

    pub fn selected_language(&self) -> &str {
        &self.selected_language
    }

    pub fn is_loading(&self) -> bool {
        self.client.is_loading()
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn cancel_handle(&self) -> CancellationToken {
        self.scope.handle()
    }

    pub fn filter(&self) -> MovieFilter {
        let chosen = |value: &str| (value != ALL_OPTION).then(|| value.to_string());
        MovieFilter {
            genre: chosen(&self.selected_genre),
            language: chosen(&self.selected_language),
        }
    }

    /// Replaces the list with the catalog's answer. On failure the previous list stays.
    pub async fn load_movies(&mut self) {
        let filter = self.filter();
        let token = self.scope.restart();

        match cancellable(token, self.client.list_movies(&filter)).await {
            Ok(movies) => {
                self.movies = movies;
                self.last_error = None;
            }
            Err(ApiError::Cancelled) => debug!("Movie list load cancelled"),
            Err(e) => {
                error!(kind = ?e.kind(), "Error loading movies: {}", e);
                self.last_error = Some(e.kind());
            }
        }
    }

    pub async fn set_genre(&mut self, genre: impl Into<String>) {
        self.selected_genre = genre.into();
        self.load_movies().await;
    }

    pub async fn set_language(&mut self, language: impl Into<String>) {
        self.selected_language = language.into();
        self.load_movies().await;
    }

    /// Sets both pickers at once and reloads a single time
    pub async fn set_filters(&mut self, genre: Option<String>, language: Option<String>) {
        self.selected_genre = genre.unwrap_or_else(|| ALL_OPTION.to_string());
        self.selected_language = language.unwrap_or_else(|| ALL_OPTION.to_string());
        self.load_movies().await;
    }
}
