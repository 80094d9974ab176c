use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The catch-all option offered by filter pickers. Never sent to the catalog service.
pub const ALL_OPTION: &str = "All";

fn selected(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL_OPTION)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieFilter {
    pub genre: Option<String>,
    pub language: Option<String>,
}

impl MovieFilter {
    pub fn new(genre: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            language: Some(language.into()),
        }
    }

    /// Query pairs for the non-default filter values, in a stable order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(genre) = selected(&self.genre) {
            pairs.push(("genre".to_string(), genre.to_string()));
        }
        if let Some(language) = selected(&self.language) {
            pairs.push(("language".to_string(), language.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowtimeFilter {
    pub movie_id: Option<u64>,
    pub date: Option<NaiveDate>,
    pub theater: Option<String>,
}

impl ShowtimeFilter {
    pub fn for_movie(movie_id: u64) -> Self {
        Self {
            movie_id: Some(movie_id),
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(movie_id) = self.movie_id.filter(|id| *id != 0) {
            pairs.push(("movieId".to_string(), movie_id.to_string()));
        }
        if let Some(date) = self.date {
            pairs.push(("date".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(theater) = selected(&self.theater) {
            pairs.push(("theater".to_string(), theater.to_string()));
        }
        pairs
    }
}
