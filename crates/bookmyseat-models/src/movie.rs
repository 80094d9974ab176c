use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::showtime::Showtime;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub genre: String,
    pub language: String,
    pub release_date: NaiveDate,
}

/// A movie together with its scheduled showtimes, fetched per detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub showtimes: Vec<Showtime>,
}

impl MovieDetail {
    pub fn id(&self) -> u64 {
        self.movie.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviesResponse {
    #[serde(default)]
    pub movies: Vec<Movie>,
}
