use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub id: u64,
    pub movie_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_title: Option<String>,
    pub show_date_time: NaiveDateTime,
    pub theater: String,
    // Not validated locally; the catalog service owns seat accounting.
    pub available_seats: i32,
}

impl Showtime {
    pub fn is_sold_out(&self) -> bool {
        self.available_seats <= 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowtimesResponse {
    #[serde(default)]
    pub showtimes: Vec<Showtime>,
}
