use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const MAX_USER_NAME_CHARS: usize = 100;
pub const MAX_COMMENT_CHARS: usize = 1000;

/// A review as stored by the review service. The id and date are assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub movie_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_title: Option<String>,
    pub user_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub review_date: NaiveDateTime,
}

impl Review {
    pub fn has_comment(&self) -> bool {
        !self.comment.trim().is_empty()
    }
}

/// Write-side projection of [`Review`] posted by the review form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub movie_id: u64,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}
