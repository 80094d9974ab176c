use crate::flash::FlashMessage;
use crate::star_rating::StarRating;
use crate::state::{cancellable, FetchScope};
use bookmyseat_client::{ApiError, ErrorKind, ReviewClient};
use bookmyseat_models::{Review, ReviewSubmission, MAX_COMMENT_CHARS, MAX_RATING, MAX_USER_NAME_CHARS, MIN_RATING};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub const SUCCESS_MESSAGE: &str = "Review submitted successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to submit review. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    UserNameRequired,
    #[error("Name must be at most 100 characters")]
    UserNameTooLong,
    #[error("Please select a rating")]
    RatingRequired,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("Comment must be at most 1000 characters")]
    CommentTooLong,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ClientValidation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blocked locally; nothing was sent
    Invalid(Vec<ValidationError>),
    Submitted(Review),
    Failed(ErrorKind),
    Cancelled,
    /// A submission is already in flight
    Busy,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Review entry form for one movie.
pub struct ReviewFormView {
    client: ReviewClient,
    movie_id: u64,
    user_name: String,
    comment: String,
    rating: StarRating,
    is_submitting: bool,
    success: FlashMessage,
    success_lifetime: Duration,
    error_message: Option<String>,
    scope: FetchScope,
}

impl ReviewFormView {
    pub fn new(client: ReviewClient, movie_id: u64, success_lifetime: Duration) -> Self {
        let rating = StarRating::editable(0).with_on_change(move |stars| {
            debug!(movie_id, stars, "Rating selected");
        });

        Self {
            client,
            movie_id,
            user_name: String::new(),
            comment: String::new(),
            rating,
            is_submitting: false,
            success: FlashMessage::default(),
            success_lifetime,
            error_message: None,
            scope: FetchScope::new(),
        }
    }

    pub fn movie_id(&self) -> u64 {
        self.movie_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn set_user_name(&mut self, user_name: impl Into<String>) {
        self.user_name = user_name.into();
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn rating(&self) -> u8 {
        self.rating.value()
    }

    pub fn rating_input(&self) -> &StarRating {
        &self.rating
    }

    pub fn rating_input_mut(&mut self) -> &mut StarRating {
        &mut self.rating
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.current()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.user_name.is_empty() {
            errors.push(ValidationError::UserNameRequired);
        } else if self.user_name.chars().count() > MAX_USER_NAME_CHARS {
            errors.push(ValidationError::UserNameTooLong);
        }

        match self.rating.value() {
            0 => errors.push(ValidationError::RatingRequired),
            r if !(MIN_RATING..=MAX_RATING).contains(&r) => errors.push(ValidationError::RatingOutOfRange),
            _ => {}
        }

        if self.comment.chars().count() > MAX_COMMENT_CHARS {
            errors.push(ValidationError::CommentTooLong);
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    pub fn submission(&self) -> Result<ReviewSubmission, Vec<ValidationError>> {
        let errors = self.validation_errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ReviewSubmission {
            movie_id: self.movie_id,
            user_name: self.user_name.clone(),
            rating: self.rating.value(),
            comment: self.comment.clone(),
        })
    }

    /// Validates, then posts. Nothing is sent while the form is invalid.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting {
            return SubmitOutcome::Busy;
        }

        let submission = match self.submission() {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(movie_id = self.movie_id, ?errors, "Review form is invalid");
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.is_submitting = true;
        self.error_message = None;
        self.success.clear();

        let token = self.scope.restart();
        let result = cancellable(token, self.client.submit_review(&submission)).await;
        self.is_submitting = false;

        match result {
            Ok(review) => {
                info!(movie_id = self.movie_id, review_id = review.id, "Review submitted");
                self.success.show(SUCCESS_MESSAGE, self.success_lifetime);
                self.reset();
                SubmitOutcome::Submitted(review)
            }
            Err(ApiError::Cancelled) => {
                debug!(movie_id = self.movie_id, "Review submission cancelled");
                SubmitOutcome::Cancelled
            }
            Err(e) => {
                // Input stays so the user can retry
                self.error_message = Some(FAILURE_MESSAGE.to_string());
                error!(movie_id = self.movie_id, kind = ?e.kind(), "Error submitting review: {}", e);
                SubmitOutcome::Failed(e.kind())
            }
        }
    }

    pub fn reset(&mut self) {
        self.user_name.clear();
        self.comment.clear();
        self.rating.set_value(0);
        self.rating.leave();
    }

    pub fn cancel(&self) {
        self.scope.cancel();
    }

    /// Ties this view's fetches to `parent`'s cancellation
    pub fn attach(&mut self, parent: &CancellationToken) {
        self.scope = FetchScope::within(parent);
    }
}
