use super::{prompts, Session};
use crate::progress::is_interactive;
use crate::render;
use bookmyseat_views::{ReviewListView, SubmitOutcome, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;
use tokio_util::sync::CancellationToken;

pub struct ReviewArgs {
    pub movie_id: u64,
    pub user: Option<String>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

/// Fills the review form from flags, prompting for whatever is missing when a terminal is attached
pub async fn run_review(session: &Session, args: ReviewArgs) -> Result<()> {
    let mut list = ReviewListView::new(session.services.reviews.clone(), args.movie_id, &session.config.reviews);
    let cancel = CancellationToken::new();
    list.attach(&cancel);

    let interactive = is_interactive() && session.output.is_human();
    let form = list.form_mut();

    let user = match args.user {
        Some(user) => user,
        None if interactive => prompts::prompt_string("Your name", None)?,
        None => String::new(),
    };
    form.set_user_name(user);

    let rating = match args.rating {
        Some(rating) => rating,
        None if interactive => prompts::prompt_rating("Your rating")?,
        None => 0,
    };
    // Range is checked by form validation so the user sees the rating message
    form.rating_input_mut().set_value(rating);

    let comment = match args.comment {
        Some(comment) => comment,
        None if interactive => prompts::prompt_string("Comment (optional)", Some(""))?,
        None => String::new(),
    };
    form.set_comment(comment);

    let outcome = session
        .load("Submitting review", cancel.clone(), list.submit_review())
        .await;

    match outcome {
        SubmitOutcome::Submitted(review) => {
            session
                .output
                .success(list.form().success_message().unwrap_or(SUCCESS_MESSAGE));
            session.output.json(&json!({ "review": review }));
            render::review_list(&session.output, &list, args.movie_id);
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            for error in &errors {
                session.output.error(error.to_string());
            }
            Err(eyre!("Review was not submitted"))
        }
        SubmitOutcome::Failed(kind) => {
            session
                .output
                .error(list.form().error_message().unwrap_or(FAILURE_MESSAGE));
            Err(eyre!("Review submission failed ({:?})", kind))
        }
        SubmitOutcome::Cancelled => {
            session.output.warn("Cancelled");
            Ok(())
        }
        SubmitOutcome::Busy => Err(eyre!("A submission is already in progress")),
    }
}
