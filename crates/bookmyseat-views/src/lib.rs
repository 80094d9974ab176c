pub mod app;
pub mod flash;
pub mod movie_card;
pub mod movie_detail;
pub mod movie_list;
pub mod rating_summary;
pub mod review_form;
pub mod review_list;
pub mod routes;
pub mod shell;
pub mod star_rating;
pub mod state;

#[cfg(test)]
mod fixtures;

pub use app::{ActiveView, App};
pub use flash::FlashMessage;
pub use movie_card::{format_duration, MovieCard};
pub use movie_detail::MovieDetailView;
pub use movie_list::{MovieListView, GENRES, LANGUAGES};
pub use rating_summary::{rating_bars, RatingBar, RatingSummaryView};
pub use review_form::{ReviewFormView, SubmitOutcome, ValidationError, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use review_list::{ReviewListEvent, ReviewListView};
pub use routes::{resolve, Resolved, Route, MOVIES_PATH};
pub use shell::{NavLink, Shell, BRAND, COPYRIGHT, NAV_LINKS, TAGLINE};
pub use star_rating::{StarRating, STAR_COUNT};
pub use state::{cancellable, FetchScope, RequestState};
