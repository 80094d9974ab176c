pub mod filter;
pub mod movie;
pub mod rating_summary;
pub mod review;
pub mod review_page;
pub mod showtime;

pub use filter::{MovieFilter, ShowtimeFilter, ALL_OPTION};
pub use movie::{Movie, MovieDetail, MoviesResponse};
pub use rating_summary::{RatingSummary, STAR_LEVELS};
pub use review::{Review, ReviewSubmission, MAX_COMMENT_CHARS, MAX_RATING, MAX_USER_NAME_CHARS, MIN_RATING};
pub use review_page::ReviewPage;
pub use showtime::{Showtime, ShowtimesResponse};
