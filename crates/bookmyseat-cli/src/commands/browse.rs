use super::Session;
use crate::render;
use bookmyseat_client::ApiError;
use bookmyseat_models::ShowtimeFilter;
use bookmyseat_views::{cancellable, ActiveView, App, FetchScope, MovieDetailView, MovieListView, ReviewListView};
use chrono::NaiveDate;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tokio_util::sync::CancellationToken;

fn interrupted(session: &Session, cancel: &CancellationToken) -> bool {
    if cancel.is_cancelled() {
        session.output.warn("Cancelled");
        return true;
    }
    false
}

/// Resolves `path` the way the browser router does and renders the routed view inside the shell
pub async fn run_open(session: &Session, path: &str) -> Result<()> {
    let mut app = App::new(session.services.clone(), session.config.reviews.clone());
    let resolved = app.mount(path);
    if let Some(from) = &resolved.redirected_from {
        session
            .output
            .warn(format!("No page at '{}', showing {}", from, resolved.route));
    }

    let cancel = app.cancel_handle().unwrap_or_else(CancellationToken::new);
    session.load("Loading", cancel.clone(), app.load()).await;
    if interrupted(session, &cancel) {
        return Ok(());
    }

    render::shell_header(&session.output, app.shell());
    let failure = match app.active() {
        Some(ActiveView::List(view)) => {
            render::movie_list(&session.output, view);
            view.last_error().map(|_| eyre!("Movies could not be loaded"))
        }
        Some(ActiveView::Detail(view)) => {
            render::movie_detail(&session.output, view);
            view.error().map(|_| eyre!("Movie {} could not be loaded", view.movie_id()))
        }
        None => None,
    };
    render::shell_footer(&session.output, app.shell());

    failure.map_or(Ok(()), Err)
}

pub async fn run_movies(session: &Session, genre: Option<String>, language: Option<String>) -> Result<()> {
    let mut view = MovieListView::new(session.services.movies.clone());
    let cancel = view.cancel_handle();

    session
        .load("Loading movies", cancel.clone(), view.set_filters(genre, language))
        .await;
    if interrupted(session, &cancel) {
        return Ok(());
    }

    render::movie_list(&session.output, &view);
    match view.last_error() {
        Some(_) => Err(eyre!("Movies could not be loaded")),
        None => Ok(()),
    }
}

pub async fn run_movie(session: &Session, id: u64) -> Result<()> {
    let mut view = MovieDetailView::new(&session.services, id, &session.config.reviews);
    let cancel = view.cancel_handle();

    session.load("Loading movie", cancel.clone(), view.init()).await;
    if interrupted(session, &cancel) {
        return Ok(());
    }

    render::movie_detail(&session.output, &view);
    match view.error() {
        Some(_) => Err(eyre!("Movie {} could not be loaded", id)),
        None => Ok(()),
    }
}

pub async fn run_showtimes(
    session: &Session,
    movie_id: Option<u64>,
    date: Option<NaiveDate>,
    theater: Option<String>,
) -> Result<()> {
    let filter = ShowtimeFilter {
        movie_id,
        date,
        theater,
    };
    let mut scope = FetchScope::new();
    let token = scope.restart();

    let result = session
        .load(
            "Loading showtimes",
            scope.handle(),
            cancellable(token, session.services.movies.list_showtimes(&filter)),
        )
        .await;

    match result {
        Ok(showtimes) => {
            render::showtimes(&session.output, &showtimes);
            Ok(())
        }
        Err(ApiError::Cancelled) => {
            session.output.warn("Cancelled");
            Ok(())
        }
        Err(e) => Err(eyre!("Showtimes could not be loaded: {}", e)),
    }
}

pub async fn run_reviews(session: &Session, movie_id: u64, page: u32, size: Option<u32>) -> Result<()> {
    let mut options = session.config.reviews.clone();
    if let Some(size) = size {
        if size == 0 {
            return Err(eyre!("--size must be at least 1"));
        }
        options.page_size = size;
    }

    let mut view = ReviewListView::new(session.services.reviews.clone(), movie_id, &options);
    let cancel = CancellationToken::new();
    view.attach(&cancel);

    session.load("Loading reviews", cancel.clone(), view.load_page(page)).await;
    if interrupted(session, &cancel) {
        return Ok(());
    }

    render::review_list(&session.output, &view, movie_id);
    Ok(())
}
