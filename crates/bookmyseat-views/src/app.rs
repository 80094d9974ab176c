use crate::movie_detail::MovieDetailView;
use crate::movie_list::MovieListView;
use crate::routes::{Resolved, Route};
use crate::shell::Shell;
use bookmyseat_client::Services;
use bookmyseat_config::ReviewOptions;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// The view currently mounted in the shell's outlet.
pub enum ActiveView {
    List(MovieListView),
    Detail(MovieDetailView),
}

impl ActiveView {
    pub fn cancel_handle(&self) -> CancellationToken {
        match self {
            ActiveView::List(view) => view.cancel_handle(),
            ActiveView::Detail(view) => view.cancel_handle(),
        }
    }
}

/// Composition root: the shell plus whichever view the current route selects.
pub struct App {
    services: Services,
    options: ReviewOptions,
    shell: Shell,
    active: Option<ActiveView>,
}

impl App {
    pub fn new(services: Services, options: ReviewOptions) -> Self {
        Self {
            services,
            options,
            shell: Shell::new(),
            active: None,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn active(&self) -> Option<&ActiveView> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveView> {
        self.active.as_mut()
    }

    /// Token for the mounted view's fetches, if a view is mounted
    pub fn cancel_handle(&self) -> Option<CancellationToken> {
        self.active.as_ref().map(ActiveView::cancel_handle)
    }

    /// Swaps in a fresh view for `path`. The previous view's fetches are cancelled first.
    pub fn mount(&mut self, path: &str) -> Resolved {
        if let Some(previous) = self.active.take() {
            previous.cancel_handle().cancel();
        }

        let resolved = self.shell.navigate(path);
        if let Some(from) = &resolved.redirected_from {
            info!(from = %from, to = %resolved.route, "Redirecting");
        }

        let view = match resolved.route {
            Route::MovieList => ActiveView::List(MovieListView::new(self.services.movies.clone())),
            Route::MovieDetail { id } => ActiveView::Detail(MovieDetailView::new(&self.services, id, &self.options)),
        };
        self.active = Some(view);
        resolved
    }

    /// Runs the initial load of the mounted view
    pub async fn load(&mut self) {
        match self.active.as_mut() {
            Some(ActiveView::List(view)) => view.init().await,
            Some(ActiveView::Detail(view)) => view.init().await,
            None => {}
        }
    }

    /// Mounts the view for `path` and loads it
    pub async fn navigate(&mut self, path: &str) -> Resolved {
        let resolved = self.mount(path);
        self.load().await;
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{harness, movie, movie_detail};
    use serde_json::json;

    #[tokio::test]
    async fn test_unknown_path_shows_movie_list() {
        let h = harness();
        h.stub.respond_json("GET", "/movies", 200, json!({"movies": [movie(1, "Heat")]}));
        let mut app = App::new(h.services.clone(), ReviewOptions::default());

        let resolved = app.navigate("/tickets").await;

        assert!(resolved.is_redirect());
        match app.active() {
            Some(ActiveView::List(view)) => assert_eq!(view.movies().len(), 1),
            _ => panic!("expected the movie list"),
        }
    }

    #[tokio::test]
    async fn test_detail_route_mounts_detail_view() {
        let h = harness();
        h.stub.respond_json("GET", "/movies/5", 200, movie_detail(5, "Alien"));
        let mut app = App::new(h.services.clone(), ReviewOptions::default());

        app.navigate("/movies/5").await;

        match app.active() {
            Some(ActiveView::Detail(view)) => assert_eq!(view.movie().unwrap().movie.title, "Alien"),
            _ => panic!("expected the detail view"),
        }
        assert_eq!(app.shell().current(), Route::MovieDetail { id: 5 });
    }

    #[test]
    fn test_mount_cancels_previous_view() {
        let h = harness();
        let mut app = App::new(h.services.clone(), ReviewOptions::default());

        app.mount("/movies/5");
        let first = app.cancel_handle().unwrap();
        app.mount("/movies");

        assert!(first.is_cancelled());
        assert!(!app.cancel_handle().unwrap().is_cancelled());
    }
}
