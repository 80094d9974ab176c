//! Path to view mapping.

use std::fmt;

pub const MOVIES_PATH: &str = "/movies";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    MovieList,
    MovieDetail { id: u64 },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::MovieList => MOVIES_PATH.to_string(),
            Route::MovieDetail { id } => format!("{}/{}", MOVIES_PATH, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of resolving a path. `redirected_from` holds the requested path when it did not
/// name a route and the movie list was chosen instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    pub redirected_from: Option<String>,
}

impl Resolved {
    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Maps a path to a route; anything unrecognized goes to the movie list.
pub fn resolve(path: &str) -> Resolved {
    let trimmed = path.trim().trim_matches('/');
    let segments: Vec<&str> = trimmed.split('/').collect();

    let route = match segments.as_slice() {
        ["movies"] => Some(Route::MovieList),
        ["movies", id] => id.parse::<u64>().ok().map(|id| Route::MovieDetail { id }),
        _ => None,
    };

    match route {
        Some(route) => Resolved {
            route,
            redirected_from: None,
        },
        None => Resolved {
            route: Route::MovieList,
            redirected_from: Some(path.to_string()),
        },
    }
}
