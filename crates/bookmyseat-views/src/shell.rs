use crate::routes::{resolve, Resolved, Route, MOVIES_PATH};

pub const BRAND: &str = "BookMySeat";
pub const TAGLINE: &str = "CINEMA EXPERIENCE";
pub const COPYRIGHT: &str = "© 2025 BookMySeat. All rights reserved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 1] = [NavLink {
    label: "Movies",
    path: MOVIES_PATH,
}];

/// Header, navigation and footer around the routed view.
#[derive(Debug, Clone)]
pub struct Shell {
    current: Route,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            current: Route::MovieList,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, path: &str) -> Resolved {
        let resolved = resolve(path);
        self.current = resolved.route;
        resolved
    }

    /// A nav link is active for its own path and everything below it
    pub fn is_active(&self, link: &NavLink) -> bool {
        let current = self.current.path();
        current == link.path || current.starts_with(&format!("{}/", link.path))
    }

    pub fn header(&self) -> (&'static str, &'static str) {
        (BRAND, TAGLINE)
    }

    pub fn footer(&self) -> &'static str {
        COPYRIGHT
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movies_link_active_on_detail() {
        let mut shell = Shell::new();
        shell.navigate("/movies/3");
        assert_eq!(shell.current(), Route::MovieDetail { id: 3 });
        assert!(shell.is_active(&NAV_LINKS[0]));
    }

    #[test]
    fn test_navigate_unknown_lands_on_list() {
        let mut shell = Shell::new();
        let resolved = shell.navigate("/nowhere");
        assert!(resolved.is_redirect());
        assert_eq!(shell.current(), Route::MovieList);
    }

    #[test]
    fn test_chrome_text() {
        let shell = Shell::default();
        assert_eq!(shell.header(), ("BookMySeat", "CINEMA EXPERIENCE"));
        assert_eq!(shell.footer(), "© 2025 BookMySeat. All rights reserved.");
    }
}
