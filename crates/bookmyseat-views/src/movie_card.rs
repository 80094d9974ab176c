use bookmyseat_models::Movie;

/// Formats a running time as `2h 28m`, `2h` or `45m`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Summary tile for one movie in the catalog list.
#[derive(Debug, Clone, Copy)]
pub struct MovieCard<'a> {
    movie: &'a Movie,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    pub fn movie(&self) -> &'a Movie {
        self.movie
    }

    pub fn title(&self) -> &'a str {
        &self.movie.title
    }

    pub fn duration(&self) -> String {
        format_duration(self.movie.duration_minutes)
    }

    pub fn release_date(&self) -> String {
        self.movie.release_date.format("%b %-d, %Y").to_string()
    }

    pub fn tags(&self) -> String {
        format!("{} · {}", self.movie.genre, self.movie.language)
    }

    /// Description cut to `max_chars`, ending in an ellipsis when shortened
    pub fn excerpt(&self, max_chars: usize) -> String {
        let description = self.movie.description.trim();
        if description.chars().count() <= max_chars {
            return description.to_string();
        }
        let cut: String = description.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut.trim_end())
    }

    pub fn link(&self) -> String {
        format!("/movies/{}", self.movie.id)
    }
}
