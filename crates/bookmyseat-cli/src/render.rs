//! Terminal and JSON rendering of the views.

use crate::output::Output;
use bookmyseat_models::{Review, Showtime};
use bookmyseat_views::{
    MovieDetailView, MovieListView, RatingBar, RatingSummaryView, ReviewListView, Shell, StarRating, NAV_LINKS,
};
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

const BAR_WIDTH: usize = 20;

fn table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

/// `██████████░░░░░░░░░░` for 50%
pub fn bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn stars(rating: u8) -> String {
    StarRating::read_only(rating).render()
}

pub fn shell_header(output: &Output, shell: &Shell) {
    if !output.is_human() || output.is_quiet() {
        return;
    }
    let (brand, tagline) = shell.header();
    println!();
    println!("{}  {}", brand.bright_magenta().bold(), tagline.bright_black());

    let nav: Vec<String> = NAV_LINKS
        .iter()
        .map(|link| {
            if shell.is_active(link) {
                link.label.cyan().underline().to_string()
            } else {
                link.label.to_string()
            }
        })
        .collect();
    println!("{}", nav.join("  "));
    println!("{}", "─".repeat(60).bright_black());
}

pub fn shell_footer(output: &Output, shell: &Shell) {
    if !output.is_human() || output.is_quiet() {
        return;
    }
    println!("{}", "─".repeat(60).bright_black());
    println!("{}", shell.footer().bright_black());
}

pub fn movie_list(output: &Output, view: &MovieListView) {
    if !output.is_human() {
        output.json(&json!({
            "genre": view.selected_genre(),
            "language": view.selected_language(),
            "movies": view.movies(),
        }));
        return;
    }
    if output.is_quiet() {
        return;
    }

    println!(
        "{}  genre: {}  language: {}",
        "Movies".bold(),
        view.selected_genre().cyan(),
        view.selected_language().cyan()
    );

    if view.movies().is_empty() {
        println!("{}", "No movies found".bright_black());
        return;
    }

    let mut movies = table();
    movies.set_header(vec![
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Genre · Language"),
        header_cell("Duration"),
        header_cell("Released"),
        header_cell("About"),
    ]);
    for card in view.cards() {
        movies.add_row(vec![
            Cell::new(card.movie().id),
            Cell::new(card.title()).add_attribute(Attribute::Bold),
            Cell::new(card.tags()),
            Cell::new(card.duration()),
            Cell::new(card.release_date()),
            Cell::new(card.excerpt(60)),
        ]);
    }
    println!("{}", movies);
    println!("{}", "Open one with: bookmyseat open /movies/<id>".bright_black());
}

pub fn showtime_rows(showtimes: &[Showtime]) -> Table {
    let mut rows = table();
    rows.set_header(vec![header_cell("When"), header_cell("Theater"), header_cell("Seats")]);
    for showtime in showtimes {
        let seats = if showtime.is_sold_out() {
            Cell::new("Sold out").fg(Color::Red)
        } else {
            Cell::new(showtime.available_seats)
        };
        rows.add_row(vec![
            Cell::new(showtime.show_date_time.format("%a %b %-d, %H:%M").to_string()),
            Cell::new(&showtime.theater),
            seats,
        ]);
    }
    rows
}

pub fn showtimes(output: &Output, showtimes: &[Showtime]) {
    if !output.is_human() {
        output.json(&json!({ "showtimes": showtimes }));
        return;
    }
    if output.is_quiet() {
        return;
    }
    if showtimes.is_empty() {
        println!("{}", "No showtimes scheduled".bright_black());
        return;
    }
    println!("{}", showtime_rows(showtimes));
}

pub fn rating_bar_line(row: &RatingBar) -> String {
    format!(
        "{} {} {} {:>3.0}% ({})",
        row.stars,
        "★".yellow(),
        bar(row.percentage),
        row.percentage,
        row.count
    )
}

fn print_rating_summary(view: &RatingSummaryView) {
    match view.summary() {
        Some(summary) if summary.total_reviews > 0 => {
            let rounded = summary.average_rating.round().clamp(0.0, 5.0) as u8;
            println!(
                "{} {:.1} {} ({} reviews)",
                "Rating".bold(),
                summary.average_rating,
                stars(rounded).yellow(),
                summary.total_reviews
            );
            for row in view.distribution() {
                println!("  {}", rating_bar_line(&row));
            }
        }
        Some(_) => println!("{}", "No ratings yet".bright_black()),
        None => println!("{}", "Rating unavailable".bright_black()),
    }
}

fn print_review(review: &Review) {
    println!(
        "{} {}  {}",
        stars(review.rating).yellow(),
        review.user_name.bold(),
        review.review_date.format("%b %-d, %Y").to_string().bright_black()
    );
    if review.has_comment() {
        println!("  {}", review.comment);
    }
}

fn review_list_json(view: &ReviewListView) -> Value {
    json!({
        "reviews": view.reviews(),
        "page": view.current_page(),
        "totalPages": view.total_pages(),
        "totalReviews": view.total_reviews(),
        "last": view.is_last_page(),
    })
}

fn print_review_list(view: &ReviewListView, movie_id: u64) {
    println!("{}", "Reviews".bold());
    if view.reviews().is_empty() {
        println!("{}", "No reviews yet. Be the first to review!".bright_black());
        return;
    }
    for review in view.reviews() {
        print_review(review);
    }
    println!(
        "{}",
        format!(
            "Page {} of {} · {} reviews",
            view.current_page() + 1,
            view.total_pages().max(1),
            view.total_reviews()
        )
        .bright_black()
    );
    if !view.is_last_page() {
        println!(
            "{}",
            format!("More: bookmyseat reviews {} --page {}", movie_id, view.current_page() + 1).bright_black()
        );
    }
}

pub fn review_list(output: &Output, view: &ReviewListView, movie_id: u64) {
    if !output.is_human() {
        output.json(&review_list_json(view));
        return;
    }
    if !output.is_quiet() {
        print_review_list(view, movie_id);
    }
}

pub fn movie_detail(output: &Output, view: &MovieDetailView) {
    if !output.is_human() {
        output.json(&json!({
            "movie": view.movie(),
            "ratingSummary": view.rating_summary().summary(),
            "ratingBars": view
                .rating_summary()
                .distribution()
                .iter()
                .map(|b| json!({ "stars": b.stars, "count": b.count, "percentage": b.percentage }))
                .collect::<Vec<_>>(),
            "reviews": review_list_json(view.reviews()),
        }));
        return;
    }
    if output.is_quiet() {
        return;
    }

    let Some(detail) = view.movie() else {
        println!("{}", "Movie not available".bright_black());
        return;
    };

    let movie = &detail.movie;
    let mut facts = table();
    facts.set_header(vec![Cell::new(&movie.title)
        .fg(Color::Magenta)
        .add_attribute(Attribute::Bold)]);
    facts.add_row(vec![Cell::new("Genre"), Cell::new(&movie.genre)]);
    facts.add_row(vec![Cell::new("Language"), Cell::new(&movie.language)]);
    facts.add_row(vec![
        Cell::new("Duration"),
        Cell::new(bookmyseat_views::format_duration(movie.duration_minutes)),
    ]);
    facts.add_row(vec![
        Cell::new("Released"),
        Cell::new(movie.release_date.format("%b %-d, %Y").to_string()),
    ]);
    println!("{}", facts);
    println!("{}", movie.description);
    println!();

    println!("{}", "Showtimes".bold());
    if view.showtimes().is_empty() {
        println!("{}", "No showtimes scheduled".bright_black());
    } else {
        println!("{}", showtime_rows(view.showtimes()));
    }
    println!();

    print_rating_summary(view.rating_summary());
    println!();
    print_review_list(view.reviews(), view.movie_id());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(50.0).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(150.0), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
