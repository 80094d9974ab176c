use bookmyseat_config::Profile;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::config::ConfigAction;
use commands::review::ReviewArgs;
use commands::{browse, config, review, Session};
use std::path::PathBuf;

mod commands;
mod logging;
mod notify;
mod output;
mod progress;
mod render;

#[derive(Parser)]
#[command(name = "bookmyseat")]
#[command(about = "BookMySeat - movies, showtimes and reviews from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Configuration file (defaults to ~/.config/bookmyseat/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a page by path, e.g. /movies or /movies/42
    #[command(long_about = "Resolve a path against the route table and render that page. Unknown paths redirect to the movie list.")]
    Open {
        #[arg(default_value = "/movies")]
        path: String,
    },
    /// List movies, optionally filtered
    Movies {
        /// Genre, e.g. Action or Sci-Fi ("All" for no filter)
        #[arg(long)]
        genre: Option<String>,

        /// Language, e.g. English or Hindi ("All" for no filter)
        #[arg(long)]
        language: Option<String>,
    },
    /// Show one movie with showtimes, ratings and reviews
    Movie { id: u64 },
    /// List showtimes
    Showtimes {
        #[arg(long)]
        movie_id: Option<u64>,

        /// Day in YYYY-MM-DD form
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        #[arg(long)]
        theater: Option<String>,
    },
    /// Page through a movie's reviews
    Reviews {
        movie_id: u64,

        /// Page number, starting at 0
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Reviews per page (defaults to the configured page size)
        #[arg(long)]
        size: Option<u32>,
    },
    /// Write a review. Missing fields are prompted for on a terminal.
    Review {
        movie_id: u64,

        #[arg(long)]
        user: Option<String>,

        /// 1 to 5 stars
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,

        #[arg(long)]
        comment: Option<String>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration, including environment overrides
    Show,
    /// Write a configuration file for a built-in profile
    Init {
        /// development or production
        #[arg(long, default_value = "development", value_parser = parse_profile)]
        profile: Profile,

        /// Overwrite an existing file without asking
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn parse_profile(s: &str) -> Result<Profile, String> {
    Profile::from_str(s)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Commands::Config { cmd } = &cli.command {
        // Config commands still run when the file does not parse
        let logging_config = commands::load_config(cli.config.as_deref())
            .map(|config| config.logging)
            .unwrap_or_default();
        logging::init_logging(cli.verbose, cli.quiet, &logging_config).map_err(|e| eyre!("{}", e))?;
        let output = output::Output::new(cli.output, cli.quiet);

        let action = match cmd {
            None | Some(ConfigCommands::Show) => ConfigAction::Show,
            Some(ConfigCommands::Init { profile, force }) => ConfigAction::Init {
                profile: *profile,
                force: *force,
            },
        };
        return config::run_config(action, cli.config.as_deref(), &output);
    }

    let config = commands::load_config(cli.config.as_deref())?;
    logging::init_logging(cli.verbose, cli.quiet, &config.logging).map_err(|e| eyre!("{}", e))?;
    let output = output::Output::new(cli.output, cli.quiet);

    let session = Session::connect(config, output)?;

    match cli.command {
        Commands::Open { path } => browse::run_open(&session, &path).await,
        Commands::Movies { genre, language } => browse::run_movies(&session, genre, language).await,
        Commands::Movie { id } => browse::run_movie(&session, id).await,
        Commands::Showtimes {
            movie_id,
            date,
            theater,
        } => browse::run_showtimes(&session, movie_id, date, theater).await,
        Commands::Reviews { movie_id, page, size } => browse::run_reviews(&session, movie_id, page, size).await,
        Commands::Review {
            movie_id,
            user,
            rating,
            comment,
        } => {
            let args = ReviewArgs {
                movie_id,
                user,
                rating,
                comment,
            };
            review::run_review(&session, args).await
        }
        Commands::Config { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_rating_flag_accepts_one_to_five() {
        let cli = Cli::try_parse_from(["bookmyseat", "review", "7", "--rating", "4"]).unwrap();
        match cli.command {
            Commands::Review { movie_id, rating, .. } => {
                assert_eq!(movie_id, 7);
                assert_eq!(rating, Some(4));
            }
            _ => panic!("expected review command"),
        }

        assert!(Cli::try_parse_from(["bookmyseat", "review", "7", "--rating", "9"]).is_err());
        assert!(Cli::try_parse_from(["bookmyseat", "review", "7", "--rating", "0"]).is_err());
    }
}
