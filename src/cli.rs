//! Command-line surface over [`AppContext`].
//!
//! Each subcommand plays the part of one view: it dispatches the same
//! operations a page would and renders the resulting store state.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use movietime::model::{Movie, SearchType};
use movietime::store::theme::{DocumentTheme, Theme};
use movietime::{AppContext, FetchOutcome};

#[derive(Debug, Parser)]
#[command(name = "movietime", version, about = "Browse the movie catalog from the terminal")]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override api.base_url
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Featured movies
    Featured,
    /// All genres
    Genres,
    /// Movies in a genre
    Genre { id: String },
    /// Movies matching optional filters
    Movies {
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        actor: Option<String>,
        #[arg(long)]
        director: Option<String>,
    },
    /// Movie details with reviews and related movies
    Movie { id: String },
    /// Search by title, actor or director
    Search {
        query: String,
        #[arg(long = "type", value_enum, default_value_t = SearchTypeArg::Title)]
        search_type: SearchTypeArg,
    },
    /// Actor profile and filmography
    Actor { id: String },
    /// Director profile and filmography
    Director { id: String },
    /// Manage the local watchlist
    Watchlist {
        #[command(subcommand)]
        action: WatchlistCommand,
    },
    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum WatchlistCommand {
    List,
    /// Fetch a movie by id and add it
    Add { id: String },
    Remove { id: String },
    /// Fetch a movie by id and add or remove it
    Toggle { id: String },
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    Show,
    Set {
        #[arg(value_enum)]
        value: ThemeArg,
    },
    Toggle,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchTypeArg {
    Title,
    Actor,
    Director,
}

impl From<SearchTypeArg> for SearchType {
    fn from(arg: SearchTypeArg) -> Self {
        match arg {
            SearchTypeArg::Title => SearchType::Title,
            SearchTypeArg::Actor => SearchType::Actor,
            SearchTypeArg::Director => SearchType::Director,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Renders lists and headings, styled for the current theme.
pub struct Output {
    json: bool,
    styled: bool,
    document: Arc<DocumentTheme>,
}

impl Output {
    pub fn new(json: bool, document: Arc<DocumentTheme>) -> Self {
        Self {
            json,
            styled: !json && std::io::stdout().is_terminal(),
            document,
        }
    }

    fn heading(&self, text: &str) {
        if self.json {
            return;
        }
        if self.styled {
            // Bright on dark backgrounds, black on light ones.
            let code = if self.document.is_dark() { "1;97" } else { "1;30" };
            println!("\x1b[{}m{}\x1b[0m", code, text);
        } else {
            println!("{}", text);
        }
    }

    fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Render a fetched list. Errors and empty results get distinct messages.
    fn movies(&self, title: &str, movies: &[Movie], error: Option<&str>) -> anyhow::Result<()> {
        if let Some(message) = error {
            bail!("{}", message);
        }
        if self.json {
            return self.json(movies);
        }
        self.heading(title);
        if movies.is_empty() {
            println!("  No movies found.");
        }
        for movie in movies {
            println!("  {}", movie_line(movie));
        }
        Ok(())
    }
}

fn movie_line(movie: &Movie) -> String {
    format!(
        "[{}] {} ({}) {:.1}/10 - {}",
        movie.id, movie.title, movie.release_year, movie.rating, movie.director.name
    )
}

fn failure_message(outcome: &FetchOutcome) -> Option<String> {
    match outcome {
        FetchOutcome::Failed(failure) => Some(failure.message.clone()),
        _ => None,
    }
}

pub async fn run(ctx: &AppContext, out: &Output, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Featured => {
            let outcome = ctx.fetch_featured().await;
            let state = ctx.movies();
            out.movies(
                "Featured",
                &state.featured_movies,
                failure_message(&outcome).as_deref(),
            )
        }
        Command::Genres => {
            let outcome = ctx.fetch_genres().await;
            if let Some(message) = failure_message(&outcome) {
                bail!("{}", message);
            }
            let genres = ctx.movies().genres;
            if out.json {
                return out.json(&genres);
            }
            out.heading("Genres");
            if genres.is_empty() {
                println!("  No genres found.");
            }
            for genre in &genres {
                println!("  [{}] {}", genre.id, genre.name);
            }
            Ok(())
        }
        Command::Genre { id } => {
            let outcome = ctx.fetch_by_genre(&id).await;
            let state = ctx.movies();
            let movies = state.genre_movies(&id).unwrap_or_default();
            out.movies(
                &format!("Genre {}", id),
                movies,
                failure_message(&outcome).as_deref(),
            )
        }
        Command::Movies {
            genre,
            actor,
            director,
        } => {
            ctx.set_genre_filter(genre);
            ctx.set_actor_filter(actor);
            ctx.set_director_filter(director);
            let outcome = ctx.fetch_filtered_movies().await;
            let state = ctx.movies();
            out.movies(
                "Movies",
                &state.all_movies,
                failure_message(&outcome).as_deref(),
            )
        }
        Command::Movie { id } => {
            let (details, related) = ctx.open_details(&id).await;
            if let Some(message) = failure_message(&details) {
                ctx.clear_current();
                bail!("{}", message);
            }
            let state = ctx.movies();
            ctx.clear_current();
            let movie = state
                .current_movie
                .ok_or_else(|| anyhow!("Movie '{}' was not loaded", id))?;

            if out.json {
                return out.json(&movie);
            }
            let saved = if ctx.is_in_watchlist(movie.id()) {
                " (in watchlist)"
            } else {
                ""
            };
            out.heading(&format!("{}{}", movie.movie.title, saved));
            println!("  {}", movie_line(&movie.movie));
            if let Some(ref description) = movie.movie.description {
                println!("  {}", description);
            }
            let cast: Vec<&str> = movie.movie.actors.iter().map(|a| a.name.as_str()).collect();
            if !cast.is_empty() {
                println!("  Cast: {}", cast.join(", "));
            }
            let genres: Vec<&str> = movie.movie.genres.iter().map(|g| g.name.as_str()).collect();
            if !genres.is_empty() {
                println!("  Genres: {}", genres.join(", "));
            }
            for review in movie.reviews.iter().flatten() {
                println!(
                    "  {} ({}, {:.1}/10): {}",
                    review.user, review.date, review.rating, review.comment
                );
            }
            match failure_message(&related) {
                Some(message) => println!("  Related movies unavailable: {}", message),
                None => out.movies("Related", &state.related_movies, None)?,
            }
            Ok(())
        }
        Command::Search { query, search_type } => {
            let search_type = SearchType::from(search_type);
            match ctx.submit_search(&query, search_type).await {
                None => bail!(
                    "Search query must be at least {} characters",
                    ctx.min_query_len()
                ),
                Some(_) => {
                    let state = ctx.search_state();
                    out.movies(
                        &format!("Results for \"{}\" ({})", state.query, state.search_type),
                        &state.results,
                        state.error.as_deref(),
                    )
                }
            }
        }
        Command::Actor { id } => {
            let profile = ctx.api().actor(&id).await.map_err(|e| anyhow!(e.message()))?;
            if out.json {
                return out.json(&profile);
            }
            out.heading(&profile.actor.name);
            if let Some(ref bio) = profile.actor.bio {
                println!("  {}", bio);
            }
            out.movies("Filmography", &profile.movies, None)
        }
        Command::Director { id } => {
            let profile = ctx
                .api()
                .director(&id)
                .await
                .map_err(|e| anyhow!(e.message()))?;
            if out.json {
                return out.json(&profile);
            }
            out.heading(&profile.director.name);
            if let Some(ref bio) = profile.director.bio {
                println!("  {}", bio);
            }
            out.movies("Filmography", &profile.movies, None)
        }
        Command::Watchlist { action } => run_watchlist(ctx, out, action).await,
        Command::Theme { action } => {
            match action {
                ThemeCommand::Show => {}
                ThemeCommand::Set { value } => ctx.set_theme(value.into()),
                ThemeCommand::Toggle => ctx.toggle_theme(),
            }
            let theme = ctx.theme();
            if out.json {
                return out.json(theme.as_str());
            }
            out.heading(&format!("Theme: {}", theme));
            Ok(())
        }
    }
}

async fn run_watchlist(
    ctx: &AppContext,
    out: &Output,
    action: WatchlistCommand,
) -> anyhow::Result<()> {
    match action {
        WatchlistCommand::List => {}
        WatchlistCommand::Add { id } => {
            let details = ctx.api().movie(&id).await.map_err(|e| anyhow!(e.message()))?;
            ctx.add_to_watchlist(details.movie);
        }
        WatchlistCommand::Remove { id } => ctx.remove_from_watchlist(&id),
        WatchlistCommand::Toggle { id } => {
            let details = ctx.api().movie(&id).await.map_err(|e| anyhow!(e.message()))?;
            ctx.toggle_watchlist(details.movie);
        }
        WatchlistCommand::Clear => ctx.clear_watchlist(),
    }

    let watchlist = ctx.watchlist();
    if out.json {
        return out.json(watchlist.movies());
    }
    let count = watchlist.len();
    out.heading(&format!(
        "My Watchlist ({} movie{} saved)",
        count,
        if count == 1 { "" } else { "s" }
    ));
    if watchlist.is_empty() {
        println!("  Your watchlist is empty.");
    }
    for movie in watchlist.movies() {
        println!("  {}", movie_line(movie));
    }
    Ok(())
}
