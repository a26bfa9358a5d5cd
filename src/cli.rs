use crate::db::DEFAULT_DB_PATH;
use crate::models::Genre;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moviedb")]
#[command(about = "Movie catalog backed by SQLite")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Path to the movie store
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert, update, print and delete a sample movie, then list the store
    Demo,

    /// Insert a movie (duplicate names are allowed)
    Add(MovieArgs),

    /// Rewrite every movie with a matching name
    Update(MovieArgs),

    /// Delete every movie with a matching name
    Delete {
        /// Movie name
        name: String,
    },

    /// List all stored movies
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct MovieArgs {
    /// Movie name
    pub name: String,
    /// Release year
    pub year: i64,
    /// Director first name
    pub first_name: String,
    /// Director last name
    pub last_name: String,
    /// Rating
    pub rating: f64,
    /// Director birth year
    #[arg(long, default_value_t = 0)]
    pub birth_year: i64,
    /// Director birth place
    #[arg(long, default_value = "")]
    pub birth_place: String,
    /// Genre tag (repeatable): Action, Sci-Fi, Drama, Thriller, Adventure
    #[arg(long = "genre")]
    pub genres: Vec<Genre>,
}
