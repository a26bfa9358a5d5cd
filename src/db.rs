use crate::error::{MovieError, Result};
use crate::models::{Movie, MovieRow};
use rusqlite::{Connection, Row};
use std::path::Path;

/// Fixed location of the movie store, relative to the working directory.
/// The CLI uses it as the `--db` default.
pub const DEFAULT_DB_PATH: &str = "movies.db";

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database connection
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Database { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Create the movies table if it is not there yet
    pub fn init(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS movies (
                name TEXT,
                year INTEGER,
                director TEXT,
                rating REAL,
                genre TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Check if database is initialized
    pub fn is_initialized(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='movies'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    // ==================== Movie Operations ====================

    /// Append a row for `movie`. Existing rows with the same name are left alone.
    pub fn insert_movie(&self, movie: &Movie) -> Result<()> {
        let row = MovieRow::from(movie);
        self.conn.execute(
            "INSERT INTO movies (name, year, director, rating, genre)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (&row.name, row.year, &row.director, row.rating, &row.genre),
        )?;
        Ok(())
    }

    /// Rewrite every row named `movie.name`; returns the number of rows touched
    pub fn update_movie(&self, movie: &Movie) -> Result<usize> {
        let row = MovieRow::from(movie);
        let rows = self.conn.execute(
            "UPDATE movies SET year = ?1, director = ?2, rating = ?3, genre = ?4
             WHERE name = ?5",
            (row.year, &row.director, row.rating, &row.genre, &row.name),
        )?;
        Ok(rows)
    }

    /// Remove every row named `name`; returns the number of rows removed
    pub fn delete_movie(&self, name: &str) -> Result<usize> {
        let rows = self
            .conn
            .execute("DELETE FROM movies WHERE name = ?1", [name])?;
        Ok(rows)
    }

    /// Full table scan in storage order.
    ///
    /// A dropped table can surface at prepare time or only once SQLite
    /// re-prepares the statement while stepping, so both map to `TableMissing`.
    pub fn get_all_movies(&self) -> Result<Vec<MovieRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, year, director, rating, genre FROM movies")
            .map_err(MovieError::from_query)?;

        let movies = stmt
            .query_map([], movie_row_from_row)
            .map_err(MovieError::from_query)?;
        movies
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(MovieError::from_query)
    }

    /// Close the connection, surfacing any error SQLite reports on the way out
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}

// ==================== Row Parsers ====================

fn movie_row_from_row(row: &Row) -> std::result::Result<MovieRow, rusqlite::Error> {
    Ok(MovieRow {
        name: row.get(0)?,
        year: row.get(1)?,
        director: row.get(2)?,
        rating: row.get(3)?,
        genre: row.get(4)?,
    })
}
