use crate::cli::MovieArgs;
use crate::core::MovieCatalog;
use crate::error::{MovieError, Result};
use crate::models::{Director, Genre, Movie, MovieRow};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

const NO_MOVIES: &str = "No movies found in the database.";

impl From<MovieArgs> for Movie {
    fn from(args: MovieArgs) -> Self {
        let director = Director::new(
            args.first_name,
            args.last_name,
            args.birth_year,
            args.birth_place,
        );
        let mut movie = Movie::new(args.name, args.year, director, args.rating);
        movie.add_genre(args.genres);
        movie
    }
}

/// Handle the demo command: insert, update, print, delete, list
pub fn handle_demo(db_path: &Path) -> Result<()> {
    let catalog = MovieCatalog::open_at(db_path)?;

    let director = Director::new("Joel", "Silver", 1976, "South Orange");
    let mut movie = Movie::new("The Matrix", 1999, director, 8.7);
    movie.add_genre([Genre::Action, Genre::SciFi]);

    catalog.insert(&movie)?;

    movie.rating = 9.0;
    catalog.update(&movie)?;

    println!("Movie Name: {}", movie.name);
    println!("Release Year: {}", movie.year);
    println!("Director: {}", movie.director);
    println!("Rating: {:?}", movie.rating);
    println!("Genres: {}", movie.genre_labels());

    catalog.delete(&movie.name)?;

    println!("All Movies:");
    write_movies(&catalog, &mut io::stdout().lock())?;

    catalog.close()
}

/// Handle the add command
pub fn handle_add(db_path: &Path, args: MovieArgs) -> Result<()> {
    let catalog = MovieCatalog::open_at(db_path)?;
    let movie = Movie::from(args);

    catalog.insert(&movie)?;
    println!("Added movie: {movie}");

    catalog.close()
}

/// Handle the update command
pub fn handle_update(db_path: &Path, args: MovieArgs) -> Result<()> {
    let catalog = MovieCatalog::open_at(db_path)?;
    let movie = Movie::from(args);

    let rows = catalog.update(&movie)?;
    println!("Updated {rows} row(s) named {:?}", movie.name);

    catalog.close()
}

/// Handle the delete command
pub fn handle_delete(db_path: &Path, name: &str) -> Result<()> {
    let catalog = MovieCatalog::open_at(db_path)?;

    let rows = catalog.delete(name)?;
    println!("Deleted {rows} row(s) named {name:?}");

    catalog.close()
}

/// Handle the list command
pub fn handle_list(db_path: &Path, json: bool) -> Result<()> {
    let catalog = MovieCatalog::open_at(db_path)?;

    if json {
        let rows = list_or_empty(&catalog)?;
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        write_movies(&catalog, &mut io::stdout().lock())?;
    }

    catalog.close()
}

/// Write one line per stored row, or the "no movies" line when the table is
/// missing or empty
pub fn write_movies<W: Write>(catalog: &MovieCatalog, out: &mut W) -> Result<()> {
    let rows = list_or_empty(catalog)?;

    if rows.is_empty() {
        writeln!(out, "{NO_MOVIES}")?;
        return Ok(());
    }

    for row in &rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// A missing table reads as "no data"; every other failure propagates
fn list_or_empty(catalog: &MovieCatalog) -> Result<Vec<MovieRow>> {
    match catalog.list_all() {
        Ok(rows) => Ok(rows),
        Err(MovieError::TableMissing) => {
            debug!("movies table missing, treating as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn drop_table(db_path: &Path) {
        rusqlite::Connection::open(db_path)
            .unwrap()
            .execute("DROP TABLE movies", [])
            .unwrap();
    }

    fn written(catalog: &MovieCatalog) -> String {
        let mut out = Vec::new();
        write_movies(catalog, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_movies_lists_rows() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = MovieCatalog::open_at(temp_dir.path().join("test.db")).unwrap();

        let mut movie = Movie::new(
            "The Matrix",
            1999,
            Director::new("Joel", "Silver", 1976, "South Orange"),
            8.7,
        );
        movie.add_genre([Genre::Action]);
        catalog.insert(&movie).unwrap();

        assert_eq!(
            written(&catalog),
            "(\"The Matrix\", 1999, \"Joel Silver\", 8.7, \"Action\")\n"
        );
    }

    #[test]
    fn test_write_movies_recovers_missing_table() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let catalog = MovieCatalog::open_at(&db_path).unwrap();
        catalog
            .insert(&Movie::new(
                "Speed",
                1994,
                Director::new("Jan", "de Bont", 1943, "Eindhoven"),
                7.3,
            ))
            .unwrap();

        drop_table(&db_path);

        assert_eq!(written(&catalog), format!("{NO_MOVIES}\n"));
        assert!(list_or_empty(&catalog).unwrap().is_empty());
        catalog.close().unwrap();
    }

    #[test]
    fn test_list_handler_recreates_dropped_table() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        MovieCatalog::open_at(&db_path).unwrap().close().unwrap();
        drop_table(&db_path);

        handle_list(&db_path, false).unwrap();
        handle_list(&db_path, true).unwrap();

        let catalog = MovieCatalog::open_at(&db_path).unwrap();
        assert!(catalog.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_demo_leaves_no_rows() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        handle_demo(&db_path).unwrap();

        let catalog = MovieCatalog::open_at(&db_path).unwrap();
        assert_eq!(written(&catalog), format!("{NO_MOVIES}\n"));
    }
}
