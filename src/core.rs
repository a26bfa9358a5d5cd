use crate::db::Database;
use crate::error::Result;
use crate::models::{Movie, MovieRow};
use std::path::Path;
use tracing::debug;

/// Movie catalog over one owned store connection.
///
/// Opening a catalog also ensures the `movies` table exists, so every
/// operation after construction runs against an initialized store.
pub struct MovieCatalog {
    db: Database,
}

impl MovieCatalog {
    /// Open the catalog at a specific path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = %path.as_ref().display(), "opening movie store");
        let db = Database::open(path)?;
        db.init()?;
        Ok(MovieCatalog { db })
    }

    pub fn insert(&self, movie: &Movie) -> Result<()> {
        self.db.insert_movie(movie)?;
        debug!(name = %movie.name, "inserted movie");
        Ok(())
    }

    /// Rows whose name does not match are left untouched; zero matches is not an error
    pub fn update(&self, movie: &Movie) -> Result<usize> {
        let rows = self.db.update_movie(movie)?;
        debug!(name = %movie.name, rows, "updated movie");
        Ok(rows)
    }

    pub fn delete(&self, name: &str) -> Result<usize> {
        let rows = self.db.delete_movie(name)?;
        debug!(name, rows, "deleted movie");
        Ok(rows)
    }

    /// All rows in storage order. Fails with `TableMissing` if the table was dropped.
    pub fn list_all(&self) -> Result<Vec<MovieRow>> {
        let rows = self.db.get_all_movies()?;
        debug!(count = rows.len(), "listed movies");
        Ok(rows)
    }

    pub fn close(self) -> Result<()> {
        debug!("closing movie store");
        self.db.close()
    }
}
