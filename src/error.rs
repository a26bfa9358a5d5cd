use thiserror::Error;

/// All possible errors in the movie catalog
#[derive(Error, Debug)]
pub enum MovieError {
    #[error("Table `movies` does not exist")]
    TableMissing,

    #[error("Invalid genre: {0}")]
    InvalidGenre(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MovieError {
    /// Map "no such table" failures to `TableMissing`, keep everything else as `Db`
    pub(crate) fn from_query(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.starts_with("no such table") => {
                MovieError::TableMissing
            }
            _ => MovieError::Db(err),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MovieError>;
