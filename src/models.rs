use crate::error::MovieError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Closed set of genre tags a movie can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Genre {
    Action,
    SciFi,
    Drama,
    Thriller,
    Adventure,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::SciFi,
        Genre::Drama,
        Genre::Thriller,
        Genre::Adventure,
    ];

    /// Display label, also the persisted form
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::SciFi => "Sci-Fi",
            Genre::Drama => "Drama",
            Genre::Thriller => "Thriller",
            Genre::Adventure => "Adventure",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Genre {
    type Error = MovieError;

    /// Accepts the exact label or its all-lower-case spelling (`Sci-Fi`, `sci-fi`)
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == s || g.as_str().to_ascii_lowercase() == s)
            .ok_or_else(|| MovieError::InvalidGenre(s.to_string()))
    }
}

impl FromStr for Genre {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::try_from(s)
    }
}

/// Director embedded in a movie. Only the name survives persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Director {
    pub first_name: String,
    pub last_name: String,
    pub birth_year: i64,
    pub birth_place: String,
}

impl Director {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: i64,
        birth_place: impl Into<String>,
    ) -> Self {
        Director {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_year,
            birth_place: birth_place.into(),
        }
    }

    /// "first last", the form stored in the director column
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first_name, self.last_name, self.birth_year
        )
    }
}

/// A movie in memory. `name` is the de facto key in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub name: String,
    pub year: i64,
    pub director: Director,
    pub rating: f64,
    pub genre: BTreeSet<Genre>,
}

impl Movie {
    pub fn new(name: impl Into<String>, year: i64, director: Director, rating: f64) -> Self {
        Movie {
            name: name.into(),
            year,
            director,
            rating,
            genre: BTreeSet::new(),
        }
    }

    /// Add one or more genres; repeats collapse
    pub fn add_genre<I>(&mut self, genres: I)
    where
        I: IntoIterator<Item = Genre>,
    {
        self.genre.extend(genres);
    }

    /// Genre labels joined with ", "
    pub fn genre_labels(&self) -> String {
        join_labels(&self.genre)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:?} {{{}}}",
            self.name,
            self.year,
            self.director,
            self.rating,
            self.genre_labels()
        )
    }
}

/// One row of the `movies` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRow {
    pub name: String,
    pub year: i64,
    pub director: String,
    pub rating: f64,
    pub genre: String,
}

impl MovieRow {
    /// Parse the genre column back into a set
    pub fn genres(&self) -> crate::Result<BTreeSet<Genre>> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Genre::try_from)
            .collect()
    }
}

impl From<&Movie> for MovieRow {
    fn from(movie: &Movie) -> Self {
        MovieRow {
            name: movie.name.clone(),
            year: movie.year,
            director: movie.director.full_name(),
            rating: movie.rating,
            genre: movie.genre_labels(),
        }
    }
}

impl fmt::Display for MovieRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {}, {:?}, {:?}, {:?})",
            self.name, self.year, self.director, self.rating, self.genre
        )
    }
}

fn join_labels(genres: &BTreeSet<Genre>) -> String {
    genres
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Movie {
        let director = Director::new("Joel", "Silver", 1976, "South Orange");
        Movie::new("The Matrix", 1999, director, 8.7)
    }

    #[test]
    fn test_genre_labels() {
        let labels: Vec<&str> = Genre::ALL.iter().map(Genre::as_str).collect();
        assert_eq!(
            labels,
            vec!["Action", "Sci-Fi", "Drama", "Thriller", "Adventure"]
        );
    }

    #[test]
    fn test_genre_parse() {
        assert_eq!(Genre::try_from("Sci-Fi").unwrap(), Genre::SciFi);
        assert_eq!(Genre::try_from("sci-fi").unwrap(), Genre::SciFi);
        assert_eq!("thriller".parse::<Genre>().unwrap(), Genre::Thriller);
        assert!(matches!(
            Genre::try_from("Comedy"),
            Err(MovieError::InvalidGenre(_))
        ));
    }

    #[test]
    fn test_genre_parse_rejects_mixed_case_and_padding() {
        for input in ["SCI-FI", "sCi-fI", "  Sci-Fi ", "action "] {
            assert!(
                matches!(Genre::try_from(input), Err(MovieError::InvalidGenre(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_new_movie_has_no_genres() {
        let movie = matrix();
        assert!(movie.genre.is_empty());
        assert_eq!(movie.genre_labels(), "");
    }

    #[test]
    fn test_add_genre_duplicates_collapse() {
        let mut with_dupes = matrix();
        with_dupes.add_genre([Genre::Action, Genre::SciFi, Genre::Action]);
        with_dupes.add_genre([Genre::SciFi]);

        let mut without_dupes = matrix();
        without_dupes.add_genre([Genre::Action, Genre::SciFi]);

        assert_eq!(with_dupes.genre, without_dupes.genre);
        assert_eq!(with_dupes.genre.len(), 2);
    }

    #[test]
    fn test_director_rendering() {
        let director = Director::new("Joel", "Silver", 1976, "South Orange");
        assert_eq!(director.to_string(), "Joel Silver 1976");
        assert_eq!(director.full_name(), "Joel Silver");
    }

    #[test]
    fn test_movie_rendering() {
        let mut movie = matrix();
        movie.add_genre([Genre::SciFi, Genre::Action]);
        assert_eq!(
            movie.to_string(),
            "The Matrix 1999 Joel Silver 1976 8.7 {Action, Sci-Fi}"
        );
    }

    #[test]
    fn test_row_from_movie_drops_birth_details() {
        let mut movie = matrix();
        movie.add_genre([Genre::Action, Genre::SciFi]);

        let row = MovieRow::from(&movie);
        assert_eq!(row.name, "The Matrix");
        assert_eq!(row.year, 1999);
        assert_eq!(row.director, "Joel Silver");
        assert_eq!(row.rating, 8.7);
        assert_eq!(row.genre, "Action, Sci-Fi");
        assert!(!row.director.contains("1976"));
        assert!(!row.director.contains("South Orange"));
    }

    #[test]
    fn test_row_genres_round_trip() {
        let mut movie = matrix();
        movie.add_genre([Genre::Drama, Genre::Adventure]);
        let row = MovieRow::from(&movie);
        assert_eq!(row.genres().unwrap(), movie.genre);

        let empty = MovieRow::from(&matrix());
        assert!(empty.genres().unwrap().is_empty());
    }

    #[test]
    fn test_row_rendering() {
        let mut movie = matrix();
        movie.add_genre([Genre::Action]);
        movie.rating = 9.0;
        assert_eq!(
            MovieRow::from(&movie).to_string(),
            r#"("The Matrix", 1999, "Joel Silver", 9.0, "Action")"#
        );
    }
}
