use super::CatalogSource;
use crate::error::Result;
use crate::model::Movie;

/// A catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    movies: Vec<Movie>,
}

impl InMemorySource {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} movies)", self.movies.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Movie;

    /// The two-item catalog used throughout the examples.
    pub fn two_movies() -> Vec<Movie> {
        vec![
            Movie::new("Castle in the Sky", 1986, "X", "P1"),
            Movie::new("Grave of the Fireflies", 1988, "Y", "P2"),
        ]
    }

    /// Eight early Ghibli films, deliberately not in year order.
    pub fn ghibli_sample() -> Vec<Movie> {
        vec![
            Movie::new("Castle in the Sky", 1986, "Hayao Miyazaki", "Isao Takahata"),
            Movie::new("My Neighbor Totoro", 1988, "Hayao Miyazaki", "Hayao Miyazaki"),
            Movie::new(
                "Kiki's Delivery Service",
                1989,
                "Hayao Miyazaki",
                "Hayao Miyazaki",
            ),
            Movie::new("Grave of the Fireflies", "1988", "Isao Takahata", "Toru Hara"),
            Movie::new("Only Yesterday", "1991", "Isao Takahata", "Toshio Suzuki"),
            Movie::new("Porco Rosso", 1992, "Hayao Miyazaki", "Toshio Suzuki"),
            Movie::new("Pom Poko", 1994, "Isao Takahata", "Toshio Suzuki"),
            Movie::new(
                "Whisper of the Heart",
                1995,
                "Yoshifumi Kondō",
                "Toshio Suzuki",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::two_movies;
    use super::*;

    #[test]
    fn loads_what_it_was_given() {
        let mut source = InMemorySource::new(two_movies());
        source.push(Movie::new("Pom Poko", 1994, "Isao Takahata", "Toshio Suzuki"));

        let movies = source.load().unwrap();
        assert_eq!(movies.len(), 3);
        assert_eq!(movies[2].title.as_deref(), Some("Pom Poko"));
        assert_eq!(source.describe(), "in-memory (3 movies)");
    }
}
