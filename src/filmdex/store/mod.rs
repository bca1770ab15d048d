//! # Dataset Sources
//!
//! The engine is built from an already parsed `Vec<Movie>`. Where that
//! vector comes from is abstracted behind [`CatalogSource`] so the engine
//! and its callers never care about files or formats.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: a JSON array of movie records on disk
//! - [`memory::InMemorySource`]: a fixed vector, for tests and embedding
//! - [`bundled`]: the Studio Ghibli catalog compiled into the binary
//!
//! ## Record Format
//!
//! ```text
//! [
//!   {
//!     "title": "Castle in the Sky",
//!     "release_date": "1986",
//!     "director": "Hayao Miyazaki",
//!     "producer": "Isao Takahata",
//!     "image": "images/castle-in-the-sky.jpg",
//!     "description": "..."
//!   }
//! ]
//! ```
//!
//! Every key is optional. The year may be a number or a string and may be
//! spelled `release_date`, `release_year` or `releaseYear`.

use crate::error::Result;
use crate::model::Movie;
use serde_json::Value;
use tracing::warn;

pub mod bundled;
pub mod fs;
pub mod memory;

/// Something that can produce the full catalog.
pub trait CatalogSource {
    /// Load every record, in catalog order.
    fn load(&self) -> Result<Vec<Movie>>;

    /// Short human-readable description of where the data comes from.
    fn describe(&self) -> String;
}

/// Parse a JSON array of records. Elements that are not records at all
/// (numbers, strings, nulls) are skipped with a warning.
pub fn parse_catalog(json: &str) -> Result<Vec<Movie>> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    let mut movies = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Movie>(record) {
            Ok(movie) => movies.push(movie),
            Err(e) => warn!(index, error = %e, "skipping malformed catalog record"),
        }
    }
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_records_are_skipped() {
        let movies = parse_catalog(
            r#"[{"title":"Castle","release_date":"1986"}, 42, null, {"title":"Grave","director":false}]"#,
        )
        .unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("Castle"), Some("Grave")]);
        assert_eq!(movies[1].director.as_deref(), Some("false"));
    }

    #[test]
    fn non_array_catalog_is_an_error() {
        assert!(parse_catalog(r#"{"title":"Castle"}"#).is_err());
    }
}
