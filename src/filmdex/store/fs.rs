use super::{parse_catalog, CatalogSource};
use crate::error::{FilmdexError, Result};
use crate::model::Movie;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A catalog stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<Vec<Movie>> {
        if !self.path.exists() {
            return Err(FilmdexError::DatasetNotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(FilmdexError::Io)?;
        let movies = parse_catalog(&content)?;

        let untitled = movies.iter().filter(|m| m.title.is_none()).count();
        if untitled > 0 {
            warn!(path = %self.path.display(), untitled, "records without a title");
        }
        debug!(path = %self.path.display(), count = movies.len(), "catalog loaded");
        Ok(movies)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
