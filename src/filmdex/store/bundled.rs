//! The Studio Ghibli catalog shipped with the binary.

use super::{parse_catalog, CatalogSource};
use crate::error::Result;
use crate::model::Movie;

const GHIBLI_JSON: &str = include_str!("../../../data/ghibli.json");

#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl CatalogSource for BundledSource {
    fn load(&self) -> Result<Vec<Movie>> {
        parse_catalog(GHIBLI_JSON)
    }

    fn describe(&self) -> String {
        "bundled Studio Ghibli catalog".to_string()
    }
}
