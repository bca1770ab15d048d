use crate::model::{Attribute, ItemId, Movie};

/// Canonical form of a raw search string: trimmed and lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `movie` matches an already normalized term.
///
/// The term must be a substring of the lowercased title, director,
/// producer or release year. A missing attribute never matches; an empty
/// term matches every item.
pub fn matches(movie: &Movie, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    Attribute::SEARCHABLE.iter().any(|attr| {
        movie
            .get_attr(*attr)
            .is_some_and(|value| value.to_lowercase().contains(term))
    })
}

/// Ids of the items matching `raw`, in dataset order.
pub fn run(items: &[Movie], raw: &str) -> Vec<ItemId> {
    let term = normalize(raw);
    items
        .iter()
        .enumerate()
        .filter(|(_, movie)| matches(movie, &term))
        .map(|(i, _)| ItemId(i))
        .collect()
}
