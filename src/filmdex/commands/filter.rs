//! Combining attribute filter selections.
//!
//! Selections combine by **union**: an item is kept when it satisfies the
//! selection of *any* attribute that has at least one value checked, not
//! all of them. With nothing checked anywhere the whole dataset passes.

use crate::model::{Attribute, ItemId, Movie};

/// Selected values per attribute, in the order attributes were first reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelections {
    entries: Vec<(Attribute, Vec<String>)>,
}

impl FilterSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `selected` for `attribute`, replacing any previous selection.
    /// An attribute keeps its original position when overwritten.
    pub fn set(&mut self, attribute: Attribute, selected: Vec<String>) {
        match self.entries.iter_mut().find(|(a, _)| *a == attribute) {
            Some((_, values)) => *values = selected,
            None => self.entries.push((attribute, selected)),
        }
    }

    /// True when no attribute has a value selected.
    pub fn is_unconstrained(&self) -> bool {
        self.entries.iter().all(|(_, values)| values.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &[String])> {
        self.entries.iter().map(|(a, values)| (*a, values.as_slice()))
    }
}

/// Whether the item's value for `attribute` is one of `selected`.
pub fn matches_selection(movie: &Movie, attribute: Attribute, selected: &[String]) -> bool {
    let Some(value) = movie.get_attr(attribute) else {
        return false;
    };
    selected.iter().any(|s| s.as_str() == &*value)
}

/// Ids of the items passing the filter stage.
///
/// Unconstrained selections return every id in dataset order. Otherwise the
/// result lists the matches of each active attribute in turn, skipping ids
/// already listed, so an item appears once even when it satisfies several
/// attributes.
pub fn run(items: &[Movie], selections: &FilterSelections) -> Vec<ItemId> {
    if selections.is_unconstrained() {
        return (0..items.len()).map(ItemId).collect();
    }

    let mut seen = vec![false; items.len()];
    let mut results = Vec::new();

    for (attribute, selected) in selections.iter() {
        if selected.is_empty() {
            continue;
        }
        for (i, movie) in items.iter().enumerate() {
            if !seen[i] && matches_selection(movie, attribute, selected) {
                seen[i] = true;
                results.push(ItemId(i));
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("Castle in the Sky", 1986, "X", "P1"),
            Movie::new("Grave of the Fireflies", 1988, "Y", "P2"),
            Movie::new("My Neighbor Totoro", 1988, "X", "P3"),
            Movie::new("Pom Poko", 1994, "Y", "P1"),
        ]
    }

    fn select(pairs: &[(Attribute, &[&str])]) -> FilterSelections {
        let mut selections = FilterSelections::new();
        for (attr, values) in pairs {
            selections.set(*attr, values.iter().map(|v| v.to_string()).collect());
        }
        selections
    }

    #[test]
    fn empty_selection_passes_everything() {
        let items = catalog();
        assert_eq!(run(&items, &FilterSelections::new()).len(), 4);

        let cleared = select(&[(Attribute::Director, &[]), (Attribute::Producer, &[])]);
        assert_eq!(
            run(&items, &cleared),
            vec![ItemId(0), ItemId(1), ItemId(2), ItemId(3)]
        );
    }

    #[test]
    fn single_attribute_matches_any_selected_value() {
        let selections = select(&[(Attribute::Producer, &["P2", "P3"])]);
        assert_eq!(run(&catalog(), &selections), vec![ItemId(1), ItemId(2)]);
    }

    #[test]
    fn attributes_combine_by_union() {
        // Castle matches only the director selection, Grave only the producer one.
        let selections = select(&[
            (Attribute::Director, &["X"]),
            (Attribute::Producer, &["P2"]),
        ]);
        assert_eq!(
            run(&catalog(), &selections),
            vec![ItemId(0), ItemId(2), ItemId(1)]
        );
    }

    #[test]
    fn union_lists_each_item_once() {
        let selections = select(&[
            (Attribute::Director, &["Y"]),
            (Attribute::Producer, &["P1"]),
        ]);
        assert_eq!(
            run(&catalog(), &selections),
            vec![ItemId(1), ItemId(3), ItemId(0)]
        );
    }

    #[test]
    fn identical_items_are_both_kept() {
        let twin = Movie::new("Twin", 2000, "X", "P1");
        let items = vec![twin.clone(), twin];
        let selections = select(&[
            (Attribute::Director, &["X"]),
            (Attribute::Producer, &["P1"]),
        ]);
        assert_eq!(run(&items, &selections), vec![ItemId(0), ItemId(1)]);
    }

    #[test]
    fn missing_attribute_never_matches() {
        let items = vec![Movie {
            title: Some("No director".into()),
            ..Movie::default()
        }];
        let selections = select(&[(Attribute::Director, &["X"])]);
        assert!(run(&items, &selections).is_empty());
    }

    #[test]
    fn overwrite_keeps_attribute_position() {
        let mut selections = select(&[
            (Attribute::Director, &["X"]),
            (Attribute::Producer, &["P2"]),
        ]);
        selections.set(Attribute::Director, vec!["Y".into()]);

        let recorded: Vec<(Attribute, &[String])> = selections.iter().collect();
        assert_eq!(
            recorded,
            vec![
                (Attribute::Director, &["Y".to_string()][..]),
                (Attribute::Producer, &["P2".to_string()][..]),
            ]
        );
    }
}
