//! Attribute filtering.
//!
//! An [`AttributeFilter`] offers the distinct values one attribute takes
//! across the whole catalog as selectable options, and tracks which of
//! them the user has checked. The filter does not narrow anything itself:
//! its selection is handed to the engine, which combines the selections of
//! every filter (see [`crate::commands::filter`]).

use crate::model::{Attribute, Movie};
use serde::Serialize;

/// Multi-select filter over one attribute.
#[derive(Debug, Clone)]
pub struct AttributeFilter {
    attribute: Attribute,
    options: Vec<String>,
    selected: Vec<String>,
}

impl AttributeFilter {
    /// Create a filter whose options are derived from the full dataset.
    ///
    /// Options are computed once here and never shrink, even when other
    /// filters later narrow the visible items.
    pub fn new(items: &[Movie], attribute: Attribute) -> Self {
        Self {
            attribute,
            options: Self::derive_options(items, attribute),
            selected: Vec::new(),
        }
    }

    /// Distinct values of `attribute`, in order of first occurrence.
    ///
    /// Items lacking the attribute contribute no option.
    pub fn derive_options(items: &[Movie], attribute: Attribute) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for movie in items {
            let Some(value) = movie.get_attr(attribute) else {
                continue;
            };
            if !options.iter().any(|o| o.as_str() == &*value) {
                options.push(value.into_owned());
            }
        }
        options
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Checked values, in the order they were checked.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Whether this filter constrains the result at all.
    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|s| s == value)
    }

    /// Check or uncheck `value` and return the updated selection.
    ///
    /// Checking appends the value unless it is already selected; unchecking
    /// removes every occurrence.
    pub fn toggle(&mut self, value: &str, now_selected: bool) -> &[String] {
        if now_selected {
            if !self.is_selected(value) {
                self.selected.push(value.to_string());
            }
        } else {
            self.selected.retain(|s| s != value);
        }
        &self.selected
    }

    /// Uncheck everything.
    pub fn clear(&mut self) -> &[String] {
        self.selected.clear();
        &self.selected
    }

    /// Description of the control a front-end should draw for this filter.
    pub fn control(&self) -> FilterControl {
        FilterControl {
            attribute: self.attribute,
            legend: format!("Filter by {}", self.attribute),
            active: self.is_active(),
            options: self
                .options
                .iter()
                .map(|value| FilterOption {
                    value: value.clone(),
                    checked: self.is_selected(value),
                })
                .collect(),
        }
    }
}

/// A labeled group of toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub attribute: Attribute,
    pub legend: String,
    /// At least one option is checked.
    pub active: bool,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("Castle in the Sky", 1986, "Hayao Miyazaki", "Isao Takahata"),
            Movie::new("Grave of the Fireflies", 1988, "Isao Takahata", "Toru Hara"),
            Movie::new("My Neighbor Totoro", 1988, "Hayao Miyazaki", "Hayao Miyazaki"),
            Movie {
                title: Some("Untitled".into()),
                ..Movie::default()
            },
        ]
    }

    #[test]
    fn derives_distinct_options_in_first_occurrence_order() {
        let options = AttributeFilter::derive_options(&catalog(), Attribute::Director);
        assert_eq!(options, vec!["Hayao Miyazaki", "Isao Takahata"]);

        let producers = AttributeFilter::derive_options(&catalog(), Attribute::Producer);
        assert_eq!(
            producers,
            vec!["Isao Takahata", "Toru Hara", "Hayao Miyazaki"]
        );
    }

    #[test]
    fn derivation_is_reproducible() {
        let items = catalog();
        assert_eq!(
            AttributeFilter::derive_options(&items, Attribute::ReleaseYear),
            AttributeFilter::derive_options(&items, Attribute::ReleaseYear)
        );
        assert_eq!(
            AttributeFilter::derive_options(&items, Attribute::ReleaseYear),
            vec!["1986", "1988"]
        );
    }

    #[test]
    fn toggle_on_appends_once() {
        let mut filter = AttributeFilter::new(&catalog(), Attribute::Director);
        assert!(!filter.is_active());

        filter.toggle("Isao Takahata", true);
        filter.toggle("Hayao Miyazaki", true);
        let selected = filter.toggle("Isao Takahata", true);

        assert_eq!(selected, ["Isao Takahata", "Hayao Miyazaki"]);
        assert!(filter.is_active());
    }

    #[test]
    fn toggle_off_restores_prior_selection() {
        let mut filter = AttributeFilter::new(&catalog(), Attribute::Producer);
        filter.toggle("Toru Hara", true);
        let before = filter.selected().to_vec();

        filter.toggle("Isao Takahata", true);
        filter.toggle("Isao Takahata", false);

        assert_eq!(filter.selected(), before.as_slice());
    }

    #[test]
    fn options_do_not_shrink_with_selection() {
        let mut filter = AttributeFilter::new(&catalog(), Attribute::Director);
        filter.toggle("Hayao Miyazaki", true);
        assert_eq!(filter.options().len(), 2);
    }

    #[test]
    fn control_reflects_checked_state() {
        let mut filter = AttributeFilter::new(&catalog(), Attribute::Director);
        filter.toggle("Isao Takahata", true);

        let control = filter.control();
        assert_eq!(control.legend, "Filter by director");
        assert!(control.active);
        assert_eq!(
            control.options,
            vec![
                FilterOption {
                    value: "Hayao Miyazaki".into(),
                    checked: false,
                },
                FilterOption {
                    value: "Isao Takahata".into(),
                    checked: true,
                },
            ]
        );
    }

    #[test]
    fn clear_unchecks_everything() {
        let mut filter = AttributeFilter::new(&catalog(), Attribute::Director);
        filter.toggle("Isao Takahata", true);
        assert!(filter.clear().is_empty());
        assert!(!filter.is_active());
    }
}
