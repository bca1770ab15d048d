//! # Catalog Engine
//!
//! [`CatalogEngine`] owns the dataset and every piece of session state:
//! the search term, the sort key, the per-attribute filter selections and
//! the view mode. Each user action maps to one method, which updates the
//! state and returns the recomputed [`ResultSet`].
//!
//! ## Query Pipeline
//!
//! ```text
//! items ──▶ filter stage ──▶ search stage ──▶ sort stage ──▶ ResultSet
//!           (union of         (substring,      (stable,
//!            selections)       case-folded)     non-destructive)
//! ```
//!
//! The result is a function of the dataset and [`CatalogState`] alone, so
//! [`CatalogEngine::current_result`] can be called at any time without side
//! effects. The dataset itself is never reordered.
//!
//! ## Ignored Input
//!
//! Unknown sort keys and filter attributes never fail. The state is left
//! as it was, a `warn` event is logged and the returned [`ResultSet`]
//! carries an informational message explaining what was ignored.

use crate::commands::filter::FilterSelections;
use crate::commands::sort::SortKey;
use crate::commands::{filter, search, sort, CmdMessage, ResultSet};
use crate::config::FilmdexConfig;
use crate::display::Renderer;
use crate::filter::{AttributeFilter, FilterControl};
use crate::model::{Attribute, CatalogEntry, Movie, ViewMode};
use tracing::{debug, warn};

/// Everything that determines the visible result, plus the view mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Normalized (trimmed, lowercased) search term.
    pub search_term: String,
    pub sort_key: Option<SortKey>,
    pub filter_selections: FilterSelections,
    pub view_mode: ViewMode,
}

pub struct CatalogEngine {
    items: Vec<Movie>,
    filters: Vec<AttributeFilter>,
    state: CatalogState,
}

impl CatalogEngine {
    pub fn new(items: Vec<Movie>) -> Self {
        debug!(items = items.len(), "catalog engine created");
        Self {
            items,
            filters: Vec::new(),
            state: CatalogState::default(),
        }
    }

    /// Engine with the filters, default sort and default view from `config`.
    pub fn with_config(items: Vec<Movie>, config: &FilmdexConfig) -> Self {
        let mut engine = Self::new(items);
        for attribute in &config.filters {
            engine.create_filter(*attribute);
        }
        engine.state.sort_key = config.default_sort;
        engine.state.view_mode = config.default_view;
        engine
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    // --- Search ---

    pub fn set_search_term(&mut self, raw: &str) -> ResultSet {
        self.state.search_term = search::normalize(raw);
        debug!(term = %self.state.search_term, "search term set");
        self.current_result()
    }

    pub fn clear_search(&mut self) -> ResultSet {
        self.set_search_term("")
    }

    // --- Sort ---

    /// Set the sort key (`None` restores dataset order).
    pub fn set_sort_key(&mut self, key: Option<SortKey>) -> ResultSet {
        self.state.sort_key = key;
        debug!(key = ?key, "sort key set");
        self.current_result()
    }

    /// Set the sort key from user input. Unrecognized keys leave the
    /// current order untouched.
    pub fn apply_sort(&mut self, raw: &str) -> ResultSet {
        match raw.parse::<SortKey>() {
            Ok(key) => self.set_sort_key(Some(key)),
            Err(_) => {
                warn!(key = raw, "ignoring unknown sort key");
                self.current_result().with_message(CmdMessage::info(format!(
                    "Unknown sort key '{}', order unchanged",
                    raw
                )))
            }
        }
    }

    // --- Filters ---

    /// Create the filter for `attribute`, deriving its options from the full
    /// dataset. Creating an existing filter returns it unchanged.
    pub fn create_filter(&mut self, attribute: Attribute) -> &AttributeFilter {
        let pos = match self.filter_position(attribute) {
            Some(pos) => pos,
            None => {
                let filter = AttributeFilter::new(&self.items, attribute);
                debug!(
                    attribute = %attribute,
                    options = filter.options().len(),
                    "filter created"
                );
                self.filters.push(filter);
                self.filters.len() - 1
            }
        };
        &self.filters[pos]
    }

    pub fn filters(&self) -> &[AttributeFilter] {
        &self.filters
    }

    pub fn filter(&self, attribute: Attribute) -> Option<&AttributeFilter> {
        self.filters.iter().find(|f| f.attribute() == attribute)
    }

    pub fn filter_control(&self, attribute: Attribute) -> Option<FilterControl> {
        self.filter(attribute).map(AttributeFilter::control)
    }

    /// Record the selection reported by the filter for `attribute`,
    /// replacing whatever was recorded before.
    ///
    /// Only attributes with a filter (see [`create_filter`](Self::create_filter))
    /// are recorded; reports for any other attribute are ignored.
    pub fn notify_filter_changed(&mut self, attribute: Attribute, selected: &[String]) -> ResultSet {
        let Some(pos) = self.filter_position(attribute) else {
            return self.ignore_without_filter(attribute);
        };
        let owned = &mut self.filters[pos];
        if owned.selected() != selected {
            owned.clear();
            for value in selected {
                owned.toggle(value, true);
            }
        }
        self.state
            .filter_selections
            .set(attribute, selected.to_vec());
        debug!(attribute = %attribute, selected = ?selected, "filter selection changed");
        self.current_result()
    }

    /// Check or uncheck `value` in the filter for `attribute`.
    ///
    /// Attributes without a filter are ignored.
    pub fn toggle(&mut self, attribute: Attribute, value: &str, now_selected: bool) -> ResultSet {
        let Some(pos) = self.filter_position(attribute) else {
            return self.ignore_without_filter(attribute);
        };
        let selected = self.filters[pos].toggle(value, now_selected).to_vec();
        self.notify_filter_changed(attribute, &selected)
    }

    /// [`toggle`](Self::toggle) with the attribute given by name.
    pub fn toggle_named(&mut self, attribute: &str, value: &str, now_selected: bool) -> ResultSet {
        match attribute.parse::<Attribute>() {
            Ok(attribute) => self.toggle(attribute, value, now_selected),
            Err(_) => {
                warn!(attribute, "ignoring toggle on unknown attribute");
                self.current_result().with_message(CmdMessage::info(format!(
                    "Unknown filter '{}', selection unchanged",
                    attribute
                )))
            }
        }
    }

    fn filter_position(&self, attribute: Attribute) -> Option<usize> {
        self.filters.iter().position(|f| f.attribute() == attribute)
    }

    fn ignore_without_filter(&self, attribute: Attribute) -> ResultSet {
        warn!(attribute = %attribute, "ignoring selection on attribute without a filter");
        self.current_result().with_message(CmdMessage::info(format!(
            "No filter for '{}', selection unchanged",
            attribute
        )))
    }

    // --- View ---

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        debug!(mode = %mode, "view mode set");
        self.state.view_mode = mode;
    }

    // --- Results ---

    /// Recompute the visible items from the current state.
    pub fn current_result(&self) -> ResultSet {
        let term = &self.state.search_term;
        let mut entries: Vec<CatalogEntry> =
            filter::run(&self.items, &self.state.filter_selections)
                .into_iter()
                .filter(|id| search::matches(&self.items[id.0], term))
                .map(|id| CatalogEntry {
                    id,
                    movie: self.items[id.0].clone(),
                })
                .collect();

        if let Some(key) = self.state.sort_key {
            sort::run(&mut entries, key);
        }

        debug!(visible = entries.len(), total = self.items.len(), "result computed");
        ResultSet::new(entries)
    }

    /// Hand the current result to `renderer` in a single call.
    pub fn publish<R: Renderer>(&self, renderer: &mut R) {
        renderer.display_result(&self.current_result(), self.state.view_mode);
    }

    /// Hand every filter control to `renderer`, in creation order.
    pub fn publish_filters<R: Renderer>(&self, renderer: &mut R) {
        for filter in &self.filters {
            renderer.display_filter(&filter.control());
        }
    }
}
