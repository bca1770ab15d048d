//! Pure query logic.
//!
//! Each submodule implements one stage of the query pipeline over a slice
//! of items. None of them keeps state; the engine owns the state and
//! composes the stages.

use crate::model::{CatalogEntry, Movie};

pub mod filter;
pub mod search;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// The ordered items currently matching every active constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub entries: Vec<CatalogEntry>,
    pub messages: Vec<CmdMessage>,
}

impl ResultSet {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.entries.iter().map(|e| &e.movie)
    }

    /// Titles in result order; untitled items show as an empty string.
    pub fn titles(&self) -> Vec<&str> {
        self.movies()
            .map(|m| m.title.as_deref().unwrap_or(""))
            .collect()
    }
}
