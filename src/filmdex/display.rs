//! The seam between the engine and whatever draws its output.
//!
//! The engine never formats anything. A front-end implements [`Renderer`]
//! and receives complete result sets; it is expected to replace its display
//! surface in one go rather than item by item.

use crate::commands::ResultSet;
use crate::filter::FilterControl;
use crate::model::ViewMode;

pub trait Renderer {
    /// Replace the displayed items with `result`, laid out per `view`.
    fn display_result(&mut self, result: &ResultSet, view: ViewMode);

    /// Draw the toggle group for one attribute filter.
    fn display_filter(&mut self, control: &FilterControl);
}
