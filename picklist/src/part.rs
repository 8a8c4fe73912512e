//! Element ids for the addressable pieces of a select.
//!
//! The container uses the widget id itself. Sub-elements append a suffix,
//! the same scheme the select's option rows have always used:
//! `{id}-opt-{i}`, `{id}-badge-{i}` and `{id}-clear`.

/// An addressable piece of a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The focusable body. Clicking it opens or closes the list.
    Container,
    /// Option row `i` of the open list.
    Row(usize),
    /// Remove glyph on the badge of selected option `i` (multi mode).
    Badge(usize),
    /// Clear-all glyph.
    Clear,
}

impl Part {
    /// Element id of this part within the widget `widget_id`.
    pub fn element_id(&self, widget_id: &str) -> String {
        match self {
            Part::Container => widget_id.to_string(),
            Part::Row(i) => format!("{}-opt-{}", widget_id, i),
            Part::Badge(i) => format!("{}-badge-{}", widget_id, i),
            Part::Clear => format!("{}-clear", widget_id),
        }
    }

    /// Resolve an event target back to a part of `widget_id`.
    pub fn parse(widget_id: &str, target: &str) -> Option<Part> {
        let rest = target.strip_prefix(widget_id)?;
        if rest.is_empty() {
            return Some(Part::Container);
        }
        let rest = rest.strip_prefix('-')?;
        let part = if rest == "clear" {
            Part::Clear
        } else if let Some(index) = rest.strip_prefix("opt-") {
            Part::Row(index.parse().ok()?)
        } else if let Some(index) = rest.strip_prefix("badge-") {
            Part::Badge(index.parse().ok()?)
        } else {
            return None;
        };
        // Only ids element_id would produce ("-opt-01" and "-opt-+1" are not)
        (part.element_id(widget_id) == target).then_some(part)
    }
}
