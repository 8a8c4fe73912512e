//! Render model for hosts that draw a select.
//!
//! Styling and layout belong to the host. A view only says what is there:
//! the current value, the clear glyph, and the option rows while open,
//! each tagged with the element id events should target.

use crate::part::Part;
use crate::selection::Selection;
use crate::widget::Select;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// Container element id.
    pub id: String,
    pub open: bool,
    pub value: ValueView,
    /// Element id of the clear glyph.
    pub clear_id: String,
    /// Option rows. Empty while closed.
    pub rows: Vec<RowView>,
}

/// How the current value is shown in the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueView {
    /// Label of the single selection, if any.
    Label(Option<String>),
    /// One removable badge per selected option.
    Badges(Vec<BadgeView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// Element id of the badge's remove glyph.
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub label: String,
    pub selected: bool,
    pub highlighted: bool,
}

impl Select {
    /// Describe what to draw for the current state.
    pub fn view(&self) -> SelectView {
        let id = self.id().to_string();

        let value = match self.selection() {
            Selection::Single(value) => ValueView::Label(value.map(|v| v.label)),
            Selection::Multi(values) => ValueView::Badges(
                values
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| BadgeView {
                        id: Part::Badge(i).element_id(&id),
                        label: v.label,
                    })
                    .collect(),
            ),
        };

        let rows = if self.is_open() {
            self.options()
                .iter()
                .enumerate()
                .map(|(i, option)| RowView {
                    id: Part::Row(i).element_id(&id),
                    label: option.label.clone(),
                    selected: self.is_selected(option),
                    highlighted: i == self.highlighted_index(),
                })
                .collect()
        } else {
            Vec::new()
        };

        SelectView {
            open: self.is_open(),
            value,
            clear_id: Part::Clear.element_id(&id),
            rows,
            id,
        }
    }
}
