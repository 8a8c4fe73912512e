//! Selection model shared by single and multi selects.
//!
//! The authoritative selection belongs to the caller. A [`SelectionBinding`]
//! holds the caller's current value together with its change callback and
//! turns toggle/clear requests into exactly one proposed value, which the
//! callback receives. The held value is never edited in place; the caller
//! commits the proposal and feeds it back through
//! [`Select::set_selection`](crate::Select::set_selection).

use std::fmt;

use crate::error::PropsError;
use crate::option::SelectOption;

/// Selection mode of a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Zero or one option.
    Single,
    /// Any subset, kept in the order it was picked.
    Multi,
}

/// A snapshot of selected options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<SelectOption>),
    Multi(Vec<SelectOption>),
}

impl Selection {
    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multi(_) => SelectionMode::Multi,
        }
    }

    /// Selected options in selection order.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Selection::Single(value) => value.as_slice(),
            Selection::Multi(values) => values,
        }
    }

    pub fn contains(&self, option: &SelectOption) -> bool {
        self.options().iter().any(|v| v.same(option))
    }
}

/// Value a single toggle proposes, or `None` when it changes nothing.
/// Re-picking the current option does not deselect it.
fn toggled_single(
    value: Option<&SelectOption>,
    option: &SelectOption,
) -> Option<Option<SelectOption>> {
    match value {
        Some(current) if current.same(option) => None,
        _ => Some(Some(option.clone())),
    }
}

/// Drops a selected option, or appends an unselected one at the end.
fn toggled_multi(values: &[SelectOption], option: &SelectOption) -> Vec<SelectOption> {
    if values.iter().any(|v| v.same(option)) {
        values.iter().filter(|v| !v.same(option)).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(option.clone());
        next
    }
}

/// Change callback for a single select.
pub type SingleChange = Box<dyn FnMut(Option<SelectOption>)>;

/// Change callback for a multi select.
pub type MultiChange = Box<dyn FnMut(Vec<SelectOption>)>;

/// The caller's selection value paired with its change callback.
pub enum SelectionBinding {
    Single {
        value: Option<SelectOption>,
        on_change: SingleChange,
    },
    Multi {
        value: Vec<SelectOption>,
        on_change: MultiChange,
    },
}

impl SelectionBinding {
    pub fn single(
        value: Option<SelectOption>,
        on_change: impl FnMut(Option<SelectOption>) + 'static,
    ) -> Self {
        SelectionBinding::Single {
            value,
            on_change: Box::new(on_change),
        }
    }

    pub fn multi(
        value: Vec<SelectOption>,
        on_change: impl FnMut(Vec<SelectOption>) + 'static,
    ) -> Self {
        SelectionBinding::Multi {
            value,
            on_change: Box::new(on_change),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectionBinding::Single { .. } => SelectionMode::Single,
            SelectionBinding::Multi { .. } => SelectionMode::Multi,
        }
    }

    /// Selected options in selection order.
    pub fn selected(&self) -> &[SelectOption] {
        match self {
            SelectionBinding::Single { value, .. } => value.as_slice(),
            SelectionBinding::Multi { value, .. } => value,
        }
    }

    /// Snapshot of the held value.
    pub fn selection(&self) -> Selection {
        match self {
            SelectionBinding::Single { value, .. } => Selection::Single(value.clone()),
            SelectionBinding::Multi { value, .. } => Selection::Multi(value.clone()),
        }
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected().iter().any(|v| v.same(option))
    }

    /// Propose toggling `option`. Returns whether the callback fired.
    pub fn toggle(&mut self, option: &SelectOption) -> bool {
        match self {
            SelectionBinding::Single { value, on_change } => {
                match toggled_single(value.as_ref(), option) {
                    Some(next) => {
                        log::debug!("[selection] propose single {:?}", option.value);
                        on_change(next);
                        true
                    }
                    None => {
                        log::trace!("[selection] {:?} already selected", option.value);
                        false
                    }
                }
            }
            SelectionBinding::Multi { value, on_change } => {
                let next = toggled_multi(value, option);
                log::debug!(
                    "[selection] propose multi toggle {:?} ({} -> {} selected)",
                    option.value,
                    value.len(),
                    next.len()
                );
                on_change(next);
                true
            }
        }
    }

    /// Propose the empty selection.
    pub fn clear(&mut self) {
        log::debug!("[selection] propose clear ({:?})", self.mode());
        match self {
            SelectionBinding::Single { on_change, .. } => on_change(None),
            SelectionBinding::Multi { on_change, .. } => on_change(Vec::new()),
        }
    }

    /// Replace the held value with the caller's committed one.
    pub(crate) fn set_value(&mut self, selection: Selection) -> Result<(), PropsError> {
        match (self, selection) {
            (SelectionBinding::Single { value, .. }, Selection::Single(next)) => {
                *value = next;
                Ok(())
            }
            (SelectionBinding::Multi { value, .. }, Selection::Multi(next)) => {
                *value = next;
                Ok(())
            }
            (binding, selection) => Err(PropsError::ModeMismatch {
                expected: binding.mode(),
                found: selection.mode(),
            }),
        }
    }
}

impl fmt::Debug for SelectionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionBinding::Single { value, .. } => f
                .debug_struct("Single")
                .field("value", value)
                .finish_non_exhaustive(),
            SelectionBinding::Multi { value, .. } => f
                .debug_struct("Multi")
                .field("value", value)
                .finish_non_exhaustive(),
        }
    }
}
