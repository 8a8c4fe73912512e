//! The select widget and its props.

use std::collections::HashSet;

use crate::error::PropsError;
use crate::navigation::{NavigationState, Phase};
use crate::option::SelectOption;
use crate::selection::{Selection, SelectionBinding, SelectionMode};
use crate::subscription::{InputHub, KeySnapshot, KeySubscription};

/// Everything a caller configures on a select.
///
/// The mode is chosen by the binding variant, so the value shape and the
/// callback signature always agree with it.
#[derive(Debug)]
pub struct SelectProps {
    /// Options in display and keyboard order.
    pub options: Vec<SelectOption>,
    /// The caller's value and change callback.
    pub binding: SelectionBinding,
}

impl SelectProps {
    /// Props for a single select.
    pub fn single(
        options: impl IntoIterator<Item = SelectOption>,
        value: Option<SelectOption>,
        on_change: impl FnMut(Option<SelectOption>) + 'static,
    ) -> Self {
        Self {
            options: options.into_iter().collect(),
            binding: SelectionBinding::single(value, on_change),
        }
    }

    /// Props for a multi select.
    pub fn multi(
        options: impl IntoIterator<Item = SelectOption>,
        value: Vec<SelectOption>,
        on_change: impl FnMut(Vec<SelectOption>) + 'static,
    ) -> Self {
        Self {
            options: options.into_iter().collect(),
            binding: SelectionBinding::multi(value, on_change),
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.binding.mode() == SelectionMode::Multi
    }

    /// Check the caller's side of the contract.
    ///
    /// The select never enforces this; it only logs what it finds.
    pub fn check(&self) -> Result<(), PropsError> {
        check_options(&self.options)?;
        check_selection(&self.options, self.binding.selected())
    }
}

fn check_options(options: &[SelectOption]) -> Result<(), PropsError> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(&option.value) {
            return Err(PropsError::DuplicateOption(option.value.clone()));
        }
    }
    Ok(())
}

fn check_selection(options: &[SelectOption], selected: &[SelectOption]) -> Result<(), PropsError> {
    let mut seen = HashSet::new();
    for option in selected {
        if !options.contains(option) {
            return Err(PropsError::DanglingSelection(option.value.clone()));
        }
        if !seen.insert(&option.value) {
            return Err(PropsError::DuplicateSelection(option.value.clone()));
        }
    }
    Ok(())
}

/// A dropdown select, single or multi.
///
/// The select owns its navigation state (open flag and highlighted row) and
/// nothing else. The selection belongs to the caller: the select proposes a
/// new value through the binding's callback, and the caller feeds the value
/// it commits back with [`set_selection`](Self::set_selection).
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use picklist::{Event, InputHub, Key, Select, SelectOption, SelectProps, Selection};
///
/// let options = vec![SelectOption::new("Red", "red"), SelectOption::new("Blue", "blue")];
/// let proposed = Rc::new(RefCell::new(None));
/// let sink = Rc::clone(&proposed);
///
/// let hub = InputHub::new();
/// let mut select = Select::mount(
///     "color",
///     SelectProps::single(options, None, move |v| *sink.borrow_mut() = Some(v)),
///     &hub,
/// );
///
/// select.handle_event(&Event::key("color", Key::Enter)); // opens
/// select.handle_event(&Event::key("color", Key::Down));
/// select.handle_event(&Event::key("color", Key::Enter)); // proposes Blue
///
/// let value = proposed.borrow_mut().take().flatten();
/// assert_eq!(value, Some(SelectOption::new("Blue", "blue")));
/// select.set_selection(Selection::Single(value)).unwrap();
/// ```
#[derive(Debug)]
pub struct Select {
    id: String,
    props: SelectProps,
    pub(crate) nav: NavigationState,
    hub: InputHub,
    listener: KeySubscription,
}

impl Select {
    /// Mount a select under element id `id`.
    ///
    /// Starts closed with the first row highlighted and subscribes the
    /// container to key input on `hub`. Dropping the select unsubscribes.
    pub fn mount(id: impl Into<String>, props: SelectProps, hub: &InputHub) -> Self {
        let id = id.into();
        let nav = NavigationState::new();
        let listener = hub.subscribe(&id, snapshot(&nav, props.options.len()));

        log::debug!(
            "Select::mount id={} multiple={} options_count={}",
            id,
            props.is_multiple(),
            props.options.len()
        );
        warn_on_contract(&id, &props);

        Self {
            id,
            props,
            nav,
            hub: hub.clone(),
            listener,
        }
    }

    /// Element id of the container.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The container always sits in tab order.
    pub fn is_focusable(&self) -> bool {
        true
    }

    pub fn is_multiple(&self) -> bool {
        self.props.is_multiple()
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn highlighted_index(&self) -> usize {
        self.nav.highlighted()
    }

    pub fn phase(&self) -> Phase {
        self.nav.phase()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.props.options
    }

    /// Snapshot of the value the caller last fed in.
    pub fn selection(&self) -> Selection {
        self.props.binding.selection()
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.props.binding.is_selected(option)
    }

    /// Selected values that name no current option.
    pub fn dangling(&self) -> Vec<&SelectOption> {
        self.props
            .binding
            .selected()
            .iter()
            .filter(|v| !self.props.options.contains(v))
            .collect()
    }

    pub(crate) fn binding_mut(&mut self) -> &mut SelectionBinding {
        &mut self.props.binding
    }

    // -------------------------------------------------------------------------
    // Props updates
    // -------------------------------------------------------------------------

    /// Replace all props. Navigation state is kept.
    pub fn set_props(&mut self, props: SelectProps) {
        warn_on_contract(&self.id, &props);
        self.props = props;
        self.nav.clamp(self.props.options.len());
        self.sync_listener();
    }

    /// Feed back the value the caller committed.
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), PropsError> {
        self.props.binding.set_value(selection)?;
        if let Err(e) = check_selection(&self.props.options, self.props.binding.selected()) {
            log::warn!("[select] {}: {}", self.id, e);
        }
        Ok(())
    }

    /// Replace the options, keeping the highlight on a valid row.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.props.options = options;
        warn_on_contract(&self.id, &self.props);
        self.nav.clamp(self.props.options.len());
        self.sync_listener();
    }

    // -------------------------------------------------------------------------
    // Key subscription
    // -------------------------------------------------------------------------

    /// The live key subscription.
    pub fn listener(&self) -> &KeySubscription {
        &self.listener
    }

    /// Take a fresh subscription if the state it captured is out of date.
    pub(crate) fn sync_listener(&mut self) {
        let current = snapshot(&self.nav, self.props.options.len());
        if self.listener.snapshot() != current {
            log::trace!("[select] {} resubscribing with {:?}", self.id, current);
            self.listener = self.hub.subscribe(&self.id, current);
        }
    }
}

fn snapshot(nav: &NavigationState, option_count: usize) -> KeySnapshot {
    KeySnapshot {
        is_open: nav.is_open(),
        highlighted: nav.highlighted(),
        option_count,
    }
}

fn warn_on_contract(id: &str, props: &SelectProps) {
    if let Err(e) = props.check() {
        log::warn!("[select] {}: {}", id, e);
    }
}
