//! Event routing for the Select widget.
//!
//! Every handler runs to completion before it returns. After any handled
//! event the key subscription is refreshed so the next key sees the new
//! navigation state.

use crate::event::{Event, EventResult, Key, Modifiers, MouseButton};
use crate::part::Part;
use crate::subscription::KeyAction;
use crate::widget::Select;

impl Select {
    /// Handle one input event.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        let result = match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => self.on_key(target.as_deref(), *key, *modifiers),
            Event::Click { target, button } => self.on_click(target.as_deref(), *button),
            Event::Hover { target } => self.on_hover(target.as_deref()),
            Event::Blur { target } => self.on_blur(target),
            Event::Focus { .. } => EventResult::Ignored,
        };

        if result.is_handled() {
            self.sync_listener();
        }
        result
    }

    fn part(&self, target: Option<&str>) -> Option<Part> {
        target.and_then(|t| Part::parse(self.id(), t))
    }

    fn on_key(&mut self, target: Option<&str>, key: Key, modifiers: Modifiers) -> EventResult {
        // Keys only count when the container itself has focus
        if self.part(target) != Some(Part::Container) {
            return EventResult::Ignored;
        }
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let Some(action) = self.listener().resolve(key) else {
            log::trace!("[select] {} ignoring key {:?}", self.id(), key);
            return EventResult::Ignored;
        };

        log::debug!("[select] {} key {:?} -> {:?}", self.id(), key, action);
        match action {
            KeyAction::Open => {
                self.nav.open();
            }
            KeyAction::Close => {
                self.nav.close();
            }
            KeyAction::Select(index) => {
                // Keyboard selection leaves the list open
                self.toggle_row(index);
            }
            KeyAction::MoveTo(index) => {
                let len = self.options().len();
                self.nav.highlight(index, len);
            }
            KeyAction::Nothing => {}
        }
        EventResult::Consumed
    }

    fn on_click(&mut self, target: Option<&str>, button: MouseButton) -> EventResult {
        if button != MouseButton::Left {
            return EventResult::Ignored;
        }
        let Some(part) = self.part(target) else {
            return EventResult::Ignored;
        };

        log::debug!("[select] {} click {:?} open={}", self.id(), part, self.is_open());
        match part {
            Part::Container => {
                self.nav.toggle();
                EventResult::Consumed
            }
            Part::Row(index) => {
                if !self.is_open() || index >= self.options().len() {
                    return EventResult::Ignored;
                }
                // Picking with the pointer always closes
                self.toggle_row(index);
                self.nav.close();
                EventResult::Consumed
            }
            Part::Badge(index) => {
                if !self.is_multiple() {
                    return EventResult::Ignored;
                }
                let Some(option) = self.selection().options().get(index).cloned() else {
                    return EventResult::Ignored;
                };
                self.binding_mut().toggle(&option);
                EventResult::Consumed
            }
            Part::Clear => {
                self.binding_mut().clear();
                EventResult::Consumed
            }
        }
    }

    fn on_hover(&mut self, target: Option<&str>) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }
        match self.part(target) {
            Some(Part::Row(index)) if index < self.options().len() => {
                let len = self.options().len();
                self.nav.highlight(index, len);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_blur(&mut self, target: &str) -> EventResult {
        if target != self.id() {
            return EventResult::Ignored;
        }
        if self.nav.close() {
            log::debug!("[select] {} closed on blur", self.id());
        }
        EventResult::Consumed
    }

    fn toggle_row(&mut self, index: usize) {
        if let Some(option) = self.options().get(index).cloned() {
            self.binding_mut().toggle(&option);
        }
    }
}
