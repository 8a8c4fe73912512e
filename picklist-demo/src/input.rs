//! Focus tracking and translation of terminal events into targeted events.

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};
use picklist::{Event, Key, Modifiers, Part};

use crate::render::HitMap;

/// Tracks which container is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, focusable: &[String]) -> Option<String> {
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };
        self.change(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, focusable: &[String]) -> Option<String> {
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };
        self.change(new_focus)
    }

    fn change(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Move focus to `target`, or clear it, emitting blur/focus events.
    fn move_to(&mut self, target: Option<String>, events: &mut Vec<Event>) {
        if self.focused == target {
            return;
        }
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur { target: old });
        }
        if let Some(new) = target {
            log::debug!("[focus] -> {}", new);
            events.push(Event::Focus {
                target: new.clone(),
            });
            self.focused = Some(new);
        }
    }

    /// Convert a terminal event into targeted events.
    ///
    /// `focusable` lists the container ids in tab order. Clicking inside a
    /// container focuses it, clicking anywhere else clears focus.
    pub fn process_event(
        &mut self,
        raw: &CrosstermEvent,
        hits: &HitMap,
        focusable: &[String],
    ) -> Vec<Event> {
        let mut events = Vec::new();

        match raw {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return events;
                }
                let key = Key::from(key_event.code);
                let modifiers = Modifiers::from(key_event.modifiers);

                if matches!(key, Key::Tab | Key::BackTab) {
                    let old = self.focused.clone();
                    let changed = if key == Key::Tab && !modifiers.shift {
                        self.focus_next(focusable)
                    } else {
                        self.focus_prev(focusable)
                    };
                    if let Some(new) = changed {
                        if let Some(old) = old {
                            events.push(Event::Blur { target: old });
                        }
                        events.push(Event::Focus { target: new });
                    }
                    return events;
                }

                events.push(Event::Key {
                    target: self.focused.clone(),
                    key,
                    modifiers,
                });
            }

            CrosstermEvent::Mouse(mouse_event) => {
                let target = hits
                    .hit(mouse_event.column, mouse_event.row)
                    .map(str::to_string);

                match mouse_event.kind {
                    MouseEventKind::Down(button) => {
                        let owner = target.as_deref().and_then(|t| {
                            focusable
                                .iter()
                                .find(|id| Part::parse(id, t).is_some())
                                .cloned()
                        });
                        self.move_to(owner, &mut events);
                        events.push(Event::Click {
                            target,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Moved => {
                        events.push(Event::Hover { target });
                    }
                    _ => {}
                }
            }

            _ => {}
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
    };
    use picklist::{SelectView, ValueView};

    fn ids() -> Vec<String> {
        vec!["multi".to_string(), "single".to_string()]
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn closed(id: &str) -> SelectView {
        SelectView {
            id: id.into(),
            open: false,
            value: ValueView::Label(None),
            clear_id: format!("{}-clear", id),
            rows: vec![],
        }
    }

    #[test]
    fn test_focus_next_wraps() {
        let mut focus = FocusState::new();
        assert_eq!(focus.focus_next(&ids()), Some("multi".to_string()));
        assert_eq!(focus.focus_next(&ids()), Some("single".to_string()));
        assert_eq!(focus.focus_next(&ids()), Some("multi".to_string()));
        assert_eq!(focus.focus_prev(&ids()), Some("single".to_string()));
        assert_eq!(focus.focus_next(&[]), None);
    }

    #[test]
    fn test_tab_emits_blur_then_focus() {
        let mut focus = FocusState::new();
        let hits = HitMap::default();

        let events = focus.process_event(&key(KeyCode::Tab, KeyModifiers::NONE), &hits, &ids());
        assert_eq!(
            events,
            vec![Event::Focus {
                target: "multi".into()
            }]
        );

        let events = focus.process_event(&key(KeyCode::Tab, KeyModifiers::NONE), &hits, &ids());
        assert_eq!(
            events,
            vec![
                Event::Blur {
                    target: "multi".into()
                },
                Event::Focus {
                    target: "single".into()
                },
            ]
        );
    }

    #[test]
    fn test_keys_target_focused_container() {
        let mut focus = FocusState::new();
        let hits = HitMap::default();

        let events = focus.process_event(&key(KeyCode::Enter, KeyModifiers::NONE), &hits, &ids());
        assert_eq!(
            events,
            vec![Event::Key {
                target: None,
                key: Key::Enter,
                modifiers: Modifiers::new(),
            }]
        );

        focus.focus_next(&ids());
        let events = focus.process_event(&key(KeyCode::Down, KeyModifiers::NONE), &hits, &ids());
        assert_eq!(events, vec![Event::key("multi", Key::Down)]);
    }

    #[test]
    fn test_click_focuses_owner_and_outside_click_blurs() {
        let frame = render("demo", &[(closed("multi"), false), (closed("single"), false)]);
        let mut focus = FocusState::new();

        // Second select's container line: title, help, spacer, multi, spacer
        let events = focus.process_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 10, 5),
            &frame.hits,
            &ids(),
        );
        assert_eq!(
            events,
            vec![
                Event::Focus {
                    target: "single".into()
                },
                Event::click("single"),
            ]
        );

        let events = focus.process_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 10, 0),
            &frame.hits,
            &ids(),
        );
        assert_eq!(
            events,
            vec![
                Event::Blur {
                    target: "single".into()
                },
                Event::Click {
                    target: None,
                    button: picklist::MouseButton::Left,
                },
            ]
        );
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn test_mouse_move_becomes_hover() {
        let frame = render("demo", &[(closed("multi"), false)]);
        let mut focus = FocusState::new();
        let events = focus.process_event(&mouse(MouseEventKind::Moved, 10, 3), &frame.hits, &ids());
        assert_eq!(events, vec![Event::hover("multi")]);
    }
}
