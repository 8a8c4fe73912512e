//! The demo app: one multi select and one single select over the same
//! options, with the selections owned here rather than by the widgets.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use picklist::{Event, EventResult, InputHub, Select, SelectOption, SelectProps, Selection};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::input::FocusState;
use crate::render::{Frame, HitMap, render};
use crate::state::State;

const MULTI_ID: &str = "multi";
const SINGLE_ID: &str = "single";

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    hub: InputHub,
    multi: Select,
    single: Select,
    multi_value: State<Vec<SelectOption>>,
    single_value: State<Option<SelectOption>>,
    focus: FocusState,
    hits: HitMap,
}

impl App {
    pub fn new(config: &DemoConfig) -> Result<Self, DemoError> {
        let hub = InputHub::new();

        let multi_value = State::new(config.multi_value()?);
        let single_value = State::new(config.single_value()?);

        let commit_multi = multi_value.clone();
        let multi = Select::mount(
            MULTI_ID,
            SelectProps::multi(config.options.clone(), multi_value.current(), move |v| {
                commit_multi.commit(v)
            }),
            &hub,
        );

        let commit_single = single_value.clone();
        let single = Select::mount(
            SINGLE_ID,
            SelectProps::single(config.options.clone(), single_value.current(), move |v| {
                commit_single.commit(v)
            }),
            &hub,
        );

        Ok(Self {
            hub,
            multi,
            single,
            multi_value,
            single_value,
            focus: FocusState::new(),
            hits: HitMap::default(),
        })
    }

    /// Container ids in tab order.
    fn focusable(&self) -> Vec<String> {
        [&self.multi, &self.single]
            .into_iter()
            .filter(|s| s.is_focusable())
            .map(|s| s.id().to_string())
            .collect()
    }

    /// Build the next frame and remember its hit regions.
    pub fn frame(&mut self) -> Frame {
        let focused = self.focus.focused();
        let views = [&self.multi, &self.single]
            .into_iter()
            .map(|s| (s.view(), focused == Some(s.id())))
            .collect::<Vec<_>>();
        let frame = render("picklist demo", &views);
        self.hits = frame.hits.clone();
        frame
    }

    /// Handle one terminal event to completion.
    pub fn handle(&mut self, raw: &CrosstermEvent) -> Flow {
        if is_quit(raw) {
            log::info!("Quit requested");
            return Flow::Quit;
        }

        let focusable = self.focusable();
        for event in self.focus.process_event(raw, &self.hits, &focusable) {
            self.dispatch(&event);
            self.commit();
        }
        Flow::Continue
    }

    fn dispatch(&mut self, event: &Event) {
        if let Event::Key {
            target: Some(target),
            ..
        } = event
            && !self.hub.is_listening(target)
        {
            log::trace!("No key listener for {}", target);
            return;
        }

        for select in [&mut self.multi, &mut self.single] {
            if select.handle_event(event) == EventResult::Consumed {
                log::trace!("{:?} consumed by {}", event, select.id());
                return;
            }
        }
    }

    /// Feed committed values back into the widgets.
    fn commit(&mut self) {
        if let Some(value) = self.multi_value.take_committed() {
            log::info!("multi -> {:?}", labels(&value));
            if let Err(e) = self.multi.set_selection(Selection::Multi(value)) {
                log::error!("multi: {}", e);
            }
        }
        if let Some(value) = self.single_value.take_committed() {
            log::info!("single -> {:?}", value.as_ref().map(|v| &v.label));
            if let Err(e) = self.single.set_selection(Selection::Single(value)) {
                log::error!("single: {}", e);
            }
        }
    }
}

fn labels(options: &[SelectOption]) -> Vec<&str> {
    options.iter().map(|o| o.label.as_str()).collect()
}

fn is_quit(raw: &CrosstermEvent) -> bool {
    let CrosstermEvent::Key(key) = raw else {
        return false;
    };
    key.kind == KeyEventKind::Press
        && match key.code {
            KeyCode::Char('q') => key.modifiers.is_empty(),
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app() -> App {
        let mut app = App::new(&DemoConfig::default()).unwrap();
        app.frame();
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle(&key(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(
            app.handle(&CrosstermEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Flow::Quit
        );
        assert_eq!(app.handle(&key(KeyCode::Char('x'))), Flow::Continue);
    }

    #[test]
    fn test_keyboard_pick_is_committed_and_fed_back() {
        let mut app = app();

        // Focus the single select, open, move to Option 3, pick
        app.handle(&key(KeyCode::Tab));
        app.handle(&key(KeyCode::Tab));
        app.handle(&key(KeyCode::Enter));
        app.handle(&key(KeyCode::Down));
        app.handle(&key(KeyCode::Down));
        app.handle(&key(KeyCode::Enter));

        let value = app.single_value.current().map(|v| v.label);
        assert_eq!(value.as_deref(), Some("Option 3"));
        assert_eq!(app.single.selection(), Selection::Single(app.single_value.current()));
        assert!(app.single.is_open());
        assert!(!app.multi.is_open());
    }

    #[test]
    fn test_tab_away_closes_via_blur() {
        let mut app = app();
        app.handle(&key(KeyCode::Tab));
        app.handle(&key(KeyCode::Enter));
        assert!(app.multi.is_open());

        app.handle(&key(KeyCode::Tab));
        assert!(!app.multi.is_open());
    }

    #[test]
    fn test_pointer_flow_on_multi() {
        let mut app = app();

        // Multi container line is row 3; click its body to open
        app.handle(&click(20, 3));
        assert!(app.multi.is_open());
        app.frame();

        // Rows follow the container: Option 2 is on row 5
        app.handle(&click(6, 5));
        assert!(!app.multi.is_open());
        assert_eq!(labels(&app.multi_value.current()), vec!["Option 1", "Option 2"]);
        app.frame();

        // First badge "[Option 1 ×]" starts at column 2
        app.handle(&click(3, 3));
        assert_eq!(labels(&app.multi_value.current()), vec!["Option 2"]);
        assert!(!app.multi.is_open());
    }

    #[test]
    fn test_click_outside_closes() {
        let mut app = app();
        app.handle(&click(20, 3));
        assert!(app.multi.is_open());
        app.frame();

        app.handle(&click(70, 0));
        assert!(!app.multi.is_open());
    }
}
