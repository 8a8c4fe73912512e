use picklist::{
    Event, InputHub, Key, KeyAction, KeySnapshot, Part, Select, SelectOption, SelectProps,
};

fn props() -> SelectProps {
    let options = (1..=3).map(|n| SelectOption::new(format!("Option {}", n), n));
    SelectProps::single(options, None, |_| {})
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_mount_subscribes_and_drop_releases() {
    let hub = InputHub::new();
    assert_eq!(hub.listener_count(), 0);

    let select = Select::mount("first", props(), &hub);
    assert!(hub.is_listening("first"));
    assert_eq!(select.listener().target(), "first");

    let other = Select::mount("second", props(), &hub);
    assert_eq!(hub.listener_count(), 2);

    drop(select);
    assert!(!hub.is_listening("first"));
    assert!(hub.is_listening("second"));

    drop(other);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_state_change_takes_fresh_subscription() {
    let hub = InputHub::new();
    let mut select = Select::mount("s", props(), &hub);
    let initial = select.listener().id();
    assert_eq!(
        select.listener().snapshot(),
        KeySnapshot {
            is_open: false,
            highlighted: 0,
            option_count: 3,
        }
    );

    select.handle_event(&Event::key("s", Key::Enter));
    let opened = select.listener().id();
    assert_ne!(opened, initial);
    assert!(select.listener().snapshot().is_open);

    select.handle_event(&Event::key("s", Key::Down));
    assert_eq!(select.listener().snapshot().highlighted, 1);

    // Still exactly one live listener for the container
    assert_eq!(hub.listener_count(), 1);
    assert!(hub.is_listening("s"));
}

#[test]
fn test_unchanged_state_keeps_subscription() {
    let hub = InputHub::new();
    let mut select = Select::mount("s", props(), &hub);
    select.handle_event(&Event::key("s", Key::Enter));
    let id = select.listener().id();

    // A rejected move and a hover off the rows change nothing
    select.handle_event(&Event::key("s", Key::Up));
    assert_eq!(select.listener().id(), id);

    select.handle_event(&Event::hover(Part::Container.element_id("s")));
    assert_eq!(select.listener().id(), id);
}

#[test]
fn test_listener_resolves_against_current_state() {
    let hub = InputHub::new();
    let mut select = Select::mount("s", props(), &hub);

    assert_eq!(select.listener().resolve(Key::Enter), Some(KeyAction::Open));

    select.handle_event(&Event::click("s"));
    assert_eq!(select.listener().resolve(Key::Enter), Some(KeyAction::Select(0)));

    select.handle_event(&Event::hover(Part::Row(2).element_id("s")));
    assert_eq!(select.listener().resolve(Key::Enter), Some(KeyAction::Select(2)));
    assert_eq!(select.listener().resolve(Key::Down), Some(KeyAction::Nothing));

    select.handle_event(&Event::blur("s"));
    assert_eq!(select.listener().resolve(Key::Down), Some(KeyAction::Open));
}

#[test]
fn test_hub_clones_share_registry() {
    let hub = InputHub::new();
    let host_view = hub.clone();
    let _select = Select::mount("s", props(), &hub);
    assert!(host_view.is_listening("s"));
}
