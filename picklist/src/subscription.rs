//! Keyboard listener subscriptions.
//!
//! A select listens for keys on its container through a [`KeySubscription`]
//! taken from the host's [`InputHub`]. The subscription captures a
//! [`KeySnapshot`] of the navigation state and resolves keys against that
//! snapshot only. It is never updated: when the captured state changes the
//! widget takes a fresh subscription and drops the old one, so no handler
//! ever sees state older than the last transition.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::event::Key;

/// Unique identifier for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// State a key listener closes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySnapshot {
    pub is_open: bool,
    pub highlighted: usize,
    pub option_count: usize,
}

/// What a key asks the select to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Open the list.
    Open,
    /// Close the list.
    Close,
    /// Toggle the option at this index, keeping the list open.
    Select(usize),
    /// Move the highlight to this index.
    MoveTo(usize),
    /// Handled, but nothing changes (e.g. a move past the end).
    Nothing,
}

impl KeySnapshot {
    /// Resolve a key press. Returns `None` for keys the select does not handle.
    pub fn resolve(&self, key: Key) -> Option<KeyAction> {
        let action = match key {
            Key::Enter | Key::SPACE | Key::Up | Key::Down if self.option_count == 0 => {
                KeyAction::Nothing
            }
            Key::Enter | Key::SPACE => {
                if self.is_open {
                    KeyAction::Select(self.highlighted)
                } else {
                    KeyAction::Open
                }
            }
            Key::Up | Key::Down if !self.is_open => KeyAction::Open,
            Key::Up => match self.highlighted.checked_sub(1) {
                Some(prev) => KeyAction::MoveTo(prev),
                None => KeyAction::Nothing,
            },
            Key::Down => {
                let next = self.highlighted + 1;
                if next < self.option_count {
                    KeyAction::MoveTo(next)
                } else {
                    KeyAction::Nothing
                }
            }
            Key::Escape => KeyAction::Close,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Default)]
struct HubInner {
    /// Live subscription per target element.
    listeners: HashMap<String, SubscriptionId>,
}

/// Registry of keyboard listeners, keyed by target element id.
///
/// Cheap to clone; clones share the same registry. The host checks
/// [`is_listening`](Self::is_listening) to decide whether an element takes
/// key input.
#[derive(Debug, Clone, Default)]
pub struct InputHub {
    inner: Arc<RwLock<HubInner>>,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `target` to key input with a captured snapshot.
    ///
    /// Replaces any earlier subscription for the same target.
    pub fn subscribe(&self, target: impl Into<String>, snapshot: KeySnapshot) -> KeySubscription {
        let target = target.into();
        let id = SubscriptionId::new();
        if let Ok(mut guard) = self.inner.write()
            && let Some(old) = guard.listeners.insert(target.clone(), id)
        {
            log::trace!("[hub] {} resubscribed ({:?} -> {:?})", target, old, id);
        }
        KeySubscription {
            id,
            target,
            snapshot,
            hub: self.clone(),
        }
    }

    /// Check whether `target` has a live key subscription.
    pub fn is_listening(&self, target: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.listeners.contains_key(target))
            .unwrap_or(false)
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.listeners.len())
            .unwrap_or(0)
    }

    /// Release a subscription, unless a newer one already replaced it.
    fn release(&self, target: &str, id: SubscriptionId) {
        if let Ok(mut guard) = self.inner.write()
            && guard.listeners.get(target) == Some(&id)
        {
            guard.listeners.remove(target);
            log::trace!("[hub] {} released", target);
        }
    }
}

/// A live key listener. Dropping it unsubscribes.
#[derive(Debug)]
pub struct KeySubscription {
    id: SubscriptionId,
    target: String,
    snapshot: KeySnapshot,
    hub: InputHub,
}

impl KeySubscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn snapshot(&self) -> KeySnapshot {
        self.snapshot
    }

    /// Resolve a key against the captured snapshot.
    pub fn resolve(&self, key: Key) -> Option<KeyAction> {
        self.snapshot.resolve(key)
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.hub.release(&self.target, self.id);
    }
}
