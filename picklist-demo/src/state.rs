use std::cell::RefCell;
use std::rc::Rc;

/// The demo's copy of a select's value.
///
/// Change callbacks commit proposals into a clone of the handle; the app
/// takes whatever was committed after each event and feeds it back into the
/// widget. Everything runs on the event loop thread.
#[derive(Debug)]
pub struct State<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

#[derive(Debug)]
struct Slot<T> {
    value: T,
    dirty: bool,
}

impl<T: Clone> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value,
                dirty: false,
            })),
        }
    }

    pub fn current(&self) -> T {
        self.slot.borrow().value.clone()
    }

    /// Store a value proposed by a select.
    pub fn commit(&self, value: T) {
        let mut slot = self.slot.borrow_mut();
        slot.value = value;
        slot.dirty = true;
    }

    /// The committed value, once, if anything was committed since last time.
    pub fn take_committed(&self) -> Option<T> {
        let mut slot = self.slot.borrow_mut();
        if !slot.dirty {
            return None;
        }
        slot.dirty = false;
        Some(slot.value.clone())
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}
