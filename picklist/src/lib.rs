//! A controlled dropdown select for terminal UIs.
//!
//! [`Select`] handles pointer and keyboard input for a list of options in
//! single or multi mode. It keeps the open/highlight state to itself and
//! leaves the selection with the caller, proposing changes through a
//! callback.

pub mod error;
pub mod event;
pub mod navigation;
pub mod option;
pub mod part;
mod router;
pub mod selection;
pub mod subscription;
pub mod view;
mod widget;

pub use error::PropsError;
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use navigation::{NavigationState, Phase};
pub use option::{OptionValue, SelectOption};
pub use part::Part;
pub use selection::{Selection, SelectionBinding, SelectionMode};
pub use subscription::{InputHub, KeyAction, KeySnapshot, KeySubscription};
pub use view::{BadgeView, RowView, SelectView, ValueView};
pub use widget::{Select, SelectProps};
