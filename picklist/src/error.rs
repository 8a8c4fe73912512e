use thiserror::Error;

use crate::option::OptionValue;
use crate::selection::SelectionMode;

/// Caller contract violations.
///
/// Interaction never produces these. They come from [`SelectProps::check`]
/// and from feeding back a value of the wrong mode.
///
/// [`SelectProps::check`]: crate::SelectProps::check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    #[error("selection mode mismatch: select is {expected:?}, value is {found:?}")]
    ModeMismatch {
        expected: SelectionMode,
        found: SelectionMode,
    },

    #[error("option value {0} appears more than once")]
    DuplicateOption(OptionValue),

    #[error("selected value {0} is not among the options")]
    DanglingSelection(OptionValue),

    #[error("value {0} is selected more than once")]
    DuplicateSelection(OptionValue),
}
