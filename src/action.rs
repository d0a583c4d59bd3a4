//! Player actions.

use crate::error::ActionError;

/// A player decision for one step of an episode.
///
/// The discriminants follow the conventional integer encoding of the task,
/// so agents working over raw integers can convert with [`Action::try_from`]
/// and [`Action::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// End the turn: the dealer plays out and the round is settled.
    Stick = 0,
    /// Draw one more card.
    Hit = 1,
}

impl Action {
    /// Returns the integer encoding of the action.
    ///
    /// # Example
    /// ```
    /// use bjgym::Action;
    ///
    /// assert_eq!(Action::Stick.index(), 0);
    /// assert_eq!(Action::Hit.index(), 1);
    /// ```
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Action {
    type Error = ActionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Stick),
            1 => Ok(Self::Hit),
            _ => Err(ActionError { index }),
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Stick => f.write_str("stick"),
            Self::Hit => f.write_str("hit"),
        }
    }
}
