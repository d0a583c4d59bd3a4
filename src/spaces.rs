//! Descriptions of what the environment emits and accepts.

use rand::Rng;

use crate::action::Action;
use crate::observation::Observation;

/// An inclusive range of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerRange {
    /// Smallest contained value.
    pub low: u8,
    /// Largest contained value.
    pub high: u8,
}

impl IntegerRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// Returns whether `value` lies in the range.
    #[must_use]
    pub const fn contains(&self, value: u8) -> bool {
        self.low <= value && value <= self.high
    }
}

/// The space of observations the environment can emit.
///
/// Player totals span `[0, 31]` and dealer upcards `[1, 10]`; the usable-ace
/// flag admits both values and needs no range. The declared bounds are wider
/// than what actual play reaches, matching the conventional published shape
/// of the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationSpace {
    /// Range of reportable player totals.
    pub player_total: IntegerRange,
    /// Range of dealer upcard values.
    pub dealer_upcard: IntegerRange,
}

impl ObservationSpace {
    /// Creates the observation space. Its bounds are fixed by the rules of
    /// the game and never vary per instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_total: IntegerRange::new(0, 31),
            dealer_upcard: IntegerRange::new(1, 10),
        }
    }

    /// Returns whether `observation` lies in the space.
    #[must_use]
    pub const fn contains(&self, observation: &Observation) -> bool {
        self.player_total.contains(observation.player_total)
            && self.dealer_upcard.contains(observation.dealer_upcard)
    }
}

impl Default for ObservationSpace {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-element discrete action space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionSpace;

impl ActionSpace {
    /// Number of distinct actions in the space.
    pub const N: usize = 2;

    /// Returns whether `action` lies in the space.
    ///
    /// Always true: every [`Action`] value is valid, which is exactly the
    /// point of converting raw integers up front.
    #[must_use]
    pub const fn contains(&self, _action: Action) -> bool {
        true
    }

    /// Draws a uniformly random action.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        if rng.random_range(0..2) == 0 {
            Action::Stick
        } else {
            Action::Hit
        }
    }
}
