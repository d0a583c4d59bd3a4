//! Episode outcome labels.

/// Final outcome of a terminated episode, seen from the player's side.
///
/// The label is redundant with the sign of the final reward; it exists for
/// presentation layers that want a word rather than a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player won the round.
    Win,
    /// The player lost the round, busts included.
    Lose,
    /// The round was a push.
    Draw,
}

impl Outcome {
    /// Labels a settled reward by its sign.
    pub(crate) fn from_reward(reward: f64) -> Self {
        if reward > 0.0 {
            Self::Win
        } else if reward < 0.0 {
            Self::Lose
        } else {
            Self::Draw
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Win => f.write_str("win"),
            Self::Lose => f.write_str("lose"),
            Self::Draw => f.write_str("draw"),
        }
    }
}
