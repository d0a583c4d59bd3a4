//! The agent-facing view of the table.

/// What the agent sees between steps.
///
/// The dealer's second card stays hidden for the whole episode, so this
/// triple is everything a policy may condition on. Equality and hashing are
/// derived so observations can key tabular value functions directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observation {
    /// Best value of the player's hand. Reported as-is after a bust, so
    /// drawn-out hands can exceed 21 (the declared range tops out at 31).
    pub player_total: u8,
    /// Value of the dealer's face-up first card, 1 through 10.
    pub dealer_upcard: u8,
    /// Whether the player holds an ace currently counted as 11.
    pub usable_ace: bool,
}
