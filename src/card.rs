//! Card values and the infinite-shoe draw.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// A playing card reduced to its blackjack value.
///
/// Suits and face ranks never affect scoring, so a card is nothing but its
/// counting value: `1` is an ace, `10` covers ten, jack, queen, and king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The counting value of the card (1 = Ace, 10 = ten or any face card).
    pub value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Values outside 1..=10
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.value == 1
    }

    /// Draws one card from the infinite shoe.
    pub(crate) fn draw(rng: &mut ChaCha8Rng) -> Self {
        DECK[rng.random_range(0..DECK.len())]
    }
}

/// The card values one draw can produce, with ten-valued ranks listed four
/// times over.
///
/// Sampling this table uniformly with replacement models an infinite shoe:
/// every draw has the rank distribution of a fresh 52-card deck, and card
/// counting is useless.
pub const DECK: [Card; 13] = [
    Card::new(1),
    Card::new(2),
    Card::new(3),
    Card::new(4),
    Card::new(5),
    Card::new(6),
    Card::new(7),
    Card::new(8),
    Card::new(9),
    Card::new(10),
    Card::new(10),
    Card::new(10),
    Card::new(10),
];
