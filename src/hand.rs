//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// An append-only hand of drawn cards.
///
/// The same type serves the player and the dealer; only the drawing policy
/// around it differs. Scoring follows the classic episodic task: at most one
/// ace counts as 11, and a hand over 21 scores zero at settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the raw card values, counting every ace as 1.
    fn raw_sum(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |sum, card| sum.saturating_add(card.value))
    }

    /// Returns whether the hand holds an ace that counts as 11 without
    /// busting, i.e. the raw sum plus 10 stays at 21 or below.
    ///
    /// At most one ace can ever count as 11, so this is a property of the
    /// whole hand, not of a particular card.
    #[must_use]
    pub fn usable_ace(&self) -> bool {
        self.cards.iter().any(|card| card.is_ace()) && self.raw_sum() <= 11
    }

    /// Calculates the best value of the hand.
    ///
    /// One ace is counted as 11 when that keeps the total at 21 or below;
    /// every other ace counts as 1. Values over 21 are reported as-is.
    #[must_use]
    pub fn value(&self) -> u8 {
        let raw = self.raw_sum();
        if self.usable_ace() { raw + 10 } else { raw }
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the settlement score of the hand: its value, or 0 on a bust.
    ///
    /// A busted hand loses to any standing hand and pushes against another
    /// bust, which the zero score encodes without a special case.
    #[must_use]
    pub fn score(&self) -> u8 {
        if self.is_bust() { 0 } else { self.value() }
    }

    /// Returns whether the hand is a natural: an ace and a ten-valued card
    /// as the opening two cards.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        if self.cards.len() != 2 {
            return false;
        }
        let (a, b) = (self.cards[0].value, self.cards[1].value);
        a.min(b) == 1 && a.max(b) == 10
    }
}
