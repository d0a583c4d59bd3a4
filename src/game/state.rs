//! Episode state types.

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;
use crate::observation::Observation;
use crate::result::Outcome;

/// Phase of the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to hit or stick.
    PlayerTurn,
    /// The episode has terminated; reset starts the next one.
    RoundOver,
}

/// Per-episode table state, replaced wholesale by every reset.
#[derive(Debug, Clone)]
pub(super) struct Episode {
    /// The dealer's hand. Only the first card is public while play is open.
    pub(super) dealer: Hand,
    /// The player's hand.
    pub(super) player: Hand,
    /// Where the episode stands.
    pub(super) phase: Phase,
    /// Outcome label, recorded at termination.
    pub(super) outcome: Option<Outcome>,
}

impl Episode {
    /// Deals a fresh episode: two cards to the dealer, then two to the
    /// player. The draw order is part of the reproducibility contract.
    pub(super) fn deal(rng: &mut ChaCha8Rng) -> Self {
        let mut dealer = Hand::new();
        dealer.add_card(Card::draw(rng));
        dealer.add_card(Card::draw(rng));

        let mut player = Hand::new();
        player.add_card(Card::draw(rng));
        player.add_card(Card::draw(rng));

        Self {
            dealer,
            player,
            phase: Phase::PlayerTurn,
            outcome: None,
        }
    }

    /// Value of the dealer's face-up card.
    pub(super) fn upcard(&self) -> u8 {
        // Hands hold at least two cards once dealt.
        self.dealer.cards()[0].value
    }

    /// Observation of the current state.
    pub(super) fn observation(&self) -> Observation {
        Observation {
            player_total: self.player.value(),
            dealer_upcard: self.upcard(),
            usable_ace: self.player.usable_ace(),
        }
    }
}
