//! Dealer play and round settlement.

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::EnvOptions;
use crate::result::Outcome;

use super::state::{Episode, Phase};

/// Sign of `a - b`, the even-money settlement of two scores.
const fn compare(a: u8, b: u8) -> i8 {
    if a > b {
        1
    } else if a < b {
        -1
    } else {
        0
    }
}

/// Draws cards into `dealer` until its best value reaches 17.
///
/// The dealer stands on every 17, soft ones included; the policy is fixed
/// and known to the agent.
fn play_dealer(dealer: &mut Hand, rng: &mut ChaCha8Rng) {
    while dealer.value() < 17 {
        dealer.add_card(Card::draw(rng));
    }
}

/// Settles a finished round and returns the reward.
///
/// The base reward is the sign of the score difference, with busts scoring
/// zero. A player natural is then adjusted by variant: under `sab` it wins
/// outright unless the dealer also holds one; otherwise, with `natural`
/// set, a winning natural pays 3:2.
fn settle(player: &Hand, dealer: &Hand, options: &EnvOptions) -> f64 {
    let base = compare(player.score(), dealer.score());
    if options.sab && player.is_natural() && !dealer.is_natural() {
        // A natural beats any dealer non-natural, a drawn-out 21 included.
        1.0
    } else if !options.sab && options.natural && player.is_natural() && base > 0 {
        1.5
    } else {
        f64::from(base)
    }
}

impl Episode {
    /// Ends the player's turn: the dealer draws out, the round is settled,
    /// and the outcome label is recorded.
    ///
    /// A natural dealer already stands at 21 and draws nothing, so the
    /// settlement always sees the original two cards when its natural
    /// checks can matter.
    pub(super) fn resolve_stick(&mut self, rng: &mut ChaCha8Rng, options: &EnvOptions) -> f64 {
        play_dealer(&mut self.dealer, rng);
        let reward = settle(&self.player, &self.dealer, options);
        self.outcome = Some(Outcome::from_reward(reward));
        self.phase = Phase::RoundOver;
        reward
    }
}
