//! The blackjack environment and its queries.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::card::Card;
use crate::env::{Environment, Info, Step};
use crate::error::StepError;
use crate::observation::Observation;
use crate::options::EnvOptions;
use crate::result::Outcome;
use crate::spaces::{ActionSpace, ObservationSpace};

mod dealer;
mod state;
mod step;

pub use state::Phase;

use state::Episode;

/// A single-player blackjack episode environment.
///
/// The environment owns its episode state and random source; [`reset`] and
/// [`step`] are the only mutating entry points. Use [`EnvOptions`] to pick
/// the payout variant for player naturals.
///
/// [`reset`]: BlackjackEnv::reset
/// [`step`]: BlackjackEnv::step
///
/// # Example
///
/// ```
/// use bjgym::{Action, BlackjackEnv, EnvOptions};
///
/// let mut env = BlackjackEnv::new(EnvOptions::default(), 42);
/// let (observation, _info) = env.reset(None);
/// assert!(observation.player_total >= 4);
///
/// let step = env.step(Action::Stick).expect("episode is open");
/// assert!(step.terminated);
/// ```
pub struct BlackjackEnv {
    /// Environment options.
    options: EnvOptions,
    /// Random source for every card drawn.
    rng: ChaCha8Rng,
    /// Current episode, if one has been dealt.
    episode: Option<Episode>,
}

impl BlackjackEnv {
    /// Creates a new environment with the given options and seed.
    ///
    /// The random source is owned and deterministic: two environments built
    /// with the same seed replay identical episode streams under identical
    /// action sequences.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::{BlackjackEnv, EnvOptions};
    ///
    /// let options = EnvOptions::default().with_natural(true);
    /// let env = BlackjackEnv::new(options, 42);
    /// let _ = env;
    /// ```
    #[must_use]
    pub fn new(options: EnvOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            episode: None,
        }
    }

    /// Starts a new episode and returns its first observation.
    ///
    /// The dealer is dealt two cards, then the player; only the dealer's
    /// first card enters the observation. Dealing never terminates an
    /// episode or pays a reward, even when a hand opens at 21.
    ///
    /// Passing a seed replaces the random source wholesale, so a seeded
    /// reset is reproducible regardless of the construction seed or of how
    /// many cards earlier episodes consumed.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, Info) {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        let episode = Episode::deal(&mut self.rng);
        let observation = episode.observation();
        self.episode = Some(episode);

        (observation, Info::default())
    }

    /// Returns the options the environment was built with.
    #[must_use]
    pub const fn options(&self) -> &EnvOptions {
        &self.options
    }

    /// Returns the phase of the current episode, or `None` before the first
    /// reset.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.episode.as_ref().map(|episode| episode.phase)
    }

    /// Returns a snapshot of the table for presentation layers, or `None`
    /// before the first reset.
    ///
    /// The snapshot is plain data; the environment itself never draws
    /// anything to a screen.
    #[must_use]
    pub fn render_state(&self) -> Option<RenderState<'_>> {
        self.episode.as_ref().map(|episode| RenderState {
            player_total: episode.player.value(),
            dealer_upcard: episode.upcard(),
            usable_ace: episode.player.usable_ace(),
            outcome: episode.outcome,
            player: episode.player.cards(),
            dealer: episode.dealer.cards(),
        })
    }
}

/// A plain-data snapshot of the table.
///
/// Borrowed from the environment between steps; drop it before stepping
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState<'a> {
    /// Best value of the player's hand.
    pub player_total: u8,
    /// Value of the dealer's face-up card.
    pub dealer_upcard: u8,
    /// Whether the player holds an ace counted as 11.
    pub usable_ace: bool,
    /// Outcome label, present once the episode has terminated.
    pub outcome: Option<Outcome>,
    /// Every player card, in draw order.
    pub player: &'a [Card],
    /// Every dealer card, in draw order. Only the first is face-up while
    /// the episode is open.
    pub dealer: &'a [Card],
}

impl Environment for BlackjackEnv {
    type Observation = Observation;
    type Action = Action;
    type ObservationSpace = ObservationSpace;
    type ActionSpace = ActionSpace;

    fn reset(&mut self, seed: Option<u64>) -> (Observation, Info) {
        Self::reset(self, seed)
    }

    fn step(&mut self, action: Action) -> Result<Step<Observation>, StepError> {
        Self::step(self, action)
    }

    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::new()
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace
    }
}
