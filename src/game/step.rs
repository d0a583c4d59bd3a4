use crate::action::Action;
use crate::card::Card;
use crate::env::{Info, Step};
use crate::error::StepError;
use crate::observation::Observation;
use crate::result::Outcome;

use super::{BlackjackEnv, state::Phase};

impl BlackjackEnv {
    /// Advances the episode by one action.
    ///
    /// Hitting draws one card into the player's hand; a bust terminates the
    /// episode with reward -1.0, and anything else keeps it open at reward
    /// 0.0. Sticking always terminates: the dealer draws up to 17 and the
    /// round is settled under the configured payout variant. The returned
    /// observation reflects the post-step state, and `truncated` is always
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NotReset`] before the first
    /// [`reset`](BlackjackEnv::reset), and [`StepError::EpisodeOver`] once
    /// the episode has terminated.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::{Action, BlackjackEnv, EnvOptions};
    ///
    /// let mut env = BlackjackEnv::new(EnvOptions::default(), 7);
    /// env.reset(None);
    ///
    /// let step = env.step(Action::Hit).expect("episode is open");
    /// if !step.terminated {
    ///     let step = env.step(Action::Stick).expect("episode is open");
    ///     assert!(step.terminated);
    /// }
    /// ```
    pub fn step(&mut self, action: Action) -> Result<Step<Observation>, StepError> {
        let Self {
            options,
            rng,
            episode,
        } = self;

        let episode = episode.as_mut().ok_or(StepError::NotReset)?;
        if episode.phase == Phase::RoundOver {
            return Err(StepError::EpisodeOver);
        }

        let reward = match action {
            Action::Hit => {
                episode.player.add_card(Card::draw(rng));
                if episode.player.is_bust() {
                    episode.phase = Phase::RoundOver;
                    episode.outcome = Some(Outcome::Lose);
                    -1.0
                } else {
                    0.0
                }
            }
            Action::Stick => episode.resolve_stick(rng, options),
        };

        Ok(Step {
            observation: episode.observation(),
            reward,
            terminated: episode.phase == Phase::RoundOver,
            truncated: false,
            info: Info::default(),
        })
    }
}
