//! The episodic environment interface.

use crate::error::StepError;

/// Auxiliary diagnostics attached to resets and steps.
///
/// Blackjack has nothing to report here today; the struct is kept
/// non-exhaustive so fields can appear without breaking drivers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Info;

/// The result of a single environment transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<O> {
    /// Observation of the state after the transition.
    pub observation: O,
    /// Scalar reward for the transition.
    pub reward: f64,
    /// Whether the episode ended by the rules of the game.
    pub terminated: bool,
    /// Whether the episode was cut off externally, ruling out bootstrapping
    /// from `observation`. Blackjack episodes never are; always `false` here.
    pub truncated: bool,
    /// Auxiliary diagnostics.
    pub info: Info,
}

/// An episodic environment an agent can interact with.
///
/// The surface is deliberately small: start an episode, advance it one
/// action at a time, and describe the observation and action spaces.
/// [`BlackjackEnv`](crate::BlackjackEnv) is the implementer in this crate;
/// the trait exists so agents and training loops can stay generic over the
/// task.
pub trait Environment {
    /// View of the state handed to the agent.
    type Observation;
    /// Decision accepted by [`step`](Environment::step).
    type Action;
    /// Description of every observation the environment can emit.
    type ObservationSpace;
    /// Description of every action the environment accepts.
    type ActionSpace;

    /// Starts a new episode and returns its first observation.
    ///
    /// Passing a seed makes the episode stream from this point on a pure
    /// function of that seed.
    fn reset(&mut self, seed: Option<u64>) -> (Self::Observation, Info);

    /// Advances the current episode by one action.
    ///
    /// # Errors
    ///
    /// Returns an error when no episode is open, which is a driver bug
    /// rather than a game outcome.
    fn step(&mut self, action: Self::Action) -> Result<Step<Self::Observation>, StepError>;

    /// Returns the observation space. Constant over the instance's lifetime.
    fn observation_space(&self) -> Self::ObservationSpace;

    /// Returns the action space. Constant over the instance's lifetime.
    fn action_space(&self) -> Self::ActionSpace;
}
