//! A seedable blackjack environment for reinforcement learning, with
//! optional `no_std` support.
//!
//! The crate provides a [`BlackjackEnv`] type implementing the classic
//! episodic task: the agent hits or sticks against a dealer who draws to 17,
//! every card comes from an infinite shoe, and each finished round pays a
//! scalar reward. Both the 3:2-natural and the Sutton & Barto payout
//! variants are supported through [`EnvOptions`].
//!
//! # Example
//!
//! ```
//! use bjgym::{Action, BlackjackEnv, EnvOptions};
//!
//! let mut env = BlackjackEnv::new(EnvOptions::default(), 42);
//! let (observation, _info) = env.reset(None);
//! assert!((1..=10).contains(&observation.dealer_upcard));
//!
//! let step = env.step(Action::Stick).expect("episode is open");
//! assert!(step.terminated);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod env;
pub mod error;
pub mod game;
pub mod hand;
pub mod observation;
pub mod options;
pub mod result;
pub mod spaces;

// Re-export main types
pub use action::Action;
pub use card::{Card, DECK};
pub use env::{Environment, Info, Step};
pub use error::{ActionError, StepError};
pub use game::{BlackjackEnv, Phase, RenderState};
pub use hand::Hand;
pub use observation::Observation;
pub use options::{EnvOptions, RenderMode};
pub use result::Outcome;
pub use spaces::{ActionSpace, IntegerRange, ObservationSpace};
