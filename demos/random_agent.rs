//! Random-policy rollout: samples uniform actions and tallies outcomes.
//!
//! Usage: `cargo run --example random_agent -- [episodes] [seed]`

#![allow(clippy::missing_docs_in_private_items)]

use std::env;

use bjgym::{BlackjackEnv, EnvOptions, Environment, Outcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let mut args = env::args().skip(1);
    let episodes: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1000);
    let seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(7);

    let mut env = BlackjackEnv::new(EnvOptions::default(), seed);
    let space = env.action_space();
    let mut policy_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);
    let mut total_reward = 0.0;

    for _ in 0..episodes {
        env.reset(None);
        loop {
            let action = space.sample(&mut policy_rng);
            let step = env.step(action).expect("episode is open");
            if step.terminated {
                total_reward += step.reward;
                match env.render_state().and_then(|table| table.outcome) {
                    Some(Outcome::Win) => wins += 1,
                    Some(Outcome::Lose) => losses += 1,
                    Some(Outcome::Draw) => draws += 1,
                    None => {}
                }
                break;
            }
        }
    }

    println!("{episodes} episodes: {wins} wins, {losses} losses, {draws} draws");
    println!("mean reward: {:.3}", total_reward / f64::from(episodes));
}
