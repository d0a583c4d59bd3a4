//! Scripted episode walkthrough: a hit-below-17 policy with full commentary.
//!
//! Usage: `cargo run --example episodes -- [episodes] [seed]`

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use bjgym::{Action, BlackjackEnv, Card, EnvOptions, Observation};

fn main() {
    let mut args = env::args().skip(1);
    let episodes: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);
    let seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = EnvOptions::default().with_natural(true);
    let mut env = BlackjackEnv::new(options, seed);

    println!("Playing {episodes} episode(s) with seed {seed}");

    for episode in 1..=episodes {
        println!("\n=== Episode {episode} ===");
        let (mut observation, _info) = env.reset(None);
        print_observation("Start", observation);

        let reward = loop {
            let action = policy(observation);
            println!("Action: {action}");

            let step = env.step(action).expect("episode is open");
            print_observation("Now", step.observation);

            observation = step.observation;
            if step.terminated {
                break step.reward;
            }
        };

        if let Some(table) = env.render_state() {
            println!("Dealer hand: {}", format_cards(table.dealer));
            println!("Player hand: {}", format_cards(table.player));
            if let Some(outcome) = table.outcome {
                println!("Result: {outcome} (reward {reward})");
            }
        }
    }
}

/// Hit on anything below 17, like the dealer does.
fn policy(observation: Observation) -> Action {
    if observation.player_total < 17 {
        Action::Hit
    } else {
        Action::Stick
    }
}

fn print_observation(label: &str, observation: Observation) {
    println!(
        "{label}: player {} | dealer shows {} | usable ace {}",
        observation.player_total, observation.dealer_upcard, observation.usable_ace
    );
}

fn format_cards(cards: &[Card]) -> String {
    let labels: Vec<String> = cards.iter().map(|card| format_card(*card)).collect();
    labels.join(" ")
}

fn format_card(card: Card) -> String {
    if card.is_ace() {
        "A".to_string()
    } else {
        card.value.to_string()
    }
}
