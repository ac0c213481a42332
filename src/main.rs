//! Gridlock - concurrent tic-tac-toe between two policy-driven agents.

#![warn(missing_docs)]

use anyhow::{Context, Result, anyhow};
use gridlock::{Agent, Console, Game, MatchConfig, Outcome};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Optional registry file; absent means the default topology
/// (X sequential, O random).
const CONFIG_PATH: &str = "match.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = MatchConfig::load_or_default(CONFIG_PATH)?;
    debug!(?config, "Match configured");

    let game = Arc::new(Game::new());

    // Spawn one thread per registry entry.
    let mut handles = Vec::with_capacity(config.players().len());
    for spec in config.players() {
        let agent = Agent::new(
            Arc::clone(&game),
            *spec.mark(),
            *spec.policy(),
            config.pause(),
        )
        .with_renderer(Box::new(Console::new()));

        let handle = thread::Builder::new()
            .name(format!("agent-{}", spec.mark()))
            .spawn(move || agent.run())
            .context("Failed to spawn agent thread")?;
        handles.push(handle);
    }

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("Agent thread panicked"))?;
    }

    match game.outcome() {
        Outcome::Won(mark) => {
            info!(%mark, "Game over");
            println!("\nPlayer {mark} wins the game!");
        }
        Outcome::Draw => {
            info!("Game over");
            println!("\nThe game ended in a draw!");
        }
        // Unreachable: agents only return once the game is finished.
        Outcome::Pending => println!("\nThe game did not finish."),
    }

    Ok(())
}
