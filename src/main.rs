//! Bubble Pop headless host
//!
//! Runs the simulation at the fixed tick rate with a scripted auto-player
//! standing in for a human. Rendering is replaced by a JSON snapshot of the
//! final frame; audio by a logging player.
//!
//! Usage: `bubble-pop [--policy game-over|forced-pop] [--seed N]
//! [--config FILE] [--seconds N] [--rounds N]`

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;
#[cfg(not(target_arch = "wasm32"))]
use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use bubble_pop::{
    CollisionPolicy, SessionConfig,
    audio::{self, LogAudio},
    consts::TICK_RATE_HZ,
    sim::{GamePhase, InputEvent, Session, tick},
};
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser)]
#[command(name = "bubble-pop")]
#[command(about = "Run Bubble Pop headless with a scripted player")]
struct Args {
    /// RNG seed for the session
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Collision policy: game-over or forced-pop (overrides the config file)
    #[arg(long, value_parser = CollisionPolicy::from_str)]
    policy: Option<CollisionPolicy>,

    /// JSON config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<String>,

    /// Wall-clock seconds to simulate at the fixed tick rate
    #[arg(long, default_value_t = 120)]
    seconds: u64,

    /// Rounds to play before quitting
    #[arg(long, default_value_t = 3)]
    rounds: u32,
}

/// Config file (if any) with the command-line policy on top
#[cfg(not(target_arch = "wasm32"))]
fn load_config(args: &Args) -> anyhow::Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {path}"))?;
            log::info!("Loaded config from {}", path);
            SessionConfig::from_json(&json).with_context(|| format!("failed to parse {path}"))?
        }
        None => SessionConfig::default(),
    };
    if args.policy.is_some() {
        config.collision_policy = args.policy;
    }
    Ok(config)
}

/// Clicks the biggest growing bubble every few ticks
#[cfg(not(target_arch = "wasm32"))]
struct AutoPlayer {
    reaction_ticks: u64,
}

#[cfg(not(target_arch = "wasm32"))]
impl AutoPlayer {
    fn inputs(&self, session: &Session, frame: u64, rounds: u32) -> Vec<InputEvent> {
        match session.phase {
            GamePhase::GameOver if session.round < rounds => vec![InputEvent::Restart],
            GamePhase::GameOver => vec![InputEvent::Quit],
            GamePhase::Paused => vec![InputEvent::TogglePause],
            GamePhase::Playing => {
                if frame % self.reaction_ticks != 0 {
                    return Vec::new();
                }
                let target = session
                    .bubbles
                    .iter()
                    .filter(|b| b.is_growing())
                    .max_by(|a, b| a.radius.total_cmp(&b.radius));
                match target {
                    Some(bubble) => vec![
                        InputEvent::PointerMove(bubble.center),
                        InputEvent::PointerClick(bubble.center),
                    ],
                    None => Vec::new(),
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bubble Pop (headless) starting...");

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Could not load config: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = match Session::new(config, args.seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let player = AutoPlayer { reaction_ticks: 45 };
    let mut audio = LogAudio::new();
    let max_ticks = args.seconds * TICK_RATE_HZ as u64;

    let mut frame = 0;
    while frame < max_ticks && !session.quit_requested() {
        let inputs = player.inputs(&session, frame, args.rounds);
        tick(&mut session, &inputs);

        audio.set_muted(session.phase == GamePhase::Paused);
        let events = session.drain_events();
        audio::dispatch(&events, &mut audio);
        frame += 1;
    }

    log::info!(
        "Stopped after {} frames: round {}, score {}, {} sounds",
        frame,
        session.round,
        session.score,
        audio.played()
    );
    for (rank, entry) in session.high_scores.entries.iter().enumerate() {
        log::info!(
            "#{} round {}: {} points in {} ticks",
            rank + 1,
            entry.round,
            entry.score,
            entry.ticks
        );
    }

    match serde_json::to_string_pretty(&session.view()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Could not serialize final frame: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host embeds the library directly
}
