//! Session state and core simulation types
//!
//! The session owns every bubble, the score, the growth timer and the
//! top-level phase. Everything the renderer or audio needs is either a query
//! on this struct or an intent in the event queue.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bubble::{Bubble, Lifecycle};
use super::spawn;
use crate::config::{SessionConfig, ValidConfig};
use crate::error::ConfigError;
use crate::highscores::HighScores;
use crate::view::FrameView;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bubbles spawn, grow and collide
    Playing,
    /// Simulation frozen
    Paused,
    /// A collision ended the round; waiting for restart
    GameOver,
}

/// Fire-and-forget intents for the host's collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// New bubble placed
    BubbleSpawned { id: u32, center: Vec2, radius: f32 },
    /// Bubble changed lifecycle or animation frame
    BubbleChanged {
        id: u32,
        lifecycle: Lifecycle,
        frame: u32,
    },
    /// Play the pop cue (player pops only)
    PopSound { id: u32 },
    /// Round ended with this score
    GameOver { score: u64 },
    /// Fresh round started
    Restarted,
}

/// A running bubble session (deterministic given config, seed and inputs)
#[derive(Debug, Clone)]
pub struct Session {
    config: ValidConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Live bubbles (sorted by id for determinism)
    pub bubbles: Vec<Bubble>,
    /// Score of the current round
    pub score: u64,
    /// Ticks until the next growth step
    pub growth_timer: u32,
    /// Simulation ticks in the current round
    pub time_ticks: u64,
    /// Round number (1-based)
    pub round: u32,
    /// Last reported pointer position
    pub pointer: Option<Vec2>,
    /// Best rounds of this session
    pub high_scores: HighScores,
    quit_requested: bool,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl Session {
    /// Validate `config` and start a session in `Playing`
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::from_valid(config.validate()?, seed))
    }

    pub fn from_valid(config: ValidConfig, seed: u64) -> Self {
        log::info!(
            "Session start: seed={}, playfield={}x{}, policy={}",
            seed,
            config.playfield_width,
            config.playfield_height,
            config.policy().as_str()
        );
        Self {
            growth_timer: config.growth_period_ticks,
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            bubbles: Vec::new(),
            score: 0,
            time_ticks: 0,
            round: 1,
            pointer: None,
            high_scores: HighScores::new(),
            quit_requested: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &ValidConfig {
        &self.config
    }

    /// Allocate a new entity ID. Wraps after `u32::MAX`.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn bubble(&self, id: u32) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    /// Place a new growing bubble with a random growth rate
    pub fn spawn_bubble(&mut self) -> u32 {
        let radius = self.config.bubble_radius;
        let placement = spawn::place(
            &self.bubbles,
            radius,
            self.config.spawn_margin,
            self.config.playfield(),
            &mut self.rng,
        );
        let growth_rate = self
            .rng
            .random_range(self.config.growth_rate_min..=self.config.growth_rate_max)
            as f32;
        self.spawn_bubble_at(placement.position, radius, growth_rate)
    }

    /// Insert a growing bubble at a known position
    pub fn spawn_bubble_at(&mut self, center: Vec2, radius: f32, growth_rate: f32) -> u32 {
        let id = self.next_entity_id();
        self.bubbles.push(Bubble::new(id, center, radius, growth_rate));
        self.events.push(GameEvent::BubbleSpawned { id, center, radius });
        log::debug!(
            "spawned bubble {} at ({:.1}, {:.1}), growth {}",
            id,
            center.x,
            center.y,
            growth_rate
        );
        id
    }

    /// Player click: pop the first growing bubble (by id) under `point`.
    ///
    /// Awards the bubble's radius at click time and queues exactly one pop
    /// sound. Returns the popped bubble's id.
    pub fn pop_at(&mut self, point: Vec2) -> Option<u32> {
        let bubble = self
            .bubbles
            .iter_mut()
            .find(|b| b.is_growing() && b.contains(point))?;

        if !bubble.pop() {
            return None;
        }
        let id = bubble.id;
        let award = bubble.radius.floor() as u64;
        let frame = bubble.frame;

        self.score += award;
        self.events.push(GameEvent::PopSound { id });
        self.events.push(GameEvent::BubbleChanged {
            id,
            lifecycle: Lifecycle::Popping,
            frame,
        });
        log::debug!("popped bubble {} for {} points (score {})", id, award, self.score);
        Some(id)
    }

    /// Pop without scoring or sound (collision consequence)
    pub fn force_pop(&mut self, id: u32) -> bool {
        let Some(bubble) = self.bubbles.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        if !bubble.pop() {
            return false;
        }
        let frame = bubble.frame;
        self.events.push(GameEvent::BubbleChanged {
            id,
            lifecycle: Lifecycle::Popping,
            frame,
        });
        log::debug!("force-popped bubble {}", id);
        true
    }

    /// Flip between Playing and Paused. No effect once the round is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// End the round and offer the score to the leaderboard
    pub fn end_round(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        let rank = self
            .high_scores
            .add_score(self.score, self.round, self.time_ticks);
        self.events.push(GameEvent::GameOver { score: self.score });
        match rank {
            Some(rank) => log::info!(
                "Game over: round {} scored {} (rank {})",
                self.round,
                self.score,
                rank
            ),
            None => log::info!("Game over: round {} scored {}", self.round, self.score),
        }
    }

    /// Start a fresh round. Only valid from GameOver; returns false otherwise.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.bubbles.clear();
        self.score = 0;
        self.growth_timer = self.config.growth_period_ticks;
        self.time_ticks = 0;
        self.round += 1;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted, round {}", self.round);
        true
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Whether the pointer is over `bubble`
    pub fn hovered(&self, bubble: &Bubble) -> bool {
        self.pointer.is_some_and(|p| bubble.contains(p))
    }

    pub fn any_hovered(&self) -> bool {
        self.bubbles.iter().any(|b| self.hovered(b))
    }

    /// Queue an intent
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Intents queued since the last drain, oldest first.
    ///
    /// The queue is only emptied here, so a host must drain it once per tick
    /// or it keeps growing for the life of the session.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read model for the renderer
    pub fn view(&self) -> FrameView {
        FrameView::capture(self)
    }

    /// Ensure bubbles are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.bubbles.sort_by_key(|b| b.id);
    }
}
