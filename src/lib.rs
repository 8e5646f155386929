//! Bubble Pop - pop growing bubbles before they touch
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bubbles, placement, collisions, session state)
//! - `config`: Load-time configuration with fail-fast validation
//! - `view`: Read model queried by the renderer
//! - `audio`: Sound cue contract for the audio collaborator
//! - `highscores`: In-memory leaderboard across rounds

pub mod audio;
pub mod config;
pub mod error;
pub mod highscores;
pub mod sim;
pub mod view;

pub use config::{CollisionPolicy, SessionConfig, ValidConfig};
pub use error::ConfigError;
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Host loop target rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1200.0;
    pub const PLAYFIELD_HEIGHT: f32 = 750.0;

    /// Radius of a freshly spawned bubble
    pub const BUBBLE_RADIUS: f32 = 5.0;
    /// Clearance between a new bubble and existing ones
    pub const SPAWN_MARGIN: f32 = 10.0;
    /// Concurrent bubble limit
    pub const MAX_BUBBLES: usize = 5;

    /// Ticks between growth steps
    pub const GROWTH_PERIOD_TICKS: u32 = 20;
    /// Per-bubble growth increment, drawn inclusive
    pub const GROWTH_RATE_MIN: u32 = 1;
    pub const GROWTH_RATE_MAX: u32 = 4;

    /// Idle ticks between pop animation frames: with `n` the frame advances
    /// on every `n + 1`th tick. 2 means every third tick.
    pub const ANIMATION_CADENCE: u32 = 2;
    /// Frames in the pop animation sequence
    pub const POP_FRAME_COUNT: u32 = 7;

    /// Placement retries before accepting an overlapping candidate
    pub const MAX_PLACEMENT_RETRIES: u32 = 50;
}
