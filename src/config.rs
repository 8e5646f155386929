//! Session configuration
//!
//! Load-time constants for a session. Everything has a default from
//! [`crate::consts`] except the collision policy, which must be chosen
//! explicitly because the two policies play very differently.

use std::ops::Deref;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// What a detected collision does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Any collision ends the round immediately
    GameOver,
    /// The offending bubbles are popped, the round continues
    ForcedPop,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::GameOver => "game-over",
            CollisionPolicy::ForcedPop => "forced-pop",
        }
    }

}

impl FromStr for CollisionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "game-over" | "gameover" => Ok(CollisionPolicy::GameOver),
            "forced-pop" | "pop" => Ok(CollisionPolicy::ForcedPop),
            _ => Err(ConfigError::UnknownCollisionPolicy {
                name: s.to_string(),
            }),
        }
    }
}

/// Raw session configuration, as written by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Spawning ===
    /// Radius of a freshly spawned bubble
    pub bubble_radius: f32,
    /// Clearance kept between a new bubble and existing ones
    pub spawn_margin: f32,
    /// Concurrent bubble limit
    pub max_bubbles: usize,

    // === Growth ===
    /// Ticks between growth steps
    pub growth_period_ticks: u32,
    /// Inclusive range each bubble's growth rate is drawn from
    pub growth_rate_min: u32,
    pub growth_rate_max: u32,

    // === Pop animation ===
    /// Idle ticks between animation frame advances (0 = every tick)
    pub animation_cadence: u32,
    /// Number of frames in the pop sequence
    pub frame_count: u32,

    /// Collision consequence; no default on purpose
    pub collision_policy: Option<CollisionPolicy>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            bubble_radius: BUBBLE_RADIUS,
            spawn_margin: SPAWN_MARGIN,
            max_bubbles: MAX_BUBBLES,

            growth_period_ticks: GROWTH_PERIOD_TICKS,
            growth_rate_min: GROWTH_RATE_MIN,
            growth_rate_max: GROWTH_RATE_MAX,

            animation_cadence: ANIMATION_CADENCE,
            frame_count: POP_FRAME_COUNT,

            collision_policy: None,
        }
    }
}

impl SessionConfig {
    /// Defaults with the given collision policy
    pub fn with_policy(policy: CollisionPolicy) -> Self {
        Self {
            collision_policy: Some(policy),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.playfield_width, self.playfield_height)
    }

    /// Check every constraint a running session relies on
    pub fn validate(self) -> Result<ValidConfig, ConfigError> {
        // Spawn sampling needs finite bounds
        for (field, value) in [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bubble_radius", self.bubble_radius),
            ("spawn_margin", self.spawn_margin),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !(self.bubble_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius {
                radius: self.bubble_radius,
            });
        }
        if !(self.spawn_margin > 0.0) {
            return Err(ConfigError::NonPositiveMargin {
                margin: self.spawn_margin,
            });
        }
        if self.max_bubbles == 0 {
            return Err(ConfigError::ZeroSpawnLimit);
        }
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(ConfigError::NonPositivePlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        if self.growth_period_ticks == 0 {
            return Err(ConfigError::ZeroGrowthPeriod);
        }
        if self.growth_rate_min > self.growth_rate_max {
            return Err(ConfigError::InvertedGrowthRange {
                min: self.growth_rate_min,
                max: self.growth_rate_max,
            });
        }
        if self.frame_count < 2 {
            return Err(ConfigError::TooFewFrames {
                frame_count: self.frame_count,
            });
        }

        // Spawn box is [0, size - radius - margin] per axis
        let required = self.bubble_radius + self.spawn_margin;
        if self.playfield_width <= required || self.playfield_height <= required {
            return Err(ConfigError::PlayfieldTooSmall {
                width: self.playfield_width,
                height: self.playfield_height,
                required,
            });
        }

        let policy = self
            .collision_policy
            .ok_or(ConfigError::MissingCollisionPolicy)?;

        Ok(ValidConfig {
            config: self,
            policy,
        })
    }
}

/// A configuration that passed [`SessionConfig::validate`]
#[derive(Debug, Clone)]
pub struct ValidConfig {
    config: SessionConfig,
    policy: CollisionPolicy,
}

impl ValidConfig {
    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }
}

impl Deref for ValidConfig {
    type Target = SessionConfig;

    fn deref(&self) -> &SessionConfig {
        &self.config
    }
}
