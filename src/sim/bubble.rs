//! Bubble entity and its pop lifecycle
//!
//! A bubble grows until something pops it, then plays a short frame
//! animation with its radius frozen, then disappears. The lifecycle is a
//! small explicit state machine; [`transition`] is the whole table.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Radius increases on growth ticks, full collision threat
    #[default]
    Growing,
    /// Radius frozen, animation frames advancing
    Popping,
    /// Animation finished, dropped from the live set this tick
    Removed,
}

/// Things that can happen to a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Growth tick
    Grow,
    /// Player click or forced pop
    Pop,
    /// The animation moved one frame; `finished` once past the second-to-last frame
    FrameAdvanced { finished: bool },
}

/// Pure lifecycle transition table
pub fn transition(from: Lifecycle, trigger: Trigger) -> Lifecycle {
    use Lifecycle::*;
    match (from, trigger) {
        (Growing, Trigger::Pop) => Popping,
        (Growing, _) => Growing,
        (Popping, Trigger::FrameAdvanced { finished: true }) => Removed,
        (Popping, _) => Popping,
        (Removed, _) => Removed,
    }
}

/// A bubble entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    /// Radius gained per growth tick, fixed at spawn
    pub growth_rate: f32,
    /// Current pop animation frame (0 until popping advances it)
    pub frame: u32,
    pub lifecycle: Lifecycle,
    /// Ticks waited since the last frame advance
    #[serde(default)]
    anim_wait: u32,
}

impl Bubble {
    pub fn new(id: u32, center: Vec2, radius: f32, growth_rate: f32) -> Self {
        Self {
            id,
            center,
            radius,
            growth_rate,
            frame: 0,
            lifecycle: Lifecycle::Growing,
            anim_wait: 0,
        }
    }

    pub fn is_growing(&self) -> bool {
        self.lifecycle == Lifecycle::Growing
    }

    pub fn is_popping(&self) -> bool {
        self.lifecycle == Lifecycle::Popping
    }

    /// Growing or popping - still on the playfield
    pub fn is_live(&self) -> bool {
        self.lifecycle != Lifecycle::Removed
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Apply one growth step. No-op unless growing.
    pub fn grow(&mut self) -> bool {
        if !self.is_growing() {
            return false;
        }
        self.lifecycle = transition(self.lifecycle, Trigger::Grow);
        self.radius += self.growth_rate;
        true
    }

    /// Start popping. Returns true only on the call that left `Growing`,
    /// so callers can tie one-shot side effects (sound, score) to it.
    pub fn pop(&mut self) -> bool {
        let before = self.lifecycle;
        self.lifecycle = transition(before, Trigger::Pop);
        before == Lifecycle::Growing && self.lifecycle == Lifecycle::Popping
    }

    /// Per-tick animation step while popping.
    ///
    /// `cadence` idle ticks pass between frame advances. The bubble becomes
    /// `Removed` once the frame index exceeds `frame_count - 2`.
    /// Returns true if the frame advanced.
    pub fn advance(&mut self, cadence: u32, frame_count: u32) -> bool {
        if !self.is_popping() {
            return false;
        }
        if self.anim_wait < cadence {
            self.anim_wait += 1;
            return false;
        }
        self.anim_wait = 0;

        self.frame += 1;
        let finished = self.frame > frame_count.saturating_sub(2);
        self.lifecycle = transition(self.lifecycle, Trigger::FrameAdvanced { finished });
        true
    }

    /// Whether `point` lies inside the bubble's circle
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Size the current frame is drawn at; every frame is scaled to the
    /// diameter the bubble had when it was popped
    pub fn display_size(&self) -> Vec2 {
        Vec2::splat(self.diameter())
    }
}
