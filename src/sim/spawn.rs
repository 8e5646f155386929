//! Spawn placement by rejection sampling
//!
//! Draws random candidates until one is clear of every growing bubble.
//! After [`MAX_PLACEMENT_RETRIES`] rejections the last candidate is used
//! anyway: a spawn that might overlap beats a spawn that never happens.

use glam::Vec2;
use rand::Rng;

use super::bubble::Bubble;
use crate::consts::MAX_PLACEMENT_RETRIES;

/// Outcome of a placement search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec2,
    /// False when the retry budget ran out and the position was not checked clear
    pub accepted: bool,
}

/// Whether `candidate` is farther than `radius + margin` from every growing bubble
pub fn is_clear(existing: &[Bubble], candidate: Vec2, margin: f32) -> bool {
    existing
        .iter()
        .filter(|b| b.is_growing())
        .all(|b| b.center.distance(candidate) > b.diameter() / 2.0 + margin)
}

/// Find a spawn position for a bubble of `radius` inside `bounds`
pub fn place<R: Rng + ?Sized>(
    existing: &[Bubble],
    radius: f32,
    margin: f32,
    bounds: Vec2,
    rng: &mut R,
) -> Placement {
    let max = (bounds - Vec2::splat(radius + margin)).max(Vec2::ZERO);

    let mut candidate = Vec2::ZERO;
    for _ in 0..=MAX_PLACEMENT_RETRIES {
        candidate = Vec2::new(
            rng.random_range(0.0..=max.x),
            rng.random_range(0.0..=max.y),
        );
        if is_clear(existing, candidate, margin) {
            return Placement {
                position: candidate,
                accepted: true,
            };
        }
    }

    log::debug!(
        "placement retries exhausted, spawning at ({:.1}, {:.1}) unchecked",
        candidate.x,
        candidate.y
    );
    Placement {
        position: candidate,
        accepted: false,
    }
}
