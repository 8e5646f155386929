//! Collision detection for bubbles
//!
//! Two pure checks: circle against circle, and circle against the playfield
//! rectangle `[0, width] x [0, height]`. Detection only reports; what a
//! collision does is decided by the session's policy.

use glam::Vec2;

use super::bubble::Bubble;

/// Kind of collision a bubble is involved in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Overlaps another bubble
    Bubble { partner: u32 },
    /// Pokes out of the playfield
    Bounds,
}

/// A detected collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub bubble_id: u32,
    pub kind: CollisionKind,
}

/// Circle-circle intersection
#[inline]
pub fn circles_overlap(a_center: Vec2, a_radius: f32, b_center: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_center.distance_squared(b_center) < reach * reach
}

/// Whether any extremal point of the circle lies outside `[0, bounds.x] x [0, bounds.y]`
#[inline]
pub fn circle_out_of_bounds(center: Vec2, radius: f32, bounds: Vec2) -> bool {
    center.x - radius < 0.0
        || center.x + radius > bounds.x
        || center.y - radius < 0.0
        || center.y + radius > bounds.y
}

pub fn bubbles_overlap(a: &Bubble, b: &Bubble) -> bool {
    circles_overlap(a.center, a.radius, b.center, b.radius)
}

pub fn bubble_out_of_bounds(bubble: &Bubble, bounds: Vec2) -> bool {
    circle_out_of_bounds(bubble.center, bubble.radius, bounds)
}

/// Ids of live bubbles overlapping `bubble` (never itself)
pub fn overlapping_partners<'a>(
    bubble: &'a Bubble,
    bubbles: &'a [Bubble],
) -> impl Iterator<Item = u32> + 'a {
    bubbles
        .iter()
        .filter(move |other| other.id != bubble.id && other.is_live())
        .filter(move |other| bubbles_overlap(bubble, other))
        .map(|other| other.id)
}

/// Run both checks over every live bubble.
///
/// Popping bubbles still count, so a bubble mid-animation can end the round.
/// A bubble-bubble overlap is reported once per bubble, naming its first
/// partner in slice order.
pub fn detect(bubbles: &[Bubble], bounds: Vec2) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    for bubble in bubbles.iter().filter(|b| b.is_live()) {
        if let Some(partner) = overlapping_partners(bubble, bubbles).next() {
            events.push(CollisionEvent {
                bubble_id: bubble.id,
                kind: CollisionKind::Bubble { partner },
            });
        }
        if bubble_out_of_bounds(bubble, bounds) {
            events.push(CollisionEvent {
                bubble_id: bubble.id,
                kind: CollisionKind::Bounds,
            });
        }
    }

    events
}
