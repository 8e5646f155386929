//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically. One call is one
//! frame at the host's fixed rate; it never blocks.

use glam::Vec2;

use super::bubble::Lifecycle;
use super::collision::{self, CollisionEvent};
use super::state::{GameEvent, GamePhase, Session};
use crate::config::CollisionPolicy;

/// Discrete input from the host, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close the game (host decides when)
    Quit,
    /// Pause/unpause
    TogglePause,
    /// Primary button press at playfield position
    PointerClick(Vec2),
    /// Pointer moved (hover feedback only)
    PointerMove(Vec2),
    /// Start a new round after game over
    Restart,
}

/// Apply one input event
pub fn handle_input(session: &mut Session, event: InputEvent) {
    match event {
        InputEvent::Quit => session.request_quit(),
        InputEvent::TogglePause => session.toggle_pause(),
        InputEvent::PointerMove(pos) => session.pointer = Some(pos),
        InputEvent::PointerClick(pos) => {
            session.pointer = Some(pos);
            // Clicks only pop while the round is live
            if session.phase == GamePhase::Playing {
                session.pop_at(pos);
            }
        }
        InputEvent::Restart => {
            if !session.restart() {
                log::debug!("restart ignored in {:?}", session.phase);
            }
        }
    }
}

/// Advance the session by one fixed timestep.
///
/// Inputs are applied first, in order. Then, only while playing:
/// spawn, animation, growth, collision detection, collision consequence.
pub fn tick(session: &mut Session, inputs: &[InputEvent]) {
    for &event in inputs {
        handle_input(session, event);
    }

    // Don't tick if paused or game over
    if session.phase != GamePhase::Playing {
        return;
    }

    session.time_ticks += 1;

    // Spawn
    if session.bubbles.len() <= session.config().max_bubbles {
        session.spawn_bubble();
    }

    // Pop animations
    advance_animations(session);

    // Growth
    session.growth_timer = session.growth_timer.saturating_sub(1);
    if session.growth_timer == 0 {
        session.growth_timer = session.config().growth_period_ticks;
        for bubble in &mut session.bubbles {
            bubble.grow();
        }
    }

    // Collisions
    let collisions = collision::detect(&session.bubbles, session.config().playfield());
    if !collisions.is_empty() {
        apply_collisions(session, &collisions);
    }

    // Ensure deterministic ordering
    session.normalize_order();
}

/// Step every popping bubble and drop the finished ones
fn advance_animations(session: &mut Session) {
    let cadence = session.config().animation_cadence;
    let frame_count = session.config().frame_count;

    let mut changed = Vec::new();
    for bubble in &mut session.bubbles {
        if bubble.advance(cadence, frame_count) {
            changed.push(GameEvent::BubbleChanged {
                id: bubble.id,
                lifecycle: bubble.lifecycle,
                frame: bubble.frame,
            });
        }
    }
    for event in changed {
        session.push_event(event);
    }

    session.bubbles.retain(|b| b.lifecycle != Lifecycle::Removed);
}

fn apply_collisions(session: &mut Session, collisions: &[CollisionEvent]) {
    match session.config().policy() {
        CollisionPolicy::GameOver => {
            log::debug!(
                "bubble {} collided ({:?})",
                collisions[0].bubble_id,
                collisions[0].kind
            );
            session.end_round();
        }
        CollisionPolicy::ForcedPop => {
            for event in collisions {
                session.force_pop(event.bubble_id);
            }
        }
    }
}
