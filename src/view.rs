//! Read model for the renderer
//!
//! The renderer pulls a [`FrameView`] after each tick and draws from it. It
//! never touches the session itself.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Bubble, GamePhase, Lifecycle, Session};

/// Which cursor image to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CursorKind {
    #[default]
    Default,
    /// Pointer is over a bubble
    Hover,
}

/// One bubble as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleView {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    /// Index into the pop animation frames
    pub frame: u32,
    pub lifecycle: Lifecycle,
    /// Size to draw the current frame at
    pub display_size: Vec2,
    pub hovered: bool,
}

impl BubbleView {
    fn new(bubble: &Bubble, hovered: bool) -> Self {
        Self {
            id: bubble.id,
            center: bubble.center,
            radius: bubble.radius,
            frame: bubble.frame,
            lifecycle: bubble.lifecycle,
            display_size: bubble.display_size(),
            hovered,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub playfield: Vec2,
    pub score: u64,
    /// Best finished round so far, if any
    pub high_score: Option<u64>,
    pub bubbles: Vec<BubbleView>,
    pub cursor: CursorKind,
}

impl FrameView {
    pub fn capture(session: &Session) -> Self {
        let bubbles: Vec<BubbleView> = session
            .bubbles
            .iter()
            .map(|b| BubbleView::new(b, session.hovered(b)))
            .collect();
        let cursor = if bubbles.iter().any(|b| b.hovered) {
            CursorKind::Hover
        } else {
            CursorKind::Default
        };

        Self {
            phase: session.phase,
            playfield: session.config().playfield(),
            score: session.score,
            high_score: session.high_scores.top_score(),
            bubbles,
            cursor,
        }
    }
}
