//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod bubble;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bubble::{Bubble, Lifecycle, Trigger, transition};
pub use collision::{CollisionEvent, CollisionKind, bubbles_overlap, circle_out_of_bounds, detect};
pub use spawn::{Placement, place};
pub use state::{GameEvent, GamePhase, Session};
pub use tick::{InputEvent, handle_input, tick};
