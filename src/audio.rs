//! Sound cue contract
//!
//! The simulation never plays audio. It queues intents; the host drains them
//! and hands the audible ones to an [`AudioPlayer`]. Requests are
//! fire-and-forget, playback completion is never reported back.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player popped a bubble
    Pop,
    /// Round ended
    GameOver,
}

/// Anything that can play a sound effect
pub trait AudioPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Sound cue for an intent, if it has one
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::PopSound { .. } => Some(SoundEffect::Pop),
        GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
        _ => None,
    }
}

/// Forward every audible intent to `player`, in order.
/// Returns the number of sounds requested.
pub fn dispatch<P: AudioPlayer + ?Sized>(events: &[GameEvent], player: &mut P) -> usize {
    let mut played = 0;
    for effect in events.iter().filter_map(sound_for) {
        player.play(effect);
        played += 1;
    }
    played
}

/// Player that only logs, for headless hosts
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute (e.g. while paused)
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Total sounds that were not muted
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioPlayer for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::debug!("sound: {:?}", effect);
    }
}
