//! Simulated playback progress for the featured track.

use std::time::Duration;

/// Interval between progress ticks.
pub const PROGRESS_TICK: Duration = Duration::from_millis(100);
/// Percent added per tick while playing.
pub const PROGRESS_STEP: f32 = 0.5;

/// Fake play-head: a percentage that creeps forward on a timer while
/// "playing" and wraps past 100 back to the start. No audio is decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Playback {
    playing: bool,
    progress: f32,
}

impl Playback {
    pub fn new() -> Playback {
        Playback::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Progress through the track as a percentage in [0, 100].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Flip between playing and paused; returns the new playing state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// One timer tick: advance while playing, wrap past 100 back to 0.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.progress += PROGRESS_STEP;
        if self.progress > 100.0 {
            self.progress = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_playback_does_not_advance() {
        let mut playback = Playback::new();
        playback.tick();
        assert_eq!(playback.progress(), 0.0);

        assert!(playback.toggle());
        playback.tick();
        assert_eq!(playback.progress(), PROGRESS_STEP);

        assert!(!playback.toggle());
        playback.tick();
        assert_eq!(playback.progress(), PROGRESS_STEP);
    }

    #[test]
    fn progress_wraps_just_past_the_end() {
        let mut playback = Playback::new();
        playback.toggle();

        // 200 ticks land exactly on 100.0, which is not yet past the end
        for _ in 0..200 {
            playback.tick();
        }
        assert_eq!(playback.progress(), 100.0);

        playback.tick();
        assert_eq!(playback.progress(), 0.0);
    }
}
