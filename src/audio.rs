//! Audio cues
//!
//! Catches and avoids each get a short sine beep. Playback is fire-and-forget:
//! a beep is handed to a detached rodio sink and the game loop moves on.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::consts::{AVOID_CUE_HZ, CATCH_CUE_HZ, CUE_DURATION_MS};
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Catch object collected
    Catch,
    /// Avoid object collected
    Avoid,
}

impl AudioCue {
    /// Cue for a simulation event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Caught { .. } => Some(AudioCue::Catch),
            GameEvent::Avoided { .. } => Some(AudioCue::Avoid),
            GameEvent::Missed | GameEvent::SessionEnded { .. } => None,
        }
    }

    pub fn frequency_hz(&self) -> u32 {
        match self {
            AudioCue::Catch => CATCH_CUE_HZ,
            AudioCue::Avoid => AVOID_CUE_HZ,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        CUE_DURATION_MS
    }
}

/// Something that can beep without blocking the caller
pub trait CueEmitter {
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32);

    /// Play a named cue
    fn play(&mut self, cue: AudioCue) {
        self.beep(cue.frequency_hz(), cue.duration_ms());
    }
}

/// Emitter that drops every cue (sound disabled, tests)
#[derive(Debug, Default)]
pub struct SilentCueEmitter;

impl CueEmitter for SilentCueEmitter {
    fn beep(&mut self, _frequency_hz: u32, _duration_ms: u32) {}
}

/// Audio manager for the game
pub struct AudioManager {
    // The stream must outlive every sink created from its handle
    output: Option<(OutputStream, OutputStreamHandle)>,
    volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Open the default output device. Without one, audio is disabled.
    pub fn new(volume: f32) -> Self {
        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(e) => {
                log::warn!("Failed to open audio output ({e}) - audio disabled");
                None
            }
        };
        Self {
            output,
            volume: volume.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Whether an output device is open
    pub fn is_available(&self) -> bool {
        self.output.is_some()
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }
}

impl CueEmitter for AudioManager {
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some((_, handle)) = &self.output else { return };

        match Sink::try_new(handle) {
            Ok(sink) => {
                let tone = SineWave::new(frequency_hz as f32)
                    .take_duration(Duration::from_millis(duration_ms as u64))
                    .amplify(vol * 0.3);
                sink.append(tone);
                sink.detach();
            }
            Err(e) => log::warn!("Dropped {frequency_hz} Hz cue: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(u32, u32)>);

    impl CueEmitter for Recorder {
        fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
            self.0.push((frequency_hz, duration_ms));
        }
    }

    #[test]
    fn test_cue_table() {
        let mut recorder = Recorder::default();
        recorder.play(AudioCue::Catch);
        recorder.play(AudioCue::Avoid);
        assert_eq!(recorder.0, vec![(1000, 200), (500, 200)]);
    }

    #[test]
    fn test_cue_for_event() {
        assert_eq!(
            AudioCue::for_event(&GameEvent::Caught { x: 1, y: 2 }),
            Some(AudioCue::Catch)
        );
        assert_eq!(
            AudioCue::for_event(&GameEvent::Avoided { x: 1, y: 2 }),
            Some(AudioCue::Avoid)
        );
        assert_eq!(AudioCue::for_event(&GameEvent::Missed), None);
    }
}
