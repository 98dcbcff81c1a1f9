//! Audio dispatch
//!
//! The simulation never plays sound itself; it emits `GameEvent`s and the
//! `AudioManager` turns them into calls on an `AudioSink` after the tick.
//! Sink failures are swallowed so audio can never stall or break the loop.

use crate::sim::GameEvent;

/// Sound clips the game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundClip {
    /// Looping engine hum, volume follows speed
    Engine,
    /// Collision with traffic
    Crash,
    /// Gear change blip
    GearShift,
    /// Menu / settings confirmation
    MenuSelect,
}

impl SoundClip {
    /// Whether the clip loops until stopped
    pub fn is_looping(self) -> bool {
        matches!(self, SoundClip::Engine)
    }
}

/// Errors a sink may report
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Audio device unavailable")]
    Unavailable,

    #[error("Audio backend error: {0}")]
    Backend(String),
}

/// Audio output collaborator.
///
/// `play` on a looping clip that is already playing only updates its volume.
pub trait AudioSink {
    fn play(&mut self, clip: SoundClip, volume: f32) -> Result<(), AudioError>;
    fn stop_loop(&mut self, clip: SoundClip) -> Result<(), AudioError>;
}

/// Sink for headless builds: playback requests go to the log
#[derive(Debug, Default)]
pub struct TraceSink {
    engine_playing: bool,
}

impl AudioSink for TraceSink {
    fn play(&mut self, clip: SoundClip, volume: f32) -> Result<(), AudioError> {
        if clip.is_looping() {
            if !self.engine_playing {
                log::trace!("audio: start loop {:?} at {:.2}", clip, volume);
                self.engine_playing = true;
            }
        } else {
            log::trace!("audio: play {:?} at {:.2}", clip, volume);
        }
        Ok(())
    }

    fn stop_loop(&mut self, clip: SoundClip) -> Result<(), AudioError> {
        if self.engine_playing {
            log::trace!("audio: stop loop {:?}", clip);
            self.engine_playing = false;
        }
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    muted: bool,
    engine_looping: bool,
}

impl AudioManager {
    /// `None` means no audio device; every call becomes a no-op
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        if sink.is_none() {
            log::warn!("No audio sink available - audio disabled");
        }
        Self {
            sink,
            master_volume: 0.8,
            muted: false,
            engine_looping: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        if muted {
            self.stop_engine();
        }
        self.muted = muted;
    }

    pub fn is_available(&self) -> bool {
        self.sink.is_some()
    }

    pub fn engine_looping(&self) -> bool {
        self.engine_looping
    }

    /// Play a one-shot or (re)level a loop
    pub fn play(&mut self, clip: SoundClip, volume: f32) {
        if self.muted {
            return;
        }
        let vol = volume.clamp(0.0, 1.0) * self.master_volume;
        let Some(sink) = self.sink.as_mut() else { return };
        if let Err(e) = sink.play(clip, vol) {
            log::trace!("Ignoring audio failure for {:?}: {}", clip, e);
            return;
        }
        if clip.is_looping() {
            self.engine_looping = true;
        }
    }

    /// Silence the engine hum (crash, leaving a run, muting)
    pub fn stop_engine(&mut self) {
        if !self.engine_looping {
            return;
        }
        self.engine_looping = false;
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.stop_loop(SoundClip::Engine) {
                log::trace!("Ignoring audio failure stopping engine: {}", e);
            }
        }
    }

    /// React to the events of one tick, in order
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::EngineVolume(v) => self.play(SoundClip::Engine, v),
                GameEvent::GearShifted(_) => self.play(SoundClip::GearShift, 1.0),
                GameEvent::Collided => {
                    self.play(SoundClip::Crash, 1.0);
                    self.stop_engine();
                }
                GameEvent::TrafficPassed | GameEvent::NewBest(_) => {}
            }
        }
    }
}
