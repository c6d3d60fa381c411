//! Sound cues and the user's music track
//!
//! The simulation never owns sound data. It asks the platform to play a
//! fixed set of cues, and owns exactly one dynamic resource: the music
//! stream loaded from a dropped file.

use std::path::{Path, PathBuf};

use crate::platform::{MusicStream, Platform};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Ratchet loop while the box is being wound
    Wind,
    /// Button / keybind feedback
    Click,
    /// Fired once on death
    Jumpscare,
    /// Looped forever after death
    PopStatic,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [
        SoundCue::Wind,
        SoundCue::Click,
        SoundCue::Jumpscare,
        SoundCue::PopStatic,
    ];
}

/// Play `cue` only if it is not already playing.
///
/// Level-triggered: calling this every frame keeps a loop going without
/// restarting it mid-sample.
pub fn ensure_playing<P: Platform>(platform: &mut P, cue: SoundCue) {
    if !platform.is_sound_playing(cue) {
        platform.play_sound(cue);
    }
}

/// A loaded music stream together with the path it came from.
///
/// Dropping the track releases the stream.
#[derive(Debug)]
pub struct MusicTrack<M> {
    stream: M,
    path: PathBuf,
}

impl<M: MusicStream> MusicTrack<M> {
    /// Take ownership of a freshly loaded stream and start it
    pub fn start(mut stream: M, path: &Path, volume: f32) -> Self {
        stream.set_volume(volume);
        stream.play();
        Self {
            stream,
            path: path.to_path_buf(),
        }
    }

    /// Keep the stream playing and feed it more data
    pub fn advance(&mut self) {
        self.stream.play();
        self.stream.update();
    }

    pub fn pause(&mut self) {
        self.stream.pause();
    }

    /// Pause and release the stream
    pub fn stop(mut self) {
        self.stream.pause();
    }
}

impl<M> MusicTrack<M> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Label shown on screen for the track
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn stream(&self) -> &M {
        &self.stream
    }
}
