//! Platform abstraction layer
//!
//! Everything the simulation needs from the outside world:
//! - Frame pacing and input snapshots
//! - Window queries/mutations
//! - Sound cues and music streams
//! - Presenting a rendered frame
//!
//! A real backend wraps a windowing/audio library; [`headless`] is an
//! in-memory implementation used by tests and the native demo.

use std::path::Path;

use crate::audio::SoundCue;
use crate::error::Result;
use crate::renderer::Frame;
use crate::sim::FrameInput;

pub mod headless;

/// A streamed music resource owned by the simulation.
///
/// Implementations release the underlying stream on drop.
pub trait MusicStream {
    /// Start or resume playback. Must be idempotent.
    fn play(&mut self);
    fn pause(&mut self);
    /// Feed the stream; called once per frame while playing
    fn update(&mut self);
    fn set_volume(&mut self, volume: f32);
}

/// Window, input and audio backend
pub trait Platform {
    type Music: MusicStream;

    // === Frame ===
    /// True once the user asked to close the window
    fn should_close(&self) -> bool;
    /// Input snapshot for the next frame, including frame timing
    fn poll_input(&mut self) -> FrameInput;
    /// Draw a frame and wait for the next refresh
    fn present(&mut self, frame: &Frame);

    // === Window ===
    fn screen_size(&self) -> (u32, u32);
    /// Current drawable size of the window
    fn render_size(&self) -> (u32, u32);
    fn set_window_size(&mut self, width: u32, height: u32);
    fn set_window_position(&mut self, x: i32, y: i32);
    fn set_window_title(&mut self, title: &str);
    fn is_topmost(&self) -> bool;
    fn set_topmost(&mut self, topmost: bool);

    // === Audio ===
    fn set_sound_volume(&mut self, cue: SoundCue, volume: f32);
    /// Fire-and-forget playback of a cue
    fn play_sound(&mut self, cue: SoundCue);
    fn is_sound_playing(&self, cue: SoundCue) -> bool;
    /// Open a file as a music stream
    fn load_music(&mut self, path: &Path) -> Result<Self::Music>;
}
