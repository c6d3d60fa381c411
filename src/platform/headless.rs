//! In-memory platform
//!
//! Runs the simulation without a window or audio device. Frames are paced
//! by a fixed simulated clock, input comes from a script, and every
//! side effect (cues, title, window size, music streams) is recorded for
//! inspection.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{MusicStream, Platform};
use crate::audio::SoundCue;
use crate::consts::{NATIVE_H, NATIVE_W, WINDOW_TITLE};
use crate::error::{Error, Result};
use crate::renderer::Frame;
use crate::sim::FrameInput;

/// Extensions the headless loader accepts as music
pub const SUPPORTED_MUSIC: [&str; 7] = ["wav", "ogg", "mp3", "flac", "qoa", "xm", "mod"];

/// Simulated length of every sound cue
const CUE_SECONDS: f64 = 0.25;

/// Something that happened to a headless music stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MusicEvent {
    Play,
    Pause,
    Update,
    Volume(f32),
    Released,
}

/// Shared record of a stream's events; outlives the stream itself
pub type MusicLog = Rc<RefCell<Vec<MusicEvent>>>;

/// Music stream that only records what was done to it
#[derive(Debug)]
pub struct HeadlessMusic {
    volume: f32,
    playing: bool,
    log: MusicLog,
}

impl HeadlessMusic {
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn log(&self) -> MusicLog {
        self.log.clone()
    }

    fn record(&self, event: MusicEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl MusicStream for HeadlessMusic {
    fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            self.record(MusicEvent::Play);
        }
    }

    fn pause(&mut self) {
        self.playing = false;
        self.record(MusicEvent::Pause);
    }

    fn update(&mut self) {
        self.record(MusicEvent::Update);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.record(MusicEvent::Volume(volume));
    }
}

impl Drop for HeadlessMusic {
    fn drop(&mut self) {
        self.record(MusicEvent::Released);
    }
}

/// Platform backed by plain memory and a simulated clock
#[derive(Debug)]
pub struct HeadlessPlatform {
    screen: (u32, u32),
    window: (u32, u32),
    position: (i32, i32),
    title: String,
    topmost: bool,

    frame_seconds: f64,
    clock: f64,
    script: VecDeque<FrameInput>,
    max_frames: Option<u64>,
    frames: u64,
    last_frame: Option<Frame>,

    cues: Vec<SoundCue>,
    playing: HashMap<SoundCue, f64>,
    volumes: HashMap<SoundCue, f32>,
    loaded_music: Vec<(PathBuf, MusicLog)>,
}

impl HeadlessPlatform {
    /// A 1080p screen with a native-size window, paced at 60 fps
    pub fn new() -> Self {
        Self::with_screen(1920, 1080)
    }

    pub fn with_screen(width: u32, height: u32) -> Self {
        Self {
            screen: (width, height),
            window: (NATIVE_W as u32, NATIVE_H as u32),
            position: (0, 0),
            title: WINDOW_TITLE.to_string(),
            topmost: false,
            frame_seconds: 1.0 / 60.0,
            clock: 0.0,
            script: VecDeque::new(),
            max_frames: None,
            frames: 0,
            last_frame: None,
            cues: Vec::new(),
            playing: HashMap::new(),
            volumes: HashMap::new(),
            loaded_music: Vec::new(),
        }
    }

    /// Window already at the given size, for driving `step` directly
    pub fn with_window(width: u32, height: u32) -> Self {
        let mut platform = Self::new();
        platform.window = (width, height);
        platform
    }

    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        self.frame_seconds = 1.0 / f64::from(fps.max(1));
        self
    }

    /// Ask to close once `frames` frames have been presented
    pub fn close_after(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Queue input for an upcoming frame. Timing fields are overwritten.
    pub fn push_input(&mut self, input: FrameInput) {
        self.script.push_back(input);
    }

    /// Queue `count` frames of the same input
    pub fn push_repeated(&mut self, input: FrameInput, count: usize) {
        for _ in 0..count {
            self.script.push_back(input.clone());
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Simulated seconds since startup
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Every cue ever started, in order
    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }

    pub fn cue_count(&self, cue: SoundCue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }

    pub fn sound_volume(&self, cue: SoundCue) -> Option<f32> {
        self.volumes.get(&cue).copied()
    }

    /// Every successfully loaded stream with its event log
    pub fn loaded_music(&self) -> &[(PathBuf, MusicLog)] {
        &self.loaded_music
    }

    fn age_sounds(&mut self, dt: f64) {
        self.playing.retain(|_, remaining| {
            *remaining -= dt;
            *remaining > 0.0
        });
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for HeadlessPlatform {
    type Music = HeadlessMusic;

    fn should_close(&self) -> bool {
        self.max_frames.is_some_and(|max| self.frames >= max)
    }

    fn poll_input(&mut self) -> FrameInput {
        let dt = self.frame_seconds;
        self.clock += dt;
        self.age_sounds(dt);

        let input = self.script.pop_front().unwrap_or_default();
        input.with_timing(dt, self.clock)
    }

    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        self.last_frame = Some(frame.clone());
    }

    fn screen_size(&self) -> (u32, u32) {
        self.screen
    }

    fn render_size(&self) -> (u32, u32) {
        self.window
    }

    fn set_window_size(&mut self, width: u32, height: u32) {
        self.window = (width, height);
    }

    fn set_window_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    fn set_window_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn is_topmost(&self) -> bool {
        self.topmost
    }

    fn set_topmost(&mut self, topmost: bool) {
        self.topmost = topmost;
    }

    fn set_sound_volume(&mut self, cue: SoundCue, volume: f32) {
        self.volumes.insert(cue, volume);
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.cues.push(cue);
        self.playing.insert(cue, CUE_SECONDS);
    }

    fn is_sound_playing(&self, cue: SoundCue) -> bool {
        self.playing.contains_key(&cue)
    }

    fn load_music(&mut self, path: &Path) -> Result<HeadlessMusic> {
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SUPPORTED_MUSIC.contains(&ext.to_ascii_lowercase().as_str()));
        if !supported {
            return Err(Error::music_load(path, "unsupported format"));
        }

        let log = MusicLog::default();
        self.loaded_music.push((path.to_path_buf(), log.clone()));
        Ok(HeadlessMusic {
            volume: 1.0,
            playing: false,
            log,
        })
    }
}
