//! Wind It - a clockwork box that has to be kept wound
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (timer, difficulty, death, notifications)
//! - `renderer`: Read-only projection from state to draw commands
//! - `platform`: Window/input/audio backend abstraction
//! - `audio`: Sound cues and the owned music track
//! - `app`: Driver loop tying the three together
//! - `settings`: User configuration

pub mod app;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Maximum wound capacity of the box
    pub const MAX_TIMER: f64 = 2100.0;
    /// Timer gained per second of winding at 1x speed
    pub const WIND_RATE: f64 = 300.0;

    /// Logical canvas size everything is drawn and hit-tested in
    pub const NATIVE_W: f32 = 273.0;
    pub const NATIVE_H: f32 = 153.0;

    /// Starting difficulty
    pub const START_DIFFICULTY: i32 = 5;
    /// Difficulty ceiling, normal and unlocked
    pub const DIFFICULTY_BOUND: i32 = 20;
    pub const UNLOCKED_DIFFICULTY_BOUND: i32 = 100;
    /// Step applied with / without the shift modifier
    pub const DIFFICULTY_STEP: i32 = 1;
    pub const DIFFICULTY_FAST_STEP: i32 = 5;
    /// Seconds between repeats while a difficulty button is held
    pub const REPEAT_INTERVAL: f64 = 0.2;

    /// Grace period at zero: MIN + max(SCALED - difficulty / 2, 0)
    pub const MIN_GRACE_SECONDS: f64 = 5.0;
    pub const SCALED_GRACE_SECONDS: f64 = 10.0;

    /// Notification defaults
    pub const NOTIFICATION_SIZE: u32 = 16;
    pub const TOGGLE_NOTIFICATION_SECONDS: f64 = 1.0;
    pub const ERROR_NOTIFICATION_SECONDS: f64 = 2.0;
    pub const WELCOME_NOTIFICATION_SECONDS: f64 = 2.0;

    /// Volume music starts at when a track is dropped in
    pub const MUSIC_VOLUME: f32 = 0.5;

    pub const WINDOW_TITLE: &str = "Don't forget to wind it!";
    pub const DEATH_TITLE: &str = "You forgot...";
}
