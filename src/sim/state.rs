//! Simulation state
//!
//! Owned by the frame loop and nothing else. All mutable simulation data,
//! including the hold-repeat timestamp, lives here so a frame can be
//! inspected or replayed from the outside.

use super::input::WindSpeed;
use super::layout::Viewport;
use super::notification::Notification;
use crate::audio::MusicTrack;
use crate::consts::*;

/// User toggles; independent of each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Draw the "time left" estimate
    pub show_time_to_unwind: bool,
    /// Raise the difficulty ceiling from 20 to 100
    pub unlock_difficulty: bool,
    /// Wind without input (cheat)
    pub auto_wind: bool,
    /// Draw on a translucent background
    pub window_transparent: bool,
}

/// Everything that moves while the box is still running
#[derive(Debug)]
pub struct Clockwork<M> {
    /// Remaining wound capacity, always in [0, MAX_TIMER]
    pub timer: f64,
    /// Always in [0, bound(unlock_difficulty)]
    pub difficulty: i32,
    /// Seconds accumulated with the timer at exactly zero.
    /// Pauses while the timer is above zero; it is never reset.
    pub time_at_zero: f64,
    pub wind_speed: WindSpeed,
    /// Wind input was active this frame
    pub winding: bool,
    /// Time of the last difficulty button fire, shared by both buttons
    pub last_repeat: f64,
    pub notification: Notification,
    pub music: Option<MusicTrack<M>>,
}

impl<M> Clockwork<M> {
    pub fn new(difficulty: i32) -> Self {
        Self {
            timer: MAX_TIMER,
            difficulty,
            time_at_zero: 0.0,
            wind_speed: WindSpeed::Normal,
            winding: false,
            last_repeat: 0.0,
            notification: Notification::default(),
            music: None,
        }
    }

    /// Fraction of full capacity remaining
    pub fn fill(&self) -> f64 {
        self.timer / MAX_TIMER
    }
}

/// Top-level mode. `Dead` is terminal.
#[derive(Debug)]
pub enum Mode<M> {
    Alive(Clockwork<M>),
    Dead,
}

/// Complete simulation state
#[derive(Debug)]
pub struct SimulationState<M> {
    pub mode: Mode<M>,
    pub flags: Flags,
    /// Recomputed from the backend every frame
    pub viewport: Viewport,
    /// Volume a dropped music track plays at
    pub music_volume: f32,
}

impl<M> Default for SimulationState<M> {
    fn default() -> Self {
        Self::new(START_DIFFICULTY, MUSIC_VOLUME)
    }
}

impl<M> SimulationState<M> {
    /// Full timer, all toggles off, 1x wind speed, welcome message showing
    pub fn new(start_difficulty: i32, music_volume: f32) -> Self {
        let mut clockwork = Clockwork::new(start_difficulty.clamp(0, DIFFICULTY_BOUND));
        clockwork.notification.set(
            "Drag and drop a song to play it!",
            NOTIFICATION_SIZE,
            WELCOME_NOTIFICATION_SECONDS,
        );

        Self {
            mode: Mode::Alive(clockwork),
            flags: Flags::default(),
            viewport: Viewport::default(),
            music_volume,
        }
    }

    pub fn is_dead(&self) -> bool {
        matches!(self.mode, Mode::Dead)
    }

    pub fn clockwork(&self) -> Option<&Clockwork<M>> {
        match &self.mode {
            Mode::Alive(clockwork) => Some(clockwork),
            Mode::Dead => None,
        }
    }

    pub fn clockwork_mut(&mut self) -> Option<&mut Clockwork<M>> {
        match &mut self.mode {
            Mode::Alive(clockwork) => Some(clockwork),
            Mode::Dead => None,
        }
    }
}
