//! Per-frame input snapshot and keybind mapping

use std::path::PathBuf;

use glam::Vec2;

/// Keys the simulation listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    LeftShift,
    LeftControl,
    W,
    T,
    A,
    U,
    X,
    R,
    One,
    Two,
    Three,
}

impl Key {
    fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// Small set of [`Key`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet(u16);

impl KeySet {
    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::default();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl<const N: usize> From<[Key; N]> for KeySet {
    fn from(keys: [Key; N]) -> Self {
        keys.into_iter().collect()
    }
}

/// Everything the backend reports for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub dt: f64,
    /// Wall-clock seconds since startup
    pub time: f64,
    /// Pointer position in window pixels
    pub pointer: Vec2,
    /// Primary button held this frame
    pub pointer_down: bool,
    /// Primary button went down this frame
    pub pointer_pressed: bool,
    /// Keys held this frame
    pub keys_down: KeySet,
    /// Keys that went down this frame
    pub keys_pressed: KeySet,
    /// Wheel movement, positive away from the user
    pub scroll: f32,
    /// Files dropped on the window this frame
    pub dropped_files: Vec<PathBuf>,
}

impl FrameInput {
    /// Pointer held down at `pointer` (window pixels)
    pub fn holding(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_down: true,
            ..Default::default()
        }
    }

    /// Fresh click at `pointer` (window pixels)
    pub fn click(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_down: true,
            pointer_pressed: true,
            ..Default::default()
        }
    }

    /// Ctrl + `key` keybind press
    pub fn keybind(key: Key) -> Self {
        Self {
            keys_down: KeySet::from([Key::LeftControl, key]),
            keys_pressed: KeySet::from([key]),
            ..Default::default()
        }
    }

    pub fn with_timing(mut self, dt: f64, time: f64) -> Self {
        self.dt = dt;
        self.time = time;
        self
    }

    pub fn with_keys_down(mut self, keys: KeySet) -> Self {
        self.keys_down = keys;
        self
    }

    /// Difficulty changes move in steps of five while shift is held
    pub fn fast_step(&self) -> bool {
        self.keys_down.contains(Key::LeftShift)
    }

    /// Ctrl-gated keybind pressed this frame, if any
    pub fn command(&self) -> Option<Command> {
        if !self.keys_down.contains(Key::LeftControl) {
            return None;
        }
        Command::BINDINGS
            .iter()
            .find(|(key, _)| self.keys_pressed.contains(*key))
            .map(|(_, command)| *command)
    }
}

/// Multiplier on the wind-up rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindSpeed {
    #[default]
    Normal,
    Double,
    Triple,
}

impl WindSpeed {
    pub fn multiplier(&self) -> f64 {
        match self {
            WindSpeed::Normal => 1.0,
            WindSpeed::Double => 2.0,
            WindSpeed::Triple => 3.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindSpeed::Normal => "1x",
            WindSpeed::Double => "2x",
            WindSpeed::Triple => "3x",
        }
    }
}

/// Ctrl + key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleAlwaysOnTop,
    ToggleShowTime,
    ToggleAutoWind,
    ToggleUnlockDifficulty,
    ToggleTransparency,
    ResetAspectRatio,
    SetWindSpeed(WindSpeed),
}

impl Command {
    /// Bindings in priority order; at most one fires per frame
    pub const BINDINGS: [(Key, Command); 9] = [
        (Key::W, Command::ToggleAlwaysOnTop),
        (Key::T, Command::ToggleShowTime),
        (Key::A, Command::ToggleAutoWind),
        (Key::U, Command::ToggleUnlockDifficulty),
        (Key::X, Command::ToggleTransparency),
        (Key::R, Command::ResetAspectRatio),
        (Key::One, Command::SetWindSpeed(WindSpeed::Normal)),
        (Key::Two, Command::SetWindSpeed(WindSpeed::Double)),
        (Key::Three, Command::SetWindSpeed(WindSpeed::Triple)),
    ];
}
