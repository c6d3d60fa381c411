//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep, driven once per presented frame
//! - Single owner: the frame loop
//! - No rendering; audio and window effects only through `Platform`

pub mod difficulty;
pub mod input;
pub mod layout;
pub mod notification;
pub mod state;
pub mod tick;

pub use difficulty::{decay_rate, grace_period};
pub use input::{Command, FrameInput, Key, KeySet, WindSpeed};
pub use layout::{Control, Rect, Viewport, centered_position, initial_window_size};
pub use notification::{Message, Notification};
pub use state::{Clockwork, Flags, Mode, SimulationState};
pub use tick::step;
