//! Frame loop driver
//!
//! Owns the platform and the simulation state. Each frame:
//! read input -> step -> render -> present.

use crate::audio::SoundCue;
use crate::consts::WINDOW_TITLE;
use crate::platform::Platform;
use crate::renderer::render;
use crate::settings::Settings;
use crate::sim::{SimulationState, Viewport, centered_position, initial_window_size, step};

/// Game instance holding the backend and all state
pub struct App<P: Platform> {
    platform: P,
    state: SimulationState<P::Music>,
}

impl<P: Platform> App<P> {
    /// Size and centre the window, set cue volumes and seed the state
    pub fn new(mut platform: P, settings: &Settings) -> Self {
        let screen = platform.screen_size();
        let (width, height) = initial_window_size(screen, settings.screen_divisor);
        log::info!(
            "Window {}x{} on a {}x{} screen",
            width,
            height,
            screen.0,
            screen.1
        );

        platform.set_window_size(width, height);
        let (x, y) = centered_position(screen, (width, height));
        platform.set_window_position(x, y);
        platform.set_window_title(WINDOW_TITLE);

        for cue in SoundCue::ALL {
            platform.set_sound_volume(cue, settings.cue_volume(cue));
        }

        let mut state = SimulationState::new(settings.start_difficulty, settings.music_volume);
        state.viewport = Viewport::from_window(width, height);

        Self { platform, state }
    }

    /// Run one frame
    pub fn frame(&mut self) {
        let input = self.platform.poll_input();
        step(&mut self.state, &input, &mut self.platform);
        let frame = render(&self.state);
        self.platform.present(&frame);
    }

    /// Run until the window is closed
    pub fn run(&mut self) {
        self.run_until(|_| false);
    }

    /// Run until the window is closed or `done` returns true after a frame
    pub fn run_until(&mut self, mut done: impl FnMut(&SimulationState<P::Music>) -> bool) {
        while !self.platform.should_close() {
            self.frame();
            if done(&self.state) {
                return;
            }
        }
        log::info!("Window closed");
    }

    pub fn state(&self) -> &SimulationState<P::Music> {
        &self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}
