//! Presentation step
//!
//! Read-only projection from simulation state to draw commands on the
//! 273x153 logical canvas. The backend draws them into an offscreen target
//! and scales that to the window.

pub mod atlas;
pub mod commands;

pub use commands::{Color, DrawCommand, TextAlign, Texture};

use glam::Vec2;

use crate::sim::{Clockwork, Control, Flags, Mode, SimulationState, decay_rate, difficulty};

/// Everything needed to present one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Clear colour for both the canvas and the window
    pub background: Color,
    /// Canvas draw list, back to front
    pub commands: Vec<DrawCommand>,
    /// Window size the canvas is stretched to
    pub output_size: (u32, u32),
}

impl Frame {
    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

/// Fill fractions of MAX_TIMER below which the time-left readout turns red / yellow
const CRITICAL_FILL: f64 = 0.175;
const LOW_FILL: f64 = 0.350;

/// Build the draw list for the current state
pub fn render<M>(state: &SimulationState<M>) -> Frame {
    let background = if state.flags.window_transparent {
        Color::TRANSLUCENT_BLACK
    } else {
        Color::BLACK
    };

    let mut commands = Vec::new();
    match &state.mode {
        // Just the puppet, nothing else
        Mode::Dead => commands.push(DrawCommand::sprite(Texture::Death, atlas::DEATH, Vec2::ZERO)),
        Mode::Alive(clockwork) => draw_clockwork(clockwork, &state.flags, &mut commands),
    }

    Frame {
        background,
        commands,
        output_size: (state.viewport.width, state.viewport.height),
    }
}

fn draw_clockwork<M>(clockwork: &Clockwork<M>, flags: &Flags, out: &mut Vec<DrawCommand>) {
    let wind_src = if clockwork.winding {
        atlas::WIND_PRESSED
    } else {
        atlas::WIND_IDLE
    };
    out.push(DrawCommand::sprite(Texture::Atlas, wind_src, Control::Wind.rect().origin()));
    out.push(DrawCommand::sprite(Texture::Atlas, atlas::HOLD_LABEL, atlas::HOLD_LABEL_POS));

    if let Some(level) = atlas::status_index(clockwork.timer) {
        out.push(DrawCommand::sprite(
            Texture::Atlas,
            atlas::status_rect(level),
            atlas::STATUS_POS,
        ));
    }

    out.push(DrawCommand::sprite(
        Texture::Atlas,
        atlas::DECREASE,
        Control::DecreaseDifficulty.rect().origin(),
    ));
    out.push(DrawCommand::sprite(
        Texture::Atlas,
        atlas::INCREASE,
        Control::IncreaseDifficulty.rect().origin(),
    ));

    out.push(DrawCommand::centered_text(
        clockwork.difficulty.to_string(),
        Vec2::new(31.0, 134.0),
        14,
        difficulty::color(clockwork.difficulty),
    ));

    if flags.show_time_to_unwind {
        let (minutes, seconds) = time_left(clockwork.timer, clockwork.difficulty);
        out.push(DrawCommand::text(
            format!("Time left: {minutes} min, {seconds:.1} sec"),
            Vec2::new(64.0, 134.0),
            14,
            time_left_color(clockwork.fill()),
        ));
    }

    // The notification covers the music label while it is up
    if let Some(message) = clockwork.notification.current() {
        out.push(DrawCommand::text(
            message.text.clone(),
            Vec2::new(2.0, 0.0),
            message.size,
            Color::WHITE,
        ));
    } else if let Some(track) = &clockwork.music {
        out.push(DrawCommand::sprite(
            Texture::Atlas,
            atlas::END_MUSIC,
            Control::EndMusic.rect().origin(),
        ));
        out.push(DrawCommand::text(track.file_name(), Vec2::new(24.0, 6.0), 10, Color::WHITE));
    }

    if flags.auto_wind {
        out.push(DrawCommand::text("autowind on", Vec2::new(19.0, 37.0), 11, Color::PURPLE));
    }
}

/// Time until the timer empties at the current decay, as (minutes, seconds)
pub fn time_left(timer: f64, difficulty: i32) -> (u32, f64) {
    let mut seconds = timer / decay_rate(difficulty);
    let mut minutes = 0;
    if seconds >= 60.0 {
        minutes = (seconds / 60.0) as u32;
        seconds -= 60.0 * f64::from(minutes);
    }
    (minutes, seconds)
}

/// Readout colour for a fill fraction of `MAX_TIMER`
pub fn time_left_color(fill: f64) -> Color {
    if fill < CRITICAL_FILL {
        Color::RED
    } else if fill < LOW_FILL {
        Color::YELLOW
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::audio::MusicTrack;
    use crate::platform::Platform;
    use crate::platform::headless::{HeadlessMusic, HeadlessPlatform};

    type State = SimulationState<HeadlessMusic>;

    fn alive(state: &mut State) -> &mut Clockwork<HeadlessMusic> {
        state.clockwork_mut().unwrap()
    }

    fn with_music(state: &mut State, path: &str) {
        let mut platform = HeadlessPlatform::with_window(273, 153);
        let stream = platform.load_music(Path::new(path)).unwrap();
        alive(state).music = Some(MusicTrack::start(stream, Path::new(path), 0.5));
    }

    #[test]
    fn test_dead_draws_only_death_image() {
        let mut state = State::default();
        state.mode = Mode::Dead;
        state.flags.auto_wind = true;
        state.flags.show_time_to_unwind = true;

        let frame = render(&state);
        assert_eq!(
            frame.commands,
            vec![DrawCommand::sprite(Texture::Death, atlas::DEATH, Vec2::ZERO)]
        );
    }

    #[test]
    fn test_background_follows_transparency() {
        let mut state = State::default();
        assert_eq!(render(&state).background, Color::BLACK);
        state.flags.window_transparent = true;
        assert_eq!(render(&state).background, Color::TRANSLUCENT_BLACK);
        state.mode = Mode::Dead;
        assert_eq!(render(&state).background, Color::TRANSLUCENT_BLACK);
    }

    #[test]
    fn test_wind_sprite_tracks_winding() {
        let mut state = State::default();
        let wind_pos = Control::Wind.rect().origin();

        let frame = render(&state);
        assert!(frame.commands.contains(&DrawCommand::sprite(Texture::Atlas, atlas::WIND_IDLE, wind_pos)));

        alive(&mut state).winding = true;
        let frame = render(&state);
        assert!(frame.commands.contains(&DrawCommand::sprite(Texture::Atlas, atlas::WIND_PRESSED, wind_pos)));
    }

    #[test]
    fn test_pie_hidden_when_empty() {
        let mut state = State::default();
        let full = DrawCommand::sprite(Texture::Atlas, atlas::status_rect(20), atlas::STATUS_POS);
        assert!(render(&state).commands.contains(&full));

        alive(&mut state).timer = 0.0;
        let frame = render(&state);
        assert!(!frame.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Sprite { dst, .. } if *dst == atlas::STATUS_POS
        )));
    }

    #[test]
    fn test_difficulty_numeral_color() {
        let mut state = State::default();
        alive(&mut state).difficulty = 60;
        let frame = render(&state);
        let numeral = frame
            .commands
            .iter()
            .find(|c| c.as_text() == Some("60"))
            .unwrap();
        match numeral {
            DrawCommand::Text { color, align, .. } => {
                assert_eq!(*color, difficulty::color(60));
                assert_eq!(*align, TextAlign::Center);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_time_left_readout() {
        let mut state = State::default();
        state.flags.show_time_to_unwind = true;
        {
            let c = alive(&mut state);
            // decay(0) = 1/s: 150 seconds
            c.difficulty = 0;
            c.timer = 150.0;
        }
        assert!(render(&state).has_text("Time left: 2 min, 30.0 sec"));

        state.flags.show_time_to_unwind = false;
        assert!(!render(&state).texts().any(|t| t.starts_with("Time left")));
    }

    #[test]
    fn test_time_left_math() {
        assert_eq!(time_left(2100.0, 0), (35, 0.0));
        assert_eq!(time_left(45.0, 0), (0, 45.0));
        // decay(20) = 126/s
        assert_eq!(time_left(2100.0, 20).0, 0);
    }

    #[test]
    fn test_time_left_color_thresholds() {
        assert_eq!(time_left_color(0.1), Color::RED);
        assert_eq!(time_left_color(0.175), Color::YELLOW);
        assert_eq!(time_left_color(0.3), Color::YELLOW);
        assert_eq!(time_left_color(0.35), Color::WHITE);
        assert_eq!(time_left_color(1.0), Color::WHITE);
    }

    #[test]
    fn test_notification_hides_music_label() {
        let mut state = State::default();
        with_music(&mut state, "/music/song.ogg");

        let frame = render(&state);
        assert!(frame.has_text("Drag and drop a song to play it!"));
        assert!(!frame.has_text("song.ogg"));

        alive(&mut state).notification = Default::default();
        let frame = render(&state);
        assert!(frame.has_text("song.ogg"));
        assert!(frame.commands.contains(&DrawCommand::sprite(
            Texture::Atlas,
            atlas::END_MUSIC,
            Control::EndMusic.rect().origin()
        )));
    }

    #[test]
    fn test_autowind_indicator() {
        let mut state = State::default();
        assert!(!render(&state).has_text("autowind on"));
        state.flags.auto_wind = true;
        assert!(render(&state).has_text("autowind on"));
    }

    #[test]
    fn test_output_size_follows_viewport() {
        let mut state = State::default();
        state.viewport = crate::sim::Viewport::from_window(546, 306);
        assert_eq!(render(&state).output_size, (546, 306));
    }
}
