//! Per-frame simulation step
//!
//! Advances the state by one variable-length frame: winding/decay, death
//! detection, difficulty input, keybinds and music handling.

use std::path::Path;

use glam::Vec2;

use super::difficulty::{self, decay_rate, grace_period};
use super::input::{Command, FrameInput};
use super::layout::{Control, Viewport};
use super::state::{Clockwork, Flags, Mode, SimulationState};
use crate::audio::{self, MusicTrack, SoundCue};
use crate::consts::*;
use crate::platform::Platform;

/// Whether the box survived the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Running,
    Died,
}

/// Advance the simulation by one frame
pub fn step<P: Platform>(state: &mut SimulationState<P::Music>, input: &FrameInput, platform: &mut P) {
    let (width, height) = platform.render_size();
    state.viewport = Viewport::from_window(width, height);

    let Mode::Alive(clockwork) = &mut state.mode else {
        audio::ensure_playing(platform, SoundCue::PopStatic);
        return;
    };

    let outcome = advance(
        clockwork,
        &mut state.flags,
        &mut state.viewport,
        state.music_volume,
        input,
        platform,
    );

    if outcome == Outcome::Died {
        die(state, platform);
    }
}

fn advance<P: Platform>(
    clockwork: &mut Clockwork<P::Music>,
    flags: &mut Flags,
    viewport: &mut Viewport,
    music_volume: f32,
    input: &FrameInput,
    platform: &mut P,
) -> Outcome {
    // NaN and negative frame times count as no time at all
    let dt = input.dt.max(0.0);
    clockwork.notification.update(dt);

    let pointer = viewport.to_logical(input.pointer);

    if (input.pointer_down && Control::Wind.contains(pointer)) || flags.auto_wind {
        clockwork.winding = true;
        clockwork.timer += WIND_RATE * clockwork.wind_speed.multiplier() * dt;
        audio::ensure_playing(platform, SoundCue::Wind);
    } else {
        clockwork.winding = false;
        clockwork.timer -= decay_rate(clockwork.difficulty) * dt;
    }
    clockwork.timer = clockwork.timer.clamp(0.0, MAX_TIMER);

    if clockwork.timer == 0.0 {
        clockwork.time_at_zero += dt;
        if clockwork.time_at_zero > grace_period(clockwork.difficulty) {
            return Outcome::Died;
        }
    }

    difficulty_buttons(clockwork, flags, input, pointer, platform);

    if input.pointer_pressed && Control::EndMusic.contains(pointer) {
        if let Some(track) = clockwork.music.take() {
            platform.play_sound(SoundCue::Click);
            log::info!("Music stopped: {}", track.file_name());
            track.stop();
        }
    }

    if let Some(command) = input.command() {
        apply_command(command, clockwork, flags, viewport, platform);
    }

    if input.scroll != 0.0 {
        let step = difficulty_step(input);
        platform.play_sound(SoundCue::Click);
        let notches = input.scroll.trunc() as i32;
        clockwork.difficulty = difficulty::adjust(
            clockwork.difficulty,
            notches.saturating_mul(step),
            flags.unlock_difficulty,
        );
    }

    if let Some(track) = &mut clockwork.music {
        track.advance();
    }

    // Only the first file of a multi-file drop is used
    if let Some(path) = input.dropped_files.first() {
        load_dropped(clockwork, path, music_volume, platform);
    }

    Outcome::Running
}

/// Press fires immediately, holding repeats every REPEAT_INTERVAL.
/// The repeat timestamp is shared by both buttons.
fn difficulty_buttons<P: Platform>(
    clockwork: &mut Clockwork<P::Music>,
    flags: &Flags,
    input: &FrameInput,
    pointer: Vec2,
    platform: &mut P,
) {
    let repeat_due = input.pointer_down && input.time - clockwork.last_repeat > REPEAT_INTERVAL;
    if !(repeat_due || input.pointer_pressed) {
        return;
    }
    clockwork.last_repeat = input.time;

    let step = difficulty_step(input);
    let delta = if Control::DecreaseDifficulty.contains(pointer) {
        -step
    } else if Control::IncreaseDifficulty.contains(pointer) {
        step
    } else {
        return;
    };

    platform.play_sound(SoundCue::Click);
    clockwork.difficulty = difficulty::adjust(clockwork.difficulty, delta, flags.unlock_difficulty);
}

fn difficulty_step(input: &FrameInput) -> i32 {
    if input.fast_step() {
        DIFFICULTY_FAST_STEP
    } else {
        DIFFICULTY_STEP
    }
}

fn apply_command<P: Platform>(
    command: Command,
    clockwork: &mut Clockwork<P::Music>,
    flags: &mut Flags,
    viewport: &mut Viewport,
    platform: &mut P,
) {
    log::debug!("Keybind: {:?}", command);
    platform.play_sound(SoundCue::Click);

    let notify = |clockwork: &mut Clockwork<P::Music>, text: String| {
        clockwork
            .notification
            .set(text, NOTIFICATION_SIZE, TOGGLE_NOTIFICATION_SECONDS);
    };

    match command {
        Command::ToggleAlwaysOnTop => {
            let topmost = !platform.is_topmost();
            platform.set_topmost(topmost);
            notify(clockwork, format!("Window on top: {}", on_off(topmost)));
        }
        Command::ToggleShowTime => {
            flags.show_time_to_unwind = !flags.show_time_to_unwind;
            notify(clockwork, format!("Show time: {}", on_off(flags.show_time_to_unwind)));
        }
        Command::ToggleAutoWind => {
            flags.auto_wind = !flags.auto_wind;
        }
        Command::ToggleUnlockDifficulty => {
            flags.unlock_difficulty = !flags.unlock_difficulty;
            clockwork.difficulty = difficulty::adjust(clockwork.difficulty, 0, flags.unlock_difficulty);
            notify(
                clockwork,
                format!("Unlock difficulty: {}", on_off(flags.unlock_difficulty)),
            );
        }
        Command::ToggleTransparency => {
            flags.window_transparent = !flags.window_transparent;
            notify(
                clockwork,
                format!("Window transparency: {}", on_off(flags.window_transparent)),
            );
        }
        Command::ResetAspectRatio => {
            notify(clockwork, "Restoring native aspect ratio...".to_string());
            let height = viewport.native_aspect_height();
            platform.set_window_size(viewport.width, height);
            *viewport = Viewport::from_window(viewport.width, height);
        }
        Command::SetWindSpeed(speed) => {
            notify(clockwork, format!("Windup speed: {}", speed.label()));
            clockwork.wind_speed = speed;
        }
    }
}

/// Swap in a dropped track, or report the failure on screen
fn load_dropped<P: Platform>(
    clockwork: &mut Clockwork<P::Music>,
    path: &Path,
    volume: f32,
    platform: &mut P,
) {
    log::info!("File dropped: {}", path.display());

    match platform.load_music(path) {
        Ok(stream) => {
            // Release the old track before taking the new one
            if let Some(old) = clockwork.music.take() {
                old.stop();
            }
            let track = MusicTrack::start(stream, path, volume);
            log::info!("Playing {}", track.file_name());
            clockwork.music = Some(track);
        }
        Err(e) => {
            log::warn!("{}", e);
            clockwork.notification.set(
                "Error loading sound file.",
                NOTIFICATION_SIZE,
                ERROR_NOTIFICATION_SECONDS,
            );
        }
    }
}

/// One-way transition into the dead state
fn die<P: Platform>(state: &mut SimulationState<P::Music>, platform: &mut P) {
    if let Mode::Alive(clockwork) = std::mem::replace(&mut state.mode, Mode::Dead) {
        log::info!(
            "The box ran down (difficulty {}, {:.1}s at zero)",
            clockwork.difficulty,
            clockwork.time_at_zero
        );
        if let Some(mut track) = clockwork.music {
            track.pause();
        }
    }
    platform.play_sound(SoundCue::Jumpscare);
    platform.set_window_title(DEATH_TITLE);
}

fn on_off(on: bool) -> &'static str {
    if on { "On" } else { "Off" }
}
