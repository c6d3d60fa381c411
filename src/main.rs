//! Wind It entry point
//!
//! No windowing backend is linked into this binary, so it runs the box on
//! the headless platform: nobody winds it, and it reports how long it lasted.

use wind_it::platform::headless::HeadlessPlatform;
use wind_it::{App, Settings};

/// Give up on an unattended run after this many simulated seconds
const MAX_RUN_SECONDS: u64 = 10 * 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Wind It (headless) starting...");

    let settings = Settings::load();
    let platform = HeadlessPlatform::with_screen(1920, 1080)
        .with_frame_rate(settings.target_fps)
        .close_after(u64::from(settings.target_fps) * MAX_RUN_SECONDS);

    let mut app = App::new(platform, &settings);
    app.run_until(|state| state.is_dead());

    let lasted = app.platform().clock();
    if app.state().is_dead() {
        log::info!(
            "Left alone at difficulty {}, the box ran down after {:.1}s",
            settings.start_difficulty,
            lasted
        );
    } else {
        log::info!("Still ticking after {:.1}s", lasted);
    }
}
