//! Difficulty-derived quantities

use crate::consts::{
    DIFFICULTY_BOUND, MIN_GRACE_SECONDS, SCALED_GRACE_SECONDS, UNLOCKED_DIFFICULTY_BOUND,
};
use crate::renderer::Color;

/// Timer lost per second while not winding.
///
/// Convex on purpose: each step near the top hurts far more than one near
/// the bottom.
#[inline]
pub fn decay_rate(difficulty: i32) -> f64 {
    let d = f64::from(difficulty);
    d * d / 3.2 + 1.0
}

/// Seconds the timer may sit at zero before the box gives out
#[inline]
pub fn grace_period(difficulty: i32) -> f64 {
    MIN_GRACE_SECONDS + (SCALED_GRACE_SECONDS - f64::from(difficulty) / 2.0).max(0.0)
}

/// Highest selectable difficulty
#[inline]
pub fn bound(unlocked: bool) -> i32 {
    if unlocked {
        UNLOCKED_DIFFICULTY_BOUND
    } else {
        DIFFICULTY_BOUND
    }
}

/// Apply `delta` and clamp into `[0, bound]`
#[inline]
pub fn adjust(difficulty: i32, delta: i32, unlocked: bool) -> i32 {
    difficulty.saturating_add(delta).clamp(0, bound(unlocked))
}

/// Colour of the difficulty numeral: white up to 20, fading to magenta above
pub fn color(difficulty: i32) -> Color {
    if difficulty <= DIFFICULTY_BOUND {
        return Color::WHITE;
    }
    let m = 255.0 / 80.0;
    let g = (255.0 - f64::from(difficulty) * m).clamp(0.0, 255.0) as u8;
    Color::rgb(255, g, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_rate_values() {
        assert_eq!(decay_rate(0), 1.0);
        assert_eq!(decay_rate(20), 126.0);
        assert_eq!(decay_rate(8), 21.0);
    }

    #[test]
    fn test_decay_rate_monotonic() {
        for d in 0..100 {
            assert!(decay_rate(d + 1) >= decay_rate(d), "decay dips at {d}");
        }
    }

    #[test]
    fn test_grace_period_shrinks_to_floor() {
        assert_eq!(grace_period(0), 15.0);
        assert_eq!(grace_period(5), 12.5);
        assert_eq!(grace_period(20), 5.0);
        assert_eq!(grace_period(100), 5.0);
    }

    #[test]
    fn test_adjust_clamps_to_bound() {
        assert_eq!(adjust(20, 5, false), 20);
        assert_eq!(adjust(20, 5, true), 25);
        assert_eq!(adjust(2, -5, false), 0);
        assert_eq!(adjust(98, 5, true), 100);
    }

    #[test]
    fn test_color_gradient() {
        assert_eq!(color(0), Color::WHITE);
        assert_eq!(color(20), Color::WHITE);
        // 255 - 21 * 3.1875 = 188.06
        assert_eq!(color(21), Color::rgb(255, 188, 255));
        assert_eq!(color(80), Color::rgb(255, 0, 255));
        assert_eq!(color(100), Color::rgb(255, 0, 255));
        assert!(color(60).g < color(30).g);
    }
}
