//! Ambient visual effects: floating particles and confetti bursts.
//!
//! Generation is pure and parameterized by an injectable RNG, so batch
//! sizes and value ranges can be asserted deterministically. Confetti
//! timing lives in [`ConfettiScheduler`], a state machine advanced with
//! elapsed time from the caller's tick; it owns no real timer, so tearing
//! down the event loop tears down the schedule with it.

use crate::settings::{ParticleIntensity, Theme};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

/// Number of pieces in one confetti burst.
pub const CONFETTI_BATCH_SIZE: usize = 50;

/// Time between automatic confetti bursts.
pub const CONFETTI_INTERVAL: Duration = Duration::from_secs(30);

/// How long a burst stays visible.
pub const CONFETTI_DISPLAY_WINDOW: Duration = Duration::from_secs(4);

/// Fixed confetti color palette (RGB).
pub const CONFETTI_COLORS: [(u8, u8, u8); 6] = [
    (255, 105, 180), // hot pink
    (221, 160, 221), // plum
    (135, 206, 235), // sky blue
    (255, 215, 0),   // gold
    (144, 238, 144), // light green
    (255, 99, 71),   // tomato
];

/// One floating background glyph.
///
/// Position is a percentage of the viewport; the renderer scales it to
/// whatever surface it draws on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal position, [0, 100).
    pub x: f32,
    /// Vertical position, [0, 100).
    pub y: f32,
    /// Scale factor, [0.5, 2.0).
    pub size: f32,
    /// Float-animation duration in seconds, [10, 20).
    pub duration: f32,
    /// Animation start delay in seconds, [0, 5).
    pub delay: f32,
    pub glyph: &'static str,
}

/// One falling confetti piece.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfettiPiece {
    /// Horizontal position, [0, 100).
    pub x: f32,
    /// Starts just above the viewport.
    pub y: f32,
    pub color: (u8, u8, u8),
    /// Rotation in degrees, [0, 360).
    pub rotation: f32,
    /// Scale factor, [0.5, 1.0).
    pub scale: f32,
}

/// Generate a fresh particle batch for the given theme and intensity.
pub fn generate_particles<R: Rng>(
    theme: Theme,
    intensity: ParticleIntensity,
    rng: &mut R,
) -> Vec<Particle> {
    let glyphs = theme.glyphs();
    (0..intensity.particle_count())
        .map(|_| Particle {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(0.5..2.0),
            duration: rng.gen_range(10.0..20.0),
            delay: rng.gen_range(0.0..5.0),
            glyph: glyphs[rng.gen_range(0..glyphs.len())],
        })
        .collect()
}

/// Generate one confetti burst.
pub fn generate_confetti<R: Rng>(rng: &mut R) -> Vec<ConfettiPiece> {
    (0..CONFETTI_BATCH_SIZE)
        .map(|_| ConfettiPiece {
            x: rng.gen_range(0.0..100.0),
            y: -10.0,
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            rotation: rng.gen_range(0.0..360.0),
            scale: rng.gen_range(0.5..1.0),
        })
        .collect()
}

/// Convenience wrapper over [`generate_particles`] with the thread RNG.
pub fn particles(theme: Theme, intensity: ParticleIntensity) -> Vec<Particle> {
    generate_particles(theme, intensity, &mut rand::thread_rng())
}

/// Convenience wrapper over [`generate_confetti`] with the thread RNG.
pub fn confetti() -> Vec<ConfettiPiece> {
    generate_confetti(&mut rand::thread_rng())
}

/// Drives confetti timing without owning a timer.
///
/// The caller advances it with the elapsed time of each tick. Bursts are
/// reported as return values so the caller keeps control of RNG and batch
/// storage. While enabled, a burst fires immediately and then once per
/// [`CONFETTI_INTERVAL`]; each burst holds the visibility flag for
/// [`CONFETTI_DISPLAY_WINDOW`]. Disabling clears all pending state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfettiScheduler {
    enabled: bool,
    since_burst: Duration,
    visible_remaining: Duration,
}

impl ConfettiScheduler {
    /// Enable or disable confetti. Returns true when the transition to
    /// enabled should fire an immediate burst.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if enabled == self.enabled {
            return false;
        }
        self.enabled = enabled;
        self.since_burst = Duration::ZERO;
        if enabled {
            self.visible_remaining = CONFETTI_DISPLAY_WINDOW;
            true
        } else {
            self.visible_remaining = Duration::ZERO;
            false
        }
    }

    /// Advance by elapsed wall time. Returns true when a new burst is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.enabled {
            return false;
        }
        self.visible_remaining = self.visible_remaining.saturating_sub(elapsed);
        self.since_burst += elapsed;
        if self.since_burst >= CONFETTI_INTERVAL {
            self.since_burst = Duration::ZERO;
            self.visible_remaining = CONFETTI_DISPLAY_WINDOW;
            true
        } else {
            false
        }
    }

    /// Whether the current burst is still inside its display window.
    pub fn is_visible(&self) -> bool {
        self.enabled && !self.visible_remaining.is_zero()
    }

    /// Fraction of the display window already elapsed, in [0, 1].
    pub fn display_progress(&self) -> f32 {
        if !self.is_visible() {
            return 1.0;
        }
        let remaining = self.visible_remaining.as_secs_f32();
        1.0 - remaining / CONFETTI_DISPLAY_WINDOW.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_particle_batch_sizes() {
        assert_eq!(
            generate_particles(Theme::Soft, ParticleIntensity::Low, &mut rng()).len(),
            8
        );
        assert_eq!(
            generate_particles(Theme::Soft, ParticleIntensity::Medium, &mut rng()).len(),
            15
        );
        assert_eq!(
            generate_particles(Theme::Soft, ParticleIntensity::High, &mut rng()).len(),
            25
        );
    }

    #[test]
    fn test_particle_value_ranges() {
        for theme in Theme::ALL {
            let batch = generate_particles(theme, ParticleIntensity::High, &mut rng());
            for p in &batch {
                assert!((0.0..100.0).contains(&p.x));
                assert!((0.0..100.0).contains(&p.y));
                assert!((0.5..2.0).contains(&p.size));
                assert!((10.0..20.0).contains(&p.duration));
                assert!((0.0..5.0).contains(&p.delay));
                assert!(theme.glyphs().contains(&p.glyph));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_particles(Theme::Nature, ParticleIntensity::Medium, &mut rng());
        let b = generate_particles(Theme::Nature, ParticleIntensity::Medium, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_confetti_batch() {
        let batch = generate_confetti(&mut rng());
        assert_eq!(batch.len(), CONFETTI_BATCH_SIZE);
        for piece in &batch {
            assert!((0.0..100.0).contains(&piece.x));
            assert_eq!(piece.y, -10.0);
            assert!(CONFETTI_COLORS.contains(&piece.color));
            assert!((0.0..360.0).contains(&piece.rotation));
            assert!((0.5..1.0).contains(&piece.scale));
        }
    }

    #[test]
    fn test_scheduler_bursts_immediately_on_enable() {
        let mut scheduler = ConfettiScheduler::default();
        assert!(!scheduler.is_visible());
        assert!(scheduler.set_enabled(true));
        assert!(scheduler.is_visible());
        // Re-enabling while already enabled does nothing.
        assert!(!scheduler.set_enabled(true));
    }

    #[test]
    fn test_scheduler_display_window_expires() {
        let mut scheduler = ConfettiScheduler::default();
        scheduler.set_enabled(true);
        assert!(!scheduler.advance(Duration::from_secs(3)));
        assert!(scheduler.is_visible());
        assert!(!scheduler.advance(Duration::from_secs(1)));
        assert!(!scheduler.is_visible());
        // No further change until the repeat interval elapses.
        assert!(!scheduler.advance(Duration::from_secs(20)));
        assert!(!scheduler.is_visible());
    }

    #[test]
    fn test_scheduler_repeats_every_interval() {
        let mut scheduler = ConfettiScheduler::default();
        scheduler.set_enabled(true);
        assert!(!scheduler.advance(Duration::from_secs(29)));
        assert!(scheduler.advance(Duration::from_secs(1)));
        assert!(scheduler.is_visible());
        assert!(scheduler.advance(Duration::from_secs(30)));
    }

    #[test]
    fn test_scheduler_disable_cancels_everything() {
        let mut scheduler = ConfettiScheduler::default();
        scheduler.set_enabled(true);
        scheduler.advance(Duration::from_secs(29));
        assert!(!scheduler.set_enabled(false));
        assert!(!scheduler.is_visible());
        // The pending 30 s tick was cancelled with the disable.
        assert!(!scheduler.advance(Duration::from_secs(60)));
        // Re-enabling starts over with an immediate burst.
        assert!(scheduler.set_enabled(true));
    }

    #[test]
    fn test_scheduler_ticks_accumulate() {
        // 100 ms ticks, the cadence of the TUI event loop.
        let mut scheduler = ConfettiScheduler::default();
        scheduler.set_enabled(true);
        let tick = Duration::from_millis(100);
        let mut bursts = 0;
        for _ in 0..600 {
            if scheduler.advance(tick) {
                bursts += 1;
            }
        }
        // 60 s of ticks after the initial burst -> two repeats.
        assert_eq!(bursts, 2);
    }
}
