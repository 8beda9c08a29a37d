//! Main application state and logic.

use std::time::Duration;

use keepsake_core::effects::{self, ConfettiPiece, ConfettiScheduler, Particle};
use keepsake_core::{ParticleIntensity, ScreenId, Session, Settings, Theme};

use crate::ui::theme::UiTheme;

/// Overlay panels drawn above the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Settings { selected: usize },
}

/// Current ambient-effect batches, kept in sync with settings.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub confetti: Vec<ConfettiPiece>,
    scheduler: ConfettiScheduler,
    /// The inputs the particle batch was generated for.
    particle_key: (Theme, ParticleIntensity),
    animations_on: bool,
}

impl EffectsState {
    pub fn new(settings: &Settings) -> Self {
        let particle_key = (settings.theme, settings.particle_intensity);
        let mut scheduler = ConfettiScheduler::default();
        let confetti = if scheduler.set_enabled(settings.confetti_enabled) {
            effects::confetti()
        } else {
            Vec::new()
        };
        Self {
            particles: effects::particles(particle_key.0, particle_key.1),
            confetti,
            scheduler,
            particle_key,
            animations_on: settings.animations_enabled,
        }
    }

    /// Re-align batches after a settings change. Particles regenerate
    /// wholesale when theme or intensity changed, or when animations come
    /// back on after being off; confetti bursts when newly enabled.
    pub fn sync(&mut self, settings: &Settings) {
        let key = (settings.theme, settings.particle_intensity);
        let reenabled = settings.animations_enabled && !self.animations_on;
        self.animations_on = settings.animations_enabled;
        if key != self.particle_key || reenabled {
            self.particle_key = key;
            self.particles = effects::particles(key.0, key.1);
        }
        if self.scheduler.set_enabled(settings.confetti_enabled) {
            self.confetti = effects::confetti();
        }
    }

    /// Advance confetti timing by elapsed tick time.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.scheduler.advance(elapsed) {
            self.confetti = effects::confetti();
        }
    }

    pub fn confetti_visible(&self) -> bool {
        self.scheduler.is_visible()
    }

    /// How far the visible burst has fallen, in [0, 1].
    pub fn confetti_progress(&self) -> f32 {
        self.scheduler.display_progress()
    }
}

/// Main application state.
pub struct App {
    pub session: Session,
    pub effects: EffectsState,
    pub theme: UiTheme,
    overlay: Option<Overlay>,
    status_message: Option<String>,

    // Animation
    pub animation_frame: u8,
}

impl App {
    /// Tick cadence of the event loop.
    pub const TICK: Duration = Duration::from_millis(100);

    pub fn new(settings: Settings) -> Self {
        let session = Session::with_settings(settings);
        let effects = EffectsState::new(session.settings());
        let theme = UiTheme::for_theme(session.settings().theme);

        let mut app = Self {
            session,
            effects,
            theme,
            overlay: None,
            status_message: None,
            animation_frame: 0,
        };
        app.set_status("Press ? for help, s for settings, q to quit");
        app
    }

    /// Navigate to a screen, updating the status line.
    pub fn navigate(&mut self, screen: ScreenId) {
        self.session.navigate(screen);
        self.set_status(format!(
            "{} · visited {}/{}",
            screen.title(),
            self.session.visited_count(),
            self.session.screen_count()
        ));
    }

    /// Cycle to the next screen in canonical order.
    pub fn cycle_screen(&mut self, forward: bool) {
        let all = ScreenId::ALL;
        let pos = all
            .iter()
            .position(|&s| s == self.session.current_screen())
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        self.navigate(all[next]);
    }

    /// Apply a new settings record and re-sync derived state.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.session.update_settings(settings);
        self.effects.sync(self.session.settings());
        self.theme = UiTheme::for_theme(self.session.settings().theme);
    }

    /// Toggle background music (top-bar shortcut).
    pub fn toggle_music(&mut self) {
        let mut settings = self.session.settings().clone();
        settings.background_music = !settings.background_music;
        let on = settings.background_music;
        self.apply_settings(settings);
        self.set_status(if on { "Music on" } else { "Music off" });
    }

    /// Tick for animations and confetti timing. `elapsed` is measured
    /// wall time since the previous tick, so the confetti schedule stays
    /// honest even when input events keep the poll from timing out.
    pub fn tick(&mut self, elapsed: Duration) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.effects.advance(elapsed);
    }

    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    pub fn open_settings(&mut self) {
        self.overlay = Some(Overlay::Settings { selected: 0 });
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_updates_session_and_status() {
        let mut app = App::new(Settings::default());
        app.navigate(ScreenId::Memories);
        assert_eq!(app.session.current_screen(), ScreenId::Memories);
        assert!(app.session.visited().contains(ScreenId::Memories));
        assert!(app.status_message().unwrap().contains("2/14"));
    }

    #[test]
    fn test_cycle_screen_wraps() {
        let mut app = App::new(Settings::default());
        app.cycle_screen(false);
        assert_eq!(app.session.current_screen(), ScreenId::Final);
        app.cycle_screen(true);
        assert_eq!(app.session.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_settings_change_regenerates_particles() {
        let mut app = App::new(Settings::default());
        assert_eq!(app.effects.particles.len(), 15);

        let mut settings = app.session.settings().clone();
        settings.particle_intensity = ParticleIntensity::High;
        app.apply_settings(settings);
        assert_eq!(app.effects.particles.len(), 25);

        let mut settings = app.session.settings().clone();
        settings.particle_intensity = ParticleIntensity::Low;
        settings.theme = Theme::Starry;
        app.apply_settings(settings);
        assert_eq!(app.effects.particles.len(), 8);
        for particle in &app.effects.particles {
            assert!(Theme::Starry.glyphs().contains(&particle.glyph));
        }
    }

    #[test]
    fn test_confetti_visible_at_startup_then_expires() {
        let mut app = App::new(Settings::default());
        assert!(app.effects.confetti_visible());
        assert_eq!(app.effects.confetti.len(), 50);

        // 4 s of ticks ends the display window.
        for _ in 0..40 {
            app.tick(App::TICK);
        }
        assert!(!app.effects.confetti_visible());
    }

    #[test]
    fn test_tick_advances_by_measured_elapsed_time() {
        let mut app = App::new(Settings::default());
        assert!(app.effects.confetti_visible());

        // One long tick must count as the wall time it reports, not as
        // a single 100 ms step.
        app.tick(Duration::from_secs(4));
        assert!(!app.effects.confetti_visible());
        app.tick(Duration::from_secs(26));
        assert!(app.effects.confetti_visible());
        assert_eq!(app.effects.confetti.len(), 50);
    }

    #[test]
    fn test_disabling_confetti_cancels_pending_bursts() {
        let mut app = App::new(Settings::default());
        let mut settings = app.session.settings().clone();
        settings.confetti_enabled = false;
        app.apply_settings(settings);
        assert!(!app.effects.confetti_visible());

        // Well past the repeat interval, still nothing.
        for _ in 0..400 {
            app.tick(App::TICK);
        }
        assert!(!app.effects.confetti_visible());
    }

    #[test]
    fn test_overlay_toggles() {
        let mut app = App::new(Settings::default());
        assert!(!app.has_overlay());
        app.toggle_help();
        assert_eq!(app.overlay(), Some(Overlay::Help));
        app.toggle_help();
        assert!(!app.has_overlay());
        app.open_settings();
        assert_eq!(app.overlay(), Some(Overlay::Settings { selected: 0 }));
    }
}
