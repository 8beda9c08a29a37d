//! Integration tests for a full session walk.
//!
//! These drive the public API the way the TUI does: navigate between
//! screens, change settings, and read derived achievement progress.

use keepsake_core::effects::{self, ConfettiScheduler, CONFETTI_DISPLAY_WINDOW};
use keepsake_core::{ParticleIntensity, ScreenId, Session, Settings, Theme};
use std::time::Duration;

#[test]
fn test_full_tour_reaches_complete() {
    let mut session = Session::new();

    // Wander in a deliberately shuffled order; order must not matter.
    let tour = [
        ScreenId::PhotoAlbum,
        ScreenId::School,
        ScreenId::Final,
        ScreenId::Games,
        ScreenId::Promise,
        ScreenId::StoryTime,
        ScreenId::Editor,
        ScreenId::Memories,
        ScreenId::Peace,
        ScreenId::FamilyActivities,
        ScreenId::MessageBuilder,
        ScreenId::Reasons,
        ScreenId::Achievements,
    ];
    for screen in tour {
        session.navigate(screen);
    }

    assert_eq!(session.visited_count(), 14);
    let progress = session.achievements();
    assert!(progress.is_complete());
    assert_eq!(progress.percent, 100);
}

#[test]
fn test_partial_tour_progress() {
    let mut session = Session::new();
    session.navigate(ScreenId::School);
    session.navigate(ScreenId::Memories);
    session.navigate(ScreenId::Home);

    let progress = session.achievements();
    assert_eq!(progress.unlocked_count, 3);
    assert_eq!(progress.percent, 21);
    assert!(!progress.is_complete());
}

#[test]
fn test_settings_drive_effects_without_touching_history() {
    let mut settings = Settings::default();
    settings.theme = Theme::Starry;
    settings.particle_intensity = ParticleIntensity::High;

    let mut session = Session::with_settings(settings.clone());
    session.navigate(ScreenId::Games);

    let batch = effects::particles(
        session.settings().theme,
        session.settings().particle_intensity,
    );
    assert_eq!(batch.len(), 25);

    // A settings change leaves the visit history alone.
    settings.particle_intensity = ParticleIntensity::Low;
    session.update_settings(settings);
    assert_eq!(session.visited_count(), 2);
    assert_eq!(
        session.settings().particle_intensity.particle_count(),
        8
    );
}

#[test]
fn test_confetti_lifecycle_follows_settings() {
    let mut session = Session::new();
    let mut scheduler = ConfettiScheduler::default();

    assert!(scheduler.set_enabled(session.settings().confetti_enabled));
    assert!(scheduler.is_visible());
    scheduler.advance(CONFETTI_DISPLAY_WINDOW);
    assert!(!scheduler.is_visible());

    let mut settings = session.settings().clone();
    settings.confetti_enabled = false;
    session.update_settings(settings);
    scheduler.set_enabled(session.settings().confetti_enabled);
    assert!(!scheduler.advance(Duration::from_secs(120)));
}

#[test]
fn test_session_state_exports_as_json() {
    let mut session = Session::new();
    session.navigate(ScreenId::StoryTime);

    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["current_screen"], "story-time");
    assert_eq!(json["settings"]["theme"], "soft");
    assert!(json["visited"]["screens"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v == "story-time"));
}
