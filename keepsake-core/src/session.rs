//! Root session state: the current screen, visit history, and settings.
//!
//! One struct owns every mutable piece of the session, and views receive
//! it by reference. There is no global state; the navigation and
//! settings-change callbacks of the UI both land here.

use crate::achievements::{self, AchievementProgress};
use crate::screen::{ScreenId, SCREEN_COUNT};
use crate::settings::Settings;
use crate::tracker::VisitedScreens;
use serde::Serialize;
use tracing::debug;

/// Sound cues the UI can request.
///
/// Playback is a stub: cues are emitted as trace events, and only when
/// sound is enabled. This is the hook point for a real audio backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Success,
    Gentle,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Success => "success",
            SoundCue::Gentle => "gentle",
        }
    }
}

/// Single owner of all session state.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    current_screen: ScreenId,
    visited: VisitedScreens,
    settings: Settings,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start a fresh session on the home screen.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Start a fresh session with pre-configured settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            current_screen: ScreenId::Home,
            visited: VisitedScreens::new(),
            settings,
        }
    }

    /// Switch to a screen, recording the visit.
    pub fn navigate(&mut self, screen: ScreenId) {
        self.play_sound(SoundCue::Click);
        self.current_screen = screen;
        self.visited.record(screen);
    }

    /// Emit a sound cue if sound is enabled.
    pub fn play_sound(&self, cue: SoundCue) {
        if self.settings.sound_enabled {
            debug!(cue = cue.name(), "sound effect");
        }
    }

    /// Replace the settings wholesale (the settings-panel callback).
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current_screen
    }

    pub fn visited(&self) -> &VisitedScreens {
        &self.visited
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Distinct screens visited so far, for the progress tracker.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Total number of screens.
    pub fn screen_count(&self) -> usize {
        SCREEN_COUNT
    }

    /// Evaluate achievement progress for the current visit history.
    pub fn achievements(&self) -> AchievementProgress {
        achievements::evaluate(&self.visited)
    }
}
