//! Widgets for the keepsake TUI.

pub mod achievements_view;
pub mod effects;
pub mod progress;
pub mod screen_view;
pub mod settings_panel;
pub mod status_bar;

pub use achievements_view::AchievementsWidget;
pub use effects::EffectsWidget;
pub use progress::ProgressTrackerWidget;
pub use screen_view::ScreenViewWidget;
pub use settings_panel::SettingsPanelWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
