//! Settings overlay: label/value rows plus the cycle logic behind them.

use keepsake_core::Settings;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::UiTheme;

/// Number of editable rows in the panel.
pub const FIELD_COUNT: usize = 11;

/// Label for the row at `index`.
pub fn field_label(index: usize) -> &'static str {
    match index {
        0 => "Theme",
        1 => "Animations",
        2 => "Font size",
        3 => "Sound effects",
        4 => "Background music",
        5 => "Particle intensity",
        6 => "Auto-save",
        7 => "Narration speed",
        8 => "Highlight mode",
        9 => "Confetti",
        _ => "Daily reminder",
    }
}

/// Current display value for the row at `index`.
pub fn value_label(settings: &Settings, index: usize) -> String {
    fn on_off(value: bool) -> String {
        if value { "on" } else { "off" }.to_string()
    }
    match index {
        0 => settings.theme.name().to_string(),
        1 => on_off(settings.animations_enabled),
        2 => settings.font_size.name().to_string(),
        3 => on_off(settings.sound_enabled),
        4 => on_off(settings.background_music),
        5 => settings.particle_intensity.name().to_string(),
        6 => on_off(settings.auto_save),
        7 => settings.narration_speed.name().to_string(),
        8 => on_off(settings.highlight_mode),
        9 => on_off(settings.confetti_enabled),
        _ => on_off(settings.daily_reminder),
    }
}

/// Advance the row at `index` to its next value, wrapping around.
pub fn cycle(settings: &mut Settings, index: usize) {
    match index {
        0 => settings.theme = settings.theme.next(),
        1 => settings.animations_enabled = !settings.animations_enabled,
        2 => settings.font_size = settings.font_size.next(),
        3 => settings.sound_enabled = !settings.sound_enabled,
        4 => settings.background_music = !settings.background_music,
        5 => settings.particle_intensity = settings.particle_intensity.next(),
        6 => settings.auto_save = !settings.auto_save,
        7 => settings.narration_speed = settings.narration_speed.next(),
        8 => settings.highlight_mode = !settings.highlight_mode,
        9 => settings.confetti_enabled = !settings.confetti_enabled,
        _ => settings.daily_reminder = !settings.daily_reminder,
    }
}

/// Centered popup listing every setting with the selected row highlighted.
pub struct SettingsPanelWidget<'a> {
    settings: &'a Settings,
    selected: usize,
    theme: &'a UiTheme,
}

impl<'a> SettingsPanelWidget<'a> {
    pub fn new(settings: &'a Settings, selected: usize, theme: &'a UiTheme) -> Self {
        Self {
            settings,
            selected,
            theme,
        }
    }
}

impl Widget for SettingsPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(" Settings ")
            .title_style(self.theme.heading_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let max = inner.width.saturating_sub(2) as usize;

        for index in 0..FIELD_COUNT {
            let y = inner.y + index as u16;
            if y >= inner.bottom() {
                break;
            }
            let marker = if index == self.selected { "▸" } else { " " };
            let line = format!(
                "{} {:<18} {}",
                marker,
                field_label(index),
                value_label(self.settings, index)
            );
            let style = if index == self.selected {
                self.theme.heading_style()
            } else {
                self.theme.body_style(false)
            };
            buf.set_stringn(inner.x + 1, y, line, max, style);
        }

        let footer_y = inner.bottom().saturating_sub(1);
        if footer_y > inner.y + FIELD_COUNT as u16 {
            buf.set_stringn(
                inner.x + 1,
                footer_y,
                "j/k select · h/l change · Esc close",
                max,
                self.theme.muted_style(),
            );
        }
    }
}
