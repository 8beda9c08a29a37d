use keepsake_core::Settings;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};

use crate::ui::theme::UiTheme;

/// Bottom status line: transient message plus setting indicators.
pub struct StatusBarWidget<'a> {
    message: &'a str,
    settings: &'a Settings,
    theme: &'a UiTheme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: &'a str, settings: &'a Settings, theme: &'a UiTheme) -> Self {
        Self {
            message,
            settings,
            theme,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut indicators = Vec::new();
        if self.settings.background_music {
            indicators.push("♪");
        }
        if self.settings.animations_enabled {
            indicators.push("✦");
        }
        if self.settings.auto_save {
            indicators.push("auto-saved ✓");
        }
        let right = indicators.join("  ");

        buf.set_stringn(
            area.x + 1,
            area.y,
            self.message,
            area.width.saturating_sub(2) as usize,
            self.theme.body_style(false),
        );
        let right_width = right.chars().count() as u16;
        if right_width + 2 < area.width {
            buf.set_string(
                area.x + area.width - right_width - 1,
                area.y,
                right,
                self.theme.muted_style(),
            );
        }
    }
}

/// Static hotkey reference on the bottom row.
pub struct HotkeyBarWidget<'a> {
    theme: &'a UiTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(theme: &'a UiTheme) -> Self {
        Self { theme }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let line = " 1-9 go · Tab next · h home · a achievements · s settings · m music · ? help · q quit";
        buf.set_stringn(
            area.x,
            area.y,
            line,
            area.width as usize,
            self.theme.key_style(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::Theme;

    #[test]
    fn test_status_bar_shows_message_and_indicators() {
        let theme = UiTheme::for_theme(Theme::Soft);
        let mut settings = Settings::default();
        settings.background_music = true;
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new("Welcome", &settings, &theme).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("Welcome"));
        assert!(row.contains('♪'));
        assert!(row.contains("auto-saved"));
    }
}
