use keepsake_core::FontSize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::screens::ScreenContent;
use crate::ui::theme::UiTheme;

/// Renders one screen's text body along with its numbered destinations.
pub struct ScreenViewWidget<'a> {
    content: &'a ScreenContent,
    theme: &'a UiTheme,
    font_size: FontSize,
    highlight: bool,
}

impl<'a> ScreenViewWidget<'a> {
    pub fn new(content: &'a ScreenContent, theme: &'a UiTheme) -> Self {
        Self {
            content,
            theme,
            font_size: FontSize::Medium,
            highlight: false,
        }
    }

    pub fn font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = font_size;
        self
    }

    /// Highlight mode renders the body in the accent color for readability.
    pub fn highlight(mut self, on: bool) -> Self {
        self.highlight = on;
        self
    }
}

impl Widget for ScreenViewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(format!(" {} ", self.content.heading))
            .title_style(self.theme.heading_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Small packs lines together; Large leaves a blank line after each.
        let gap = match self.font_size {
            FontSize::Small => 0,
            FontSize::Medium => 1,
            FontSize::Large => 2,
        };

        let mut y = inner.y;
        let body_style = self.theme.body_style(self.highlight);
        for line in self.content.body {
            if y >= inner.bottom() {
                return;
            }
            buf.set_stringn(inner.x + 1, y, *line, inner.width.saturating_sub(2) as usize, body_style);
            y += 1 + gap;
        }

        if y < inner.bottom() {
            y += 1;
        }
        if y < inner.bottom() && !self.content.destinations.is_empty() {
            buf.set_stringn(
                inner.x + 1,
                y,
                "Where next?",
                inner.width.saturating_sub(2) as usize,
                self.theme.muted_style(),
            );
            y += 1;
            for (i, dest) in self.content.destinations.iter().enumerate() {
                if y >= inner.bottom() {
                    break;
                }
                let key = format!("  {}) ", i + 1);
                buf.set_string(inner.x + 1, y, &key, self.theme.key_style());
                buf.set_stringn(
                    inner.x + 1 + key.len() as u16,
                    y,
                    dest.title(),
                    inner.width.saturating_sub(2 + key.len() as u16) as usize,
                    self.theme.body_style(false),
                );
                y += 1;
            }
        }
    }
}
