use keepsake_core::AchievementProgress;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::screens::ScreenContent;
use crate::ui::theme::UiTheme;

/// The gallery screen: unlock percentage plus every entry's state.
pub struct AchievementsWidget<'a> {
    progress: &'a AchievementProgress,
    theme: &'a UiTheme,
    content: &'a ScreenContent,
}

impl<'a> AchievementsWidget<'a> {
    pub fn new(
        progress: &'a AchievementProgress,
        content: &'a ScreenContent,
        theme: &'a UiTheme,
    ) -> Self {
        Self {
            progress,
            theme,
            content,
        }
    }
}

impl Widget for AchievementsWidget<'_> {
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
        let max = inner.width.saturating_sub(2) as usize;

        let mut y = inner.y;
        let bar_width = 20usize;
        let filled = (self.progress.percent as usize * bar_width) / 100;
        let bar: String = (0..bar_width)
            .map(|i| if i < filled { '█' } else { '░' })
            .collect();
        let summary = format!(
            "{} of {} unlocked · {}% {}",
            self.progress.unlocked_count, self.progress.total, self.progress.percent, bar
        );
        buf.set_stringn(inner.x + 1, y, summary, max, self.theme.heading_style());
        y += 1;
        if self.progress.is_complete() && y < inner.bottom() {
            buf.set_stringn(
                inner.x + 1,
                y,
                "You explored every corner. Thank you for the journey! 💖",
                max,
                self.theme.unlocked_style(),
            );
            y += 1;
        }
        y += 1;

        for entry in &self.progress.entries {
            if y >= inner.bottom() {
                break;
            }
            let (marker, style) = if entry.unlocked {
                ("✓", self.theme.unlocked_style())
            } else {
                ("🔒", self.theme.muted_style())
            };
            let line = format!("{} {} - {}", marker, entry.title, entry.description);
            buf.set_stringn(inner.x + 1, y, line, max, style);
            y += 1;
        }

        if y + 1 < inner.bottom() && !self.content.destinations.is_empty() {
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
                    max.saturating_sub(key.len()),
                    self.theme.body_style(false),
                );
                y += 1;
            }
        }
    }
}
