use keepsake_core::ScreenId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};

use crate::ui::theme::UiTheme;

/// One-line journey tracker: current screen plus a visited-count bar.
pub struct ProgressTrackerWidget<'a> {
    visited: usize,
    total: usize,
    current: ScreenId,
    theme: &'a UiTheme,
}

impl<'a> ProgressTrackerWidget<'a> {
    pub fn new(visited: usize, total: usize, current: ScreenId, theme: &'a UiTheme) -> Self {
        Self {
            visited,
            total,
            current,
            theme,
        }
    }
}

impl Widget for ProgressTrackerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bar: String = (0..self.total)
            .map(|i| if i < self.visited { '█' } else { '░' })
            .collect();
        let line = format!(
            " {} │ {} {}/{} visited",
            self.current.title(),
            bar,
            self.visited,
            self.total
        );
        buf.set_stringn(
            area.x,
            area.y,
            line,
            area.width as usize,
            self.theme.muted_style(),
        );
    }
}
