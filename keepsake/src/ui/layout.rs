//! Layout calculations for the keepsake TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The main layout areas.
pub struct AppLayout {
    pub title_area: Rect,
    pub progress_area: Rect,
    pub content_area: Rect,
    pub status_area: Rect,
    pub hotkey_area: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size.
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(1), // Progress tracker
                Constraint::Min(8),    // Screen content
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            progress_area: chunks[1],
            content_area: chunks[2],
            status_area: chunks[3],
            hotkey_area: chunks[4],
        }
    }
}

/// Calculate a centered popup area of fixed size, clipped to the parent.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
