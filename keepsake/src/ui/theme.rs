//! Terminal color palette derived from the core theme setting.

use keepsake_core::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors and styles for the TUI, one palette per core theme.
#[derive(Debug, Clone)]
pub struct UiTheme {
    pub accent: Color,
    pub accent_alt: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub unlocked: Color,
    pub locked: Color,
}

impl UiTheme {
    /// Map a core theme to a terminal palette.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Soft => Self {
                accent: Color::LightMagenta,
                accent_alt: Color::Magenta,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Magenta,
                unlocked: Color::Green,
                locked: Color::DarkGray,
            },
            Theme::Dreamy => Self {
                accent: Color::LightCyan,
                accent_alt: Color::Cyan,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Cyan,
                unlocked: Color::Green,
                locked: Color::DarkGray,
            },
            Theme::Nature => Self {
                accent: Color::LightGreen,
                accent_alt: Color::Green,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Green,
                unlocked: Color::LightGreen,
                locked: Color::DarkGray,
            },
            Theme::Starry => Self {
                accent: Color::LightYellow,
                accent_alt: Color::Blue,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Blue,
                unlocked: Color::Yellow,
                locked: Color::DarkGray,
            },
        }
    }

    /// Style for screen headings.
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for body copy; highlight mode brightens it.
    pub fn body_style(&self, highlight: bool) -> Style {
        let style = Style::default().fg(self.text);
        if highlight {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    /// Border style, brighter when the panel is active.
    pub fn border_style(&self, active: bool) -> Style {
        Style::default().fg(if active { self.accent } else { self.border })
    }

    /// Style for unlocked achievement entries.
    pub fn unlocked_style(&self) -> Style {
        Style::default()
            .fg(self.unlocked)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for hotkey labels.
    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.accent_alt)
            .add_modifier(Modifier::BOLD)
    }
}
