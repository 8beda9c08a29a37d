//! Top-level frame rendering, composing the widgets into the layout.

use keepsake_core::ScreenId;
use ratatui::{
    widgets::{Clear, Widget},
    Frame,
};

use crate::app::{App, Overlay};
use crate::screens;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{
    AchievementsWidget, EffectsWidget, HotkeyBarWidget, ProgressTrackerWidget, ScreenViewWidget,
    SettingsPanelWidget, StatusBarWidget,
};

/// Render the whole application to the frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);
    let settings = app.session.settings();

    // Effects sit under everything else, across the whole terminal.
    if settings.animations_enabled {
        let mut effects = EffectsWidget::new(&app.effects.particles).frame(app.animation_frame);
        if app.effects.confetti_visible() {
            effects = effects.confetti(&app.effects.confetti, app.effects.confetti_progress());
        }
        effects.render(area, frame.buffer_mut());
    }

    let title = format!(" 💖 Keepsake · {} ", app.session.current_screen().title());
    frame
        .buffer_mut()
        .set_stringn(
            layout.title_area.x,
            layout.title_area.y,
            title,
            layout.title_area.width as usize,
            app.theme.heading_style(),
        );

    ProgressTrackerWidget::new(
        app.session.visited_count(),
        app.session.screen_count(),
        app.session.current_screen(),
        &app.theme,
    )
    .render(layout.progress_area, frame.buffer_mut());

    let current = app.session.current_screen();
    let content = screens::content(current);
    if current == ScreenId::Achievements {
        let progress = app.session.achievements();
        AchievementsWidget::new(&progress, content, &app.theme)
            .render(layout.content_area, frame.buffer_mut());
    } else {
        ScreenViewWidget::new(content, &app.theme)
            .font_size(settings.font_size)
            .highlight(settings.highlight_mode)
            .render(layout.content_area, frame.buffer_mut());
    }

    StatusBarWidget::new(app.status_message().unwrap_or(""), settings, &app.theme)
        .render(layout.status_area, frame.buffer_mut());
    HotkeyBarWidget::new(&app.theme).render(layout.hotkey_area, frame.buffer_mut());

    render_overlay(frame, app);
}

fn render_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.overlay() {
        Some(Overlay::Help) => {
            let popup = centered_rect_fixed(52, 16, area);
            Clear.render(popup, frame.buffer_mut());
            let lines = [
                " Keys ",
                "",
                "  1-9      go to a listed destination",
                "  Tab      next screen",
                "  Shift-Tab previous screen",
                "  h        home",
                "  a        achievements gallery",
                "  s        settings",
                "  m        toggle music",
                "  ?        this help",
                "  q        quit",
                "",
                "  Visit every screen to fill the gallery.",
            ];
            let block = ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .border_style(app.theme.border_style(true))
                .title(" Help ")
                .title_style(app.theme.heading_style());
            let inner = block.inner(popup);
            block.render(popup, frame.buffer_mut());
            for (i, line) in lines.iter().enumerate() {
                let y = inner.y + i as u16;
                if y >= inner.bottom() {
                    break;
                }
                frame.buffer_mut().set_stringn(
                    inner.x + 1,
                    y,
                    *line,
                    inner.width.saturating_sub(2) as usize,
                    app.theme.body_style(false),
                );
            }
        }
        Some(Overlay::Settings { selected }) => {
            let popup = centered_rect_fixed(48, 16, area);
            Clear.render(popup, frame.buffer_mut());
            SettingsPanelWidget::new(app.session.settings(), selected, &app.theme)
                .render(popup, frame.buffer_mut());
        }
        None => {}
    }
}
