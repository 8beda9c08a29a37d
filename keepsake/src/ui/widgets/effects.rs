//! Background effects layer: floating glyphs and falling confetti.
//!
//! Descriptors carry viewport-percentage coordinates; this widget scales
//! them onto the terminal grid and animates them from the tick frame.

use keepsake_core::effects::{ConfettiPiece, Particle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Draws the ambient effect batches behind everything else.
pub struct EffectsWidget<'a> {
    particles: &'a [Particle],
    confetti: Option<(&'a [ConfettiPiece], f32)>,
    frame: u8,
}

impl<'a> EffectsWidget<'a> {
    pub fn new(particles: &'a [Particle]) -> Self {
        Self {
            particles,
            confetti: None,
            frame: 0,
        }
    }

    /// Attach a visible confetti burst with its fall progress in [0, 1].
    pub fn confetti(mut self, pieces: &'a [ConfettiPiece], progress: f32) -> Self {
        self.confetti = Some((pieces, progress));
        self
    }

    pub fn frame(mut self, frame: u8) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for EffectsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for particle in self.particles {
            // Vertical bob of one cell, phase-shifted by the particle's
            // delay and slowed by its duration.
            let phase = (f32::from(self.frame) * 0.1 + particle.delay) / particle.duration;
            let bob = ((phase.fract() * 2.0 - 1.0).abs() * 2.0) as i32 - 1;

            let x = area.x + (particle.x / 100.0 * f32::from(area.width - 1)) as u16;
            let row = (particle.y / 100.0 * f32::from(area.height - 1)) as i32 + bob;
            if row < 0 || row >= i32::from(area.height) {
                continue;
            }
            let y = area.y + row as u16;

            let style = if particle.size >= 1.25 {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            buf.set_string(x, y, particle.glyph, style);
        }

        if let Some((pieces, progress)) = self.confetti {
            for piece in pieces {
                // Fall from above the top edge; larger pieces fall faster.
                let y_pct = piece.y + progress * 120.0 * (0.5 + piece.scale);
                if !(0.0..100.0).contains(&y_pct) {
                    continue;
                }
                let x = area.x + (piece.x / 100.0 * f32::from(area.width - 1)) as u16;
                let y = area.y + (y_pct / 100.0 * f32::from(area.height - 1)) as u16;

                let glyph = match ((piece.rotation / 90.0) as usize) % 4 {
                    0 => '|',
                    1 => '/',
                    2 => '-',
                    _ => '\\',
                };
                let (r, g, b) = piece.color;
                buf[(x, y)].set_char(glyph).set_fg(Color::Rgb(r, g, b));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::effects::generate_particles;
    use keepsake_core::{ParticleIntensity, Theme};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_render_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = generate_particles(Theme::Nature, ParticleIntensity::High, &mut rng);
        let confetti = keepsake_core::effects::generate_confetti(&mut rng);

        // Rendering into a small buffer must not panic at any progress.
        let area = Rect::new(0, 0, 12, 6);
        for step in 0..10 {
            let mut buf = Buffer::empty(area);
            EffectsWidget::new(&particles)
                .confetti(&confetti, step as f32 / 10.0)
                .frame(step * 25)
                .render(area, &mut buf);
        }
    }

    #[test]
    fn test_render_into_empty_area_is_a_noop() {
        let particles = Vec::new();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        EffectsWidget::new(&particles).render(area, &mut buf);
    }
}
