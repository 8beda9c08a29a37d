//! Keepsake: an interactive greeting book for the terminal.
//!
//! A multi-screen keepsake with ambient effects, an achievement gallery
//! for visiting every screen, and a settings panel.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for
//! scripting:
//!
//! ```bash
//! cargo run -p keepsake -- --headless --theme starry
//! ```

mod app;
mod events;
mod headless;
mod screens;
mod ui;

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keepsake_core::{FontSize, NarrationSpeed, ParticleIntensity, Settings, Theme};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Instant;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let settings = parse_settings_from_args(&args);

    if args.iter().any(|a| a == "--headless") {
        return headless::run_headless(settings).map_err(|e| e.into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(settings));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| render(f, &app))?;

        let timeout = App::TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => break,
                EventResult::Continue | EventResult::NeedsRedraw => {}
            }
        }
        // Tick on measured wall time, not poll timeouts, so sustained
        // input cannot stall the confetti schedule.
        if last_tick.elapsed() >= App::TICK {
            app.tick(last_tick.elapsed());
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Build the initial settings from command line arguments. Unknown
/// values fall back to defaults rather than erroring.
fn parse_settings_from_args(args: &[String]) -> Settings {
    let mut settings = Settings::default();

    let value_after = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
    };

    if let Some(value) = value_after("--theme") {
        settings.theme = value.parse::<Theme>().unwrap_or_default();
    }
    if let Some(value) = value_after("--intensity") {
        settings.particle_intensity = value.parse::<ParticleIntensity>().unwrap_or_default();
    }
    if let Some(value) = value_after("--font-size") {
        settings.font_size = value.parse::<FontSize>().unwrap_or_default();
    }
    if let Some(value) = value_after("--narration") {
        settings.narration_speed = value.parse::<NarrationSpeed>().unwrap_or_default();
    }
    if args.iter().any(|a| a == "--sound") {
        settings.sound_enabled = true;
    }
    if args.iter().any(|a| a == "--music") {
        settings.background_music = true;
    }
    if args.iter().any(|a| a == "--no-animations") {
        settings.animations_enabled = false;
    }
    if args.iter().any(|a| a == "--no-confetti") {
        settings.confetti_enabled = false;
    }

    settings
}

fn print_help() {
    println!("Keepsake - an interactive greeting book for the terminal");
    println!();
    println!("Usage: keepsake [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --headless           Run the line-oriented interface");
    println!("  --theme <name>       soft, dreamy, nature, starry (default: soft)");
    println!("  --intensity <level>  low, medium, high (default: medium)");
    println!("  --font-size <size>   small, medium, large (default: medium)");
    println!("  --narration <speed>  slow, normal, fast (default: normal)");
    println!("  --sound              Enable sound effects");
    println!("  --music              Enable background music");
    println!("  --no-animations      Disable ambient animations");
    println!("  --no-confetti        Disable confetti bursts");
    println!("  -h, --help           Show this help");
    println!();
    println!("Screens: home, school, promise, peace, editor, games,");
    println!("  message-builder, memories, story-time, reasons,");
    println!("  family-activities, photo-album, achievements, final");
}
