//! Headless mode for the keepsake book.
//!
//! A line-oriented interface for exploring the screens without a TUI,
//! useful for scripting and automated checks.

use std::io::{self, BufRead};

use keepsake_core::{
    FontSize, NarrationSpeed, ParticleIntensity, ScreenId, Session, Settings, Theme,
};

/// Run the book in headless mode.
///
/// Protocol:
/// - `goto <screen>` navigates to a screen by id
/// - Lines starting with `#` are commands (status, achievements, set, ...)
pub fn run_headless(settings: Settings) -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut session = Session::with_settings(settings);

    println!("=== Keepsake Headless Mode ===");
    println!("Current screen: {}", session.current_screen().title());
    println!();
    print_help();
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('#') {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            match parts.first().copied() {
                Some("quit") | Some("exit") => {
                    println!("Goodbye!");
                    break;
                }
                Some("status") => {
                    let progress = session.achievements();
                    println!("[STATUS]");
                    println!("  Screen: {}", session.current_screen());
                    println!(
                        "  Visited: {}/{}",
                        session.visited_count(),
                        session.screen_count()
                    );
                    println!(
                        "  Achievements: {}/{} ({}%)",
                        progress.unlocked_count, progress.total, progress.percent
                    );
                    println!("  Theme: {}", session.settings().theme);
                }
                Some("achievements") => {
                    let progress = session.achievements();
                    println!("[ACHIEVEMENTS] {}% complete", progress.percent);
                    for entry in &progress.entries {
                        let marker = if entry.unlocked { "✓" } else { " " };
                        println!("  [{}] {} - {}", marker, entry.title, entry.description);
                    }
                    if progress.is_complete() {
                        println!("  All achievements unlocked. Thank you for the journey!");
                    }
                }
                Some("screens") => {
                    println!("[SCREENS]");
                    for screen in ScreenId::ALL {
                        let marker = if session.visited().contains(screen) {
                            "✓"
                        } else {
                            " "
                        };
                        println!("  [{}] {:<18} {}", marker, screen.id(), screen.title());
                    }
                }
                Some("set") => match (parts.get(1).copied(), parts.get(2).copied()) {
                    (Some(field), Some(value)) => {
                        let mut settings = session.settings().clone();
                        if apply_setting(&mut settings, field, value) {
                            session.update_settings(settings);
                            println!("[SET] {field} = {value}");
                        } else {
                            println!("[ERROR] Unknown setting: {field}");
                        }
                    }
                    _ => println!("[ERROR] Usage: #set <field> <value>"),
                },
                Some("export") => match serde_json::to_string_pretty(&session) {
                    Ok(json) => println!("{json}"),
                    Err(e) => println!("[ERROR] Export failed: {e}"),
                },
                Some("help") => print_help(),
                _ => println!("[ERROR] Unknown command: {line}"),
            }
            continue;
        }

        if let Some(target) = line.strip_prefix("goto ") {
            match target.parse::<ScreenId>() {
                Ok(screen) => {
                    session.navigate(screen);
                    println!(
                        "[VISITED] {} ({}/{} screens)",
                        screen.title(),
                        session.visited_count(),
                        session.screen_count()
                    );
                }
                Err(e) => println!("[ERROR] {e}"),
            }
            continue;
        }

        println!("[ERROR] Unknown input: {line} (try #help)");
    }

    Ok(())
}

/// Apply a `#set` field, parsing the value leniently. Unrecognized
/// values fall back to the field's default rather than erroring.
fn apply_setting(settings: &mut Settings, field: &str, value: &str) -> bool {
    match field {
        "theme" => settings.theme = value.parse::<Theme>().unwrap_or_default(),
        "intensity" => {
            settings.particle_intensity =
                value.parse::<ParticleIntensity>().unwrap_or_default();
        }
        "font-size" => settings.font_size = value.parse::<FontSize>().unwrap_or_default(),
        "narration" => {
            settings.narration_speed = value.parse::<NarrationSpeed>().unwrap_or_default();
        }
        "animations" => settings.animations_enabled = parse_flag(value),
        "sound" => settings.sound_enabled = parse_flag(value),
        "music" => settings.background_music = parse_flag(value),
        "confetti" => settings.confetti_enabled = parse_flag(value),
        "auto-save" => settings.auto_save = parse_flag(value),
        "highlight" => settings.highlight_mode = parse_flag(value),
        "reminder" => settings.daily_reminder = parse_flag(value),
        _ => return false,
    }
    true
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "on" | "true" | "yes" | "1"
    )
}

fn print_help() {
    println!("Commands:");
    println!("  goto <screen>        - Visit a screen (e.g. goto memories)");
    println!("  #status              - Show current progress");
    println!("  #achievements        - List achievements");
    println!("  #screens             - List screens and visit marks");
    println!("  #set <field> <value> - Change a setting (e.g. #set theme starry)");
    println!("  #export              - Dump the session as JSON");
    println!("  #help                - Show this help");
    println!("  #quit                - Exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting_known_fields() {
        let mut settings = Settings::default();
        assert!(apply_setting(&mut settings, "theme", "starry"));
        assert_eq!(settings.theme, Theme::Starry);
        assert!(apply_setting(&mut settings, "intensity", "high"));
        assert_eq!(settings.particle_intensity, ParticleIntensity::High);
        assert!(apply_setting(&mut settings, "music", "on"));
        assert!(settings.background_music);
        assert!(!apply_setting(&mut settings, "volume", "11"));
    }

    #[test]
    fn test_unrecognized_values_fall_back_to_defaults() {
        let mut settings = Settings::default();
        settings.theme = Theme::Nature;
        assert!(apply_setting(&mut settings, "theme", "neon"));
        assert_eq!(settings.theme, Theme::Soft);
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("on"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag("maybe"));
    }
}
