//! User-configurable settings.
//!
//! Every enumerated option is a closed enum with a `Default`, so lookups
//! keyed on them are total by construction. Free-form text (CLI flags,
//! the headless `#set` command) goes through `FromStr` and falls back to
//! the default on unrecognized input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing an enumerated setting value.
#[derive(Debug, Error)]
#[error("Unrecognized setting value: {0}")]
pub struct SettingParseError(pub String);

/// Background theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Soft,
    Dreamy,
    Nature,
    Starry,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Soft, Theme::Dreamy, Theme::Nature, Theme::Starry];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Soft => "soft",
            Theme::Dreamy => "dreamy",
            Theme::Nature => "nature",
            Theme::Starry => "starry",
        }
    }

    /// Next theme in cycle order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Theme::Soft => Theme::Dreamy,
            Theme::Dreamy => Theme::Nature,
            Theme::Nature => Theme::Starry,
            Theme::Starry => Theme::Soft,
        }
    }

    /// Glyph palette for ambient particles.
    pub fn glyphs(&self) -> &'static [&'static str] {
        match self {
            Theme::Soft => &["💖", "💕", "💝", "✨", "🌸"],
            Theme::Dreamy => &["⭐", "✨", "💫", "🌙", "☁"],
            Theme::Nature => &["🌿", "🌸", "🦋", "🌼", "🌺"],
            Theme::Starry => &["⭐", "✨", "💫", "🌟", "⚡"],
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Theme {
    type Err = SettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soft" => Ok(Theme::Soft),
            "dreamy" => Ok(Theme::Dreamy),
            "nature" => Ok(Theme::Nature),
            "starry" => Ok(Theme::Starry),
            _ => Err(SettingParseError(s.to_string())),
        }
    }
}

/// Text size for screen copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn name(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FontSize::Small => FontSize::Medium,
            FontSize::Medium => FontSize::Large,
            FontSize::Large => FontSize::Small,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FontSize {
    type Err = SettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            _ => Err(SettingParseError(s.to_string())),
        }
    }
}

/// How many ambient particles to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParticleIntensity {
    Low,
    #[default]
    Medium,
    High,
}

impl ParticleIntensity {
    pub fn name(&self) -> &'static str {
        match self {
            ParticleIntensity::Low => "low",
            ParticleIntensity::Medium => "medium",
            ParticleIntensity::High => "high",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ParticleIntensity::Low => ParticleIntensity::Medium,
            ParticleIntensity::Medium => ParticleIntensity::High,
            ParticleIntensity::High => ParticleIntensity::Low,
        }
    }

    /// Size of the generated particle batch.
    pub fn particle_count(&self) -> usize {
        match self {
            ParticleIntensity::Low => 8,
            ParticleIntensity::Medium => 15,
            ParticleIntensity::High => 25,
        }
    }
}

impl fmt::Display for ParticleIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ParticleIntensity {
    type Err = SettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ParticleIntensity::Low),
            "medium" => Ok(ParticleIntensity::Medium),
            "high" => Ok(ParticleIntensity::High),
            _ => Err(SettingParseError(s.to_string())),
        }
    }
}

/// Pace of the story-time narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NarrationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl NarrationSpeed {
    pub fn name(&self) -> &'static str {
        match self {
            NarrationSpeed::Slow => "slow",
            NarrationSpeed::Normal => "normal",
            NarrationSpeed::Fast => "fast",
        }
    }

    pub fn next(self) -> Self {
        match self {
            NarrationSpeed::Slow => NarrationSpeed::Normal,
            NarrationSpeed::Normal => NarrationSpeed::Fast,
            NarrationSpeed::Fast => NarrationSpeed::Slow,
        }
    }
}

impl fmt::Display for NarrationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NarrationSpeed {
    type Err = SettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(NarrationSpeed::Slow),
            "normal" => Ok(NarrationSpeed::Normal),
            "fast" => Ok(NarrationSpeed::Fast),
            _ => Err(SettingParseError(s.to_string())),
        }
    }
}

/// The full settings record.
///
/// Fields are independent and mutated wholesale through the settings
/// panel. `auto_save` and `daily_reminder` are declared extension points
/// with no backing subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub animations_enabled: bool,
    pub font_size: FontSize,
    pub sound_enabled: bool,
    pub background_music: bool,
    pub particle_intensity: ParticleIntensity,
    pub auto_save: bool,
    pub narration_speed: NarrationSpeed,
    pub highlight_mode: bool,
    pub confetti_enabled: bool,
    pub daily_reminder: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Soft,
            animations_enabled: true,
            font_size: FontSize::Medium,
            sound_enabled: false,
            background_music: false,
            particle_intensity: ParticleIntensity::Medium,
            auto_save: true,
            narration_speed: NarrationSpeed::Normal,
            highlight_mode: false,
            confetti_enabled: true,
            daily_reminder: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_fallback() {
        assert_eq!("starry".parse::<Theme>().unwrap(), Theme::Starry);
        assert_eq!("Dreamy".parse::<Theme>().unwrap(), Theme::Dreamy);
        // Unrecognized input falls back to the default at call sites.
        assert_eq!("neon".parse::<Theme>().unwrap_or_default(), Theme::Soft);
    }

    #[test]
    fn test_intensity_counts() {
        assert_eq!(ParticleIntensity::Low.particle_count(), 8);
        assert_eq!(ParticleIntensity::Medium.particle_count(), 15);
        assert_eq!(ParticleIntensity::High.particle_count(), 25);
        assert_eq!(
            "extreme"
                .parse::<ParticleIntensity>()
                .unwrap_or_default()
                .particle_count(),
            15
        );
    }

    #[test]
    fn test_every_theme_has_five_glyphs() {
        for theme in Theme::ALL {
            assert_eq!(theme.glyphs().len(), 5, "{theme}");
        }
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Theme::Starry.next(), Theme::Soft);
        assert_eq!(FontSize::Large.next(), FontSize::Small);
        assert_eq!(NarrationSpeed::Fast.next(), NarrationSpeed::Slow);
    }

    #[test]
    fn test_defaults_match_initial_state() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Soft);
        assert!(settings.animations_enabled);
        assert!(!settings.sound_enabled);
        assert!(settings.auto_save);
        assert!(settings.confetti_enabled);
        assert_eq!(settings.narration_speed, NarrationSpeed::Normal);
    }
}
