//! Screen identifiers.
//!
//! Every navigable view is one of a fixed set of fourteen screens. The id
//! is the unit of navigation and the key of the visited set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing screen identifiers.
#[derive(Debug, Error)]
#[error("Unknown screen id: {0}")]
pub struct ScreenParseError(pub String);

/// A navigable screen, identified by a kebab-case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    #[default]
    Home,
    School,
    Promise,
    Peace,
    Editor,
    Final,
    Games,
    MessageBuilder,
    Memories,
    StoryTime,
    Reasons,
    FamilyActivities,
    PhotoAlbum,
    Achievements,
}

/// Total number of screens.
pub const SCREEN_COUNT: usize = ScreenId::ALL.len();

impl ScreenId {
    /// All screens in canonical navigation order.
    pub const ALL: [ScreenId; 14] = [
        ScreenId::Home,
        ScreenId::School,
        ScreenId::Promise,
        ScreenId::Peace,
        ScreenId::Editor,
        ScreenId::Games,
        ScreenId::MessageBuilder,
        ScreenId::Memories,
        ScreenId::StoryTime,
        ScreenId::Reasons,
        ScreenId::FamilyActivities,
        ScreenId::PhotoAlbum,
        ScreenId::Achievements,
        ScreenId::Final,
    ];

    /// The kebab-case identifier, as used in navigation targets.
    pub fn id(&self) -> &'static str {
        match self {
            ScreenId::Home => "home",
            ScreenId::School => "school",
            ScreenId::Promise => "promise",
            ScreenId::Peace => "peace",
            ScreenId::Editor => "editor",
            ScreenId::Final => "final",
            ScreenId::Games => "games",
            ScreenId::MessageBuilder => "message-builder",
            ScreenId::Memories => "memories",
            ScreenId::StoryTime => "story-time",
            ScreenId::Reasons => "reasons",
            ScreenId::FamilyActivities => "family-activities",
            ScreenId::PhotoAlbum => "photo-album",
            ScreenId::Achievements => "achievements",
        }
    }

    /// Human-readable screen title.
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Home => "Home",
            ScreenId::School => "School Days",
            ScreenId::Promise => "A Promise Kept",
            ScreenId::Peace => "Peaceful Heart",
            ScreenId::Editor => "Photo Editor",
            ScreenId::Final => "Final Message",
            ScreenId::Games => "Games",
            ScreenId::MessageBuilder => "Message Builder",
            ScreenId::Memories => "Memories",
            ScreenId::StoryTime => "Story Time",
            ScreenId::Reasons => "100 Reasons",
            ScreenId::FamilyActivities => "Family Activities",
            ScreenId::PhotoAlbum => "Photo Album",
            ScreenId::Achievements => "Achievements",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ScreenId {
    type Err = ScreenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(ScreenId::Home),
            "school" => Ok(ScreenId::School),
            "promise" => Ok(ScreenId::Promise),
            "peace" => Ok(ScreenId::Peace),
            "editor" => Ok(ScreenId::Editor),
            "final" => Ok(ScreenId::Final),
            "games" => Ok(ScreenId::Games),
            "message-builder" => Ok(ScreenId::MessageBuilder),
            "memories" => Ok(ScreenId::Memories),
            "story-time" => Ok(ScreenId::StoryTime),
            "reasons" => Ok(ScreenId::Reasons),
            "family-activities" => Ok(ScreenId::FamilyActivities),
            "photo-album" => Ok(ScreenId::PhotoAlbum),
            "achievements" => Ok(ScreenId::Achievements),
            _ => Err(ScreenParseError(s.to_string())),
        }
    }
}
