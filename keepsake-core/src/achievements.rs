//! Achievement catalog and evaluation.
//!
//! Achievements are a fixed catalog of unlock conditions over the visited
//! set. Unlock state is derived on demand and never stored: evaluating the
//! same visited set twice yields equal results.

use crate::screen::ScreenId;
use crate::tracker::VisitedScreens;
use serde::Serialize;

/// How a catalog entry unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCondition {
    /// A specific screen has been visited.
    Visited(ScreenId),
    /// At least this many distinct screens have been visited.
    VisitedAtLeast(usize),
}

impl UnlockCondition {
    fn is_met(self, visited: &VisitedScreens) -> bool {
        match self {
            UnlockCondition::Visited(screen) => visited.contains(screen),
            UnlockCondition::VisitedAtLeast(n) => visited.len() >= n,
        }
    }
}

/// A static catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub condition: UnlockCondition,
}

/// The fixed achievement catalog, one entry per screen plus the
/// cardinality-based completion entry.
pub const CATALOG: [AchievementDef; 14] = [
    AchievementDef {
        id: "explorer",
        title: "Family Explorer",
        description: "Opened the home page and started the journey",
        condition: UnlockCondition::Visited(ScreenId::Home),
    },
    AchievementDef {
        id: "scholar",
        title: "Learning Together",
        description: "Read about school days and learning side by side",
        condition: UnlockCondition::Visited(ScreenId::School),
    },
    AchievementDef {
        id: "promise-keeper",
        title: "Promise Keeper",
        description: "Discovered the promise to keep peace at home",
        condition: UnlockCondition::Visited(ScreenId::Promise),
    },
    AchievementDef {
        id: "peaceful-heart",
        title: "Peaceful Heart",
        description: "Explored the family's commitment to peace and understanding",
        condition: UnlockCondition::Visited(ScreenId::Peace),
    },
    AchievementDef {
        id: "creative-spirit",
        title: "Creative Spirit",
        description: "Tried the photo editor and made something new",
        condition: UnlockCondition::Visited(ScreenId::Editor),
    },
    AchievementDef {
        id: "game-master",
        title: "Family Fun Master",
        description: "Played the games made for the whole family",
        condition: UnlockCondition::Visited(ScreenId::Games),
    },
    AchievementDef {
        id: "message-maker",
        title: "Message Creator",
        description: "Built a personal message word by word",
        condition: UnlockCondition::Visited(ScreenId::MessageBuilder),
    },
    AchievementDef {
        id: "memory-keeper",
        title: "Memory Keeper",
        description: "Revisited the family's favorite memories",
        condition: UnlockCondition::Visited(ScreenId::Memories),
    },
    AchievementDef {
        id: "story-lover",
        title: "Story Time Champion",
        description: "Read the stories written for story time",
        condition: UnlockCondition::Visited(ScreenId::StoryTime),
    },
    AchievementDef {
        id: "reason-finder",
        title: "Reason Discoverer",
        description: "Browsed one hundred reasons, start to finish",
        condition: UnlockCondition::Visited(ScreenId::Reasons),
    },
    AchievementDef {
        id: "adventurer",
        title: "Activity Adventurer",
        description: "Found all the activities the family can do together",
        condition: UnlockCondition::Visited(ScreenId::FamilyActivities),
    },
    AchievementDef {
        id: "photographer",
        title: "Memory Photographer",
        description: "Flipped through the family photo album",
        condition: UnlockCondition::Visited(ScreenId::PhotoAlbum),
    },
    AchievementDef {
        id: "complete",
        title: "Complete Explorer",
        description: "Visited every single page",
        // Unlocks at 13 of the 14 screens.
        condition: UnlockCondition::VisitedAtLeast(13),
    },
    AchievementDef {
        id: "heart-reader",
        title: "Heart Reader",
        description: "Read the final message all the way through",
        condition: UnlockCondition::Visited(ScreenId::Final),
    },
];

/// Unlock state of one catalog entry at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementState {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Derived snapshot of achievement progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementProgress {
    pub entries: Vec<AchievementState>,
    pub unlocked_count: usize,
    pub total: usize,
    /// `round(100 * unlocked_count / total)`.
    pub percent: u8,
}

impl AchievementProgress {
    /// True when every catalog entry is unlocked.
    pub fn is_complete(&self) -> bool {
        self.unlocked_count == self.total
    }
}

/// Evaluate the full catalog against a visited set.
pub fn evaluate(visited: &VisitedScreens) -> AchievementProgress {
    let entries: Vec<AchievementState> = CATALOG
        .iter()
        .map(|def| AchievementState {
            id: def.id,
            title: def.title,
            description: def.description,
            unlocked: def.condition.is_met(visited),
        })
        .collect();

    let unlocked_count = entries.iter().filter(|e| e.unlocked).count();
    let total = entries.len();
    let percent = ((unlocked_count * 100) as f64 / total as f64).round() as u8;

    AchievementProgress {
        entries,
        unlocked_count,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit_all_except(skip: ScreenId) -> VisitedScreens {
        let mut visited = VisitedScreens::new();
        for screen in ScreenId::ALL {
            if screen != skip {
                visited.record(screen);
            }
        }
        visited
    }

    #[test]
    fn test_fresh_session_unlocks_only_explorer() {
        let progress = evaluate(&VisitedScreens::new());
        assert_eq!(progress.unlocked_count, 1);
        assert_eq!(progress.total, 14);
        assert_eq!(progress.percent, 7);
        assert!(!progress.is_complete());
        for entry in &progress.entries {
            assert_eq!(entry.unlocked, entry.id == "explorer", "{}", entry.id);
        }
    }

    #[test]
    fn test_full_tour_completes_everything() {
        let mut visited = VisitedScreens::new();
        for screen in ScreenId::ALL {
            visited.record(screen);
        }
        let progress = evaluate(&visited);
        assert_eq!(progress.unlocked_count, 14);
        assert_eq!(progress.percent, 100);
        assert!(progress.is_complete());
        assert!(progress.entries.iter().all(|e| e.unlocked));
    }

    #[test]
    fn test_complete_unlocks_at_thirteen_screens() {
        // Thirteen visits are enough: the threshold sits one below the
        // screen count.
        let visited = visit_all_except(ScreenId::Achievements);
        assert_eq!(visited.len(), 13);
        let progress = evaluate(&visited);
        let complete = progress.entries.iter().find(|e| e.id == "complete").unwrap();
        assert!(complete.unlocked);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let mut visited = VisitedScreens::new();
        visited.record(ScreenId::Games);
        visited.record(ScreenId::Final);
        assert_eq!(evaluate(&visited), evaluate(&visited));
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        let mut visited = VisitedScreens::new();
        visited.record(ScreenId::School);
        visited.record(ScreenId::Peace);
        // 3 of 14 unlocked -> 21.43 -> 21
        assert_eq!(evaluate(&visited).percent, 21);
    }

    #[test]
    fn test_catalog_watches_every_screen_but_the_gallery() {
        // 13 membership entries, one per screen except the gallery
        // itself; the gallery is covered by the cardinality entry.
        for screen in ScreenId::ALL {
            let covered = CATALOG.iter().any(|def| match def.condition {
                UnlockCondition::Visited(s) => s == screen,
                UnlockCondition::VisitedAtLeast(_) => false,
            });
            assert_eq!(covered, screen != ScreenId::Achievements, "{screen}");
        }
        let membership = CATALOG
            .iter()
            .filter(|def| matches!(def.condition, UnlockCondition::Visited(_)))
            .count();
        assert_eq!(membership, 13);
    }
}
