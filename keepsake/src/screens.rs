//! Static screen content.
//!
//! Titles come from the core screen ids; the body copy and the numbered
//! destinations offered on each screen live here. Pure data, no logic.

use keepsake_core::ScreenId;

/// Presentational content for one screen.
pub struct ScreenContent {
    pub heading: &'static str,
    pub body: &'static [&'static str],
    /// Destinations offered as numbered choices (at most nine).
    pub destinations: &'static [ScreenId],
}

/// Look up the content for a screen.
pub fn content(screen: ScreenId) -> &'static ScreenContent {
    match screen {
        ScreenId::Home => &ScreenContent {
            heading: "Welcome Home",
            body: &[
                "This little app is a keepsake made with love.",
                "Wander through the pages at your own pace; every visit",
                "counts toward your achievement journey.",
            ],
            destinations: &[
                ScreenId::School,
                ScreenId::Memories,
                ScreenId::StoryTime,
                ScreenId::Games,
                ScreenId::PhotoAlbum,
                ScreenId::Reasons,
                ScreenId::FamilyActivities,
                ScreenId::Achievements,
                ScreenId::Final,
            ],
        },
        ScreenId::School => &ScreenContent {
            heading: "School Days",
            body: &[
                "Homework at the kitchen table, projects finished at the",
                "last minute, and someone always there to help.",
            ],
            destinations: &[ScreenId::Promise, ScreenId::Home],
        },
        ScreenId::Promise => &ScreenContent {
            heading: "A Promise Kept",
            body: &[
                "A sincere promise: to keep the peace, to listen first,",
                "and to choose kindness every day.",
            ],
            destinations: &[ScreenId::Peace, ScreenId::Home],
        },
        ScreenId::Peace => &ScreenContent {
            heading: "Peaceful Heart",
            body: &[
                "Our family works best when it is calm. This page is a",
                "small reminder of what we are all committed to.",
            ],
            destinations: &[ScreenId::Editor, ScreenId::Home],
        },
        ScreenId::Editor => &ScreenContent {
            heading: "Photo Editor",
            body: &[
                "A playful little photo editor lived here once. Make",
                "something, keep it, share it.",
            ],
            destinations: &[ScreenId::Games, ScreenId::Home],
        },
        ScreenId::Games => &ScreenContent {
            heading: "Games",
            body: &[
                "Drawing games, guessing games, games invented on long",
                "car rides. Pick one and play a round.",
            ],
            destinations: &[ScreenId::MessageBuilder, ScreenId::Home],
        },
        ScreenId::MessageBuilder => &ScreenContent {
            heading: "Message Builder",
            body: &[
                "Put your own message together, one word at a time,",
                "straight from the heart.",
            ],
            destinations: &[ScreenId::Memories, ScreenId::Home],
        },
        ScreenId::Memories => &ScreenContent {
            heading: "Memories",
            body: &[
                "Birthdays, snow days, the trip where everything went",
                "wrong and we laughed anyway.",
            ],
            destinations: &[ScreenId::StoryTime, ScreenId::Home],
        },
        ScreenId::StoryTime => &ScreenContent {
            heading: "Story Time",
            body: &[
                "Short stories about us, read slowly or quickly;",
                "narration speed is yours to choose in settings.",
            ],
            destinations: &[ScreenId::Reasons, ScreenId::Home],
        },
        ScreenId::Reasons => &ScreenContent {
            heading: "100 Reasons",
            body: &[
                "One hundred reasons, large and small, why you matter",
                "to this family.",
            ],
            destinations: &[ScreenId::FamilyActivities, ScreenId::Home],
        },
        ScreenId::FamilyActivities => &ScreenContent {
            heading: "Family Activities",
            body: &[
                "All the things we could do together, from the backyard",
                "to the other side of the country.",
            ],
            destinations: &[ScreenId::PhotoAlbum, ScreenId::Home],
        },
        ScreenId::PhotoAlbum => &ScreenContent {
            heading: "Photo Album",
            body: &[
                "A shoebox of photographs, sorted at last. Flip through",
                "and stay as long as you like.",
            ],
            destinations: &[ScreenId::Achievements, ScreenId::Home],
        },
        ScreenId::Achievements => &ScreenContent {
            heading: "Your Achievement Journey",
            body: &[
                "Every page you visit counts. Explore everything to",
                "unlock the full set.",
            ],
            destinations: &[ScreenId::Final, ScreenId::Home],
        },
        ScreenId::Final => &ScreenContent {
            heading: "Final Message",
            body: &[
                "Thank you for reading this far. Everything here was",
                "made for you, with love.",
            ],
            destinations: &[ScreenId::Achievements, ScreenId::Home],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_content() {
        for screen in ScreenId::ALL {
            let content = content(screen);
            assert!(!content.heading.is_empty(), "{screen}");
            assert!(!content.body.is_empty(), "{screen}");
            assert!(!content.destinations.is_empty(), "{screen}");
            assert!(content.destinations.len() <= 9, "{screen}");
        }
    }

    #[test]
    fn test_every_screen_is_reachable_from_home() {
        // Following the suggested destinations must cover all screens.
        let mut reachable = std::collections::HashSet::new();
        let mut stack = vec![ScreenId::Home];
        while let Some(screen) = stack.pop() {
            if reachable.insert(screen) {
                stack.extend(content(screen).destinations.iter().copied());
            }
        }
        assert_eq!(reachable.len(), ScreenId::ALL.len());
    }
}
