//! Visited-screen tracking.

use crate::screen::ScreenId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of screens visited this session.
///
/// Grows monotonically: screens are only ever added, starting from the
/// home screen. Membership is all that matters; there is no removal and
/// no visit counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedScreens {
    screens: HashSet<ScreenId>,
}

impl Default for VisitedScreens {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitedScreens {
    /// Create a tracker containing only the home screen.
    pub fn new() -> Self {
        let mut screens = HashSet::new();
        screens.insert(ScreenId::Home);
        Self { screens }
    }

    /// Record a visit. A no-op if the screen was already visited.
    pub fn record(&mut self, screen: ScreenId) {
        self.screens.insert(screen);
    }

    /// Whether the screen has been visited.
    pub fn contains(&self, screen: ScreenId) -> bool {
        self.screens.contains(&screen)
    }

    /// Number of distinct screens visited.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Always false: the home screen is recorded at construction.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Iterate over visited screens (order unspecified).
    pub fn iter(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.screens.iter().copied()
    }
}
