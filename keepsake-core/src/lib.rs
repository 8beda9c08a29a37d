//! Session state and derivation logic for the keepsake app.
//!
//! A keepsake session is a walk over a fixed set of screens. This crate
//! owns everything with rules attached:
//! - the closed [`ScreenId`] set and the monotone visited tracker
//! - the achievement catalog and its pure evaluation
//! - user settings with total parse/fallback behavior
//! - randomized ambient-effect generation and confetti timing
//!
//! Rendering and input handling live in the `keepsake` binary.
//!
//! # Quick Start
//!
//! ```
//! use keepsake_core::{ScreenId, Session};
//!
//! let mut session = Session::new();
//! session.navigate(ScreenId::Memories);
//!
//! let progress = session.achievements();
//! assert_eq!(progress.unlocked_count, 2);
//! ```

pub mod achievements;
pub mod effects;
pub mod screen;
pub mod session;
pub mod settings;
pub mod tracker;

// Primary public API
pub use achievements::{evaluate, AchievementProgress, AchievementState};
pub use screen::{ScreenId, SCREEN_COUNT};
pub use session::{Session, SoundCue};
pub use settings::{FontSize, NarrationSpeed, ParticleIntensity, Settings, Theme};
pub use tracker::VisitedScreens;
