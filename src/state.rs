//! Game state and the reducer over it
//!
//! `GameState` is a plain value. Every mutation is a [`GameAction`] applied by
//! [`GameState::apply`], which consumes the old state and returns the new one.
//! Persistence is the store's job; nothing here touches storage.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::leaderboard::Leaderboard;

/// Best result on a single level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LevelScore {
    pub score: i64,
    pub stars: i32,
}

/// A signed-in player
///
/// Supplied by the caller and stored as-is. Level ids refer to entries in the
/// question bank and are not checked against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub current_level: u32,
    #[serde(default)]
    pub unlocked_levels: BTreeSet<u32>,
    /// Keyed by level id (e.g. "1", "2")
    #[serde(default)]
    pub level_scores: BTreeMap<String, LevelScore>,
    #[serde(default)]
    pub achievements: BTreeSet<String>,
}

impl User {
    /// New player with only the first level unlocked
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            current_level: INITIAL_LEVEL,
            unlocked_levels: BTreeSet::from([INITIAL_LEVEL]),
            level_scores: BTreeMap::new(),
            achievements: BTreeSet::new(),
        }
    }
}

/// Root aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_user: Option<User>,
    pub is_playing: bool,
    pub current_level: u32,
    pub current_section: u32,
    pub score: i64,
    /// At most [`MAX_STARS`]; there is no lower clamp
    pub stars: i32,
    /// Insertion-ordered, no duplicates
    pub achievements: Vec<String>,
    pub leaderboard: Leaderboard,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A single mutation of [`GameState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    SetCurrentUser(User),
    /// Sign out, keeping the leaderboard
    Logout,
    SetPlaying(bool),
    UpdateProgress { level: u32, section: u32 },
    AddScore(i64),
    AddStars(i32),
    AddAchievement(String),
    UpdateLeaderboard { username: String, score: i64 },
    Reset,
}

impl GameAction {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            GameAction::SetCurrentUser(_) => "set_current_user",
            GameAction::Logout => "logout",
            GameAction::SetPlaying(_) => "set_playing",
            GameAction::UpdateProgress { .. } => "update_progress",
            GameAction::AddScore(_) => "add_score",
            GameAction::AddStars(_) => "add_stars",
            GameAction::AddAchievement(_) => "add_achievement",
            GameAction::UpdateLeaderboard { .. } => "update_leaderboard",
            GameAction::Reset => "reset_game",
        }
    }
}

impl GameState {
    /// Fresh state: signed out, level 1 section 1, nothing earned
    pub fn initial() -> Self {
        Self {
            current_user: None,
            is_playing: false,
            current_level: INITIAL_LEVEL,
            current_section: INITIAL_SECTION,
            score: 0,
            stars: 0,
            achievements: Vec::new(),
            leaderboard: Leaderboard::new(),
        }
    }

    /// Apply one action, returning the resulting state
    pub fn apply(mut self, action: GameAction) -> Self {
        match action {
            GameAction::SetCurrentUser(user) => {
                self.current_user = Some(user);
            }
            GameAction::Logout => {
                self.current_user = None;
            }
            GameAction::SetPlaying(playing) => {
                self.is_playing = playing;
            }
            GameAction::UpdateProgress { level, section } => {
                self.current_level = level;
                self.current_section = section;
            }
            GameAction::AddScore(points) => {
                self.score = self.score.saturating_add(points);
            }
            GameAction::AddStars(stars) => {
                // Upper clamp only; negative input can take this below zero
                self.stars = self.stars.saturating_add(stars).min(MAX_STARS);
            }
            GameAction::AddAchievement(id) => {
                if !self.achievements.contains(&id) {
                    self.achievements.push(id);
                }
            }
            GameAction::UpdateLeaderboard { username, score } => {
                self.leaderboard.record(username, score);
            }
            GameAction::Reset => return Self::initial(),
        }
        self
    }
}
