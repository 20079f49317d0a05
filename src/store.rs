//! Game state store
//!
//! Owns the single [`GameState`] and a storage backend. Every operation runs
//! the reducer and then writes the persisted projection under one key.
//! Operations cannot fail: a storage error is logged and the in-memory state
//! still advances.

use crate::consts::{PERSIST_VERSION, STORAGE_KEY};
use crate::persistence;
use crate::platform::Storage;
use crate::state::{GameAction, GameState, User};

/// Where and how the projection is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub storage_key: String,
    pub version: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            version: PERSIST_VERSION,
        }
    }
}

pub struct GameStore<S: Storage> {
    state: GameState,
    storage: S,
    options: StoreOptions,
}

impl<S: Storage> GameStore<S> {
    /// Open with default options, seeding from any saved projection
    pub fn open(storage: S) -> Self {
        Self::with_options(storage, StoreOptions::default())
    }

    pub fn with_options(mut storage: S, options: StoreOptions) -> Self {
        let state = Self::load(&mut storage, &options);
        Self {
            state,
            storage,
            options,
        }
    }

    fn load(storage: &mut S, options: &StoreOptions) -> GameState {
        let json = match storage.get_item(&options.storage_key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("No saved game state, starting fresh");
                return GameState::initial();
            }
            Err(e) => {
                log::warn!("Could not read saved game state: {}", e);
                return GameState::initial();
            }
        };

        match persistence::decode(&json, options.version) {
            Ok(persisted) => {
                log::info!(
                    "Loaded saved game state ({} leaderboard entries, signed in: {})",
                    persisted.leaderboard.len(),
                    persisted.current_user.is_some()
                );
                persistence::from_persisted(persisted, GameState::initial())
            }
            Err(e) => {
                log::warn!("Discarding saved game state: {}", e);
                if let Err(e) = storage.remove_item(&options.storage_key) {
                    log::warn!("Could not clear saved game state: {}", e);
                }
                GameState::initial()
            }
        }
    }

    fn save(&mut self) {
        let json = match persistence::encode(&self.state, self.options.version) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Game state not saved: {}", e);
                return;
            }
        };
        match self.storage.set_item(&self.options.storage_key, &json) {
            Ok(()) => log::debug!("Game state saved ({} bytes)", json.len()),
            Err(e) => log::warn!("Game state not saved: {}", e),
        }
    }

    /// Apply an action and persist the result
    pub fn dispatch(&mut self, action: GameAction) -> &GameState {
        log::trace!("dispatch {}", action.name());
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
        self.save();
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn set_current_user(&mut self, user: User) -> &GameState {
        self.dispatch(GameAction::SetCurrentUser(user))
    }

    pub fn logout(&mut self) -> &GameState {
        self.dispatch(GameAction::Logout)
    }

    pub fn set_playing(&mut self, playing: bool) -> &GameState {
        self.dispatch(GameAction::SetPlaying(playing))
    }

    pub fn update_progress(&mut self, level: u32, section: u32) -> &GameState {
        self.dispatch(GameAction::UpdateProgress { level, section })
    }

    pub fn add_score(&mut self, points: i64) -> &GameState {
        self.dispatch(GameAction::AddScore(points))
    }

    pub fn add_stars(&mut self, stars: i32) -> &GameState {
        self.dispatch(GameAction::AddStars(stars))
    }

    pub fn add_achievement(&mut self, id: impl Into<String>) -> &GameState {
        self.dispatch(GameAction::AddAchievement(id.into()))
    }

    pub fn update_leaderboard(&mut self, username: impl Into<String>, score: i64) -> &GameState {
        self.dispatch(GameAction::UpdateLeaderboard {
            username: username.into(),
            score,
        })
    }

    /// Back to the initial state; the cleared projection overwrites the save
    pub fn reset_game(&mut self) -> &GameState {
        log::info!("Game reset");
        self.dispatch(GameAction::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::platform::MemoryStorage;

    fn alice() -> User {
        let mut user = User::new("u1", "alice", "alice@example.com");
        user.unlocked_levels.insert(2);
        user.achievements.insert("first-login".into());
        user
    }

    #[test]
    fn test_score_and_stars_end_to_end() {
        let mut store = GameStore::open(MemoryStorage::new());
        store.add_score(10);
        store.add_score(5);
        assert_eq!(store.state().score, 15);

        store.add_stars(2);
        store.add_stars(2);
        assert_eq!(store.state().stars, 3);
    }

    #[test]
    fn test_leaderboard_keeps_top_ten() {
        let mut store = GameStore::open(MemoryStorage::new());
        for i in 0..11 {
            store.update_leaderboard(format!("player{}", i), 100 - i as i64);
        }

        let board = &store.state().leaderboard;
        assert_eq!(board.len(), 10);
        assert!(board.entries().iter().all(|e| e.username != "player10"));
    }

    #[test]
    fn test_every_operation_writes_projection() {
        let storage = MemoryStorage::new();
        let mut store = GameStore::open(storage.clone());
        assert!(storage.raw(STORAGE_KEY).is_none());

        store.add_score(1);
        let saved = storage.raw(STORAGE_KEY).unwrap();
        assert_eq!(
            saved,
            r#"{"state":{"currentUser":null,"leaderboard":[]},"version":0}"#
        );

        store.update_leaderboard("alice", 30);
        let saved = storage.raw(STORAGE_KEY).unwrap();
        assert!(saved.contains(r#""username":"alice""#));
    }

    #[test]
    fn test_reload_restores_user_and_leaderboard_only() {
        let storage = MemoryStorage::new();
        let mut store = GameStore::open(storage.clone());
        store.set_current_user(alice());
        store.set_playing(true);
        store.update_progress(3, 2);
        store.add_score(75);
        store.add_stars(1);
        store.add_achievement("fast-learner");
        store.update_leaderboard("alice", 75);
        let before = store.state().clone();
        drop(store);

        let reopened = GameStore::open(storage);
        let state = reopened.state();
        assert_eq!(state.current_user, before.current_user);
        assert_eq!(state.leaderboard, before.leaderboard);
        assert_eq!(
            *state,
            GameState {
                current_user: before.current_user.clone(),
                leaderboard: before.leaderboard.clone(),
                ..GameState::initial()
            }
        );
    }

    #[test]
    fn test_reset_clears_saved_projection() {
        let storage = MemoryStorage::new();
        let mut store = GameStore::open(storage.clone());
        store.set_current_user(alice());
        store.update_leaderboard("alice", 50);
        store.add_score(50);

        store.reset_game();
        assert_eq!(*store.state(), GameState::initial());

        let reopened = GameStore::open(storage);
        assert_eq!(*reopened.state(), GameState::initial());
    }

    #[test]
    fn test_logout_keeps_leaderboard() {
        let mut store = GameStore::open(MemoryStorage::new());
        store.set_current_user(alice());
        store.update_leaderboard("alice", 10);
        store.logout();

        assert!(store.state().current_user.is_none());
        assert_eq!(store.state().leaderboard.len(), 1);
    }

    #[test]
    fn test_corrupt_save_starts_fresh() {
        let mut storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{\"state\":").unwrap();

        let store = GameStore::open(storage.clone());
        assert_eq!(*store.state(), GameState::initial());
        assert!(storage.raw(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_other_version_ignored() {
        let storage = MemoryStorage::new();
        let mut store = GameStore::with_options(
            storage.clone(),
            StoreOptions {
                version: 1,
                ..StoreOptions::default()
            },
        );
        store.update_leaderboard("alice", 10);
        drop(store);

        let reopened = GameStore::open(storage.clone());
        assert!(reopened.state().leaderboard.is_empty());
        assert!(storage.raw(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_custom_storage_key() {
        let storage = MemoryStorage::new();
        let options = StoreOptions {
            storage_key: "quiz-test".into(),
            ..StoreOptions::default()
        };
        let mut store = GameStore::with_options(storage.clone(), options);
        store.add_score(1);

        assert!(storage.raw("quiz-test").is_some());
        assert!(storage.raw(STORAGE_KEY).is_none());
    }

    /// Backend whose writes always fail
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Operation {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        }

        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_still_updates_state() {
        let mut store = GameStore::open(ReadOnlyStorage);
        store.add_score(20);
        store.add_achievement("survivor");

        assert_eq!(store.state().score, 20);
        assert_eq!(store.state().achievements, vec!["survivor"]);
    }
}
