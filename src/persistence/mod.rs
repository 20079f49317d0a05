//! Save/load of the durable projection
//!
//! Only `currentUser` and `leaderboard` survive a restart. The projection is
//! chosen in exactly one place, [`to_persisted`], and merged back in
//! [`from_persisted`]; everything else starts from the initial state.
//!
//! Stored form:
//! `{"state":{"currentUser":...,"leaderboard":[...]},"version":0}`

use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::leaderboard::Leaderboard;
use crate::state::{GameState, User};

/// The persisted subset of [`GameState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub current_user: Option<User>,
    #[serde(default)]
    pub leaderboard: Leaderboard,
}

/// Versioned wrapper written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub state: PersistedState,
    pub version: u32,
}

/// Extract the persisted projection
pub fn to_persisted(state: &GameState) -> PersistedState {
    PersistedState {
        current_user: state.current_user.clone(),
        leaderboard: state.leaderboard.clone(),
    }
}

/// Merge a projection over `defaults`
pub fn from_persisted(persisted: PersistedState, defaults: GameState) -> GameState {
    GameState {
        current_user: persisted.current_user,
        leaderboard: persisted.leaderboard,
        ..defaults
    }
}

/// Encode a state's projection into the stored JSON form
pub fn encode(state: &GameState, version: u32) -> Result<String, PersistError> {
    let envelope = Envelope {
        state: to_persisted(state),
        version,
    };
    serde_json::to_string(&envelope).map_err(PersistError::Encode)
}

/// Decode stored JSON, rejecting a different version
pub fn decode(json: &str, expected_version: u32) -> Result<PersistedState, PersistError> {
    let envelope: Envelope = serde_json::from_str(json).map_err(PersistError::Decode)?;
    if envelope.version != expected_version {
        return Err(PersistError::VersionMismatch {
            found: envelope.version,
            expected: expected_version,
        });
    }
    // Stored data may have been edited by hand
    let leaderboard = Leaderboard::from_entries(envelope.state.leaderboard.entries().to_vec());
    Ok(PersistedState {
        leaderboard,
        ..envelope.state
    })
}
