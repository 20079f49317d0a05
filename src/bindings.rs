//! JavaScript bindings for the quiz UI
//!
//! The UI owns one `QuizStore` and calls into it; state comes back as a plain
//! JS object shaped like the camelCase JSON of [`GameState`].

use wasm_bindgen::prelude::*;

use crate::platform::LocalStorage;
use crate::state::{GameState, User};
use crate::store::GameStore;

fn to_js(state: &GameState) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(state).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

#[wasm_bindgen]
pub struct QuizStore {
    inner: GameStore<LocalStorage>,
}

#[wasm_bindgen]
impl QuizStore {
    /// Open the store over `window.localStorage`
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<QuizStore, JsValue> {
        let storage = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: GameStore::open(storage),
        })
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }

    /// `user` is the JSON text of a user record
    #[wasm_bindgen(js_name = setCurrentUser)]
    pub fn set_current_user(&mut self, user: &str) -> Result<JsValue, JsValue> {
        let user: User =
            serde_json::from_str(user).map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(self.inner.set_current_user(user))
    }

    pub fn logout(&mut self) -> Result<JsValue, JsValue> {
        to_js(self.inner.logout())
    }

    #[wasm_bindgen(js_name = setPlaying)]
    pub fn set_playing(&mut self, playing: bool) -> Result<JsValue, JsValue> {
        to_js(self.inner.set_playing(playing))
    }

    #[wasm_bindgen(js_name = updateProgress)]
    pub fn update_progress(&mut self, level: u32, section: u32) -> Result<JsValue, JsValue> {
        to_js(self.inner.update_progress(level, section))
    }

    #[wasm_bindgen(js_name = addScore)]
    pub fn add_score(&mut self, points: i32) -> Result<JsValue, JsValue> {
        to_js(self.inner.add_score(points as i64))
    }

    #[wasm_bindgen(js_name = addStars)]
    pub fn add_stars(&mut self, stars: i32) -> Result<JsValue, JsValue> {
        to_js(self.inner.add_stars(stars))
    }

    #[wasm_bindgen(js_name = addAchievement)]
    pub fn add_achievement(&mut self, id: &str) -> Result<JsValue, JsValue> {
        to_js(self.inner.add_achievement(id))
    }

    #[wasm_bindgen(js_name = updateLeaderboard)]
    pub fn update_leaderboard(&mut self, username: &str, score: i32) -> Result<JsValue, JsValue> {
        to_js(self.inner.update_leaderboard(username, score as i64))
    }

    #[wasm_bindgen(js_name = resetGame)]
    pub fn reset_game(&mut self) -> Result<JsValue, JsValue> {
        to_js(self.inner.reset_game())
    }
}
