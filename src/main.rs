//! Market Quiz entry point
//!
//! On web this sets up logging and panic reporting; the page's scripts then
//! construct a `QuizStore`. Natively it opens an in-memory store and prints
//! its state and the stored form of that state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Market Quiz starting...");
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use market_quiz::consts::{PERSIST_VERSION, STORAGE_KEY};
    use market_quiz::{GameStore, MemoryStorage, persistence};

    env_logger::init();
    log::info!("Market Quiz (native) starting...");
    log::info!("The quiz UI runs in the browser - build with `trunk serve` for the web version");

    let store = GameStore::open(MemoryStorage::new());

    println!("{}", serde_json::to_string_pretty(store.state())?);
    println!(
        "{} = {}",
        STORAGE_KEY,
        persistence::encode(store.state(), PERSIST_VERSION)?
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
