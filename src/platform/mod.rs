//! Platform abstraction layer
//!
//! Handles browser/native differences for key/value storage:
//! - `LocalStorage` on web (wasm32 only)
//! - `MemoryStorage` for native builds and tests

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::MemoryStorage;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

use crate::error::StorageError;

/// Synchronous string key/value store
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
