//! String entries backing the session
//!
//! `Entries` is the key/value surface the session code is written against.
//! `LocalStorage` is the browser implementation; values are stored raw so
//! anything else on the page reading `token` / `userId` sees plain strings.

use wasm_bindgen::JsValue;

pub trait Entries {
    /// `None` when the key is missing or storage is unavailable.
    fn read(&self, key: &str) -> Option<String>;
    /// `false` when the write was rejected (quota, private mode, no window).
    fn write(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn with_storage<T>(f: impl FnOnce(&web_sys::Storage) -> Result<T, JsValue>) -> Option<T> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        f(&storage).ok()
    }
}

impl Entries for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::with_storage(|s| s.get_item(key)).flatten()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        Self::with_storage(|s| s.set_item(key, value)).is_some()
    }

    fn remove(&self, key: &str) {
        let _ = Self::with_storage(|s| s.remove_item(key));
    }
}
