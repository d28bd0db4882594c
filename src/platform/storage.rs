//! LocalStorage-backed preference store

use web_sys::Storage;

use crate::persistence::PreferenceStore;

/// Preference store over `window.localStorage`.
///
/// Missing storage (privacy modes, sandboxed frames) degrades to a store
/// that forgets everything.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to store {}: {:?}", key, e);
            }
        }
    }
}
