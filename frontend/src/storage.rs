//! Credential store backed by the browser's `localStorage`.

use common::CredentialStore;
use log::warn;
use web_sys::Storage;

/// Keeps the bearer token under a fixed key so it survives reloads.
pub struct LocalCredentialStore {
    key: &'static str,
}

impl LocalCredentialStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for LocalCredentialStore {
    fn get(&self) -> Option<String> {
        self.storage()?.get_item(self.key).ok().flatten()
    }

    fn set(&self, token: &str) {
        match self.storage() {
            Some(storage) => {
                if storage.set_item(self.key, token).is_err() {
                    warn!("could not persist session token");
                }
            }
            None => warn!("localStorage unavailable; session will not survive a reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}
