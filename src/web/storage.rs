//! [`PreferenceStore`] backed by `window.localStorage`.

use web_sys::{Storage, Window};

use crate::error::{Error, Result};
use crate::storage::PreferenceStore;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Storage can be missing (disabled, sandboxed iframe); every access then
    /// fails with [`Error::Storage`].
    pub fn new(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage.as_ref().ok_or_else(|| Error::Storage("localStorage unavailable".to_owned()))
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| Error::Storage(format!("getItem({key}): {e:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(|e| Error::Storage(format!("setItem({key}): {e:?}")))
    }
}
