use folio_core::{FlagStore, FolioError};
use tracing::warn;
use web_sys::{Storage, Window};

/// `localStorage`, when the browser grants it.
///
/// Private windows and sandboxed frames may refuse access; every operation
/// then reports a storage error and the caller carries on in memory.
pub struct LocalStorageFlags {
    storage: Option<Storage>,
}

impl LocalStorageFlags {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!("[folio][warn] localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self, op: &'static str) -> Result<&Storage, FolioError> {
        self.storage
            .as_ref()
            .ok_or_else(|| FolioError::storage(op, "localStorage is not available"))
    }
}

impl FlagStore for LocalStorageFlags {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        self.storage("get")?
            .get_item(key)
            .map_err(|err| FolioError::storage("get", format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.storage("set")?
            .set_item(key, value)
            .map_err(|err| FolioError::storage("set", format!("{err:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), FolioError> {
        self.storage("remove")?
            .remove_item(key)
            .map_err(|err| FolioError::storage("remove", format!("{err:?}")))
    }
}
