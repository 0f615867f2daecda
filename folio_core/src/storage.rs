//! The persisted token-mode flag.
//!
//! Storage is page-scoped key/value (`localStorage` in the browser). Only one
//! key is ever written.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::FolioError;

/// Synchronous string key/value storage.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError>;
    fn remove(&mut self, key: &str) -> Result<(), FolioError>;
}

/// A named boolean stored as `key = enabled_value` / key absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedFlag {
    key: String,
    enabled_value: String,
}

impl PersistedFlag {
    pub fn new(key: impl Into<String>, enabled_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            enabled_value: enabled_value.into(),
        }
    }

    /// Any value other than the enabled literal, and any read failure, is off.
    pub fn is_enabled<S: FlagStore + ?Sized>(&self, store: &S) -> bool {
        match store.get(&self.key) {
            Ok(value) => value.as_deref() == Some(self.enabled_value.as_str()),
            Err(e) => {
                warn!("[folio][warn] reading {}: {e}", self.key);
                false
            }
        }
    }

    /// Write or delete the flag. Failures are logged; the page keeps working
    /// and simply starts in the off state next time.
    pub fn persist<S: FlagStore + ?Sized>(&self, store: &mut S, enabled: bool) {
        let result = if enabled {
            store.set(&self.key, &self.enabled_value)
        } else {
            store.remove(&self.key)
        };
        if let Err(e) = result {
            warn!("[folio][warn] persisting {}: {e}", self.key);
        }
    }
}

/// In-process [`FlagStore`]. Clones share nothing, so a clone taken after a
/// write models what the next page load would read.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    entries: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryFlagStore {
    /// A store that fails every operation, like storage disabled by the
    /// browser's privacy settings.
    pub fn unavailable() -> Self {
        Self {
            entries: BTreeMap::new(),
            unavailable: true,
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check(&self, op: &'static str) -> Result<(), FolioError> {
        if self.unavailable {
            return Err(FolioError::storage(op, "storage is unavailable"));
        }
        Ok(())
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        self.check("read")?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.check("write")?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), FolioError> {
        self.check("remove")?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag() -> PersistedFlag {
        PersistedFlag::new("tokenMode", "enabled")
    }

    #[test]
    fn only_enabled_literal_counts() {
        assert!(flag().is_enabled(&MemoryFlagStore::with_entry("tokenMode", "enabled")));
        assert!(!flag().is_enabled(&MemoryFlagStore::with_entry("tokenMode", "true")));
        assert!(!flag().is_enabled(&MemoryFlagStore::with_entry("tokenMode", "Enabled")));
        assert!(!flag().is_enabled(&MemoryFlagStore::default()));
    }

    #[test]
    fn persist_sets_and_removes_key() {
        let mut store = MemoryFlagStore::default();
        flag().persist(&mut store, true);
        assert_eq!(store.entry("tokenMode"), Some("enabled"));
        flag().persist(&mut store, false);
        assert_eq!(store.entry("tokenMode"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn unavailable_store_reads_as_off() {
        let mut store = MemoryFlagStore::unavailable();
        flag().persist(&mut store, true);
        assert!(!flag().is_enabled(&store));
        assert!(matches!(
            store.get("tokenMode"),
            Err(FolioError::Storage { op: "read", .. })
        ));
    }
}
