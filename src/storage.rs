//! Write-only logs of submissions kept in the browser's local storage.

use std::rc::Rc;

use log::warn;
use serde_json::Value;
use thiserror::Error;

use crate::records::{ContactRecord, EbookRequest};

pub const EBOOK_REQUEST_KEY: &str = "ebookRequest";
pub const CONTACT_HISTORY_KEY: &str = "contactHistory";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read `{key}` from local storage")]
    Read { key: String },

    #[error("failed to write `{key}` to local storage")]
    Write { key: String },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read { key: key.to_string() })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write { key: key.to_string() })
    }
}

/// Shared handle passed into the page as a prop.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn KeyValueStore>);

impl StoreHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.0.as_ref()
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Overwrites the single `ebookRequest` entry.
pub fn save_ebook_request(store: &dyn KeyValueStore, request: &EbookRequest) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(request)?;
    store.set_item(EBOOK_REQUEST_KEY, &encoded)
}

/// Appends to `contactHistory` and returns the new history length.
///
/// Entries already in the list are kept as-is, whatever their shape. A value
/// that is not a JSON array is replaced by a fresh list.
pub fn append_contact_history(store: &dyn KeyValueStore, record: &ContactRecord) -> Result<usize, StorageError> {
    let mut history = match store.get_item(CONTACT_HISTORY_KEY)? {
        Some(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding unreadable contact history: {}", e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    history.push(serde_json::to_value(record)?);
    store.set_item(CONTACT_HISTORY_KEY, &serde_json::to_string(&history)?)?;
    Ok(history.len())
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{KeyValueStore, StorageError};

    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        pub writes: RefCell<usize>,
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            *self.writes.borrow_mut() += 1;
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::records::FormFields;
    use chrono::{TimeZone, Utc};

    fn contact(first: &str) -> ContactRecord {
        let fields: FormFields = [
            ("firstName", first),
            ("lastName", "Doe"),
            ("email", "jane@example.com"),
            ("message", "Hello"),
        ]
        .into_iter()
        .collect();
        ContactRecord::capture(&fields, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }

    fn ebook(email: &str) -> EbookRequest {
        let fields: FormFields = [("email", email)].into_iter().collect();
        EbookRequest::capture(&fields, Utc::now())
    }

    #[test]
    fn ebook_request_is_written_once_and_overwritten() {
        let store = MemoryStore::default();
        save_ebook_request(&store, &ebook("first@example.com")).unwrap();
        assert_eq!(*store.writes.borrow(), 1);

        save_ebook_request(&store, &ebook("second@example.com")).unwrap();
        let raw = store.get_item(EBOOK_REQUEST_KEY).unwrap().unwrap();
        let saved: EbookRequest = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved.email.as_deref(), Some("second@example.com"));
        assert_eq!(saved.phone, "Not provided");
    }

    #[test]
    fn contact_history_grows_by_one_per_submit() {
        let store = MemoryStore::default();
        assert_eq!(append_contact_history(&store, &contact("Ann")).unwrap(), 1);
        assert_eq!(append_contact_history(&store, &contact("Bob")).unwrap(), 2);
        assert_eq!(append_contact_history(&store, &contact("Cy")).unwrap(), 3);

        let raw = store.get_item(CONTACT_HISTORY_KEY).unwrap().unwrap();
        let saved: Vec<ContactRecord> = serde_json::from_str(&raw).unwrap();
        let names: Vec<_> = saved.iter().filter_map(|r| r.first_name.as_deref()).collect();
        assert_eq!(names, ["Ann", "Bob", "Cy"]);
    }

    #[test]
    fn foreign_history_entries_are_preserved() {
        let store = MemoryStore::default();
        store.set_item(CONTACT_HISTORY_KEY, r#"[{"note":"legacy"}]"#).unwrap();

        assert_eq!(append_contact_history(&store, &contact("Ann")).unwrap(), 2);
        let raw = store.get_item(CONTACT_HISTORY_KEY).unwrap().unwrap();
        let saved: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved[0]["note"], "legacy");
        assert_eq!(saved[1]["firstName"], "Ann");
    }

    #[test]
    fn corrupt_history_starts_over() {
        let store = MemoryStore::default();
        store.set_item(CONTACT_HISTORY_KEY, "{not json").unwrap();

        assert_eq!(append_contact_history(&store, &contact("Ann")).unwrap(), 1);
    }

    #[test]
    fn store_handles_compare_by_identity() {
        let a = StoreHandle::new(MemoryStore::default());
        let b = StoreHandle::new(MemoryStore::default());
        assert!(a == a.clone());
        assert!(a != b);
    }
}
