//! Durable session persistence backed by browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the single durable resource of the auth lifecycle:
//! it carries the bearer token and the last known user record across page
//! loads so the app can render an authenticated shell before the server
//! confirms anything.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A browser with storage disabled or a full
//! quota must not break login: write failures log a warning and the
//! in-memory state stays authoritative for the rest of the process.
//! Anything unreadable on load (malformed JSON, wrong schema version) is
//! treated as absent rather than surfaced.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Version stamp written into every persisted record. Bump on any change to
/// [`PersistedSession`] or [`User`] that old blobs cannot satisfy; stale
/// versions load as absent.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

const SESSION_KEY: &str = "campus_session";

/// The durable session record: token and user travel as one blob, so a
/// half-written pair is unrepresentable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub version: u32,
    /// Opaque bearer credential; forwarded to the transport, never inspected.
    pub token: String,
    /// Last known user record, used for optimistic hydration.
    pub user: User,
}

/// Handle to the durable session record.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    /// `window.localStorage`; absent outside the hydrate build.
    Browser,
    /// In-process map standing in for localStorage in native tests.
    #[cfg(test)]
    Memory(std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>),
}

impl SessionStore {
    /// Store backed by browser localStorage. Off-browser this reads as
    /// empty and swallows writes.
    #[must_use]
    pub fn new() -> Self {
        Self { backend: Backend::Browser }
    }

    /// Store backed by an in-process map, for native tests.
    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(std::sync::Arc::new(std::sync::Mutex::new(
                std::collections::HashMap::new(),
            ))),
        }
    }

    /// Persist `token` and `user` as one record, replacing any prior value.
    pub fn save(&self, token: &str, user: &User) {
        let record = PersistedSession {
            version: SESSION_SCHEMA_VERSION,
            token: token.to_owned(),
            user: user.clone(),
        };
        let Ok(raw) = serde_json::to_string(&record) else {
            leptos::logging::warn!("session store: failed to serialize session record");
            return;
        };
        if !self.backend.write(SESSION_KEY, &raw) {
            leptos::logging::warn!("session store: persist failed; session lives in memory only");
        }
    }

    /// Load the persisted record, or `None` if absent, unreadable, or from
    /// another schema version.
    #[must_use]
    pub fn load(&self) -> Option<PersistedSession> {
        let raw = self.backend.read(SESSION_KEY)?;
        let record: PersistedSession = serde_json::from_str(&raw).ok()?;
        (record.version == SESSION_SCHEMA_VERSION).then_some(record)
    }

    /// Bearer token of the persisted record, if any. Used by the transport
    /// to attach the `Authorization` header.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.load().map(|record| record.token)
    }

    /// Remove the persisted record. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser => {
                #[cfg(feature = "hydrate")]
                {
                    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
                    storage.get_item(key).ok().flatten()
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = key;
                    None
                }
            }
            #[cfg(test)]
            Self::Memory(map) => map.lock().ok().and_then(|map| map.get(key).cloned()),
        }
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match self {
            Self::Browser => {
                #[cfg(feature = "hydrate")]
                {
                    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                        return false;
                    };
                    storage.set_item(key, value).is_ok()
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (key, value);
                    false
                }
            }
            #[cfg(test)]
            Self::Memory(map) => map
                .lock()
                .map(|mut map| {
                    map.insert(key.to_owned(), value.to_owned());
                })
                .is_ok(),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            Self::Browser => {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                        let _ = storage.remove_item(key);
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = key;
                }
            }
            #[cfg(test)]
            Self::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.remove(key);
                }
            }
        }
    }
}
