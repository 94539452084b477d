//! Session state
//!
//! A single opaque access token is the only authentication artifact the
//! client holds. Its presence, not its validity, is what
//! [`SessionStore::is_authenticated`] reports; validity is discovered
//! only when an authorized call is rejected.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::ClientResult;

/// Fixed filename for the persisted token
const TOKEN_FILE: &str = "access_token.json";

/// Persisted token record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredToken {
    access_token: String,
}

/// File-backed token storage
#[derive(Debug, Clone)]
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Create a token storage under `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join(TOKEN_FILE);
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save the token, overwriting any previous value
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        self.ensure_dir()?;
        let record = StoredToken {
            access_token: token.to_string(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json)
    }

    /// Load the persisted token
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        let record: StoredToken = serde_json::from_str(&json).ok()?;
        Some(record.access_token)
    }

    /// Check if a token is persisted
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the persisted token
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Storage path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Explicit session context injected into the transport and facades
///
/// Cheap to clone; clones share the same state. At most one token value
/// exists at a time: `set_token` overwrites, `clear` is the only
/// transition back to the anonymous state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
    storage: Option<TokenStorage>,
}

impl SessionStore {
    /// Create a session backed by file storage, loading any persisted
    /// token.
    pub fn new(storage: TokenStorage) -> Self {
        let token = storage.load();
        Self {
            token: Arc::new(RwLock::new(token)),
            storage: Some(storage),
        }
    }

    /// Create a memory-only session (nothing survives the process).
    pub fn in_memory() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            storage: None,
        }
    }

    /// True iff a token value is currently stored. No network call, no
    /// validation.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .expect("session lock poisoned")
            .is_some()
    }

    /// Snapshot of the stored token value.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Store a token, overwriting any previous value.
    pub fn set_token(&self, token: &str) -> ClientResult<()> {
        if let Some(storage) = &self.storage {
            storage.save(token)?;
        }
        *self.token.write().expect("session lock poisoned") = Some(token.to_string());
        tracing::debug!("session token stored");
        Ok(())
    }

    /// Remove the stored value; subsequent `is_authenticated()` returns
    /// false.
    pub fn clear(&self) -> ClientResult<()> {
        if let Some(storage) = &self.storage {
            storage.delete()?;
        }
        *self.token.write().expect("session lock poisoned") = None;
        tracing::debug!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_reflect_the_most_recent_call() {
        let session = SessionStore::in_memory();
        assert!(!session.is_authenticated());

        session.set_token("tok-1").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-1"));

        // A new login overwrites the prior value
        session.set_token("tok-2").unwrap();
        assert_eq!(session.token().as_deref(), Some("tok-2"));

        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());

        // Idempotent under repeats
        session.clear().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_state() {
        let session = SessionStore::in_memory();
        let other = session.clone();

        session.set_token("shared-token").unwrap();
        assert!(other.is_authenticated());

        other.clear().unwrap();
        assert!(!session.is_authenticated());
    }
}
