// safevoice-client/tests/session_integration.rs
// Session state and token persistence

use safevoice_client::{ClientConfig, SafeVoiceClient, SessionStore, TokenStorage};
use tempfile::TempDir;

#[test]
fn test_token_storage() {
    let temp_dir = TempDir::new().unwrap();
    let storage = TokenStorage::new(temp_dir.path());

    // Test save and load
    storage.save("test-token").unwrap();
    assert!(storage.exists());
    assert_eq!(storage.load().as_deref(), Some("test-token"));

    // Save overwrites
    storage.save("newer-token").unwrap();
    assert_eq!(storage.load().as_deref(), Some("newer-token"));

    // Test delete
    storage.delete().unwrap();
    assert!(!storage.exists());
    assert!(storage.load().is_none());

    // Deleting again is fine
    storage.delete().unwrap();
}

#[test]
fn test_session_survives_reload() {
    let temp_dir = TempDir::new().unwrap();

    let session = SessionStore::new(TokenStorage::new(temp_dir.path()));
    assert!(!session.is_authenticated());
    session.set_token("persisted-token").unwrap();

    // A fresh store over the same path sees the persisted value,
    // as a page reload would.
    let reloaded = SessionStore::new(TokenStorage::new(temp_dir.path()));
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.token().as_deref(), Some("persisted-token"));

    reloaded.clear().unwrap();
    let after_clear = SessionStore::new(TokenStorage::new(temp_dir.path()));
    assert!(!after_clear.is_authenticated());
}

#[test]
fn test_set_clear_sequences() {
    let session = SessionStore::in_memory();

    for _ in 0..3 {
        session.set_token("a").unwrap();
        assert!(session.is_authenticated());
    }
    session.set_token("b").unwrap();
    assert_eq!(session.token().as_deref(), Some("b"));

    for _ in 0..3 {
        session.clear().unwrap();
        assert!(!session.is_authenticated());
    }
}

#[test]
fn test_client_creation() {
    let client = SafeVoiceClient::from_config(ClientConfig::new("http://localhost:8080")).unwrap();
    assert!(!client.is_authenticated());
    assert!(client.session().token().is_none());
}

#[test]
fn test_client_with_token_dir() {
    let temp_dir = TempDir::new().unwrap();
    TokenStorage::new(temp_dir.path()).save("stored-before-startup").unwrap();

    let config = ClientConfig::new("http://localhost:8080").with_token_dir(temp_dir.path());
    let client = SafeVoiceClient::from_config(config).unwrap();

    // Persisted token from an earlier run is picked up on construction
    assert!(client.is_authenticated());
}
