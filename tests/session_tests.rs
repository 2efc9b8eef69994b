//! Integration tests for the vault session state machine, run against a
//! real SQLite-backed database in a temp directory.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use passvault::errors::PassVaultError;
use passvault::storage::Database;
use passvault::vault::{SessionState, VaultSession};
use tempfile::TempDir;

/// Helper: create a database file inside a fresh temp dir.
fn open_db(dir: &TempDir) -> Database {
    Database::open(&dir.path().join("vault.db")).expect("open database")
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

#[test]
fn fresh_vault_starts_uninitialized() {
    let dir = TempDir::new().unwrap();
    let session = VaultSession::new(open_db(&dir));

    assert_eq!(session.state().unwrap(), SessionState::Uninitialized);
    assert!(!session.is_unlocked());
}

#[test]
fn set_master_password_unlocks_the_session() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));

    session.set_master_password("Tr0ub4dor&3").unwrap();

    assert_eq!(session.state().unwrap(), SessionState::Unlocked);
    assert!(session.is_unlocked());
}

#[test]
fn end_session_returns_to_locked() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));

    session.set_master_password("Tr0ub4dor&3").unwrap();
    session.end_session();

    assert_eq!(session.state().unwrap(), SessionState::Locked);
    assert!(!session.is_unlocked());
}

#[test]
fn set_master_password_twice_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));

    session.set_master_password("first-password").unwrap();
    let result = session.set_master_password("second-password");

    assert!(matches!(
        result,
        Err(PassVaultError::MasterPasswordAlreadySet)
    ));
}

#[test]
fn unlock_before_init_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));

    let result = session.unlock("anything");
    assert!(matches!(result, Err(PassVaultError::MasterPasswordNotSet)));
}

// ---------------------------------------------------------------------------
// Unlock verification
// ---------------------------------------------------------------------------

#[test]
fn set_then_unlock_with_same_password_reproduces_the_key() {
    let dir = TempDir::new().unwrap();

    // First session: set the master password and encrypt a value.
    let mut first = VaultSession::new(open_db(&dir));
    first.set_master_password("Tr0ub4dor&3").unwrap();
    let encoded = first.put_password("some-value").unwrap();
    drop(first);

    // Second session over the same database: unlocking with the same
    // password must derive the same key, proven by a successful decrypt.
    let mut second = VaultSession::new(open_db(&dir));
    assert_eq!(second.state().unwrap(), SessionState::Locked);

    second.unlock("Tr0ub4dor&3").unwrap();
    assert_eq!(second.get_password(&encoded).unwrap().as_str(), "some-value");
}

#[test]
fn unlock_with_wrong_password_stays_locked() {
    let dir = TempDir::new().unwrap();

    let mut session = VaultSession::new(open_db(&dir));
    session.set_master_password("correct").unwrap();
    session.end_session();

    let result = session.unlock("wrong");

    assert!(matches!(result, Err(PassVaultError::InvalidMasterPassword)));
    assert_eq!(session.state().unwrap(), SessionState::Locked);

    // A retry with the right password still works — the failed attempt
    // did not poison the session.
    session.unlock("correct").unwrap();
    assert!(session.is_unlocked());
}

#[test]
fn corrupted_master_record_is_reported() {
    use passvault::storage::MasterStore;

    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    // Store garbage that is not valid base64.
    db.store_master_credentials("%%%not-base64%%%", "%%%also-not%%%")
        .unwrap();

    let mut session = VaultSession::new(db);
    let result = session.unlock("whatever");
    assert!(matches!(result, Err(PassVaultError::CorruptMasterRecord(_))));
}

// ---------------------------------------------------------------------------
// Record-password operations
// ---------------------------------------------------------------------------

#[test]
fn put_then_get_password_roundtrip() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));
    session.set_master_password("master-pass").unwrap();

    let encoded = session.put_password("hunter2").unwrap();
    assert_ne!(encoded, "hunter2");

    let plaintext = session.get_password(&encoded).unwrap();
    assert_eq!(plaintext.as_str(), "hunter2");
}

#[test]
fn corrupting_a_stored_blob_fails_authentication() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));
    session.set_master_password("master-pass").unwrap();

    let encoded = session.put_password("hunter2").unwrap();

    // Flip one bit of raw byte 5 (inside the nonce) and re-encode.
    let mut raw = BASE64.decode(&encoded).unwrap();
    raw[5] ^= 0x01;
    let corrupted = BASE64.encode(raw);

    let result = session.get_password(&corrupted);
    assert!(matches!(result, Err(PassVaultError::DecryptionFailed)));

    // The untampered blob still decrypts.
    assert_eq!(session.get_password(&encoded).unwrap().as_str(), "hunter2");
}

#[test]
fn record_operations_require_an_unlocked_session() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));

    // Uninitialized.
    assert!(matches!(
        session.put_password("x"),
        Err(PassVaultError::VaultLocked)
    ));

    // Locked.
    session.set_master_password("master-pass").unwrap();
    let encoded = session.put_password("x").unwrap();
    session.end_session();

    assert!(matches!(
        session.put_password("x"),
        Err(PassVaultError::VaultLocked)
    ));
    assert!(matches!(
        session.get_password(&encoded),
        Err(PassVaultError::VaultLocked)
    ));
}

#[test]
fn same_password_encrypts_differently_across_records() {
    let dir = TempDir::new().unwrap();
    let mut session = VaultSession::new(open_db(&dir));
    session.set_master_password("master-pass").unwrap();

    // Two records with the same password must not produce equal
    // ciphertexts, or equality would leak through the database.
    let a = session.put_password("shared-password").unwrap();
    let b = session.put_password("shared-password").unwrap();
    assert_ne!(a, b);
}
