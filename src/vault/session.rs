//! Vault session — the stateful orchestrator around the crypto core.
//!
//! A `VaultSession` owns the storage handle and, while unlocked, the
//! session key.  It is the only place where master-password lifecycle
//! (set once, verify on each unlock) and the encrypt/decrypt boundary
//! for record passwords live.
//!
//! State machine:
//!   Uninitialized --set_master_password--> Unlocked
//!   Locked        --unlock-------------->  Unlocked
//!   Unlocked      --end_session--------->  Locked
//!
//! The session has no interior mutability and is not shareable across
//! threads as-is; multithreaded callers should wrap it in a `Mutex` so
//! unlock transitions and record operations are serialized.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{
    decrypt, derive_master_material, derive_session_key, derive_verification_hash, encrypt,
    generate_salt, SessionKey,
};
use crate::errors::{PassVaultError, Result};
use crate::storage::MasterStore;

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No master password has ever been set.
    Uninitialized,
    /// A master password exists but the session key is not held.
    Locked,
    /// The session key is held in memory.
    Unlocked,
}

/// The vault session handle.  Create one with `VaultSession::new`, then
/// drive it through `set_master_password` / `unlock` / `end_session`.
pub struct VaultSession<S: MasterStore> {
    storage: S,

    /// The held session key (zeroized on drop).  `Some` only while
    /// unlocked.
    key: Option<SessionKey>,
}

impl<S: MasterStore> VaultSession<S> {
    /// Create a new session over the given storage collaborator.
    /// Starts without a held key.
    pub fn new(storage: S) -> Self {
        Self { storage, key: None }
    }

    /// Access the underlying storage collaborator.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Report the current lifecycle state.
    pub fn state(&self) -> Result<SessionState> {
        if self.key.is_some() {
            return Ok(SessionState::Unlocked);
        }
        match self.storage.load_master_credentials()? {
            Some(_) => Ok(SessionState::Locked),
            None => Ok(SessionState::Uninitialized),
        }
    }

    /// Returns `true` if the session key is currently held.
    pub fn is_unlocked(&self) -> bool {
        self.key.is_some()
    }

    // ------------------------------------------------------------------
    // Master-password lifecycle
    // ------------------------------------------------------------------

    /// Set the master password for a fresh vault and unlock it.
    ///
    /// Generates a salt, derives and persists (verification hash, salt),
    /// then holds the session key.  The key is only held after the
    /// storage write succeeds, so a failed write leaves the session
    /// `Uninitialized`.
    pub fn set_master_password(&mut self, password: &str) -> Result<()> {
        if self.storage.load_master_credentials()?.is_some() {
            return Err(PassVaultError::MasterPasswordAlreadySet);
        }

        let salt = generate_salt()?;
        let material = derive_master_material(password.as_bytes(), &salt);
        let verifier = derive_verification_hash(material.as_slice())?;

        self.storage
            .store_master_credentials(&BASE64.encode(verifier), &BASE64.encode(salt))?;

        self.key = Some(derive_session_key(material.as_slice())?);
        Ok(())
    }

    /// Unlock the vault with the master password.
    ///
    /// Recomputes the verification hash from `password` and the stored
    /// salt and compares it to the stored hash in constant time.  On
    /// mismatch the session stays locked and `InvalidMasterPassword` is
    /// returned — callers may simply re-prompt.
    pub fn unlock(&mut self, password: &str) -> Result<()> {
        let creds = self
            .storage
            .load_master_credentials()?
            .ok_or(PassVaultError::MasterPasswordNotSet)?;

        let salt = BASE64.decode(&creds.salt).map_err(|e| {
            PassVaultError::CorruptMasterRecord(format!("salt is not valid base64: {e}"))
        })?;
        let stored_hash = BASE64.decode(&creds.hash).map_err(|e| {
            PassVaultError::CorruptMasterRecord(format!("hash is not valid base64: {e}"))
        })?;

        let material = derive_master_material(password.as_bytes(), &salt);
        let candidate = derive_verification_hash(material.as_slice())?;

        // Constant-time comparison of the raw hash bytes.
        if !bool::from(candidate.as_slice().ct_eq(stored_hash.as_slice())) {
            return Err(PassVaultError::InvalidMasterPassword);
        }

        self.key = Some(derive_session_key(material.as_slice())?);
        Ok(())
    }

    /// Discard the held session key and return to `Locked`.
    ///
    /// The key memory is zeroed on drop.
    pub fn end_session(&mut self) {
        self.key = None;
    }

    // ------------------------------------------------------------------
    // Record-password operations (valid only while unlocked)
    // ------------------------------------------------------------------

    /// Encrypt a plaintext record password under the session key.
    ///
    /// Returns the encoded ciphertext blob to hand to storage.
    pub fn put_password(&self, plaintext: &str) -> Result<String> {
        let key = self.key.as_ref().ok_or(PassVaultError::VaultLocked)?;
        encrypt(key.as_bytes(), plaintext.as_bytes())
    }

    /// Decrypt an encoded ciphertext blob loaded from storage.
    ///
    /// Authentication failures propagate unchanged — a corrupted record
    /// is reported per-record, other records may still be valid.
    pub fn get_password(&self, encoded: &str) -> Result<Zeroizing<String>> {
        let key = self.key.as_ref().ok_or(PassVaultError::VaultLocked)?;
        let plaintext = decrypt(key.as_bytes(), encoded)?;

        // Take ownership without copying; zeroize the buffer if it turns
        // out not to be valid UTF-8 before discarding it.
        match String::from_utf8(plaintext) {
            Ok(s) => Ok(Zeroizing::new(s)),
            Err(e) => {
                let mut bad_bytes = e.into_bytes();
                bad_bytes.zeroize();
                Err(PassVaultError::InvalidUtf8Plaintext)
            }
        }
    }
}
