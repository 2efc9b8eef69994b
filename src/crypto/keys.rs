//! Session-key and verifier derivation using HKDF-SHA256.
//!
//! From one expensive PBKDF2 pass (`kdf::derive_master_material`) we
//! derive two independent values:
//! - The **session key** used to encrypt and decrypt record passwords.
//! - The **verification hash** stored on disk to confirm the master
//!   password on unlock.
//!
//! HKDF (RFC 5869) uses the master material as input keying material and
//! a context string (`info`) to produce independent sub-keys, so the
//! stored verifier reveals nothing about the encryption key.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

/// Length of derived sub-keys (256 bits).
const KEY_LEN: usize = 32;

/// Context label for the record-encryption key.
const SESSION_KEY_INFO: &[u8] = b"passvault:session-key";

/// Context label for the stored master-password verifier.
const VERIFY_HASH_INFO: &[u8] = b"passvault:verify-hash";

/// Derive the 32-byte session key from the master material.
pub fn derive_session_key(master_material: &[u8]) -> Result<SessionKey> {
    let bytes = hkdf_derive(master_material, SESSION_KEY_INFO)?;
    Ok(SessionKey::new(bytes))
}

/// Derive the 32-byte verification hash from the master material.
///
/// This is the value persisted next to the salt; equality with a freshly
/// derived hash is the sole unlock criterion.
pub fn derive_verification_hash(master_material: &[u8]) -> Result<[u8; KEY_LEN]> {
    hkdf_derive(master_material, VERIFY_HASH_INFO)
}

/// Internal helper: run HKDF-SHA256 expand with the given `info`.
///
/// We skip the `extract` step and use the master material directly as
/// the pseudo-random key, because it already has high entropy (it came
/// out of PBKDF2).
fn hkdf_derive(ikm: &[u8], info: &[u8]) -> Result<[u8; KEY_LEN]> {
    let hk = Hkdf::<Sha256>::new(None, ikm);

    let mut okm = [0u8; KEY_LEN];
    hk.expand(info, &mut okm)
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("HKDF expand failed: {e}")))?;

    Ok(okm)
}

/// A wrapper around the 32-byte session key that automatically zeroes
/// its memory when dropped.
///
/// Held only while the vault is unlocked; never persisted.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SessionKey {
    bytes: [u8; KEY_LEN],
}

impl SessionKey {
    /// Create a new `SessionKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
