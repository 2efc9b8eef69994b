//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! PBKDF2 with a high fixed iteration count makes offline brute-forcing
//! of the master password expensive.  The iteration count is part of the
//! on-disk contract: changing it would make every existing vault
//! unverifiable, so it is a constant rather than a setting.

use pbkdf2::pbkdf2_hmac;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived master material in bytes (256 bits).
const KEY_LEN: usize = 32;

/// Fixed PBKDF2 iteration count.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Generate a cryptographically random 32-byte salt.
///
/// The only failure mode is the OS entropy source being unavailable,
/// which is fatal — no vault can be created without secure randomness.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| PassVaultError::EntropyUnavailable(e.to_string()))?;
    Ok(salt)
}

/// Derive 32 bytes of master material from a password and salt.
///
/// The same password + salt always produce the same output — a
/// re-entered master password must reproduce the stored verifier and
/// the original session key.  The result is wrapped in `Zeroizing` so
/// it is wiped when the caller drops it.
pub fn derive_master_material(password: &[u8], salt: &[u8]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut material = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, material.as_mut_slice());
    material
}
