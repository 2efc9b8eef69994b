//! AES-256-GCM authenticated encryption of record passwords.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce,
//! prepends it to the ciphertext, and base64-encodes the whole blob so
//! it can live in a TEXT column.  `decrypt` reverses the encoding and
//! splits the nonce back out before decrypting.
//!
//! Layout of the encoded blob, before base64:
//!   [ 12-byte nonce | ciphertext | 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
const TAG_LEN: usize = 16;

/// Smallest possible decoded blob: a nonce plus the tag of an empty
/// plaintext.  Anything shorter is malformed.
const MIN_BLOB_LEN: usize = NONCE_LEN + TAG_LEN;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns base64(nonce || ciphertext || tag).  The nonce is freshly
/// randomized on every call, so encrypting the same plaintext twice
/// yields two different encodings.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<String> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Fresh random 12-byte nonce. Nonce reuse under the same key breaks
    // both confidentiality and authenticity, so this must never be
    // derived deterministically.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one value.
    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(blob))
}

/// Decrypt a blob that was produced by `encrypt`.
///
/// Fails with `MalformedCiphertext` if the input is not valid base64 or
/// decodes to fewer than 28 bytes, and with `DecryptionFailed` if the
/// authentication tag does not verify (tampered data or wrong key).
/// Never returns partial plaintext.
pub fn decrypt(key: &[u8], encoded: &str) -> Result<Vec<u8>> {
    let blob = BASE64
        .decode(encoded)
        .map_err(|e| PassVaultError::MalformedCiphertext(format!("invalid base64: {e}")))?;

    if blob.len() < MIN_BLOB_LEN {
        return Err(PassVaultError::MalformedCiphertext(format!(
            "blob is {} bytes, minimum is {MIN_BLOB_LEN}",
            blob.len()
        )));
    }

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassVaultError::DecryptionFailed)?;

    // Decrypt and verify the auth tag in one step.
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    Ok(plaintext)
}
