//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption of record passwords (`encryption`)
//! - PBKDF2-HMAC-SHA256 master-password derivation (`kdf`)
//! - HKDF-based session-key and verifier derivation (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, generate_salt, ...};
pub use encryption::{decrypt, encrypt};
pub use kdf::{derive_master_material, generate_salt, SALT_LEN};
pub use keys::{derive_session_key, derive_verification_hash, SessionKey};
