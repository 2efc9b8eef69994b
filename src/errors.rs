use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    DecryptionFailed,

    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    #[error("Decrypted password is not valid UTF-8")]
    InvalidUtf8Plaintext,

    // --- Session errors ---
    #[error("Invalid master password")]
    InvalidMasterPassword,

    #[error("Vault is locked — unlock it with the master password first")]
    VaultLocked,

    #[error("No master password set — run `passvault init` first")]
    MasterPasswordNotSet,

    #[error("A master password is already set for this vault")]
    MasterPasswordAlreadySet,

    #[error("Stored master credentials are corrupted: {0}")]
    CorruptMasterRecord(String),

    // --- Record errors ---
    #[error("Entry {0} not found")]
    EntryNotFound(i64),

    // --- Storage errors (propagated opaquely) ---
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
