//! Storage layer — SQLite-backed persistence for the vault.
//!
//! The vault session only depends on the small `MasterStore` interface;
//! the concrete `Database` adds credential-record CRUD and categories
//! on top of it.

pub mod sqlite;

pub use sqlite::Database;

use crate::errors::Result;

/// The persisted master-password credentials: verification hash and
/// salt, both base64 text.
#[derive(Debug, Clone)]
pub struct MasterCredentials {
    pub hash: String,
    pub salt: String,
}

/// Interface the vault session uses to persist and load the master
/// credentials.  A single logical row; `store` is an upsert.
pub trait MasterStore {
    /// Upsert the (verification hash, salt) pair.
    fn store_master_credentials(&self, hash: &str, salt: &str) -> Result<()>;

    /// Load the stored pair.  `None` means no master password has ever
    /// been set.
    fn load_master_credentials(&self) -> Result<Option<MasterCredentials>>;
}
