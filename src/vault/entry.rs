//! Credential entry types stored in the vault database.
//!
//! Only the password field of an entry is ever encrypted; title,
//! username, URL, notes, and category are plain metadata columns.

use chrono::{DateTime, Utc};

/// A single credential entry as stored in the database.
///
/// `encrypted_password` is the base64-encoded nonce + ciphertext + tag
/// blob produced by the cipher — never plaintext.
#[derive(Debug, Clone)]
pub struct PasswordEntry {
    pub id: i64,
    pub title: String,
    pub username: String,
    pub encrypted_password: String,
    pub url: String,
    pub notes: String,
    pub category: String,

    /// When this entry was first created.
    pub created_at: DateTime<Utc>,

    /// When this entry was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The storage-facing shape of a new or updated entry: all metadata
/// fields plus the already-encrypted password blob.  The storage layer
/// never sees a plaintext password.
#[derive(Debug, Clone, Copy)]
pub struct NewEntry<'a> {
    pub title: &'a str,
    pub username: &'a str,
    pub encrypted_password: &'a str,
    pub url: &'a str,
    pub notes: &'a str,
    pub category: &'a str,
}

/// A credential category (plain CRUD, no crypto involvement).
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Filter options for listing entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Only return entries in this category.
    pub category: Option<String>,

    /// Substring match against title, username, and URL.
    pub search: Option<String>,
}
