//! SQLite database — the on-disk store for master credentials,
//! credential entries, and categories.
//!
//! The password column of `password_entries` only ever holds the
//! base64-encoded ciphertext blob; encryption and decryption happen in
//! the vault session before data reaches this layer.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};

use crate::errors::{PassVaultError, Result};
use crate::vault::entry::{Category, EntryFilter, NewEntry, PasswordEntry};

use super::{MasterCredentials, MasterStore};

/// SQLite-backed vault database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the vault database at `path`.
    ///
    /// Creates the parent directory if needed, restricts the file to
    /// owner-only access on Unix, and ensures all tables exist.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Restrict the database file to owner-only access.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(path, perms);
        }

        let db = Self { conn };
        db.create_tables()?;
        Ok(db)
    }

    /// Open an in-memory database (used by tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.create_tables()?;
        Ok(db)
    }

    fn create_tables(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS master_password (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                password_hash TEXT NOT NULL,
                salt          TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS categories (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL
            );
            CREATE TABLE IF NOT EXISTS password_entries (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                title      TEXT NOT NULL,
                username   TEXT,
                password   TEXT NOT NULL,
                url        TEXT,
                notes      TEXT,
                category   TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Insert a new entry and return its row id.
    pub fn insert_entry(&self, entry: &NewEntry<'_>) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO password_entries
                 (title, username, password, url, notes, category, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                entry.title,
                entry.username,
                entry.encrypted_password,
                entry.url,
                entry.notes,
                entry.category,
                now,
                now,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch a single entry by id.
    pub fn get_entry(&self, id: i64) -> Result<PasswordEntry> {
        self.conn
            .query_row(
                "SELECT id, title, username, password, url, notes, category,
                        created_at, updated_at
                 FROM password_entries WHERE id = ?1",
                [id],
                map_entry_row,
            )
            .optional()?
            .ok_or(PassVaultError::EntryNotFound(id))
    }

    /// List entries, optionally filtered by category and/or a substring
    /// search over title, username, and URL.  Ordered by title.
    pub fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<PasswordEntry>> {
        let mut sql = String::from(
            "SELECT id, title, username, password, url, notes, category,
                    created_at, updated_at
             FROM password_entries",
        );
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(ref category) = filter.category {
            clauses.push("category = ?");
            params.push(Box::new(category.clone()));
        }
        if let Some(ref term) = filter.search {
            clauses.push("(title LIKE ? OR username LIKE ? OR url LIKE ?)");
            let pattern = format!("%{term}%");
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY title");

        let mut stmt = self.conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> = params.iter().map(|p| &**p).collect();

        let rows = stmt.query_map(params_refs.as_slice(), map_entry_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Update all fields of an existing entry.  Refreshes `updated_at`
    /// and preserves `created_at`.
    pub fn update_entry(&self, id: i64, entry: &NewEntry<'_>) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let changed = self.conn.execute(
            "UPDATE password_entries
             SET title = ?1, username = ?2, password = ?3, url = ?4,
                 notes = ?5, category = ?6, updated_at = ?7
             WHERE id = ?8",
            rusqlite::params![
                entry.title,
                entry.username,
                entry.encrypted_password,
                entry.url,
                entry.notes,
                entry.category,
                now,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(PassVaultError::EntryNotFound(id));
        }
        Ok(())
    }

    /// Overwrite only the encrypted password blob of an entry.
    pub fn store_record_password(&self, record_id: i64, encoded: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let changed = self.conn.execute(
            "UPDATE password_entries SET password = ?1, updated_at = ?2 WHERE id = ?3",
            rusqlite::params![encoded, now, record_id],
        )?;
        if changed == 0 {
            return Err(PassVaultError::EntryNotFound(record_id));
        }
        Ok(())
    }

    /// Fetch only the encrypted password blob of an entry.
    pub fn load_record_password(&self, record_id: i64) -> Result<String> {
        self.conn
            .query_row(
                "SELECT password FROM password_entries WHERE id = ?1",
                [record_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or(PassVaultError::EntryNotFound(record_id))
    }

    /// Remove an entry.
    pub fn delete_entry(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM password_entries WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(PassVaultError::EntryNotFound(id));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// List all categories, sorted by name.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    /// Add a new category.  The name column is UNIQUE, so inserting a
    /// duplicate surfaces as a database error.
    pub fn add_category(&self, name: &str) -> Result<()> {
        self.conn
            .execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
        Ok(())
    }
}

impl MasterStore for Database {
    fn store_master_credentials(&self, hash: &str, salt: &str) -> Result<()> {
        // Single logical row, forced to id = 1.
        self.conn.execute(
            "INSERT OR REPLACE INTO master_password (id, password_hash, salt)
             VALUES (1, ?1, ?2)",
            rusqlite::params![hash, salt],
        )?;
        Ok(())
    }

    fn load_master_credentials(&self) -> Result<Option<MasterCredentials>> {
        let creds = self
            .conn
            .query_row(
                "SELECT password_hash, salt FROM master_password WHERE id = 1",
                [],
                |row| {
                    Ok(MasterCredentials {
                        hash: row.get(0)?,
                        salt: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(creds)
    }
}

/// Map a `password_entries` row to a `PasswordEntry`.
fn map_entry_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PasswordEntry> {
    Ok(PasswordEntry {
        id: row.get(0)?,
        title: row.get(1)?,
        username: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        encrypted_password: row.get(3)?,
        url: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        notes: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        created_at: parse_timestamp(row.get::<_, String>(7)?),
        updated_at: parse_timestamp(row.get::<_, String>(8)?),
    })
}

/// Parse an RFC 3339 timestamp column, falling back to now on garbage.
fn parse_timestamp(raw: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&raw).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_creates_database_and_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.db");
        let db = Database::open(&path).unwrap();
        assert!(path.exists());

        // All tables usable immediately.
        assert!(db.load_master_credentials().unwrap().is_none());
        assert!(db.list_categories().unwrap().is_empty());
    }

    #[test]
    fn master_credentials_upsert_and_load() {
        let db = Database::open_in_memory().unwrap();

        db.store_master_credentials("hash-1", "salt-1").unwrap();
        let creds = db.load_master_credentials().unwrap().unwrap();
        assert_eq!(creds.hash, "hash-1");
        assert_eq!(creds.salt, "salt-1");

        // Upsert replaces the single row rather than adding another.
        db.store_master_credentials("hash-2", "salt-2").unwrap();
        let creds = db.load_master_credentials().unwrap().unwrap();
        assert_eq!(creds.hash, "hash-2");
        assert_eq!(creds.salt, "salt-2");
    }

    #[cfg(unix)]
    #[test]
    fn database_file_has_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.db");
        let _db = Database::open(&path).unwrap();

        let perms = std::fs::metadata(&path).unwrap().permissions();
        assert_eq!(
            perms.mode() & 0o777,
            0o600,
            "vault.db should have 0o600 permissions"
        );
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        db.add_category("Email").unwrap();
        assert!(db.add_category("Email").is_err());
    }
}
