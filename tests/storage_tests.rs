//! Integration tests for the SQLite storage layer.
//!
//! The storage layer never sees plaintext passwords, so these tests use
//! opaque placeholder strings for the password column.

use passvault::errors::PassVaultError;
use passvault::storage::{Database, MasterStore};
use passvault::vault::{EntryFilter, NewEntry};

fn sample_entry<'a>(title: &'a str, category: &'a str) -> NewEntry<'a> {
    NewEntry {
        title,
        username: "user@example.com",
        encrypted_password: "b64-blob",
        url: "https://example.com",
        notes: "",
        category,
    }
}

// ---------------------------------------------------------------------------
// Entry CRUD
// ---------------------------------------------------------------------------

#[test]
fn insert_and_get_entry_roundtrip() {
    let db = Database::open_in_memory().unwrap();

    let id = db
        .insert_entry(&NewEntry {
            title: "GitHub",
            username: "octocat",
            encrypted_password: "opaque-ciphertext",
            url: "https://github.com",
            notes: "work account",
            category: "Dev",
        })
        .unwrap();

    let entry = db.get_entry(id).unwrap();
    assert_eq!(entry.id, id);
    assert_eq!(entry.title, "GitHub");
    assert_eq!(entry.username, "octocat");
    assert_eq!(entry.encrypted_password, "opaque-ciphertext");
    assert_eq!(entry.url, "https://github.com");
    assert_eq!(entry.notes, "work account");
    assert_eq!(entry.category, "Dev");
}

#[test]
fn get_missing_entry_reports_not_found() {
    let db = Database::open_in_memory().unwrap();
    let result = db.get_entry(999);
    assert!(matches!(result, Err(PassVaultError::EntryNotFound(999))));
}

#[test]
fn list_entries_is_ordered_by_title() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&sample_entry("Zebra", "General")).unwrap();
    db.insert_entry(&sample_entry("Alpha", "General")).unwrap();
    db.insert_entry(&sample_entry("Middle", "General")).unwrap();

    let entries = db.list_entries(&EntryFilter::default()).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "Alpha");
    assert_eq!(entries[1].title, "Middle");
    assert_eq!(entries[2].title, "Zebra");
}

#[test]
fn list_entries_filters_by_category() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&sample_entry("One", "Work")).unwrap();
    db.insert_entry(&sample_entry("Two", "Personal")).unwrap();
    db.insert_entry(&sample_entry("Three", "Work")).unwrap();

    let filter = EntryFilter {
        category: Some("Work".to_string()),
        search: None,
    };
    let entries = db.list_entries(&filter).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.category == "Work"));
}

#[test]
fn list_entries_searches_title_username_and_url() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&NewEntry {
        title: "Bank",
        username: "alice",
        encrypted_password: "x",
        url: "https://bank.example",
        notes: "",
        category: "Finance",
    })
    .unwrap();
    db.insert_entry(&NewEntry {
        title: "Forum",
        username: "alice-2001",
        encrypted_password: "x",
        url: "https://forum.example",
        notes: "",
        category: "Misc",
    })
    .unwrap();

    let by_title = EntryFilter {
        category: None,
        search: Some("Bank".to_string()),
    };
    assert_eq!(db.list_entries(&by_title).unwrap().len(), 1);

    let by_username = EntryFilter {
        category: None,
        search: Some("alice".to_string()),
    };
    assert_eq!(db.list_entries(&by_username).unwrap().len(), 2);

    let by_url = EntryFilter {
        category: None,
        search: Some("forum.example".to_string()),
    };
    assert_eq!(db.list_entries(&by_url).unwrap().len(), 1);
}

#[test]
fn update_entry_replaces_fields_and_preserves_created_at() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_entry(&sample_entry("Old", "General")).unwrap();
    let created_before = db.get_entry(id).unwrap().created_at;

    db.update_entry(
        id,
        &NewEntry {
            title: "New",
            username: "new-user",
            encrypted_password: "new-blob",
            url: "",
            notes: "edited",
            category: "Work",
        },
    )
    .unwrap();

    let entry = db.get_entry(id).unwrap();
    assert_eq!(entry.title, "New");
    assert_eq!(entry.username, "new-user");
    assert_eq!(entry.encrypted_password, "new-blob");
    assert_eq!(entry.notes, "edited");
    assert_eq!(entry.created_at, created_before);
}

#[test]
fn update_missing_entry_reports_not_found() {
    let db = Database::open_in_memory().unwrap();
    let result = db.update_entry(42, &sample_entry("X", "General"));
    assert!(matches!(result, Err(PassVaultError::EntryNotFound(42))));
}

#[test]
fn delete_entry_removes_it() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_entry(&sample_entry("Doomed", "General")).unwrap();

    db.delete_entry(id).unwrap();

    assert!(matches!(
        db.get_entry(id),
        Err(PassVaultError::EntryNotFound(_))
    ));
    assert!(matches!(
        db.delete_entry(id),
        Err(PassVaultError::EntryNotFound(_))
    ));
}

// ---------------------------------------------------------------------------
// Record-password column operations
// ---------------------------------------------------------------------------

#[test]
fn store_and_load_record_password() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_entry(&sample_entry("Site", "General")).unwrap();

    db.store_record_password(id, "rotated-blob").unwrap();

    assert_eq!(db.load_record_password(id).unwrap(), "rotated-blob");

    // Other columns are untouched.
    let entry = db.get_entry(id).unwrap();
    assert_eq!(entry.title, "Site");
    assert_eq!(entry.encrypted_password, "rotated-blob");
}

#[test]
fn record_password_ops_on_missing_entry_report_not_found() {
    let db = Database::open_in_memory().unwrap();

    assert!(matches!(
        db.store_record_password(7, "blob"),
        Err(PassVaultError::EntryNotFound(7))
    ));
    assert!(matches!(
        db.load_record_password(7),
        Err(PassVaultError::EntryNotFound(7))
    ));
}

// ---------------------------------------------------------------------------
// Categories and master credentials
// ---------------------------------------------------------------------------

#[test]
fn categories_are_listed_sorted() {
    let db = Database::open_in_memory().unwrap();
    db.add_category("Work").unwrap();
    db.add_category("Email").unwrap();
    db.add_category("Finance").unwrap();

    let categories = db.list_categories().unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Email", "Finance", "Work"]);
}

#[test]
fn master_credentials_absent_until_stored() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.load_master_credentials().unwrap().is_none());

    db.store_master_credentials("hash-b64", "salt-b64").unwrap();

    let creds = db.load_master_credentials().unwrap().unwrap();
    assert_eq!(creds.hash, "hash-b64");
    assert_eq!(creds.salt, "salt-b64");
}
