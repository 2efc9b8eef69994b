//! `passvault edit` — update fields of an existing entry.

use crate::cli::output;
use crate::cli::{unlock_session, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::NewEntry;

/// Optional field overrides for an edit.  `None` keeps the stored value.
pub struct EditArgs<'a> {
    pub title: Option<&'a str>,
    pub username: Option<&'a str>,
    pub url: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub category: Option<&'a str>,
    /// Prompt for a new password and re-encrypt it.
    pub password: bool,
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, id: i64, args: &EditArgs<'_>) -> Result<()> {
    let (_settings, session) = unlock_session(cli)?;

    let entry = session.storage().get_entry(id)?;

    // Re-encrypt only when a new password was requested; otherwise the
    // stored blob is carried over untouched.
    let encrypted = if args.password {
        let pw = dialoguer::Password::new()
            .with_prompt("Enter new password")
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
        session.put_password(&pw)?
    } else {
        entry.encrypted_password.clone()
    };

    let metadata_unchanged = args.title.is_none()
        && args.username.is_none()
        && args.url.is_none()
        && args.notes.is_none()
        && args.category.is_none();

    if args.password && metadata_unchanged {
        // Password-only edit touches just the password column.
        session.storage().store_record_password(id, &encrypted)?;
    } else {
        session.storage().update_entry(
            id,
            &NewEntry {
                title: args.title.unwrap_or(&entry.title),
                username: args.username.unwrap_or(&entry.username),
                encrypted_password: &encrypted,
                url: args.url.unwrap_or(&entry.url),
                notes: args.notes.unwrap_or(&entry.notes),
                category: args.category.unwrap_or(&entry.category),
            },
        )?;
    }

    output::success(&format!("Entry {id} updated"));

    Ok(())
}
