//! `passvault add` — add a new credential entry.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{unlock_session, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::NewEntry;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    title: &str,
    username: &str,
    url: &str,
    notes: &str,
    category: Option<&str>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PassVaultError::CommandFailed(
            "entry title cannot be empty".into(),
        ));
    }

    // Read the entry password before unlocking, so a piped value is
    // consumed ahead of any interactive master-password prompt.
    let entry_password = read_entry_password(title)?;

    let (settings, session) = unlock_session(cli)?;
    let category = category.unwrap_or(&settings.default_category);

    // Encrypt the password under the session key; storage only ever
    // sees the encoded blob.
    let encrypted = session.put_password(&entry_password)?;

    let id = session.storage().insert_entry(&NewEntry {
        title,
        username,
        encrypted_password: &encrypted,
        url,
        notes,
        category,
    })?;

    output::success(&format!("Entry '{title}' added (id {id})"));
    output::tip(&format!("Run `passvault show {id}` to view it."));

    Ok(())
}

/// Determine the entry password from one of two sources.
fn read_entry_password(title: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        // Source 1: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(Zeroizing::new(buf.trim_end().to_string()))
    } else {
        // Source 2: Interactive secure prompt (default).
        let pw = dialoguer::Password::new()
            .with_prompt(format!("Enter password for {title}"))
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
        Ok(Zeroizing::new(pw))
    }
}
