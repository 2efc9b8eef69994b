//! `passvault init` — set the master password for a fresh vault.

use crate::cli::output;
use crate::cli::{data_dir, open_database, prompt_new_master_password, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::{SessionState, VaultSession};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let dir = data_dir(cli)?;
    let (_settings, db) = open_database(cli)?;
    let mut session = VaultSession::new(db);

    // Refuse to overwrite an existing master password.
    if session.state()? != SessionState::Uninitialized {
        output::tip("Use `passvault add` to store entries in the existing vault.");
        return Err(PassVaultError::MasterPasswordAlreadySet);
    }

    // Prompt for a new password (with confirmation).
    let password = prompt_new_master_password()?;
    session.set_master_password(&password)?;

    output::success(&format!(
        "Vault initialized at {} — master password set.",
        dir.display()
    ));
    output::tip("Run `passvault add <TITLE>` to store your first entry.");
    output::tip("Run `passvault list` to see all entries.");

    Ok(())
}
