//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::{default_data_dir, Settings};
use crate::errors::{PassVaultError, Result};
use crate::storage::Database;
use crate::vault::{SessionState, VaultSession};

/// Minimum master-password length to prevent trivially weak passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// PassVault CLI: local encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (default: ~/.passvault)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize the vault by setting a master password
    Init,

    /// Add a new credential entry
    Add {
        /// Entry title (e.g. "GitHub")
        title: String,

        /// Account username or email
        #[arg(short, long, default_value = "")]
        username: String,

        /// Site or service URL
        #[arg(long, default_value = "")]
        url: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Category (default taken from config)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show an entry, including its decrypted password
    Show {
        /// Entry id (see `passvault list`)
        id: i64,
    },

    /// List entries in a table (passwords are never shown)
    List {
        /// Only show entries in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by substring match on title, username, or URL
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New username
        #[arg(short, long)]
        username: Option<String>,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// Prompt for a new password and re-encrypt it
        #[arg(short, long)]
        password: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
}

/// Category subcommands.
#[derive(clap::Subcommand)]
pub enum CategoryAction {
    /// List all categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripting/CI)
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_master_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used during `init`).
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage.
/// Enforces a minimum password length.
pub fn prompt_new_master_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "master password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Master password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the data directory from the CLI flag or the default.
pub fn data_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.data_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => default_data_dir(),
    }
}

/// Load settings and open the database for the resolved data directory.
pub fn open_database(cli: &Cli) -> Result<(Settings, Database)> {
    let dir = data_dir(cli)?;
    let settings = Settings::load(&dir)?;
    let db = Database::open(&settings.db_path(&dir))?;
    Ok((settings, db))
}

/// Open the database and unlock a session with the master password.
///
/// Shared by every command that touches records.  Fails with
/// `MasterPasswordNotSet` when the vault was never initialized.
pub fn unlock_session(cli: &Cli) -> Result<(Settings, VaultSession<Database>)> {
    let (settings, db) = open_database(cli)?;
    let mut session = VaultSession::new(db);

    if session.state()? == SessionState::Uninitialized {
        return Err(PassVaultError::MasterPasswordNotSet);
    }

    let password = prompt_master_password()?;
    session.unlock(&password)?;

    Ok((settings, session))
}
