//! Vault module — credential entries and the session state machine.
//!
//! This module provides:
//! - `PasswordEntry`, `NewEntry`, `Category` types (`entry`)
//! - The `VaultSession` orchestrator owning the session key (`session`)

pub mod entry;
pub mod session;

// Re-export the most commonly used items.
pub use entry::{Category, EntryFilter, NewEntry, PasswordEntry};
pub use session::{SessionState, VaultSession};
