//! `passvault show` — display one entry, including its decrypted password.

use console::style;

use crate::cli::{unlock_session, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: i64) -> Result<()> {
    let (_settings, session) = unlock_session(cli)?;

    let entry = session.storage().get_entry(id)?;

    // Decrypt failures propagate per-record: a corrupted entry reports
    // an error without touching any other entry.
    let password = session.get_password(&entry.encrypted_password)?;

    println!("{}    {}", style("Title:").bold(), entry.title);
    if !entry.username.is_empty() {
        println!("{} {}", style("Username:").bold(), entry.username);
    }
    println!("{} {}", style("Password:").bold(), password.as_str());
    if !entry.url.is_empty() {
        println!("{}      {}", style("URL:").bold(), entry.url);
    }
    if !entry.notes.is_empty() {
        println!("{}    {}", style("Notes:").bold(), entry.notes);
    }
    println!("{} {}", style("Category:").bold(), entry.category);
    println!(
        "{}  {}",
        style("Updated:").bold(),
        entry.updated_at.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
