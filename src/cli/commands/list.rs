//! `passvault list` — display entries in a table.

use crate::cli::output;
use crate::cli::{unlock_session, Cli};
use crate::errors::Result;
use crate::vault::EntryFilter;

/// Execute the `list` command.
pub fn execute(cli: &Cli, category: Option<&str>, search: Option<&str>) -> Result<()> {
    let (_settings, session) = unlock_session(cli)?;

    let filter = EntryFilter {
        category: category.map(str::to_string),
        search: search.map(str::to_string),
    };

    let entries = session.storage().list_entries(&filter)?;

    output::info(&format!("{} entry(s)", entries.len()));
    output::print_entries_table(&entries);

    Ok(())
}
