//! `passvault category` — list and add categories.

use crate::cli::output;
use crate::cli::{unlock_session, Cli};
use crate::errors::Result;

/// Execute `category list`.
pub fn execute_list(cli: &Cli) -> Result<()> {
    let (_settings, session) = unlock_session(cli)?;

    let categories = session.storage().list_categories()?;
    output::print_categories_table(&categories);

    Ok(())
}

/// Execute `category add`.
pub fn execute_add(cli: &Cli, name: &str) -> Result<()> {
    let (_settings, session) = unlock_session(cli)?;

    session.storage().add_category(name)?;
    output::success(&format!("Category '{name}' added"));

    Ok(())
}
