use clap::Parser;
use passvault::cli::commands::edit::EditArgs;
use passvault::cli::{CategoryAction, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref title,
            ref username,
            ref url,
            ref notes,
            ref category,
        } => passvault::cli::commands::add::execute(
            &cli,
            title,
            username,
            url,
            notes,
            category.as_deref(),
        ),
        Commands::Show { id } => passvault::cli::commands::show::execute(&cli, id),
        Commands::List {
            ref category,
            ref search,
        } => passvault::cli::commands::list::execute(&cli, category.as_deref(), search.as_deref()),
        Commands::Edit {
            id,
            ref title,
            ref username,
            ref url,
            ref notes,
            ref category,
            password,
        } => passvault::cli::commands::edit::execute(
            &cli,
            id,
            &EditArgs {
                title: title.as_deref(),
                username: username.as_deref(),
                url: url.as_deref(),
                notes: notes.as_deref(),
                category: category.as_deref(),
                password,
            },
        ),
        Commands::Delete { id, force } => passvault::cli::commands::delete::execute(&cli, id, force),
        Commands::Category { ref action } => match action {
            CategoryAction::List => passvault::cli::commands::category::execute_list(&cli),
            CategoryAction::Add { ref name } => {
                passvault::cli::commands::category::execute_add(&cli, name)
            }
        },
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
