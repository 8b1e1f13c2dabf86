// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

pub mod args;
pub mod bookmark_commands;
pub mod display;
pub mod error;
pub mod folder_commands;

/// Run the parsed command. The database is only opened for commands that need it.
pub fn execute_command(cli: Cli, settings: &Settings) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }

    let Some(command) = cli.command else {
        return Ok(());
    };
    if let Commands::CreateDb { path } = &command {
        return bookmark_commands::create_db(path);
    }

    let services = ServiceContainer::new(settings)?;
    execute_command_with_services(command, &services)
}

pub fn execute_command_with_services(
    command: Commands,
    services: &ServiceContainer,
) -> CliResult<()> {
    match command {
        Commands::CreateDb { path } => bookmark_commands::create_db(&path),
        Commands::Add {
            url,
            title,
            folder,
            icon,
        } => bookmark_commands::add(services, &url, &title, folder.as_deref(), icon.as_deref()),
        Commands::Delete { ids } => bookmark_commands::delete(services, &ids),
        Commands::Edit {
            id,
            title,
            url,
            folder,
        } => bookmark_commands::edit(
            services,
            id,
            title.as_deref(),
            url.as_deref(),
            folder.as_deref(),
        ),
        Commands::SetIcon { id, icon } => bookmark_commands::set_icon(services, id, &icon),
        Commands::Show { ids } => bookmark_commands::show(services, &ids),
        Commands::Lookup { url } => bookmark_commands::lookup(services, &url),
        Commands::List { folder } => bookmark_commands::list(services, folder.as_deref()),
        Commands::Move { id, folder } => bookmark_commands::move_bookmark(services, id, &folder),
        Commands::Folder { command } => folder_commands::execute(services, command),
        Commands::Export { path } => bookmark_commands::export(services, &path),
        Commands::Prefs {
            show_most_visited,
            show_only_icons_in_toolbar,
            last_folder,
        } => bookmark_commands::prefs(
            services,
            show_most_visited,
            show_only_icons_in_toolbar,
            last_folder.as_deref(),
        ),
    }
}
