// src/cli/folder_commands.rs
use crate::cli::args::FolderCommands;
use crate::cli::display::show_folders;
use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::di::ServiceContainer;
use crate::util::helper::confirm;
use crossterm::style::Stylize;
use tracing::instrument;

#[instrument(skip(services), level = "debug")]
pub fn execute(services: &ServiceContainer, command: FolderCommands) -> CliResult<()> {
    let folders = &services.folder_service;
    match command {
        FolderCommands::Create { name } => {
            folders.create_folder(&name)?;
            eprintln!("Created folder {}", name);
        }
        FolderCommands::CreateSub { name } => {
            folders.create_subfolder(&name)?;
            eprintln!("Created toolbar subfolder {}", name);
        }
        FolderCommands::Remove { name, yes } => {
            let count = services.lookup_service.get_folder_bookmarks(&name)?.len();
            if !yes
                && count > 0
                && !confirm(&format!("Delete folder {} with {} bookmarks?", name, count))
            {
                return Err(CliError::OperationAborted);
            }
            if folders.remove_folder(&name)? {
                eprintln!("Removed folder {} ({} bookmarks)", name, count);
            } else {
                eprintln!("{}", format!("Folder {} cannot be removed", name).yellow());
            }
        }
        FolderCommands::Rename { before, after } => {
            folders.rename_folder(&before, &after)?;
            eprintln!("Renamed folder {} to {}", before, after);
        }
        FolderCommands::SetParent { name, subfolder } => {
            if !services
                .reparent_service
                .change_folder_parent(&name, subfolder)?
            {
                return Err(CliError::InvalidInput("Folder name is empty".to_string()));
            }
            let place = if subfolder { "toolbar" } else { "top level" };
            eprintln!("Folder {} moved to {}", name, place);
        }
        FolderCommands::List => {
            let manager = &services.manager;
            show_folders(&folders.folders()?, |name| manager.to_translated_folder(name))?;
        }
    }
    Ok(())
}
