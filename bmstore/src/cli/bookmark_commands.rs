// src/cli/bookmark_commands.rs
use crate::application::error::ApplicationError;
use crate::cli::display::{format_bookmark, show_bookmarks};
use crate::cli::error::{CliError, CliResult};
use crate::domain::error_context::CliErrorContext;
use crate::domain::icon::{Icon, IconCodec};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::repositories::sqlite::connection::init_pool;
use crate::util::helper::parse_ids;
use crossterm::style::Stylize;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

fn ids_from(ids: &str) -> CliResult<Vec<i32>> {
    let ids = parse_ids(ids).map_err(CliError::InvalidIdFormat)?;
    if ids.is_empty() {
        return Err(CliError::InvalidInput("No ids given".to_string()));
    }
    Ok(ids)
}

fn read_icon(services: &ServiceContainer, path: &Path) -> CliResult<Icon> {
    let data = fs::read(path).with_cli_context(|| format!("reading icon {}", path.display()))?;
    let icon = services
        .manager
        .codec()
        .decode(&data)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    Ok(icon)
}

fn label<'a>(services: &'a ServiceContainer) -> impl Fn(&str) -> String + 'a {
    move |name| services.manager.to_translated_folder(name)
}

#[instrument(level = "debug")]
pub fn create_db(path: &str) -> CliResult<()> {
    if Path::new(path).exists() {
        return Err(CliError::InvalidInput(format!(
            "Database already exists at: {}. Please choose a different path or delete the existing file.",
            path
        )));
    }

    eprintln!("Creating new database at: {}", path);
    // creates parent directories and runs all migrations
    init_pool(path, 1)?;
    eprintln!("{}", format!("Database created successfully at: {}", path).green());
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn add(
    services: &ServiceContainer,
    url: &str,
    title: &str,
    folder: Option<&str>,
    icon: Option<&Path>,
) -> CliResult<()> {
    let icon = icon.map(|path| read_icon(services, path)).transpose()?;
    let folder = match folder {
        Some(folder) if !folder.is_empty() => services.manager.from_translated_folder(folder),
        _ => services.manager.settings().last_folder(),
    };

    let bookmark = services
        .bookmark_service
        .save_bookmark(url, title, icon, &folder)?;
    eprintln!("Added bookmark: {}", bookmark.id.unwrap_or_default());
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn delete(services: &ServiceContainer, ids: &str) -> CliResult<()> {
    let ids = ids_from(ids)?;
    let deleted = services.bookmark_service.remove_bookmarks(&ids)?;
    for bookmark in &deleted {
        eprintln!("Deleted: {}", bookmark);
    }
    if deleted.len() < ids.len() {
        eprintln!(
            "{}",
            format!("{} of {} ids not found", ids.len() - deleted.len(), ids.len()).yellow()
        );
    }
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn edit(
    services: &ServiceContainer,
    id: i32,
    title: Option<&str>,
    url: Option<&str>,
    folder: Option<&str>,
) -> CliResult<()> {
    let (before, after) = services.bookmark_service.edit_bookmark(
        id,
        title.unwrap_or_default(),
        url.unwrap_or_default(),
        folder.unwrap_or_default(),
    )?;
    debug!("Edited {:?} -> {:?}", before, after);
    println!("{}", format_bookmark(&after, &label(services)(&after.folder)));
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn set_icon(services: &ServiceContainer, id: i32, path: &Path) -> CliResult<()> {
    let icon = read_icon(services, path)?;
    let (_, after) = services.bookmark_service.change_icon(id, icon)?;
    eprintln!(
        "Icon of {} set ({}x{})",
        id,
        after.icon.width(),
        after.icon.height()
    );
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn show(services: &ServiceContainer, ids: &str) -> CliResult<()> {
    let mut bookmarks = Vec::new();
    for id in ids_from(ids)? {
        match services.lookup_service.get_bookmark(id)? {
            Some(bookmark) => bookmarks.push(bookmark),
            None => eprintln!("{}", format!("Bookmark {} not found", id).yellow()),
        }
    }
    show_bookmarks(&bookmarks, label(services))?;
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn lookup(services: &ServiceContainer, url: &str) -> CliResult<()> {
    match services.lookup_service.get_bookmark_by_url(url)? {
        Some(bookmark) => {
            println!("{}", format_bookmark(&bookmark, &label(services)(&bookmark.folder)));
            Ok(())
        }
        None => Err(CliError::CommandFailed(format!("{} is not bookmarked", url))),
    }
}

#[instrument(skip(services), level = "debug")]
pub fn list(services: &ServiceContainer, folder: Option<&str>) -> CliResult<()> {
    let bookmarks = match folder {
        Some(folder) => services.lookup_service.get_folder_bookmarks(folder)?,
        None => services.lookup_service.get_all_bookmarks()?,
    };
    show_bookmarks(&bookmarks, label(services))?;
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn move_bookmark(services: &ServiceContainer, id: i32, folder: &str) -> CliResult<()> {
    let current = services
        .lookup_service
        .get_bookmark(id)?
        .ok_or(ApplicationError::BookmarkNotFound(id))?;
    let moved = services
        .reparent_service
        .change_bookmark_parent(id, folder, &current.folder)?;
    eprintln!(
        "Moved {} from {} to {}",
        id,
        label(services)(&current.folder),
        label(services)(&moved.folder)
    );
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn export(services: &ServiceContainer, path: &Path) -> CliResult<()> {
    services.export_service.export_to_html(path)?;
    eprintln!("Exported bookmarks to {}", path.display());
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn prefs(
    services: &ServiceContainer,
    show_most_visited: Option<bool>,
    show_only_icons_in_toolbar: Option<bool>,
    last_folder: Option<&str>,
) -> CliResult<()> {
    let settings = services.manager.settings();
    if let Some(value) = show_most_visited {
        settings.set_show_most_visited(value)?;
    }
    if let Some(value) = show_only_icons_in_toolbar {
        settings.set_show_only_icons_in_toolbar(value)?;
    }
    if let Some(folder) = last_folder {
        settings.set_last_folder(&services.manager.from_translated_folder(folder))?;
    }

    let current = settings.snapshot();
    println!("showMostVisited        = {}", current.show_most_visited);
    println!("showOnlyIconsInToolbar = {}", current.show_only_icons_in_toolbar);
    println!("lastFolder             = {}", current.last_folder);
    Ok(())
}
