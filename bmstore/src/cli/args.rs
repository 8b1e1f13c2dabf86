// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Bookmark store: folders, bookmarks and Netscape export on SQLite
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print the default configuration and exit
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new database
    CreateDb {
        /// Path of the database file to create
        path: String,
    },
    /// Add a bookmark
    Add {
        url: String,
        title: String,
        /// Target folder, defaults to the last used folder
        #[arg(short = 'f', long = "folder")]
        folder: Option<String>,
        /// PNG file used as icon
        #[arg(long = "icon", value_name = "PNG")]
        icon: Option<PathBuf>,
    },
    /// Delete bookmarks
    Delete {
        /// list of ids, separated by comma, no blanks
        ids: String,
    },
    /// Edit title, url or folder of a bookmark
    Edit {
        id: i32,
        #[arg(long = "title")]
        title: Option<String>,
        #[arg(long = "url")]
        url: Option<String>,
        #[arg(short = 'f', long = "folder")]
        folder: Option<String>,
    },
    /// Replace the icon of a bookmark
    SetIcon {
        id: i32,
        /// PNG file
        icon: PathBuf,
    },
    /// Show bookmarks
    Show {
        /// list of ids, separated by comma, no blanks
        ids: String,
    },
    /// Find the preferred bookmark for a url
    Lookup { url: String },
    /// List bookmarks, all or of one folder
    List {
        /// Folder name (canonical or display label)
        folder: Option<String>,
    },
    /// Move a bookmark to another folder
    Move { id: i32, folder: String },
    /// Manage folders
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },
    /// Export all bookmarks as Netscape bookmark HTML
    Export { path: PathBuf },
    /// Show or change preferences
    Prefs {
        #[arg(long = "show-most-visited")]
        show_most_visited: Option<bool>,
        #[arg(long = "icons-only")]
        show_only_icons_in_toolbar: Option<bool>,
        #[arg(long = "last-folder")]
        last_folder: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Create a top-level folder
    Create { name: String },
    /// Create a toolbar subfolder
    CreateSub { name: String },
    /// Remove a folder with all its bookmarks
    Remove {
        name: String,
        /// Do not ask for confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Rename a folder
    Rename { before: String, after: String },
    /// Move a folder in or out of the toolbar
    SetParent {
        name: String,
        #[arg(long = "subfolder")]
        subfolder: bool,
    },
    /// List all folders
    List,
}
