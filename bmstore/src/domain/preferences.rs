// bmstore/src/domain/preferences.rs
use crate::domain::error::DomainResult;
use crate::domain::folder::UNSORTED;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// User preferences of the bookmarks group.
///
/// Key names follow the persisted `Bookmarks` group. Older files wrote the last
/// folder as `LastFolder`; it is still accepted on read, writes use `lastFolder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "showMostVisited", default = "default_show_most_visited")]
    pub show_most_visited: bool,

    #[serde(rename = "showOnlyIconsInToolbar", default)]
    pub show_only_icons_in_toolbar: bool,

    #[serde(
        rename = "lastFolder",
        alias = "LastFolder",
        default = "default_last_folder"
    )]
    pub last_folder: String,
}

fn default_show_most_visited() -> bool {
    true
}

fn default_last_folder() -> String {
    UNSORTED.to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_most_visited: default_show_most_visited(),
            show_only_icons_in_toolbar: false,
            last_folder: default_last_folder(),
        }
    }
}

/// Persistence for `Preferences`
pub trait PreferencesStore: Send + Sync + Debug {
    fn load(&self) -> DomainResult<Preferences>;

    fn save(&self, preferences: &Preferences) -> DomainResult<()>;
}
