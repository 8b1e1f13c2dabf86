// bmstore/src/domain/folder.rs
use std::fmt;

pub const BOOKMARKS_MENU: &str = "bookmarksMenu";
pub const BOOKMARKS_TOOLBAR: &str = "bookmarksToolbar";
pub const UNSORTED: &str = "unsorted";

/// Built-in containers. They always exist and are never stored as folder rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedFolder {
    Menu,
    Toolbar,
    Unsorted,
}

impl FixedFolder {
    pub const ALL: [FixedFolder; 3] = [FixedFolder::Menu, FixedFolder::Toolbar, FixedFolder::Unsorted];

    pub fn canonical_name(self) -> &'static str {
        match self {
            FixedFolder::Menu => BOOKMARKS_MENU,
            FixedFolder::Toolbar => BOOKMARKS_TOOLBAR,
            FixedFolder::Unsorted => UNSORTED,
        }
    }

    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.canonical_name() == name)
    }

    /// Menu and toolbar survive folder removal; `unsorted` can be emptied by it.
    pub fn is_protected(self) -> bool {
        matches!(self, FixedFolder::Menu | FixedFolder::Toolbar)
    }
}

impl fmt::Display for FixedFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// Placement of a custom folder. Stored as `"yes"`/`"no"` in the `subfolder` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FolderKind {
    #[default]
    TopLevel,
    Subfolder,
}

impl FolderKind {
    pub fn from_flag(is_subfolder: bool) -> Self {
        if is_subfolder {
            FolderKind::Subfolder
        } else {
            FolderKind::TopLevel
        }
    }

    pub fn is_subfolder(self) -> bool {
        self == FolderKind::Subfolder
    }

    pub fn as_flag_str(self) -> &'static str {
        match self {
            FolderKind::TopLevel => "no",
            FolderKind::Subfolder => "yes",
        }
    }

    /// Anything other than `"yes"` reads as top level
    pub fn from_flag_str(value: &str) -> Self {
        if value == "yes" {
            FolderKind::Subfolder
        } else {
            FolderKind::TopLevel
        }
    }
}

/// A user-created folder row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub kind: FolderKind,
}

impl Folder {
    pub fn new<S: Into<String>>(name: S, kind: FolderKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_subfolder(&self) -> bool {
        self.kind.is_subfolder()
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (subfolder: {})", self.name, self.kind.as_flag_str())
    }
}

/// Maps fixed folders to their display labels.
///
/// Only the three fixed folders have labels; every other name passes through
/// `to_translated` and `from_translated` unchanged. Translated names belong to the
/// presentation side and never reach stored rows.
pub trait FolderTranslator: Send + Sync + fmt::Debug {
    fn label(&self, folder: FixedFolder) -> String;

    fn fixed_from_label(&self, label: &str) -> Option<FixedFolder> {
        FixedFolder::ALL
            .into_iter()
            .find(|folder| self.label(*folder) == label)
    }

    /// Resolve either a canonical name or a display label to a fixed folder
    fn resolve_fixed(&self, name: &str) -> Option<FixedFolder> {
        FixedFolder::from_canonical(name).or_else(|| self.fixed_from_label(name))
    }

    fn to_translated(&self, name: &str) -> String {
        match FixedFolder::from_canonical(name) {
            Some(folder) => self.label(folder),
            None => name.to_string(),
        }
    }

    fn from_translated(&self, name: &str) -> String {
        match self.fixed_from_label(name) {
            Some(folder) => folder.canonical_name().to_string(),
            None => name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishFolderTranslator;

impl FolderTranslator for EnglishFolderTranslator {
    fn label(&self, folder: FixedFolder) -> String {
        match folder {
            FixedFolder::Menu => "Bookmarks In Menu",
            FixedFolder::Toolbar => "Bookmarks In ToolBar",
            FixedFolder::Unsorted => "Unsorted Bookmarks",
        }
        .to_string()
    }
}
