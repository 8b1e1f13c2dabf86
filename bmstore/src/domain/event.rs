// bmstore/src/domain/event.rs
use crate::domain::bookmark::Bookmark;
use std::fmt;

/// Change notifications published after a mutation succeeded.
///
/// Every typed event is followed by `StoreChanged`, the generic
/// "bookmarks changed, refresh and persist" broadcast. Batch deletes publish one
/// `BookmarkDeleted` per removed row and a single `StoreChanged` at the end.
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkEvent {
    BookmarkAdded(Bookmark),
    BookmarkDeleted(Bookmark),
    BookmarkEdited {
        before: Bookmark,
        after: Bookmark,
    },
    FolderAdded(String),
    SubfolderAdded(String),
    FolderDeleted(String),
    FolderRenamed {
        before: String,
        after: String,
    },
    BookmarkParentChanged {
        id: i32,
        title: String,
        url: String,
        icon: Vec<u8>,
        old_parent: String,
        new_parent: String,
    },
    FolderParentChanged {
        name: String,
        is_subfolder: bool,
    },
    StoreChanged,
}

impl BookmarkEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BookmarkEvent::BookmarkAdded(_) => "BookmarkAdded",
            BookmarkEvent::BookmarkDeleted(_) => "BookmarkDeleted",
            BookmarkEvent::BookmarkEdited { .. } => "BookmarkEdited",
            BookmarkEvent::FolderAdded(_) => "FolderAdded",
            BookmarkEvent::SubfolderAdded(_) => "SubfolderAdded",
            BookmarkEvent::FolderDeleted(_) => "FolderDeleted",
            BookmarkEvent::FolderRenamed { .. } => "FolderRenamed",
            BookmarkEvent::BookmarkParentChanged { .. } => "BookmarkParentChanged",
            BookmarkEvent::FolderParentChanged { .. } => "FolderParentChanged",
            BookmarkEvent::StoreChanged => "StoreChanged",
        }
    }
}

impl fmt::Display for BookmarkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkEvent::BookmarkAdded(bm) | BookmarkEvent::BookmarkDeleted(bm) => {
                write!(f, "{}: {}", self.name(), bm)
            }
            BookmarkEvent::BookmarkEdited { before, after } => {
                write!(f, "{}: {} -> {}", self.name(), before, after)
            }
            BookmarkEvent::FolderAdded(name)
            | BookmarkEvent::SubfolderAdded(name)
            | BookmarkEvent::FolderDeleted(name) => write!(f, "{}: {}", self.name(), name),
            BookmarkEvent::FolderRenamed { before, after } => {
                write!(f, "{}: {} -> {}", self.name(), before, after)
            }
            BookmarkEvent::BookmarkParentChanged {
                id,
                old_parent,
                new_parent,
                ..
            } => write!(f, "{}: {} {} -> {}", self.name(), id, old_parent, new_parent),
            BookmarkEvent::FolderParentChanged { name, is_subfolder } => {
                write!(f, "{}: {} (subfolder: {})", self.name(), name, is_subfolder)
            }
            BookmarkEvent::StoreChanged => write!(f, "{}", self.name()),
        }
    }
}

/// Receiver of change notifications. Publishing is fire-and-forget.
pub trait EventSink: Send + Sync + fmt::Debug {
    fn publish(&self, event: BookmarkEvent);
}
