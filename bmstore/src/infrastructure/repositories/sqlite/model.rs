use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use std::fmt;

use crate::infrastructure::repositories::sqlite::schema::{bookmarks, folders};

#[derive(Queryable, Identifiable, Clone)]
#[diesel(table_name = bookmarks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbBookmark {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub folder: String,
    pub icon: Option<Vec<u8>>,
}

impl fmt::Display for DbBookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, url: {}, title: {}, folder: {}, icon: {}",
            self.id,
            self.url,
            self.title,
            self.folder,
            self.icon
                .as_ref()
                .map_or(String::from("None"), |v| format!("{} bytes", v.len()))
        )
    }
}

impl fmt::Debug for DbBookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use the same format as Display
        write!(f, "{}", self)
    }
}

/// Changes for updating a bookmark; the icon has its own update path
#[derive(AsChangeset, Debug)]
#[diesel(table_name = bookmarks)]
pub struct DbBookmarkChanges {
    pub url: String,
    pub title: String,
    pub folder: String,
}

/// New bookmark for insertion
#[derive(Insertable)]
#[diesel(table_name = bookmarks)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub folder: String,
    pub icon: Option<Vec<u8>>,
}

impl fmt::Display for NewBookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "url: {}, title: {}, folder: {}, icon: {}",
            self.url,
            self.title,
            self.folder,
            self.icon
                .as_ref()
                .map_or(String::from("None"), |v| format!("{} bytes", v.len()))
        )
    }
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = folders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbFolder {
    pub id: i32,
    pub name: String,
    pub subfolder: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = folders)]
pub struct NewFolder {
    pub name: String,
    pub subfolder: String,
}
