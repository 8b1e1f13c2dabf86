// src/infrastructure/repositories/sqlite/repository

use diesel::prelude::*;
use diesel::sql_types::Integer;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::connection::{ConnectionPool, PooledConnection};
use super::error::{SqliteRepositoryError, SqliteResult};
use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainError;
use crate::domain::folder::{Folder, FolderKind, UNSORTED};
use crate::domain::icon::{Icon, IconCodec};
use crate::domain::repositories::repository::{BookmarkRepository, FolderRepository};
use crate::infrastructure::repositories::sqlite::model::{
    DbBookmark, DbBookmarkChanges, DbFolder, NewBookmark, NewFolder,
};
use crate::infrastructure::repositories::sqlite::schema::{bookmarks, folders};

/// SQLite store for both the `bookmarks` and the `folders` table.
///
/// Icons are kept as blobs; the codec decodes them on read and encodes them on
/// write.
#[derive(Clone, Debug)]
pub struct SqliteBookmarkRepository {
    pool: ConnectionPool,
    codec: Arc<dyn IconCodec>,
}

impl SqliteBookmarkRepository {
    /// Create a new SQLite repository with the provided connection pool
    pub fn new(pool: ConnectionPool, codec: Arc<dyn IconCodec>) -> Self {
        Self { pool, codec }
    }

    /// Create a new SQLite repository with the provided database URL
    #[instrument(skip_all, level = "debug")]
    pub fn from_url(
        database_url: &str,
        pool_size: u32,
        codec: Arc<dyn IconCodec>,
    ) -> SqliteResult<Self> {
        let pool = super::connection::init_pool(database_url, pool_size)?;
        Ok(Self { pool, codec })
    }

    /// Get a connection from the pool
    #[instrument(skip_all, level = "trace")]
    pub fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }

    /// Names of all folders flagged as subfolder
    fn load_subfolder_names(conn: &mut SqliteConnection) -> SqliteResult<HashSet<String>> {
        let names = folders::table
            .filter(folders::subfolder.eq(FolderKind::Subfolder.as_flag_str()))
            .select(folders::name)
            .load::<String>(conn)?;
        Ok(names.into_iter().collect())
    }

    /// Convert a database model to a domain entity
    fn to_domain_model(
        &self,
        db_bookmark: DbBookmark,
        subfolders: &HashSet<String>,
    ) -> SqliteResult<Bookmark> {
        let id = db_bookmark.id;
        let icon = self.codec.decode_or_placeholder(db_bookmark.icon.as_deref());
        let in_subfolder = subfolders.contains(&db_bookmark.folder);
        Bookmark::from_storage(
            id,
            db_bookmark.url,
            db_bookmark.title,
            db_bookmark.folder,
            icon,
            in_subfolder,
        )
        .map_err(|e| {
            SqliteRepositoryError::ConversionError(format!(
                "Failed to create domain bookmark from DB model for ID {}: {}",
                id, e
            ))
        })
    }

    fn to_domain_models(
        &self,
        conn: &mut SqliteConnection,
        rows: Vec<DbBookmark>,
    ) -> SqliteResult<Vec<Bookmark>> {
        let subfolders = Self::load_subfolder_names(conn)?;
        rows.into_iter()
            .map(|row| self.to_domain_model(row, &subfolders))
            .collect()
    }

    /// Delete rows one by one, skipping ids that are missing or fail to delete.
    ///
    /// Must run inside a transaction. Snapshots are taken before each delete.
    fn delete_rows(
        &self,
        conn: &mut SqliteConnection,
        ids: &[i32],
        subfolders: &HashSet<String>,
    ) -> Vec<Bookmark> {
        let mut deleted = Vec::with_capacity(ids.len());
        for &id in ids {
            let row = match bookmarks::table
                .filter(bookmarks::id.eq(id))
                .first::<DbBookmark>(conn)
                .optional()
            {
                Ok(Some(row)) => row,
                Ok(None) => {
                    debug!("Skipping missing bookmark {}", id);
                    continue;
                }
                Err(e) => {
                    warn!("Skipping bookmark {}, read failed: {}", id, e);
                    continue;
                }
            };
            let snapshot = match self.to_domain_model(row, subfolders) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Skipping bookmark {}: {}", id, e);
                    continue;
                }
            };

            match diesel::delete(bookmarks::table.filter(bookmarks::id.eq(id))).execute(conn) {
                Ok(n) if n > 0 => deleted.push(snapshot),
                Ok(_) => debug!("Bookmark {} vanished before delete", id),
                Err(e) => warn!("Skipping bookmark {}, delete failed: {}", id, e),
            }
        }
        deleted
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    #[instrument(skip_all, level = "debug")]
    fn get_by_id(&self, id: i32) -> Result<Option<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = bookmarks::table
            .filter(bookmarks::id.eq(id))
            .first::<DbBookmark>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        match result {
            Some(db_bookmark) => {
                let subfolders = Self::load_subfolder_names(&mut conn)?;
                Ok(Some(self.to_domain_model(db_bookmark, &subfolders)?))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip_all, level = "debug", fields(url = %url, folder = ?folder))]
    fn get_first_by_url(
        &self,
        url: &str,
        folder: Option<&str>,
    ) -> Result<Option<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let mut query = bookmarks::table
            .filter(bookmarks::url.eq(url))
            .order(bookmarks::id.asc())
            .into_boxed();
        if let Some(folder) = folder {
            query = query.filter(bookmarks::folder.eq(folder));
        }

        let result = query
            .first::<DbBookmark>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        match result {
            Some(db_bookmark) => {
                let subfolders = Self::load_subfolder_names(&mut conn)?;
                Ok(Some(self.to_domain_model(db_bookmark, &subfolders)?))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip_all, level = "debug", fields(folder = %folder))]
    fn get_by_folder(&self, folder: &str) -> Result<Vec<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let rows = bookmarks::table
            .filter(bookmarks::folder.eq(folder))
            .order(bookmarks::id.asc())
            .load::<DbBookmark>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(self.to_domain_models(&mut conn, rows)?)
    }

    #[instrument(skip_all, level = "debug")]
    fn get_unfiled(&self) -> Result<Vec<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let rows = bookmarks::table
            .filter(bookmarks::folder.eq("").or(bookmarks::folder.eq(UNSORTED)))
            .order(bookmarks::id.asc())
            .load::<DbBookmark>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(self.to_domain_models(&mut conn, rows)?)
    }

    #[instrument(skip_all, level = "debug")]
    fn get_all(&self) -> Result<Vec<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let rows = bookmarks::table
            .order(bookmarks::id.asc())
            .load::<DbBookmark>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(self.to_domain_models(&mut conn, rows)?)
    }

    #[instrument(skip_all, level = "debug", fields(url = %url))]
    fn exists_by_url(&self, url: &str) -> Result<bool, DomainError> {
        let mut conn = self.get_connection()?;

        let count: i64 = bookmarks::table
            .filter(bookmarks::url.eq(url))
            .count()
            .get_result(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(count > 0)
    }

    #[instrument(skip_all, level = "debug")]
    fn add(&self, bookmark: &mut Bookmark) -> Result<(), DomainError> {
        let icon = self.codec.encode_or_placeholder(&bookmark.icon)?;
        let mut conn = self.get_connection()?;

        let new_bookmark = NewBookmark {
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            folder: bookmark.folder.clone(),
            icon: Some(icon),
        };
        debug!("Inserting bookmark: {}", new_bookmark);

        let id = conn
            .transaction::<i32, diesel::result::Error, _>(|conn| {
                let result = diesel::insert_into(bookmarks::table)
                    .values(&new_bookmark)
                    .execute(conn)?;

                if result == 0 {
                    return Err(diesel::result::Error::NotFound);
                }

                diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                    .get_result::<i32>(conn)
            })
            .map_err(SqliteRepositoryError::DatabaseError)?;

        bookmark.set_id(id);
        Ok(())
    }

    #[instrument(skip_all, level = "debug")]
    fn update(&self, bookmark: &Bookmark) -> Result<bool, DomainError> {
        let id = bookmark.id.ok_or_else(|| {
            SqliteRepositoryError::OperationFailed("Bookmark has no ID".to_string())
        })?;
        let mut conn = self.get_connection()?;

        let changes = DbBookmarkChanges {
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            folder: bookmark.folder.clone(),
        };

        let result = diesel::update(bookmarks::table.filter(bookmarks::id.eq(id)))
            .set(&changes)
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result > 0)
    }

    #[instrument(skip_all, level = "debug", fields(id = id))]
    fn update_icon(&self, id: i32, icon: &Icon) -> Result<bool, DomainError> {
        let blob = self.codec.encode_or_placeholder(icon)?;
        let mut conn = self.get_connection()?;

        let result = diesel::update(bookmarks::table.filter(bookmarks::id.eq(id)))
            .set(bookmarks::icon.eq(Some(blob)))
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result > 0)
    }

    #[instrument(skip_all, level = "debug", fields(id = id))]
    fn get_icon_blob(&self, id: i32) -> Result<Option<Vec<u8>>, DomainError> {
        let mut conn = self.get_connection()?;

        let blob = bookmarks::table
            .filter(bookmarks::id.eq(id))
            .select(bookmarks::icon)
            .first::<Option<Vec<u8>>>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(blob.flatten())
    }

    #[instrument(skip_all, level = "debug", fields(id = id, folder = %folder))]
    fn update_folder(&self, id: i32, folder: &str) -> Result<bool, DomainError> {
        let mut conn = self.get_connection()?;

        let result = diesel::update(bookmarks::table.filter(bookmarks::id.eq(id)))
            .set(bookmarks::folder.eq(folder))
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result > 0)
    }

    #[instrument(skip_all, level = "debug", fields(ids = ?ids))]
    fn delete_many(&self, ids: &[i32]) -> Result<Vec<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let deleted = conn.transaction::<_, SqliteRepositoryError, _>(|conn| {
            let subfolders = Self::load_subfolder_names(conn)?;
            Ok(self.delete_rows(conn, ids, &subfolders))
        })?;

        debug!("Deleted {} of {} bookmarks", deleted.len(), ids.len());
        Ok(deleted)
    }

    #[instrument(skip_all, level = "trace")]
    fn count(&self) -> Result<usize, DomainError> {
        let mut conn = self.get_connection()?;

        let count: i64 = bookmarks::table
            .count()
            .get_result(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(count as usize)
    }
}

impl FolderRepository for SqliteBookmarkRepository {
    #[instrument(skip_all, level = "trace", fields(name = %name))]
    fn folder_exists(&self, name: &str) -> Result<bool, DomainError> {
        let mut conn = self.get_connection()?;

        let count: i64 = folders::table
            .filter(folders::name.eq(name))
            .count()
            .get_result(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(count > 0)
    }

    #[instrument(skip_all, level = "trace", fields(name = %name))]
    fn get_folder(&self, name: &str) -> Result<Option<Folder>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = folders::table
            .filter(folders::name.eq(name))
            .first::<DbFolder>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result.map(|f| Folder::new(f.name, FolderKind::from_flag_str(&f.subfolder))))
    }

    #[instrument(skip_all, level = "debug")]
    fn get_all_folders(&self) -> Result<Vec<Folder>, DomainError> {
        let mut conn = self.get_connection()?;

        let rows = folders::table
            .order(folders::id.asc())
            .load::<DbFolder>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(rows
            .into_iter()
            .map(|f| Folder::new(f.name, FolderKind::from_flag_str(&f.subfolder)))
            .collect())
    }

    #[instrument(skip_all, level = "debug", fields(folder = %folder))]
    fn add_folder(&self, folder: &Folder) -> Result<(), DomainError> {
        let mut conn = self.get_connection()?;

        let new_folder = NewFolder {
            name: folder.name.clone(),
            subfolder: folder.kind.as_flag_str().to_string(),
        };

        diesel::insert_into(folders::table)
            .values(&new_folder)
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(())
    }

    #[instrument(skip_all, level = "debug", fields(name = %name))]
    fn delete_folder_cascade(&self, name: &str) -> Result<Vec<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let deleted = conn.transaction::<_, SqliteRepositoryError, _>(|conn| {
            let subfolders = Self::load_subfolder_names(conn)?;
            let ids = bookmarks::table
                .filter(bookmarks::folder.eq(name))
                .order(bookmarks::id.asc())
                .select(bookmarks::id)
                .load::<i32>(conn)?;

            let deleted = self.delete_rows(conn, &ids, &subfolders);

            diesel::delete(folders::table.filter(folders::name.eq(name))).execute(conn)?;
            Ok(deleted)
        })?;

        debug!("Folder {} removed with {} bookmarks", name, deleted.len());
        Ok(deleted)
    }

    #[instrument(skip_all, level = "debug", fields(before = %before, after = %after))]
    fn rename_folder(&self, before: &str, after: &str) -> Result<usize, DomainError> {
        let mut conn = self.get_connection()?;

        let moved = conn.transaction::<_, SqliteRepositoryError, _>(|conn| {
            diesel::update(folders::table.filter(folders::name.eq(before)))
                .set(folders::name.eq(after))
                .execute(conn)?;

            let moved = diesel::update(bookmarks::table.filter(bookmarks::folder.eq(before)))
                .set(bookmarks::folder.eq(after))
                .execute(conn)?;
            Ok(moved)
        })?;

        Ok(moved)
    }

    #[instrument(skip_all, level = "debug", fields(name = %name, kind = ?kind))]
    fn set_folder_kind(&self, name: &str, kind: FolderKind) -> Result<bool, DomainError> {
        let mut conn = self.get_connection()?;

        let result = diesel::update(folders::table.filter(folders::name.eq(name)))
            .set(folders::subfolder.eq(kind.as_flag_str()))
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result > 0)
    }
}
