//! `mobiles` table DDL and CRUD against a single SQLite file.
//!
//! Every operation opens its own connection and closes it before returning, on success and on
//! failure. There is no pool and no handle held between requests; concurrent access is left to
//! SQLite's own locking.

use crate::error::AppError;
use crate::model::{Mobile, MobileInput};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};

const CREATE_MOBILES: &str = r#"
    CREATE TABLE IF NOT EXISTS mobiles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price REAL,
        ram TEXT,
        storage TEXT
    )
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, price, ram, storage FROM mobiles";
const SELECT_BY_ID: &str = "SELECT id, name, price, ram, storage FROM mobiles WHERE id = ?";

/// Handle to the database file. Cheap to clone; holds connect options only, never a connection.
#[derive(Clone, Debug)]
pub struct MobileStore {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl MobileStore {
    /// Store backed by the file at `path`. The file is created on first connect if missing.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        MobileStore { path, options }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    async fn open(&self) -> Result<SqliteConnection, AppError> {
        Ok(self.options.connect().await?)
    }

    /// Create the `mobiles` table if it does not exist. Safe to call on every start.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        let mut conn = self.open().await?;
        let result = sqlx::query(CREATE_MOBILES).execute(&mut conn).await;
        release(conn).await;
        result?;
        tracing::info!(path = %self.path.display(), "mobiles schema ready");
        Ok(())
    }

    /// Open and close one connection, running a trivial query. Used by readiness checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.open().await?;
        let result = sqlx::query("SELECT 1").execute(&mut conn).await;
        release(conn).await;
        result?;
        Ok(())
    }

    /// All rows in whatever order SQLite returns them. Empty table yields an empty vec.
    pub async fn list_all(&self) -> Result<Vec<Mobile>, AppError> {
        let mut conn = self.open().await?;
        let result = sqlx::query_as::<_, Mobile>(SELECT_COLUMNS)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;
        Ok(result?)
    }

    /// One row by primary key; `None` when no row matches.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Mobile>, AppError> {
        let mut conn = self.open().await?;
        let result = sqlx::query_as::<_, Mobile>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;
        Ok(result?)
    }

    /// Insert one row; absent optionals are stored as NULL. Returns the id SQLite assigned.
    pub async fn create(&self, input: &MobileInput) -> Result<i64, AppError> {
        let mut conn = self.open().await?;
        let result = sqlx::query("INSERT INTO mobiles (name, price, ram, storage) VALUES (?, ?, ?, ?)")
            .bind(&input.name)
            .bind(input.price)
            .bind(input.ram.as_deref())
            .bind(input.storage.as_deref())
            .execute(&mut conn)
            .await;
        release(conn).await;
        let id = result?.last_insert_rowid();
        tracing::debug!(id, "mobile inserted");
        Ok(id)
    }

    /// Overwrite all four scalar columns. Returns rows affected (0 or 1); 0 is not an error here.
    pub async fn update(&self, id: i64, input: &MobileInput) -> Result<u64, AppError> {
        let mut conn = self.open().await?;
        let result = sqlx::query("UPDATE mobiles SET name = ?, price = ?, ram = ?, storage = ? WHERE id = ?")
            .bind(&input.name)
            .bind(input.price)
            .bind(input.ram.as_deref())
            .bind(input.storage.as_deref())
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;
        let affected = result?.rows_affected();
        tracing::debug!(id, affected, "mobile update");
        Ok(affected)
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = self.open().await?;
        let result = sqlx::query("DELETE FROM mobiles WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;
        Ok(result?.rows_affected() > 0)
    }
}

/// Close a connection at the end of an operation. A close failure is logged and never replaces
/// the operation's own result.
async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close sqlite connection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (tempfile::TempDir, MobileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = MobileStore::new(dir.path().join("mobiles.db"));
        store.init_schema().await.unwrap();
        (dir, store)
    }

    fn pixel() -> MobileInput {
        MobileInput {
            name: "Pixel".into(),
            price: Some(699.99),
            ram: Some("8GB".into()),
            storage: Some("128GB".into()),
        }
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let (_dir, store) = test_store().await;
        store.init_schema().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (_dir, store) = test_store().await;
        let first = store.create(&pixel()).await.unwrap();
        let input = MobileInput {
            name: "Galaxy".into(),
            price: Some(0.0),
            ram: Some(String::new()),
            storage: None,
        };
        let second = store.create(&input).await.unwrap();
        assert_ne!(first, second);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        let found: Vec<_> = all.iter().filter(|m| m.id == second).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(*found[0], Mobile::from_input(second, input));
    }

    #[tokio::test]
    async fn test_nulls_round_trip() {
        let (_dir, store) = test_store().await;
        let id = store
            .create(&MobileInput {
                name: "X".into(),
                price: None,
                ram: None,
                storage: None,
            })
            .await
            .unwrap();
        let m = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(m.name, "X");
        assert_eq!(m.price, None);
        assert_eq!(m.ram, None);
        assert_eq!(m.storage, None);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (_dir, store) = test_store().await;
        assert!(store.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let (_dir, store) = test_store().await;
        let id = store.create(&pixel()).await.unwrap();
        let candidate = MobileInput {
            name: "Pixel 2".into(),
            price: None,
            ram: Some("12GB".into()),
            storage: None,
        };
        assert_eq!(store.update(id, &candidate).await.unwrap(), 1);
        let m = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(m, Mobile::from_input(id, candidate));
    }

    #[tokio::test]
    async fn test_update_missing_affects_nothing() {
        let (_dir, store) = test_store().await;
        assert_eq!(store.update(7, &pixel()).await.unwrap(), 0);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (_dir, store) = test_store().await;
        let id = store.create(&pixel()).await.unwrap();
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert!(store.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let (_dir, store) = test_store().await;
        store.create(&pixel()).await.unwrap();
        let last = store.create(&pixel()).await.unwrap();
        assert!(store.delete(last).await.unwrap());
        let next = store.create(&pixel()).await.unwrap();
        assert!(next > last);
    }

    #[tokio::test]
    async fn test_storage_failure_is_db_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path cannot be opened as a database file.
        let store = MobileStore::new(dir.path());
        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
    }
}
