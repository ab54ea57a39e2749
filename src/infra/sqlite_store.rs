//! Generic SQLite-backed [`Repository`].
//!
//! `SqliteStore<T>` owns a single connection and maps rows of one table to
//! `T` through [`SqlEntity`]. Every statement is derived once from the
//! entity's table description when the store is built.

use std::marker::PhantomData;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params_from_iter, types::Value};
use tracing::{debug, warn};

use crate::{
    domain::ports::repository::{Identifiable, Repository},
    error::{AppError, StoreError, StoreResult},
};

/// Row mapping for an entity stored in a single table.
///
/// Rows are read as `SELECT id, COLUMNS...`, so `from_row` finds the id at
/// index 0 and the mutable columns after it, in `COLUMNS` order.
pub trait SqlEntity: Identifiable + Sized {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    const UNIQUE_COLUMN: &'static str;
    /// Mutable columns, excluding the id.
    const COLUMNS: &'static [&'static str];
    /// Idempotent DDL run whenever a store is opened.
    const SCHEMA: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
    /// Values for `COLUMNS`, in the same order.
    fn to_values(&self) -> Vec<Value>;
    fn assign_id(&mut self, id: i64);
}

struct Statements {
    select_by_id: String,
    select_all: String,
    select_by_unique: String,
    insert: String,
    select_inserted_id: String,
    update: String,
    delete: String,
    exists: String,
}

impl Statements {
    fn for_entity<T: SqlEntity>() -> Self {
        let columns = T::COLUMNS.join(", ");
        let select = format!("SELECT {}, {} FROM {}", T::ID_COLUMN, columns, T::TABLE);
        let placeholders = (1..=T::COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_param = T::COLUMNS.len() + 1;

        Self {
            select_by_id: format!("{select} WHERE {} = ?1", T::ID_COLUMN),
            select_by_unique: format!("{select} WHERE {} = ?1", T::UNIQUE_COLUMN),
            select_all: select,
            insert: format!(
                "INSERT INTO {} ({columns}) VALUES ({placeholders})",
                T::TABLE
            ),
            select_inserted_id: format!(
                "SELECT {} FROM {} WHERE rowid = last_insert_rowid()",
                T::ID_COLUMN,
                T::TABLE
            ),
            update: format!(
                "UPDATE {} SET {assignments} WHERE {} = ?{id_param}",
                T::TABLE,
                T::ID_COLUMN
            ),
            delete: format!("DELETE FROM {} WHERE {} = ?1", T::TABLE, T::ID_COLUMN),
            exists: format!("SELECT EXISTS(SELECT 1 FROM {})", T::TABLE),
        }
    }
}

/// Exclusive owner of one SQLite connection. Not `Clone`: moving the store
/// moves the connection, dropping it closes the connection.
pub struct SqliteStore<T: SqlEntity> {
    conn: Connection,
    sql: Statements,
    _entity: PhantomData<T>,
}

impl<T: SqlEntity> SqliteStore<T> {
    /// Opens or creates the database file and ensures the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        debug!("opening {} store at {:?}", T::TABLE, path);
        Self::from_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self, AppError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, AppError> {
        conn.execute_batch(T::SCHEMA)?;
        Ok(Self {
            conn,
            sql: Statements::for_entity::<T>(),
            _entity: PhantomData,
        })
    }

    fn query_one(&self, sql: &str, value: Value) -> StoreResult<T> {
        self.conn
            .query_row(sql, [value], |row| T::from_row(row))
            .optional()
            .map_err(|e| {
                warn!("{}: select failed: {e}", T::TABLE);
                StoreError::SelectFailure
            })?
            .ok_or(StoreError::SelectFailure)
    }

    fn insert_returning_id(&self, entity: &T) -> StoreResult<i64> {
        let tx = self.conn.unchecked_transaction().map_err(|e| {
            warn!("{}: unable to begin transaction: {e}", T::TABLE);
            StoreError::InsertFailure
        })?;

        tx.execute(&self.sql.insert, params_from_iter(entity.to_values()))
            .map_err(|e| {
                warn!("{}: insert failed: {e}", T::TABLE);
                StoreError::InsertFailure
            })?;

        let id: i64 = tx
            .query_row(&self.sql.select_inserted_id, [], |row| row.get(0))
            .map_err(|e| {
                warn!("{}: unable to fetch generated id: {e}", T::TABLE);
                StoreError::SelectFailure
            })?;

        tx.commit().map_err(|e| {
            warn!("{}: commit failed: {e}", T::TABLE);
            StoreError::InsertFailure
        })?;
        Ok(id)
    }
}

impl<T: SqlEntity> Repository<T> for SqliteStore<T> {
    fn get_by_id(&self, id: i64) -> StoreResult<T> {
        self.query_one(&self.sql.select_by_id, Value::Integer(id))
    }

    fn get_all(&self) -> StoreResult<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare(&self.sql.select_all)
            .map_err(|_| StoreError::SelectFailure)?;
        let rows = stmt
            .query_map([], |row| T::from_row(row))
            .map_err(|_| StoreError::SelectFailure)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| StoreError::SelectFailure)?;
        Ok(rows)
    }

    fn add(&self, entity: &mut T) -> StoreResult<()> {
        let id = self.insert_returning_id(entity)?;
        entity.assign_id(id);
        debug!("{}: inserted row {id}", T::TABLE);
        Ok(())
    }

    fn update(&self, entity: &T) -> StoreResult<()> {
        let id = entity.id().ok_or(StoreError::UpdateFailure)?;
        let mut values = entity.to_values();
        values.push(Value::Integer(id));

        let changed = self
            .conn
            .execute(&self.sql.update, params_from_iter(values))
            .map_err(|e| {
                warn!("{}: update failed: {e}", T::TABLE);
                StoreError::UpdateFailure
            })?;
        if changed == 0 {
            warn!("{}: update matched no row for id {id}", T::TABLE);
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute(&self.sql.delete, [id])
            .map_err(|e| {
                warn!("{}: delete failed: {e}", T::TABLE);
                StoreError::DeleteFailure
            })?;
        if changed == 0 {
            warn!("{}: delete matched no row for id {id}", T::TABLE);
        }
        Ok(())
    }

    fn find_by_unique_column(&self, value: &str) -> StoreResult<T> {
        self.query_one(&self.sql.select_by_unique, Value::Text(value.to_string()))
    }

    fn is_empty(&self) -> bool {
        self.conn
            .query_row(&self.sql.exists, [], |row| row.get::<_, bool>(0))
            .map(|exists| !exists)
            .unwrap_or(true)
    }
}
