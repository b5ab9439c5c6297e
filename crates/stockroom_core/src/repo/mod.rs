//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define the parametric store capability set shared by every entity.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - `save` is an upsert: entities without an id are inserted and returned
//!   with the store-assigned id; entities with an id are written in place.
//! - `find_all` enumerates rows in insertion order.
//! - Implementations verify schema readiness at construction instead of
//!   failing on first use.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_repo;
pub mod category_repo;
pub mod supplier_order_repo;
pub mod supplier_repo;

pub use article_repo::{ArticleRepository, SqliteArticleRepository};
pub use category_repo::{CategoryDeleteOutcome, CategoryRepository, SqliteCategoryRepository};
pub use supplier_order_repo::{SqliteSupplierOrderRepository, SupplierOrderRepository};
pub use supplier_repo::{SqliteSupplierRepository, SupplierDeleteOutcome, SupplierRepository};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Capability set every entity store provides.
///
/// Entity-specific finder traits extend this with their own read accessors.
pub trait Repository {
    type Entity;
    type Id;

    /// Insert-or-update. Entities without an id are inserted; the returned
    /// entity always carries the store-assigned identity.
    fn save(&self, entity: &Self::Entity) -> RepoResult<Self::Entity>;
    fn find_by_id(&self, id: Self::Id) -> RepoResult<Option<Self::Entity>>;
    /// All rows in insertion order.
    fn find_all(&self) -> RepoResult<Vec<Self::Entity>>;
    /// Deleting an id with no row is a silent no-op.
    fn delete_by_id(&self, id: Self::Id) -> RepoResult<()>;
}

/// Verifies that the connection has been migrated and carries the given
/// table with all required columns.
pub(crate) fn ensure_schema_ready(
    conn: &Connection,
    table: &'static str,
    columns: &'static [&'static str],
) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
