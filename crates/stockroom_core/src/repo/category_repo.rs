//! Category repository contract and SQLite implementation.
//!
//! # Invariants
//! - `delete_if_unreferenced` checks the article back-reference and deletes
//!   in one `IMMEDIATE` transaction.

use crate::model::category::{Category, CategoryId};
use crate::repo::{ensure_schema_ready, Repository, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const CATEGORY_SELECT_SQL: &str = "SELECT id, code, label FROM categories";

const REQUIRED_COLUMNS: &[&str] = &["id", "code", "label"];

/// Outcome of the atomic delete-if-unreferenced operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryDeleteOutcome {
    /// The category row (if any) was removed.
    Deleted,
    /// At least one article still references the category; nothing deleted.
    StillReferenced(u64),
}

/// Repository interface for category persistence.
pub trait CategoryRepository:
    Repository<Entity = Category, Id = CategoryId>
{
    /// Deletes the category only when no article references it, atomically
    /// with the reference check.
    fn delete_if_unreferenced(&self, id: CategoryId) -> RepoResult<CategoryDeleteOutcome>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, "categories", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl Repository for SqliteCategoryRepository<'_> {
    type Entity = Category;
    type Id = CategoryId;

    fn save(&self, entity: &Category) -> RepoResult<Category> {
        let id = match entity.id {
            None => {
                self.conn.execute(
                    "INSERT INTO categories (code, label) VALUES (?1, ?2);",
                    params![entity.code.as_str(), entity.label.as_str()],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO categories (id, code, label)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT (id) DO UPDATE SET
                        code = excluded.code,
                        label = excluded.label;",
                    params![id, entity.code.as_str(), entity.label.as_str()],
                )?;
                id
            }
        };

        Ok(Category {
            id: Some(id),
            ..entity.clone()
        })
    }

    fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }
        Ok(categories)
    }

    fn delete_by_id(&self, id: CategoryId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM categories WHERE id = ?1;", [id])?;
        Ok(())
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn delete_if_unreferenced(&self, id: CategoryId) -> RepoResult<CategoryDeleteOutcome> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let references: u64 = tx.query_row(
            "SELECT COUNT(*) FROM articles WHERE category_id = ?1;",
            [id],
            |row| row.get(0),
        )?;
        if references > 0 {
            return Ok(CategoryDeleteOutcome::StillReferenced(references));
        }

        tx.execute("DELETE FROM categories WHERE id = ?1;", [id])?;
        tx.commit()?;
        Ok(CategoryDeleteOutcome::Deleted)
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    Ok(Category {
        id: Some(row.get("id")?),
        code: row.get("code")?,
        label: row.get("label")?,
    })
}
