//! Article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `articles` table.
//! - Own the unique-code and by-category read accessors.
//!
//! # Invariants
//! - Code uniqueness is enforced by the store's unique index; a duplicate
//!   insert surfaces as a constraint error, never as silent replacement.

use crate::model::article::{Article, ArticleId};
use crate::model::category::CategoryId;
use crate::repo::{ensure_schema_ready, Repository, RepoResult};
use rusqlite::{params, Connection, Row};

const ARTICLE_SELECT_SQL: &str =
    "SELECT id, code, label, unit_price_cents, category_id FROM articles";

const REQUIRED_COLUMNS: &[&str] = &["id", "code", "label", "unit_price_cents", "category_id"];

/// Repository interface for article persistence and lookups.
pub trait ArticleRepository:
    Repository<Entity = Article, Id = ArticleId>
{
    /// Exact match on the unique business code.
    fn find_by_code(&self, code: &str) -> RepoResult<Option<Article>>;
    /// All articles in the given category, in insertion order.
    fn find_all_by_category_id(&self, category_id: CategoryId) -> RepoResult<Vec<Article>>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, "articles", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl Repository for SqliteArticleRepository<'_> {
    type Entity = Article;
    type Id = ArticleId;

    fn save(&self, entity: &Article) -> RepoResult<Article> {
        let id = match entity.id {
            None => {
                self.conn.execute(
                    "INSERT INTO articles (code, label, unit_price_cents, category_id)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        entity.code.as_str(),
                        entity.label.as_str(),
                        entity.unit_price_cents,
                        entity.category_id,
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO articles (id, code, label, unit_price_cents, category_id)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT (id) DO UPDATE SET
                        code = excluded.code,
                        label = excluded.label,
                        unit_price_cents = excluded.unit_price_cents,
                        category_id = excluded.category_id;",
                    params![
                        id,
                        entity.code.as_str(),
                        entity.label.as_str(),
                        entity.unit_price_cents,
                        entity.category_id,
                    ],
                )?;
                id
            }
        };

        Ok(Article {
            id: Some(id),
            ..entity.clone()
        })
    }

    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_article_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(parse_article_row(row)?);
        }
        Ok(articles)
    }

    fn delete_by_id(&self, id: ArticleId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM articles WHERE id = ?1;", [id])?;
        Ok(())
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn find_by_code(&self, code: &str) -> RepoResult<Option<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} WHERE code = ?1;"))?;
        let mut rows = stmt.query([code])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_article_row(row)?));
        }
        Ok(None)
    }

    fn find_all_by_category_id(&self, category_id: CategoryId) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ARTICLE_SELECT_SQL} WHERE category_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([category_id])?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(parse_article_row(row)?);
        }
        Ok(articles)
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    Ok(Article {
        id: Some(row.get("id")?),
        code: row.get("code")?,
        label: row.get("label")?,
        unit_price_cents: row.get("unit_price_cents")?,
        category_id: row.get("category_id")?,
    })
}
