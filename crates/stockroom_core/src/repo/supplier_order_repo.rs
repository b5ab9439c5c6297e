//! Supplier order repository contract and SQLite implementation.

use crate::model::supplier::SupplierId;
use crate::model::supplier_order::{SupplierOrder, SupplierOrderId};
use crate::repo::{ensure_schema_ready, Repository, RepoResult};
use rusqlite::{params, Connection, Row};

const ORDER_SELECT_SQL: &str =
    "SELECT id, code, supplier_id, ordered_at FROM supplier_orders";

const REQUIRED_COLUMNS: &[&str] = &["id", "code", "supplier_id", "ordered_at"];

/// Repository interface for supplier order persistence and lookups.
pub trait SupplierOrderRepository:
    Repository<Entity = SupplierOrder, Id = SupplierOrderId>
{
    /// All orders referencing the given supplier, in insertion order.
    fn find_all_by_supplier_id(&self, supplier_id: SupplierId) -> RepoResult<Vec<SupplierOrder>>;
}

/// SQLite-backed supplier order repository.
pub struct SqliteSupplierOrderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSupplierOrderRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, "supplier_orders", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl Repository for SqliteSupplierOrderRepository<'_> {
    type Entity = SupplierOrder;
    type Id = SupplierOrderId;

    fn save(&self, entity: &SupplierOrder) -> RepoResult<SupplierOrder> {
        let id = match entity.id {
            None => {
                self.conn.execute(
                    "INSERT INTO supplier_orders (code, supplier_id, ordered_at)
                     VALUES (?1, ?2, ?3);",
                    params![entity.code.as_str(), entity.supplier_id, entity.ordered_at],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO supplier_orders (id, code, supplier_id, ordered_at)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT (id) DO UPDATE SET
                        code = excluded.code,
                        supplier_id = excluded.supplier_id,
                        ordered_at = excluded.ordered_at;",
                    params![
                        id,
                        entity.code.as_str(),
                        entity.supplier_id,
                        entity.ordered_at,
                    ],
                )?;
                id
            }
        };

        Ok(SupplierOrder {
            id: Some(id),
            ..entity.clone()
        })
    }

    fn find_by_id(&self, id: SupplierOrderId) -> RepoResult<Option<SupplierOrder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ORDER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_order_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<SupplierOrder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ORDER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut orders = Vec::new();
        while let Some(row) = rows.next()? {
            orders.push(parse_order_row(row)?);
        }
        Ok(orders)
    }

    fn delete_by_id(&self, id: SupplierOrderId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM supplier_orders WHERE id = ?1;", [id])?;
        Ok(())
    }
}

impl SupplierOrderRepository for SqliteSupplierOrderRepository<'_> {
    fn find_all_by_supplier_id(&self, supplier_id: SupplierId) -> RepoResult<Vec<SupplierOrder>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ORDER_SELECT_SQL} WHERE supplier_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([supplier_id])?;
        let mut orders = Vec::new();
        while let Some(row) = rows.next()? {
            orders.push(parse_order_row(row)?);
        }
        Ok(orders)
    }
}

fn parse_order_row(row: &Row<'_>) -> RepoResult<SupplierOrder> {
    Ok(SupplierOrder {
        id: Some(row.get("id")?),
        code: row.get("code")?,
        supplier_id: row.get("supplier_id")?,
        ordered_at: row.get("ordered_at")?,
    })
}
