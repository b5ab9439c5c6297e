//! Supplier repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `suppliers` table.
//! - Own the atomic delete-if-unreferenced guard used by the service layer.
//!
//! # Invariants
//! - `delete_if_unreferenced` checks the order back-reference and deletes in
//!   one `IMMEDIATE` transaction, so no order insert can interleave.

use crate::model::supplier::{Supplier, SupplierId};
use crate::repo::{ensure_schema_ready, Repository, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const SUPPLIER_SELECT_SQL: &str = "SELECT id, name, email, phone, address FROM suppliers";

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "email", "phone", "address"];

/// Outcome of the atomic delete-if-unreferenced operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierDeleteOutcome {
    /// The supplier row (if any) was removed.
    Deleted,
    /// At least one order still references the supplier; nothing deleted.
    StillReferenced(u64),
}

/// Repository interface for supplier persistence.
pub trait SupplierRepository:
    Repository<Entity = Supplier, Id = SupplierId>
{
    /// Deletes the supplier only when no order references it, atomically
    /// with the reference check.
    fn delete_if_unreferenced(&self, id: SupplierId) -> RepoResult<SupplierDeleteOutcome>;
}

/// SQLite-backed supplier repository.
pub struct SqliteSupplierRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSupplierRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, "suppliers", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl Repository for SqliteSupplierRepository<'_> {
    type Entity = Supplier;
    type Id = SupplierId;

    fn save(&self, entity: &Supplier) -> RepoResult<Supplier> {
        let id = match entity.id {
            None => {
                self.conn.execute(
                    "INSERT INTO suppliers (name, email, phone, address)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        entity.name.as_str(),
                        entity.email.as_deref(),
                        entity.phone.as_deref(),
                        entity.address.as_deref(),
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO suppliers (id, name, email, phone, address)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT (id) DO UPDATE SET
                        name = excluded.name,
                        email = excluded.email,
                        phone = excluded.phone,
                        address = excluded.address;",
                    params![
                        id,
                        entity.name.as_str(),
                        entity.email.as_deref(),
                        entity.phone.as_deref(),
                        entity.address.as_deref(),
                    ],
                )?;
                id
            }
        };

        Ok(Supplier {
            id: Some(id),
            ..entity.clone()
        })
    }

    fn find_by_id(&self, id: SupplierId) -> RepoResult<Option<Supplier>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUPPLIER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_supplier_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Supplier>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUPPLIER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut suppliers = Vec::new();
        while let Some(row) = rows.next()? {
            suppliers.push(parse_supplier_row(row)?);
        }
        Ok(suppliers)
    }

    fn delete_by_id(&self, id: SupplierId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM suppliers WHERE id = ?1;", [id])?;
        Ok(())
    }
}

impl SupplierRepository for SqliteSupplierRepository<'_> {
    fn delete_if_unreferenced(&self, id: SupplierId) -> RepoResult<SupplierDeleteOutcome> {
        // new_unchecked: the repository only holds a shared borrow;
        // connections are not shared across threads in this crate.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let references: u64 = tx.query_row(
            "SELECT COUNT(*) FROM supplier_orders WHERE supplier_id = ?1;",
            [id],
            |row| row.get(0),
        )?;
        if references > 0 {
            return Ok(SupplierDeleteOutcome::StillReferenced(references));
        }

        tx.execute("DELETE FROM suppliers WHERE id = ?1;", [id])?;
        tx.commit()?;
        Ok(SupplierDeleteOutcome::Deleted)
    }
}

fn parse_supplier_row(row: &Row<'_>) -> RepoResult<Supplier> {
    Ok(Supplier {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        address: row.get("address")?,
    })
}
