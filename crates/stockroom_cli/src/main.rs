//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stockroom_core` wiring end to
//!   end against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use stockroom_core::db::open_db_in_memory;
use stockroom_core::{
    core_version, CategoryDto, CategoryService, SqliteCategoryRepository,
    SqliteSupplierRepository, SupplierDto, SupplierService,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("stockroom_core version={}", core_version());

    let conn = open_db_in_memory()?;

    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn)?);
    let category = categories.save(&CategoryDto {
        id: None,
        code: "FAST".to_string(),
        label: "Fasteners".to_string(),
    })?;
    println!(
        "category id={} code={}",
        category.id.unwrap_or_default(),
        category.code
    );

    let suppliers = SupplierService::new(SqliteSupplierRepository::try_new(&conn)?);
    let supplier = suppliers.save(&SupplierDto {
        id: None,
        name: "ACME Metals".to_string(),
        email: Some("orders@acme.example".to_string()),
        phone: None,
        address: None,
    })?;
    println!(
        "supplier id={} name={}",
        supplier.id.unwrap_or_default(),
        supplier.name
    );
    println!("suppliers total={}", suppliers.find_all()?.len());

    Ok(())
}
