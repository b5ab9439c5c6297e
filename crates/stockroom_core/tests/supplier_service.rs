use rusqlite::Connection;
use stockroom_core::db::open_db_in_memory;
use stockroom_core::{
    ErrorCode, Repository, ServiceError, SqliteSupplierOrderRepository, SqliteSupplierRepository,
    SupplierDto, SupplierOrder, SupplierService,
};

#[test]
fn save_with_invalid_candidate_is_rejected_and_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    // A name but no contact channel at all.
    let candidate = SupplierDto {
        id: None,
        name: "ACME".to_string(),
        email: Some(String::new()),
        phone: None,
        address: None,
    };

    let err = service.save(&candidate).unwrap_err();
    match err {
        ServiceError::InvalidEntity { code, errors } => {
            assert_eq!(code, ErrorCode::SupplierNotValid);
            assert_eq!(
                errors,
                vec!["at least one contact (email or phone) is required".to_string()]
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn save_assigns_id_and_roundtrips_business_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let candidate = SupplierDto {
        id: None,
        name: "ACME Metals".to_string(),
        email: Some("orders@acme.example".to_string()),
        phone: Some("+33 1 23 45 67 89".to_string()),
        address: Some("12 Rue des Forges".to_string()),
    };

    let saved = service.save(&candidate).unwrap();
    let id = saved.id.expect("store should assign an id");
    assert!(id > 0);
    assert_eq!(saved.name, candidate.name);
    assert_eq!(saved.email, candidate.email);
    assert_eq!(saved.phone, candidate.phone);
    assert_eq!(saved.address, candidate.address);
}

#[test]
fn save_with_existing_id_updates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let saved = service.save(&valid_supplier("Initial Name")).unwrap();
    let updated = SupplierDto {
        name: "Renamed Supplier".to_string(),
        ..saved.clone()
    };
    service.save(&updated).unwrap();

    let all = service.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, saved.id);
    assert_eq!(all[0].name, "Renamed Supplier");
}

#[test]
fn find_by_id_returns_matching_dto() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let saved = service.save(&valid_supplier("Northwind")).unwrap();
    let found = service.find_by_id(saved.id).unwrap();

    assert_eq!(found.id, saved.id);
    assert_eq!(found.name, "Northwind");
}

#[test]
fn find_by_id_missing_raises_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let err = service.find_by_id(Some(4242)).unwrap_err();
    match err {
        ServiceError::NotFound { code, message } => {
            assert_eq!(code, ErrorCode::SupplierNotFound);
            assert!(message.contains("4242"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn find_by_id_absent_raises_invalid_argument() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let err = service.find_by_id(None).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidArgument {
            code: ErrorCode::MissingId,
            ..
        }
    ));
}

#[test]
fn delete_with_referencing_order_is_rejected_and_supplier_remains() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let saved = service.save(&valid_supplier("Referenced")).unwrap();
    let supplier_id = saved.id.unwrap();
    insert_order(&conn, "PO-1", supplier_id);

    let err = service.delete(Some(supplier_id)).unwrap_err();
    match err {
        ServiceError::InvalidOperation { code, message } => {
            assert_eq!(code, ErrorCode::SupplierAlreadyInUse);
            assert!(message.contains("order"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // Guard must leave the supplier retrievable.
    assert_eq!(service.find_by_id(Some(supplier_id)).unwrap().id, saved.id);
}

#[test]
fn delete_unreferenced_removes_supplier() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let saved = service.save(&valid_supplier("Ephemeral")).unwrap();
    let supplier_id = saved.id.unwrap();

    service.delete(Some(supplier_id)).unwrap();

    let err = service.find_by_id(Some(supplier_id)).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            code: ErrorCode::SupplierNotFound,
            ..
        }
    ));
}

#[test]
fn delete_missing_id_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    service.delete(Some(9999)).unwrap();
}

#[test]
fn delete_absent_raises_invalid_argument() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let err = service.delete(None).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidArgument {
            code: ErrorCode::MissingId,
            ..
        }
    ));
}

#[test]
fn find_all_is_empty_then_returns_all_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    assert!(service.find_all().unwrap().is_empty());

    service.save(&valid_supplier("First")).unwrap();
    service.save(&valid_supplier("Second")).unwrap();
    service.save(&valid_supplier("Third")).unwrap();

    let names: Vec<String> = service
        .find_all()
        .unwrap()
        .into_iter()
        .map(|dto| dto.name)
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn schema_foreign_key_mirrors_the_application_guard() {
    let conn = open_db_in_memory().unwrap();
    let service = supplier_service(&conn);

    let saved = service.save(&valid_supplier("Locked")).unwrap();
    let supplier_id = saved.id.unwrap();
    insert_order(&conn, "PO-2", supplier_id);

    // Bypassing the service and deleting directly still fails, on the
    // ON DELETE RESTRICT constraint.
    let repo = SqliteSupplierRepository::try_new(&conn).unwrap();
    assert!(repo.delete_by_id(supplier_id).is_err());
}

fn supplier_service(conn: &Connection) -> SupplierService<SqliteSupplierRepository<'_>> {
    SupplierService::new(SqliteSupplierRepository::try_new(conn).unwrap())
}

fn valid_supplier(name: &str) -> SupplierDto {
    SupplierDto {
        id: None,
        name: name.to_string(),
        email: Some("contact@supplier.example".to_string()),
        phone: None,
        address: None,
    }
}

fn insert_order(conn: &Connection, code: &str, supplier_id: i64) {
    let repo = SqliteSupplierOrderRepository::try_new(conn).unwrap();
    repo.save(&SupplierOrder::new(code, supplier_id, 1_770_000_000_000))
        .unwrap();
}
