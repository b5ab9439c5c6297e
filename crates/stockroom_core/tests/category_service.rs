use rusqlite::Connection;
use stockroom_core::db::open_db_in_memory;
use stockroom_core::{
    ArticleDto, ArticleService, CategoryDto, CategoryService, ErrorCode, ServiceError,
    SqliteArticleRepository, SqliteCategoryRepository,
};

#[test]
fn save_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let saved = service.save(&category("FAST", "Fasteners")).unwrap();
    assert!(saved.id.is_some());

    let found = service.find_by_id(saved.id).unwrap();
    assert_eq!(found, saved);
}

#[test]
fn save_with_blank_fields_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let err = service.save(&category(" ", "")).unwrap_err();
    match err {
        ServiceError::InvalidEntity { code, errors } => {
            assert_eq!(code, ErrorCode::CategoryNotValid);
            assert_eq!(errors.len(), 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn find_all_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    service.save(&category("FAST", "Fasteners")).unwrap();
    service.save(&category("TOOL", "Tools")).unwrap();

    let codes: Vec<String> = service
        .find_all()
        .unwrap()
        .into_iter()
        .map(|dto| dto.code)
        .collect();
    assert_eq!(codes, vec!["FAST", "TOOL"]);
}

#[test]
fn delete_with_referencing_article_is_rejected_and_category_remains() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let saved = service.save(&category("FAST", "Fasteners")).unwrap();
    let category_id = saved.id.unwrap();

    let articles = ArticleService::new(SqliteArticleRepository::try_new(&conn).unwrap());
    articles
        .save(&ArticleDto {
            id: None,
            code: "ART-1".to_string(),
            label: "M8 hex bolt".to_string(),
            unit_price_cents: 35,
            category_id,
        })
        .unwrap();

    let err = service.delete(Some(category_id)).unwrap_err();
    match err {
        ServiceError::InvalidOperation { code, message } => {
            assert_eq!(code, ErrorCode::CategoryAlreadyInUse);
            assert!(message.contains("article"));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(service.find_by_id(Some(category_id)).unwrap().id, saved.id);
}

#[test]
fn delete_unreferenced_removes_category() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let saved = service.save(&category("TMP", "Temporary")).unwrap();
    service.delete(saved.id).unwrap();

    let err = service.find_by_id(saved.id).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            code: ErrorCode::CategoryNotFound,
            ..
        }
    ));
}

#[test]
fn delete_absent_raises_invalid_argument() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let err = service.delete(None).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidArgument {
            code: ErrorCode::MissingId,
            ..
        }
    ));
}

fn category_service(conn: &Connection) -> CategoryService<SqliteCategoryRepository<'_>> {
    CategoryService::new(SqliteCategoryRepository::try_new(conn).unwrap())
}

fn category(code: &str, label: &str) -> CategoryDto {
    CategoryDto {
        id: None,
        code: code.to_string(),
        label: label.to_string(),
    }
}
