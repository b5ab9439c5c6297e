use rusqlite::Connection;
use stockroom_core::db::open_db_in_memory;
use stockroom_core::{
    ArticleDto, ArticleService, CategoryDto, CategoryService, ErrorCode, ServiceError,
    SqliteArticleRepository, SqliteCategoryRepository,
};

#[test]
fn find_by_code_returns_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let category_id = seed_category(&conn, "FAST", "Fasteners");
    let service = article_service(&conn);

    service
        .save(&article("ART-1", "M8 hex bolt", category_id))
        .unwrap();
    let saved = service
        .save(&article("ART-2", "M8 washer", category_id))
        .unwrap();

    let found = service.find_by_code(Some("ART-2")).unwrap();
    assert_eq!(found.id, saved.id);
    assert_eq!(found.label, "M8 washer");
}

#[test]
fn find_by_code_missing_raises_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = article_service(&conn);

    let err = service.find_by_code(Some("NOPE")).unwrap_err();
    match err {
        ServiceError::NotFound { code, message } => {
            assert_eq!(code, ErrorCode::ArticleNotFound);
            assert!(message.contains("NOPE"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn find_by_code_blank_raises_invalid_argument() {
    let conn = open_db_in_memory().unwrap();
    let service = article_service(&conn);

    for input in [None, Some(""), Some("   ")] {
        let err = service.find_by_code(input).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidArgument {
                code: ErrorCode::MissingId,
                ..
            }
        ));
    }
}

#[test]
fn find_all_by_category_id_filters_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let fasteners = seed_category(&conn, "FAST", "Fasteners");
    let tools = seed_category(&conn, "TOOL", "Tools");
    let service = article_service(&conn);

    service
        .save(&article("ART-1", "M8 hex bolt", fasteners))
        .unwrap();
    service.save(&article("ART-2", "Hammer", tools)).unwrap();
    service
        .save(&article("ART-3", "M8 washer", fasteners))
        .unwrap();

    let codes: Vec<String> = service
        .find_all_by_category_id(fasteners)
        .unwrap()
        .into_iter()
        .map(|dto| dto.code)
        .collect();
    assert_eq!(codes, vec!["ART-1", "ART-3"]);

    assert!(service.find_all_by_category_id(999).unwrap().is_empty());
}

#[test]
fn duplicate_article_code_is_rejected_by_the_store() {
    let conn = open_db_in_memory().unwrap();
    let category_id = seed_category(&conn, "FAST", "Fasteners");
    let service = article_service(&conn);

    service
        .save(&article("ART-1", "M8 hex bolt", category_id))
        .unwrap();
    let err = service
        .save(&article("ART-1", "Duplicate code", category_id))
        .unwrap_err();

    // Uniqueness is a store-level constraint, not a validation rule.
    assert!(matches!(err, ServiceError::Repo(_)));
}

#[test]
fn save_with_invalid_candidate_collects_all_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = article_service(&conn);

    let candidate = ArticleDto {
        id: None,
        code: String::new(),
        label: String::new(),
        unit_price_cents: -5,
        category_id: 0,
    };

    let err = service.save(&candidate).unwrap_err();
    match err {
        ServiceError::InvalidEntity { code, errors } => {
            assert_eq!(code, ErrorCode::ArticleNotValid);
            assert_eq!(errors.len(), 4);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn delete_removes_article() {
    let conn = open_db_in_memory().unwrap();
    let category_id = seed_category(&conn, "FAST", "Fasteners");
    let service = article_service(&conn);

    let saved = service
        .save(&article("ART-1", "M8 hex bolt", category_id))
        .unwrap();
    service.delete(saved.id).unwrap();

    let err = service.find_by_id(saved.id).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            code: ErrorCode::ArticleNotFound,
            ..
        }
    ));
}

fn article_service(conn: &Connection) -> ArticleService<SqliteArticleRepository<'_>> {
    ArticleService::new(SqliteArticleRepository::try_new(conn).unwrap())
}

fn article(code: &str, label: &str, category_id: i64) -> ArticleDto {
    ArticleDto {
        id: None,
        code: code.to_string(),
        label: label.to_string(),
        unit_price_cents: 35,
        category_id,
    }
}

fn seed_category(conn: &Connection, code: &str, label: &str) -> i64 {
    let service = CategoryService::new(SqliteCategoryRepository::try_new(conn).unwrap());
    let saved = service
        .save(&CategoryDto {
            id: None,
            code: code.to_string(),
            label: label.to_string(),
        })
        .unwrap();
    saved.id.unwrap()
}
