use auction_product_service::database::{split_statements, SCHEMA_SCRIPTS};

#[test]
fn test_split_statements_skips_blank_fragments() {
    let statements = split_statements("SELECT 1;\n\n  ;SELECT 2 ;  \n");
    assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
    assert!(split_statements("  \n ; ").is_empty());
}

/// 스키마 스크립트는 삭제 → 생성 순서로 실행된다
#[test]
fn test_schema_scripts_recreate_tables_in_order() {
    let [(first, recreate), (second, create)] = SCHEMA_SCRIPTS;
    assert_eq!(first, "00-recreate-db.sql");
    assert_eq!(second, "01-create-schema.sql");

    let drops = split_statements(recreate);
    assert_eq!(drops.len(), 3);
    assert!(drops.iter().all(|s| s.starts_with("DROP TABLE IF EXISTS")));

    let creates = split_statements(create);
    let tables: Vec<&str> = creates
        .iter()
        .filter_map(|s| s.split("CREATE TABLE ").nth(1))
        .filter_map(|rest| rest.split_whitespace().next())
        .collect();
    assert_eq!(tables, vec!["users", "products", "user_products"]);
    assert_eq!(creates.iter().filter(|s| s.contains("CREATE INDEX")).count(), 4);
    assert!(create.contains("ON DELETE CASCADE"));
}
