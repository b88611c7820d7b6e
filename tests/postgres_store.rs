//! 실제 PostgreSQL 을 사용하는 테스트 (DATABASE_URL 필요)
//!
//! cargo test -- --ignored

mod common;

use auction_product_service::database::DatabaseManager;
use auction_product_service::error::ServiceError;
use auction_product_service::identity::IdentityContext;
use auction_product_service::product::model::{ProductCategory, ProductFilterRequest, User};
use auction_product_service::product::service::ProductService;
use auction_product_service::store::PgStore;
use chrono::Utc;
use std::sync::Arc;

/// 데이터베이스 매니저 설정
async fn setup() -> (Arc<DatabaseManager>, ProductService) {
    common::init_tracing();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db_manager = Arc::new(DatabaseManager::connect(&database_url, 5).await.unwrap());
    let service = ProductService::with_store(Arc::new(PgStore::new(Arc::clone(&db_manager))));
    (db_manager, service)
}

/// 테스트용 사용자 생성 (테스트끼리 겹치지 않도록 이메일에 시각을 붙인다)
async fn create_test_user(db_manager: &DatabaseManager, name: &str) -> User {
    let email = format!(
        "{}-{}@example.com",
        name.to_lowercase().replace(' ', "."),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    );
    let full_name = name.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(
                    "INSERT INTO users (email, full_name) VALUES ($1, $2) RETURNING id, email, full_name",
                )
                .bind(&email)
                .bind(&full_name)
                .fetch_one(&mut **tx)
                .await
            })
        })
        .await
        .unwrap()
}

/// 테스트용 판매 처리
async fn mark_sold(db_manager: &DatabaseManager, product_id: i64, buyer_id: i64) {
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query("UPDATE products SET buyer_id = $1 WHERE id = $2")
                    .bind(buyer_id)
                    .bind(product_id)
                    .execute(&mut **tx)
                    .await
            })
        })
        .await
        .unwrap();
}

fn identity(user: &User) -> IdentityContext {
    IdentityContext {
        user_id: user.id,
        email: user.email.clone(),
    }
}

#[tokio::test]
#[ignore]
async fn test_pg_product_lifecycle() {
    let (db_manager, service) = setup().await;
    let owner = create_test_user(&db_manager, "Owner Kim").await;
    let fan = create_test_user(&db_manager, "Fan Park").await;

    let product = service
        .create_product(
            &identity(&owner),
            common::creation_request("Vase", ProductCategory::Antique),
        )
        .await
        .unwrap();
    assert_eq!(product.owner_id, owner.id);
    assert_eq!(service.get_by_id(product.id).await.unwrap(), product);

    let mine = service.get_all_my_product(&identity(&owner)).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].owner.as_deref(), Some("Owner Kim"));

    service
        .interest_product(&identity(&fan), product.id)
        .await
        .unwrap();
    service
        .interest_product(&identity(&fan), product.id)
        .await
        .unwrap();
    assert_eq!(service.get_interest_product(product.id).await.unwrap(), 2);

    let interests = service.get_my_interest_product(&identity(&fan)).await.unwrap();
    assert_eq!(interests.len(), 2);

    let deleted = service
        .delete_product(&identity(&owner), product.id)
        .await
        .unwrap();
    assert_eq!(deleted.owner.as_deref(), Some("Owner Kim"));
    assert!(matches!(
        service.get_by_id(product.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_pg_search_skips_sold_products() {
    let (db_manager, service) = setup().await;
    let owner = create_test_user(&db_manager, "Seller Lee").await;
    let buyer = create_test_user(&db_manager, "Buyer Choi").await;

    let sold = service
        .create_product(
            &identity(&owner),
            common::creation_request("Sold Car", ProductCategory::Vehicle),
        )
        .await
        .unwrap();
    mark_sold(&db_manager, sold.id, buyer.id).await;

    let filter = ProductFilterRequest {
        product_category: ProductCategory::Vehicle,
    };
    let found = service.search_product_by_category(filter).await.unwrap();
    assert!(found.iter().all(|p| p.name != "Sold Car"));

    let mine = service
        .get_my_by_category(&identity(&owner), filter)
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Sold Car");
}
