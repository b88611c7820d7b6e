#![allow(dead_code)]

use auction_product_service::identity::IdentityContext;
use auction_product_service::product::model::{
    Product, ProductCategory, ProductCreationRequest, User,
};
use auction_product_service::product::service::ProductService;
use auction_product_service::store::InMemoryStore;
use std::sync::Arc;

/// 트레이싱 초기화 (여러 테스트에서 호출돼도 한 번만 설정)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .try_init();
}

pub struct Fixture {
    pub store: Arc<InMemoryStore>,
    pub service: ProductService,
}

/// 메모리 저장소 기반 서비스 설정
pub fn setup() -> Fixture {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    let service = ProductService::with_store(Arc::clone(&store));
    Fixture { store, service }
}

pub fn identity(user: &User) -> IdentityContext {
    IdentityContext {
        user_id: user.id,
        email: user.email.clone(),
    }
}

pub fn creation_request(name: &str, category: ProductCategory) -> ProductCreationRequest {
    ProductCreationRequest {
        name: name.to_string(),
        category,
        description: format!("{} 설명", name),
        image: format!("https://img.example.com/{}.png", name.to_lowercase()),
    }
}

/// 테스트용 상품 생성
pub async fn create_test_product(
    fixture: &Fixture,
    owner: &User,
    name: &str,
    category: ProductCategory,
) -> Product {
    fixture
        .service
        .create_product(&identity(owner), creation_request(name, category))
        .await
        .expect("상품 생성 실패")
}
