// region:    --- Imports
use crate::error::ServiceResult;
use crate::product::model::{
    Interest, NewInterest, NewProduct, Product, ProductCategory, ProductProjection, User,
};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

// endregion: --- Imports

// region:    --- Store Traits
/// 사용자 저장소 (읽기 전용)
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<User>>;
    async fn find_by_id(&self, id: i64) -> ServiceResult<Option<User>>;
}

/// 상품 저장소
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn save(&self, product: NewProduct) -> ServiceResult<Product>;
    async fn find_by_id(&self, id: i64) -> ServiceResult<Option<Product>>;
    async fn delete(&self, id: i64) -> ServiceResult<()>;
    /// 소유자 기준 목록 (owner 는 소유자 이름)
    async fn find_by_owner(&self, owner_id: i64) -> ServiceResult<Vec<ProductProjection>>;
    async fn find_all_by_owner_and_category(
        &self,
        owner_id: i64,
        category: ProductCategory,
    ) -> ServiceResult<Vec<Product>>;
    async fn find_all_by_category(&self, category: ProductCategory) -> ServiceResult<Vec<Product>>;
}

/// 관심 상품 저장소
#[async_trait]
pub trait InterestStore: Send + Sync {
    async fn save(&self, interest: NewInterest) -> ServiceResult<Interest>;
    async fn count_by_product(&self, product_id: i64) -> ServiceResult<i64>;
    /// 사용자의 관심 상품 목록 (owner 는 상품 소유자 이름)
    async fn find_my_interests(&self, user_id: i64) -> ServiceResult<Vec<ProductProjection>>;
}

// endregion: --- Store Traits
