// region:    --- Imports
use super::{InterestStore, ProductStore, UserStore};
use crate::database::DatabaseManager;
use crate::error::{ServiceError, ServiceResult};
use crate::product::model::{
    Interest, NewInterest, NewProduct, Product, ProductCategory, ProductProjection, User,
};
use crate::product::queries;
use async_trait::async_trait;
use sqlx::Row;
use std::sync::Arc;
use tracing::debug;

// endregion: --- Imports

// region:    --- Rows
/// products 테이블 행 (category 는 문자열로 저장)
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    owner_id: i64,
    buyer_id: Option<i64>,
    category: String,
    description: String,
    image: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = ServiceError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            category: row.category.parse()?,
            id: row.id,
            name: row.name,
            owner_id: row.owner_id,
            buyer_id: row.buyer_id,
            description: row.description,
            image: row.image,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> ServiceResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

// endregion: --- Rows

// region:    --- Postgres Store
/// PostgreSQL 저장소 구현체
#[derive(Clone)]
pub struct PgStore {
    db_manager: Arc<DatabaseManager>,
}

impl PgStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        debug!("{:<12} --> 이메일로 사용자 조회: {}", "PgStore", email);
        let email = email.to_string();
        let user = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, User>(queries::GET_USER_BY_EMAIL)
                        .bind(&email)
                        .fetch_optional(&mut **tx)
                        .await
                })
            })
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> ServiceResult<Option<User>> {
        debug!("{:<12} --> 사용자 조회 id: {}", "PgStore", id);
        let user = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, User>(queries::GET_USER_BY_ID)
                        .bind(id)
                        .fetch_optional(&mut **tx)
                        .await
                })
            })
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn save(&self, product: NewProduct) -> ServiceResult<Product> {
        debug!("{:<12} --> 상품 저장: {:?}", "PgStore", product);
        let row = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, ProductRow>(queries::INSERT_PRODUCT)
                        .bind(&product.name)
                        .bind(product.owner_id)
                        .bind(product.category.as_str())
                        .bind(&product.description)
                        .bind(&product.image)
                        .fetch_one(&mut **tx)
                        .await
                })
            })
            .await?;
        Product::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> ServiceResult<Option<Product>> {
        debug!("{:<12} --> 상품 조회 id: {}", "PgStore", id);
        let row = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, ProductRow>(queries::GET_PRODUCT)
                        .bind(id)
                        .fetch_optional(&mut **tx)
                        .await
                })
            })
            .await?;
        row.map(Product::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        debug!("{:<12} --> 상품 삭제 id: {}", "PgStore", id);
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query(queries::DELETE_PRODUCT)
                        .bind(id)
                        .execute(&mut **tx)
                        .await
                })
            })
            .await?;
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: i64) -> ServiceResult<Vec<ProductProjection>> {
        debug!("{:<12} --> 소유자 상품 조회 owner: {}", "PgStore", owner_id);
        let rows = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, ProductProjection>(queries::GET_PRODUCTS_BY_OWNER)
                        .bind(owner_id)
                        .fetch_all(&mut **tx)
                        .await
                })
            })
            .await?;
        Ok(rows)
    }

    async fn find_all_by_owner_and_category(
        &self,
        owner_id: i64,
        category: ProductCategory,
    ) -> ServiceResult<Vec<Product>> {
        debug!(
            "{:<12} --> 소유자/카테고리 상품 조회 owner: {}, category: {}",
            "PgStore", owner_id, category
        );
        let rows = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, ProductRow>(queries::GET_PRODUCTS_BY_OWNER_AND_CATEGORY)
                        .bind(owner_id)
                        .bind(category.as_str())
                        .fetch_all(&mut **tx)
                        .await
                })
            })
            .await?;
        into_products(rows)
    }

    async fn find_all_by_category(&self, category: ProductCategory) -> ServiceResult<Vec<Product>> {
        debug!("{:<12} --> 카테고리 상품 조회: {}", "PgStore", category);
        let rows = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, ProductRow>(queries::GET_PRODUCTS_BY_CATEGORY)
                        .bind(category.as_str())
                        .fetch_all(&mut **tx)
                        .await
                })
            })
            .await?;
        into_products(rows)
    }
}

#[async_trait]
impl InterestStore for PgStore {
    async fn save(&self, interest: NewInterest) -> ServiceResult<Interest> {
        debug!("{:<12} --> 관심 상품 저장: {:?}", "PgStore", interest);
        let saved = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, Interest>(queries::INSERT_INTEREST)
                        .bind(interest.user_id)
                        .bind(interest.product_id)
                        .fetch_one(&mut **tx)
                        .await
                })
            })
            .await?;
        Ok(saved)
    }

    async fn count_by_product(&self, product_id: i64) -> ServiceResult<i64> {
        debug!("{:<12} --> 관심 수 조회 id: {}", "PgStore", product_id);
        let count = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let result = sqlx::query(queries::COUNT_INTERESTS_BY_PRODUCT)
                        .bind(product_id)
                        .fetch_one(&mut **tx)
                        .await?;

                    Ok::<i64, sqlx::Error>(result.get("interest_count"))
                })
            })
            .await?;
        Ok(count)
    }

    async fn find_my_interests(&self, user_id: i64) -> ServiceResult<Vec<ProductProjection>> {
        debug!("{:<12} --> 내 관심 상품 조회 user: {}", "PgStore", user_id);
        let rows = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, ProductProjection>(queries::GET_MY_INTERESTS)
                        .bind(user_id)
                        .fetch_all(&mut **tx)
                        .await
                })
            })
            .await?;
        Ok(rows)
    }
}

// endregion: --- Postgres Store
