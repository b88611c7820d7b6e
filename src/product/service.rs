//! 상품 서비스
//! 1. 상품 등록 / 조회 / 삭제
//! 2. 내 상품, 카테고리별 상품 조회
//! 3. 관심 상품 등록 및 조회

// region:    --- Imports
use super::model::{
    NewInterest, NewProduct, Product, ProductCreationRequest, ProductFilterRequest,
    ProductSummary, User,
};
use crate::error::{ServiceError, ServiceResult};
use crate::identity::IdentityContext;
use crate::store::{InterestStore, ProductStore, UserStore};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Name Resolution
/// id 목록을 사용자 이름으로 변환 (같은 id 는 한 번만 조회)
pub async fn resolve_names(
    users: &dyn UserStore,
    ids: &[i64],
) -> ServiceResult<HashMap<i64, String>> {
    let mut names = HashMap::new();
    for &id in ids {
        if names.contains_key(&id) {
            continue;
        }
        let user = users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("User {} not found", id)))?;
        names.insert(id, user.full_name);
    }
    Ok(names)
}

// endregion: --- Name Resolution

// region:    --- Product Service
#[derive(Clone)]
pub struct ProductService {
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductStore>,
    interests: Arc<dyn InterestStore>,
}

impl ProductService {
    pub fn new(
        users: Arc<dyn UserStore>,
        products: Arc<dyn ProductStore>,
        interests: Arc<dyn InterestStore>,
    ) -> Self {
        Self {
            users,
            products,
            interests,
        }
    }

    /// 하나의 저장소가 세 역할을 모두 맡는 경우
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: UserStore + ProductStore + InterestStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }

    async fn user_by_email(&self, email: &str) -> ServiceResult<User> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("User {} not found", email)))
    }

    async fn user_by_id(&self, id: i64) -> ServiceResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("User {} not found", id)))
    }

    /// 상품 등록
    pub async fn create_product(
        &self,
        identity: &IdentityContext,
        request: ProductCreationRequest,
    ) -> ServiceResult<Product> {
        info!(
            "{:<12} --> 상품 등록 user: {}, request: {:?}",
            "Service", identity.email, request
        );
        let user = self.user_by_email(&identity.email).await?;

        let product = NewProduct {
            name: request.name,
            owner_id: user.id,
            category: request.category,
            description: request.description,
            image: request.image,
        };
        self.products.save(product).await
    }

    /// 내 상품 전체 조회
    pub async fn get_all_my_product(
        &self,
        identity: &IdentityContext,
    ) -> ServiceResult<Vec<ProductSummary>> {
        info!("{:<12} --> 내 상품 조회 user: {}", "Service", identity.email);
        let user = self.user_by_email(&identity.email).await?;

        self.products
            .find_by_owner(user.id)
            .await?
            .into_iter()
            .map(ProductSummary::try_from)
            .collect()
    }

    /// 상품 조회
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Product> {
        info!("{:<12} --> 상품 조회 id: {}", "Service", id);
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Product {} not found", id)))
    }

    /// 내 상품 카테고리별 조회
    pub async fn get_my_by_category(
        &self,
        identity: &IdentityContext,
        filter: ProductFilterRequest,
    ) -> ServiceResult<Vec<ProductSummary>> {
        info!(
            "{:<12} --> 내 상품 카테고리 조회 user: {}, category: {}",
            "Service", identity.user_id, filter.product_category
        );
        let products = self
            .products
            .find_all_by_owner_and_category(identity.user_id, filter.product_category)
            .await?;

        // 구매자 이름은 응답에 싣지 않지만, 구매자가 실제 사용자인지는 확인한다
        let buyer_ids: Vec<i64> = products.iter().filter_map(|p| p.buyer_id).collect();
        resolve_names(self.users.as_ref(), &buyer_ids).await?;

        Ok(products
            .into_iter()
            .map(|product| ProductSummary {
                owner: None,
                name: product.name,
                category: product.category,
                description: product.description,
                image: product.image,
            })
            .collect())
    }

    /// 상품 삭제 (소유자 확인은 호출 전에 policy::is_product_owner 로 한다)
    pub async fn delete_product(
        &self,
        identity: &IdentityContext,
        id: i64,
    ) -> ServiceResult<ProductSummary> {
        info!(
            "{:<12} --> 상품 삭제 user: {}, id: {}",
            "Service", identity.email, id
        );
        let product = self.get_by_id(id).await?;
        let user = self.user_by_email(&identity.email).await?;

        self.products.delete(product.id).await?;

        Ok(ProductSummary {
            owner: Some(user.full_name),
            name: product.name,
            category: product.category,
            description: product.description,
            image: product.image,
        })
    }

    /// 관심 상품 등록 (같은 사용자/상품 쌍도 매번 새로 기록된다)
    pub async fn interest_product(&self, identity: &IdentityContext, id: i64) -> ServiceResult<()> {
        info!(
            "{:<12} --> 관심 상품 등록 user: {}, id: {}",
            "Service", identity.user_id, id
        );
        let product = self.get_by_id(id).await?;
        let user = self.user_by_id(identity.user_id).await?;

        self.interests
            .save(NewInterest {
                user_id: user.id,
                product_id: product.id,
            })
            .await?;
        Ok(())
    }

    /// 상품 관심 수 조회
    pub async fn get_interest_product(&self, id: i64) -> ServiceResult<i64> {
        info!("{:<12} --> 관심 수 조회 id: {}", "Service", id);
        let product = self.get_by_id(id).await?;
        self.interests.count_by_product(product.id).await
    }

    /// 내 관심 상품 조회
    pub async fn get_my_interest_product(
        &self,
        identity: &IdentityContext,
    ) -> ServiceResult<Vec<ProductSummary>> {
        info!(
            "{:<12} --> 내 관심 상품 조회 user: {}",
            "Service", identity.user_id
        );
        self.interests
            .find_my_interests(identity.user_id)
            .await?
            .into_iter()
            .map(ProductSummary::try_from)
            .collect()
    }

    /// 판매 중인 상품 카테고리 검색
    pub async fn search_product_by_category(
        &self,
        filter: ProductFilterRequest,
    ) -> ServiceResult<Vec<ProductSummary>> {
        info!(
            "{:<12} --> 카테고리 검색: {}",
            "Service", filter.product_category
        );
        let products: Vec<Product> = self
            .products
            .find_all_by_category(filter.product_category)
            .await?
            .into_iter()
            .filter(|product| product.buyer_id.is_none())
            .collect();

        let owner_ids: Vec<i64> = products.iter().map(|p| p.owner_id).collect();
        let owners = resolve_names(self.users.as_ref(), &owner_ids).await?;

        Ok(products
            .into_iter()
            .map(|product| ProductSummary {
                owner: owners.get(&product.owner_id).cloned(),
                name: product.name,
                category: product.category,
                description: product.description,
                image: product.image,
            })
            .collect())
    }
}

// endregion: --- Product Service
