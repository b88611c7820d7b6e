// region:    --- Imports
use super::{InterestStore, ProductStore, UserStore};
use crate::error::ServiceResult;
use crate::product::model::{
    Interest, NewInterest, NewProduct, Product, ProductCategory, ProductProjection, User,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

// endregion: --- Imports

// region:    --- In-Memory Store
#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    products: BTreeMap<i64, Product>,
    interests: Vec<Interest>,
    next_user_id: i64,
    next_product_id: i64,
    next_interest_id: i64,
}

impl Tables {
    fn owner_name(&self, owner_id: i64) -> Option<String> {
        self.users.get(&owner_id).map(|u| u.full_name.clone())
    }

    fn project(&self, product: &Product) -> ProductProjection {
        ProductProjection {
            owner: self.owner_name(product.owner_id),
            name: product.name.clone(),
            category: product.category.as_str().to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}

/// 프로세스 내 저장소 (테스트용)
///
/// 행은 id 순서로 반환되며, 상품 삭제 시 해당 관심 기록도 함께 지운다.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // poison 상태여도 테이블은 일관적이다
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 사용자 등록 (사용자 관리는 외부 서비스 담당)
    pub fn insert_user(&self, email: &str, full_name: &str) -> User {
        let mut tables = self.tables();
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            email: email.to_string(),
            full_name: full_name.to_string(),
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    /// 외부 판매 프로세스가 구매자를 지정한 상태를 재현
    pub fn set_buyer(&self, product_id: i64, buyer_id: Option<i64>) -> bool {
        match self.tables().products.get_mut(&product_id) {
            Some(product) => {
                product.buyer_id = buyer_id;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        Ok(self
            .tables()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> ServiceResult<Option<User>> {
        Ok(self.tables().users.get(&id).cloned())
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn save(&self, product: NewProduct) -> ServiceResult<Product> {
        let mut tables = self.tables();
        tables.next_product_id += 1;
        let saved = Product {
            id: tables.next_product_id,
            name: product.name,
            owner_id: product.owner_id,
            buyer_id: None,
            category: product.category,
            description: product.description,
            image: product.image,
        };
        tables.products.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> ServiceResult<Option<Product>> {
        Ok(self.tables().products.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        let mut tables = self.tables();
        tables.products.remove(&id);
        tables.interests.retain(|i| i.product_id != id);
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: i64) -> ServiceResult<Vec<ProductProjection>> {
        let tables = self.tables();
        Ok(tables
            .products
            .values()
            .filter(|p| p.owner_id == owner_id)
            .map(|p| tables.project(p))
            .collect())
    }

    async fn find_all_by_owner_and_category(
        &self,
        owner_id: i64,
        category: ProductCategory,
    ) -> ServiceResult<Vec<Product>> {
        Ok(self
            .tables()
            .products
            .values()
            .filter(|p| p.owner_id == owner_id && p.category == category)
            .cloned()
            .collect())
    }

    async fn find_all_by_category(&self, category: ProductCategory) -> ServiceResult<Vec<Product>> {
        Ok(self
            .tables()
            .products
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl InterestStore for InMemoryStore {
    async fn save(&self, interest: NewInterest) -> ServiceResult<Interest> {
        let mut tables = self.tables();
        tables.next_interest_id += 1;
        let saved = Interest {
            id: tables.next_interest_id,
            user_id: interest.user_id,
            product_id: interest.product_id,
        };
        tables.interests.push(saved.clone());
        Ok(saved)
    }

    async fn count_by_product(&self, product_id: i64) -> ServiceResult<i64> {
        let count = self
            .tables()
            .interests
            .iter()
            .filter(|i| i.product_id == product_id)
            .count();
        Ok(count as i64)
    }

    async fn find_my_interests(&self, user_id: i64) -> ServiceResult<Vec<ProductProjection>> {
        let tables = self.tables();
        Ok(tables
            .interests
            .iter()
            .filter(|i| i.user_id == user_id)
            .filter_map(|i| tables.products.get(&i.product_id))
            .map(|p| tables.project(p))
            .collect())
    }
}

// endregion: --- In-Memory Store
