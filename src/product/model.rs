use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// region:    --- Category
/// 상품 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Antique,
    Art,
    Book,
    Clothing,
    Collectible,
    Electronics,
    Furniture,
    Jewelry,
    Vehicle,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 10] = [
        Self::Antique,
        Self::Art,
        Self::Book,
        Self::Clothing,
        Self::Collectible,
        Self::Electronics,
        Self::Furniture,
        Self::Jewelry,
        Self::Vehicle,
        Self::Other,
    ];

    /// DB 저장 및 직렬화에 쓰이는 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Antique => "ANTIQUE",
            Self::Art => "ART",
            Self::Book => "BOOK",
            Self::Clothing => "CLOTHING",
            Self::Collectible => "COLLECTIBLE",
            Self::Electronics => "ELECTRONICS",
            Self::Furniture => "FURNITURE",
            Self::Jewelry => "JEWELRY",
            Self::Vehicle => "VEHICLE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ServiceError::InvalidCategory(s.to_string()))
    }
}

// endregion: --- Category

// region:    --- Entities
// 상품 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    /// None 이면 아직 판매되지 않은 상품
    pub buyer_id: Option<i64>,
    pub category: ProductCategory,
    pub description: String,
    pub image: String,
}

// 저장 전 상품
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub owner_id: i64,
    pub category: ProductCategory,
    pub description: String,
    pub image: String,
}

// 사용자 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

// 관심 상품 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Interest {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewInterest {
    pub user_id: i64,
    pub product_id: i64,
}

/// 목록 조회 쿼리의 결과 행 (owner, name, category, description, image)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProductProjection {
    pub owner: Option<String>,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

// endregion: --- Entities

// region:    --- Requests / Responses
/// 상품 등록 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreationRequest {
    pub name: String,
    pub category: ProductCategory,
    pub description: String,
    pub image: String,
}

/// 카테고리 필터 요청
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProductFilterRequest {
    pub product_category: ProductCategory,
}

/// 상품 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub owner: Option<String>,
    pub name: String,
    pub category: ProductCategory,
    pub description: String,
    pub image: String,
}

impl TryFrom<ProductProjection> for ProductSummary {
    type Error = ServiceError;

    fn try_from(row: ProductProjection) -> Result<Self, Self::Error> {
        Ok(Self {
            category: row.category.parse()?,
            owner: row.owner,
            name: row.name,
            description: row.description,
            image: row.image,
        })
    }
}

/// 관심 수 응답
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestCount {
    pub product_id: i64,
    pub count: i64,
}

// endregion: --- Requests / Responses
