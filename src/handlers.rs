// region:    --- Imports
use crate::app::AppState;
use crate::error::{ServiceError, ServiceResult};
use crate::identity::IdentityContext;
use crate::product::model::{
    InterestCount, Product, ProductCreationRequest, ProductFilterRequest, ProductSummary,
};
use crate::product::policy;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

// endregion: --- Imports

// region:    --- Command Handlers

/// 상품 등록
pub async fn handle_create_product(
    State(state): State<AppState>,
    identity: IdentityContext,
    Json(request): Json<ProductCreationRequest>,
) -> ServiceResult<(StatusCode, Json<Product>)> {
    info!("{:<12} --> 상품 등록 요청: {:?}", "Handler", request);
    let product = state.service.create_product(&identity, request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// 상품 삭제 (소유자만 가능)
pub async fn handle_delete_product(
    State(state): State<AppState>,
    identity: IdentityContext,
    Path(id): Path<i64>,
) -> ServiceResult<Json<ProductSummary>> {
    info!("{:<12} --> 상품 삭제 요청 id: {}", "Handler", id);
    if !policy::is_product_owner(&state.service, id, &identity).await? {
        return Err(ServiceError::forbidden(format!(
            "User {} does not own product {}",
            identity.user_id, id
        )));
    }
    let deleted = state.service.delete_product(&identity, id).await?;
    Ok(Json(deleted))
}

/// 관심 상품 등록
pub async fn handle_interest_product(
    State(state): State<AppState>,
    identity: IdentityContext,
    Path(id): Path<i64>,
) -> ServiceResult<StatusCode> {
    info!("{:<12} --> 관심 상품 등록 요청 id: {}", "Handler", id);
    state.service.interest_product(&identity, id).await?;
    Ok(StatusCode::CREATED)
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 상품 조회
pub async fn handle_get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<Product>> {
    info!("{:<12} --> 상품 조회 id: {}", "HandlerQuery", id);
    Ok(Json(state.service.get_by_id(id).await?))
}

/// 내 상품 조회
pub async fn handle_get_my_products(
    State(state): State<AppState>,
    identity: IdentityContext,
) -> ServiceResult<Json<Vec<ProductSummary>>> {
    info!("{:<12} --> 내 상품 조회", "HandlerQuery");
    Ok(Json(state.service.get_all_my_product(&identity).await?))
}

/// 내 상품 카테고리별 조회
pub async fn handle_get_my_by_category(
    State(state): State<AppState>,
    identity: IdentityContext,
    Query(filter): Query<ProductFilterRequest>,
) -> ServiceResult<Json<Vec<ProductSummary>>> {
    info!(
        "{:<12} --> 내 상품 카테고리 조회: {}",
        "HandlerQuery", filter.product_category
    );
    Ok(Json(state.service.get_my_by_category(&identity, filter).await?))
}

/// 상품 관심 수 조회
pub async fn handle_get_interest_count(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<InterestCount>> {
    info!("{:<12} --> 관심 수 조회 id: {}", "HandlerQuery", id);
    let count = state.service.get_interest_product(id).await?;
    Ok(Json(InterestCount {
        product_id: id,
        count,
    }))
}

/// 내 관심 상품 조회
pub async fn handle_get_my_interests(
    State(state): State<AppState>,
    identity: IdentityContext,
) -> ServiceResult<Json<Vec<ProductSummary>>> {
    info!("{:<12} --> 내 관심 상품 조회", "HandlerQuery");
    Ok(Json(state.service.get_my_interest_product(&identity).await?))
}

/// 판매 중인 상품 카테고리 검색
pub async fn handle_search_by_category(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilterRequest>,
) -> ServiceResult<Json<Vec<ProductSummary>>> {
    info!(
        "{:<12} --> 카테고리 검색: {}",
        "HandlerQuery", filter.product_category
    );
    Ok(Json(state.service.search_product_by_category(filter).await?))
}

// endregion: --- Query Handlers
