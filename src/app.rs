// region:    --- Imports
use crate::handlers;
use crate::identity::TokenService;
use crate::product::service::ProductService;
use axum::extract::{DefaultBodyLimit, FromRef};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// endregion: --- Imports

// region:    --- App State
#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(service: ProductService, tokens: Arc<TokenService>) -> Self {
        Self { service, tokens }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.tokens)
    }
}

// endregion: --- App State

// region:    --- Router
/// 라우터 설정
pub fn router(state: AppState) -> Router {
    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/products", post(handlers::handle_create_product))
        .route("/products/me", get(handlers::handle_get_my_products))
        .route(
            "/products/me/category",
            get(handlers::handle_get_my_by_category),
        )
        .route(
            "/products/me/interests",
            get(handlers::handle_get_my_interests),
        )
        .route(
            "/products/search",
            get(handlers::handle_search_by_category),
        )
        .route(
            "/products/:id",
            get(handlers::handle_get_product).delete(handlers::handle_delete_product),
        )
        .route(
            "/products/:id/interest",
            get(handlers::handle_get_interest_count).post(handlers::handle_interest_product),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024 * 2))
        .with_state(state)
}

// endregion: --- Router
