// region:    --- Imports
use auction_product_service::app::{self, AppState};
use auction_product_service::config::AppConfig;
use auction_product_service::database::DatabaseManager;
use auction_product_service::identity::TokenService;
use auction_product_service::product::service::ProductService;
use auction_product_service::store::PgStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// 토큰 유효 시간 (초)
const TOKEN_EXPIRES_IN: i64 = 3600;

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = AppConfig::load()?;

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new(&config).await?);

    // 데이터베이스 초기화 (설정된 경우만)
    if config.initialize_schema {
        if let Err(e) = db_manager.initialize_database().await {
            error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
            return Err(e.into());
        }
        info!("{:<12} --> 데이터베이스 초기화 성공", "Main");
    }

    // 서비스 구성
    let service = ProductService::with_store(Arc::new(PgStore::new(Arc::clone(&db_manager))));
    let tokens = Arc::new(TokenService::new(&config.jwt_secret, TOKEN_EXPIRES_IN));
    let routes_all = app::router(AppState::new(service, tokens));

    // 리스너 생성
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
