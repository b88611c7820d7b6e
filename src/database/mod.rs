use crate::config::AppConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 초기화 시 순서대로 실행하는 스크립트 (기존 테이블 삭제 → users, products, user_products 생성)
pub const SCHEMA_SCRIPTS: [(&str, &str); 2] = [
    ("00-recreate-db.sql", include_str!("../../sql/00-recreate-db.sql")),
    ("01-create-schema.sql", include_str!("../../sql/01-create-schema.sql")),
];

pub struct DatabaseManager {
    pub pool: Arc<PgPool>,
}

impl DatabaseManager {
    /// 설정값으로 데이터베이스 매니저 생성
    pub async fn new(config: &AppConfig) -> Result<Self, sqlx::Error> {
        Self::connect(&config.database_url, config.max_connections).await
    }

    /// 접속 문자열로 풀 생성
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        info!(
            "{:<12} --> 커넥션 풀 생성 (max_connections: {})",
            "Database", max_connections
        );
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// 클로저를 하나의 트랜잭션 안에서 실행 (실패 시 롤백)
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut sqlx::Transaction<'_, sqlx::Postgres>,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error>,
    {
        let mut tx = self.pool.begin().await?;
        match f(&mut tx).await {
            Ok(r) => {
                tx.commit().await?;
                Ok(r)
            }
            Err(e) => {
                warn!("{:<12} --> 트랜잭션 롤백", "Database");
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    /// 번들된 스키마 스크립트로 테이블을 다시 만든다
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        for (name, sql) in SCHEMA_SCRIPTS {
            let executed = self.execute_script(sql).await?;
            info!(
                "{:<12} --> {} 실행 완료 ({} statements)",
                "Database", name, executed
            );
        }
        Ok(())
    }

    async fn execute_script(&self, sql: &str) -> Result<usize, sqlx::Error> {
        let statements = split_statements(sql);
        for statement in &statements {
            debug!("{:<12} --> {}", "Database", statement);
            sqlx::query(statement).execute(&*self.pool).await?;
        }
        Ok(statements.len())
    }
}

/// `;` 단위로 나눈 비어있지 않은 SQL 문
pub fn split_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}
