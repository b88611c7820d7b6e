// region:    --- Imports
use figment::providers::Env;
use figment::Figment;
use serde::Deserialize;
use thiserror::Error;

// endregion: --- Imports

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

// region:    --- App Config
/// 서비스 설정 (환경 변수에서 로드)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// true 이면 시작 시 sql/ 스크립트로 스키마를 다시 만든다
    #[serde(default)]
    pub initialize_schema: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl AppConfig {
    /// .env 파일(있으면)과 환경 변수에서 설정 로드
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_figment(Figment::new().merge(Env::raw().only(&[
            "database_url",
            "jwt_secret",
            "bind_addr",
            "max_connections",
            "initialize_schema",
        ])))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }
}

// endregion: --- App Config
