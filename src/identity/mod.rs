//! 요청 사용자 식별
//!
//! Bearer 토큰을 요청당 한 번 검증해 `IdentityContext` 를 만들고,
//! 이후 모든 서비스 호출에 그 값을 그대로 넘긴다.

// region:    --- Imports
use crate::error::{ServiceError, ServiceResult};
use crate::product::model::User;
use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

// endregion: --- Imports

// region:    --- Identity Context
/// 인증된 요청 사용자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    pub user_id: i64,
    pub email: String,
}

impl From<Claims> for IdentityContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.sub,
        }
    }
}

/// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (email)
    pub sub: String,
    /// 사용자 id
    pub id: i64,
    pub iat: i64,
    pub exp: i64,
}

// endregion: --- Identity Context

// region:    --- Token Service
/// 토큰 검증 및 발급
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, expires_in_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in_secs,
        }
    }

    /// 사용자 토큰 발급
    pub fn issue(&self, user: &User) -> ServiceResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.email.clone(),
            id: user.id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expires_in_secs)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("Failed to issue token: {}", e)))
    }

    /// 토큰 검증
    pub fn validate(&self, token: &str) -> ServiceResult<IdentityContext> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| ServiceError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims.into())
    }
}

// endregion: --- Token Service

// region:    --- Extractor
/// 핸들러 인자로 IdentityContext 를 받으면 Bearer 토큰을 검증한다
#[async_trait]
impl<S> FromRequestParts<S> for IdentityContext
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = Arc::<TokenService>::from_ref(state);
        let identity = match extract_bearer(&parts.headers).and_then(|token| tokens.validate(token)) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("{:<12} --> 인증 실패: {}", "Auth", e);
                return Err(e);
            }
        };

        debug!(
            "{:<12} --> 인증 성공 user: {}, email: {}",
            "Auth", identity.user_id, identity.email
        );
        Ok(identity)
    }
}

fn extract_bearer(headers: &HeaderMap) -> ServiceResult<&str> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ServiceError::unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| ServiceError::unauthorized("Malformed Authorization header"))?;

    // 스킴은 대소문자를 구분하지 않는다 (RFC 7235)
    let token = match header.trim().split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => "",
    };
    if token.is_empty() {
        return Err(ServiceError::unauthorized("Missing bearer token"));
    }

    Ok(token)
}

// endregion: --- Extractor
