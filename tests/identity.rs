use auction_product_service::error::ServiceError;
use axum::http::StatusCode;
use auction_product_service::identity::{IdentityContext, TokenService};
use auction_product_service::product::model::User;

fn user() -> User {
    User {
        id: 7,
        email: "owner@example.com".to_string(),
        full_name: "Owner Kim".to_string(),
    }
}

/// 발급한 토큰에서 id 와 이메일을 함께 복원한다
#[test]
fn test_issue_and_validate_token() {
    let tokens = TokenService::new("secret", 3600);
    let token = tokens.issue(&user()).unwrap();

    let identity = tokens.validate(&token).unwrap();
    assert_eq!(
        identity,
        IdentityContext {
            user_id: 7,
            email: "owner@example.com".to_string(),
        }
    );
}

#[test]
fn test_expired_token_is_rejected() {
    let tokens = TokenService::new("secret", -120);
    let token = tokens.issue(&user()).unwrap();

    assert!(matches!(
        tokens.validate(&token),
        Err(ServiceError::Unauthorized(_))
    ));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let token = TokenService::new("other", 3600).issue(&user()).unwrap();

    let result = TokenService::new("secret", 3600).validate(&token);
    assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
}

/// 토큰 발급 실패는 서버 측 오류로 응답한다
#[test]
fn test_internal_error_maps_to_server_error() {
    let error = ServiceError::internal("Failed to issue token: bad key");

    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.code(), "INTERNAL_ERROR");
    assert_ne!(
        error.status_code(),
        ServiceError::unauthorized("bad token").status_code()
    );
}
