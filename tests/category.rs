use auction_product_service::error::ServiceError;
use auction_product_service::product::model::{
    ProductCategory, ProductFilterRequest, ProductProjection, ProductSummary,
};

/// 모든 카테고리는 문자열로 바꿨다가 다시 같은 값으로 파싱된다
#[test]
fn test_category_string_round_trip() {
    for category in ProductCategory::ALL {
        let parsed: ProductCategory = category.to_string().parse().unwrap();
        assert_eq!(parsed, category);

        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.as_str()));
        let decoded: ProductCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, category);
    }
}

#[test]
fn test_unknown_category_is_rejected() {
    let parsed = "SPACESHIP".parse::<ProductCategory>();
    assert!(matches!(parsed, Err(ServiceError::InvalidCategory(ref s)) if s == "SPACESHIP"));

    // 대소문자도 구분한다
    assert!("antique".parse::<ProductCategory>().is_err());

    let decoded = serde_json::from_str::<ProductFilterRequest>(r#"{"product_category":"SPACESHIP"}"#);
    assert!(decoded.is_err());
}

/// 목록 조회 행의 카테고리 문자열 변환
#[test]
fn test_projection_into_summary() {
    let row = ProductProjection {
        owner: Some("Owner Kim".to_string()),
        name: "Vase".to_string(),
        category: "ANTIQUE".to_string(),
        description: "청자".to_string(),
        image: "vase.png".to_string(),
    };
    let summary = ProductSummary::try_from(row.clone()).unwrap();
    assert_eq!(summary.category, ProductCategory::Antique);
    assert_eq!(summary.owner.as_deref(), Some("Owner Kim"));

    let broken = ProductProjection {
        category: "antique?".to_string(),
        ..row
    };
    assert!(matches!(
        ProductSummary::try_from(broken),
        Err(ServiceError::InvalidCategory(_))
    ));
}
