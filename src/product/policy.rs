// region:    --- Imports
use super::service::ProductService;
use crate::error::ServiceResult;
use crate::identity::IdentityContext;
use tracing::info;

// endregion: --- Imports

// region:    --- Ownership Policy
/// 요청 사용자가 상품 소유자인지 확인 (상품이 없으면 NotFound)
pub async fn is_product_owner(
    service: &ProductService,
    product_id: i64,
    identity: &IdentityContext,
) -> ServiceResult<bool> {
    let product = service.get_by_id(product_id).await?;
    let allowed = product.owner_id == identity.user_id;
    info!(
        "{:<12} --> 소유자 확인 id: {}, user: {}, allowed: {}",
        "Policy", product_id, identity.user_id, allowed
    );
    Ok(allowed)
}

// endregion: --- Ownership Policy
