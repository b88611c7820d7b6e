/// 이메일로 사용자 조회
pub const GET_USER_BY_EMAIL: &str = "SELECT id, email, full_name FROM users WHERE email = $1";

/// id 로 사용자 조회
pub const GET_USER_BY_ID: &str = "SELECT id, email, full_name FROM users WHERE id = $1";

/// 상품 등록
pub const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, owner_id, category, description, image)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, name, owner_id, buyer_id, category, description, image
"#;

/// 상품 조회
pub const GET_PRODUCT: &str =
    "SELECT id, name, owner_id, buyer_id, category, description, image FROM products WHERE id = $1";

/// 상품 삭제
pub const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = $1";

/// 내 상품 목록 (소유자 이름 포함)
pub const GET_PRODUCTS_BY_OWNER: &str = r#"
    SELECT u.full_name AS owner, p.name, p.category, p.description, p.image
    FROM products p
    JOIN users u ON u.id = p.owner_id
    WHERE p.owner_id = $1
"#;

/// 소유자 + 카테고리 조회
pub const GET_PRODUCTS_BY_OWNER_AND_CATEGORY: &str = r#"
    SELECT id, name, owner_id, buyer_id, category, description, image
    FROM products
    WHERE owner_id = $1 AND category = $2
"#;

/// 카테고리 조회
pub const GET_PRODUCTS_BY_CATEGORY: &str =
    "SELECT id, name, owner_id, buyer_id, category, description, image FROM products WHERE category = $1";

/// 관심 상품 등록
pub const INSERT_INTEREST: &str =
    "INSERT INTO user_products (user_id, product_id) VALUES ($1, $2) RETURNING id, user_id, product_id";

/// 상품 관심 수 조회
pub const COUNT_INTERESTS_BY_PRODUCT: &str =
    "SELECT COUNT(*) AS interest_count FROM user_products WHERE product_id = $1";

/// 내 관심 상품 목록 (상품 소유자 이름 포함)
pub const GET_MY_INTERESTS: &str = r#"
    SELECT u.full_name AS owner, p.name, p.category, p.description, p.image
    FROM user_products up
    JOIN products p ON p.id = up.product_id
    JOIN users u ON u.id = p.owner_id
    WHERE up.user_id = $1
"#;
