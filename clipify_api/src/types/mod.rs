pub(crate) mod raw;

mod envelope;
pub use self::envelope::{Envelope, ItemResponse, ListResponse, Outcome, ShopConfigResponse};

mod shop;
pub use self::shop::{ShopAddress, ShopConfig, ShopProfileConfig};

mod category;
pub use self::category::{Category, CategoryProductRef};

mod product;
pub use self::product::{Product, ProductModifier};

mod coupon;
pub use self::coupon::Coupon;

/// Response of `GET /categories/{shop}`.
pub type CategoriesResponse = ListResponse<Category>;
/// Response of `GET /products/{category}/{token}`.
pub type ProductsResponse = ListResponse<Product>;
/// Response of `GET /product/{product}/{token}`.
pub type ProductResponse = ItemResponse<Product>;
/// Response of `GET /coupons/{token}`.
pub type CouponsResponse = ListResponse<Coupon>;
