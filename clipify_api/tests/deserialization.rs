use clipify_api::types::{
    CategoriesResponse, CouponsResponse, Envelope, Outcome, ProductResponse, ProductsResponse,
    ShopConfigResponse,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_config() {
    let json = load_fixture("config.json");
    let resp: ShopConfigResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.error(), None);
    assert_eq!(
        resp.merchant_token(),
        Some("b5e2c0de-8a1f-4c3e-9b7a-2d6f0e4a1b22")
    );

    let config = resp.config().unwrap();
    assert_eq!(config.alias(), Some("cafe-luna"));
    assert_eq!(config.public_name(), Some("Café Luna"));
    assert_eq!(config.created_at(), Some("2024-03-01T12:00:00.000Z"));

    let address = config.address().unwrap();
    assert_eq!(address.address_type(), None);
    assert_eq!(address.postal_code().as_deref(), Some("06000"));

    let profile = config.profile_config().unwrap();
    assert_eq!(profile.profile_active(), Some(true));
    assert_eq!(profile.show_email(), Some(false));
}

#[test]
fn deserialize_categories() {
    let json = load_fixture("categories.json");
    let resp: CategoriesResponse = serde_json::from_str(&json).unwrap();
    let items = resp.items().unwrap();
    assert_eq!(items.len(), 2);

    let hot = &items[0];
    assert_eq!(hot.category_name(), Some("Bebidas calientes"));
    assert_eq!(hot.description(), None);
    let refs = hot.products().unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[1].product_name(), Some("Latte"));

    let desserts = &items[1];
    assert_eq!(desserts.image(), None);
    assert!(desserts.products().unwrap().is_empty());
}

#[test]
fn deserialize_products() {
    let json = load_fixture("products.json");
    let resp: ProductsResponse = serde_json::from_str(&json).unwrap();
    let items = resp.items().unwrap();
    assert_eq!(items.len(), 1);

    let latte = &items[0];
    assert_eq!(latte.product_id(), Some("p-002"));
    assert_eq!(latte.price(), Some("55.00"));
    assert_eq!(latte.base_price(), None);
    assert_eq!(latte.sku(), None);
    assert_eq!(latte.stock().and_then(|n| n.as_i64()), Some(12));
    assert_eq!(latte.images().unwrap().len(), 2);

    let modifiers = latte.modifiers().unwrap();
    assert_eq!(modifiers.len(), 2);
    assert_eq!(modifiers[0].modifier_name(), Some("Tamaño"));
    assert_eq!(modifiers[0].options(), None);
}

#[test]
fn deserialize_single_product_with_modifier_options() {
    let json = load_fixture("product.json");
    let resp: ProductResponse = serde_json::from_str(&json).unwrap();
    let product = resp.item().unwrap();
    assert_eq!(product.sku(), Some("LAT-001"));
    assert_eq!(product.ct(), None);

    let modifiers = product.modifiers().unwrap();
    let options = modifiers[0].options().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1]["name"], "Grande");
}

#[test]
fn deserialize_coupons() {
    let json = load_fixture("coupons.json");
    let resp: CouponsResponse = serde_json::from_str(&json).unwrap();
    let coupons = match resp.into_outcome() {
        Outcome::Success(items) => items,
        Outcome::Failure(message) => panic!("unexpected failure: {}", message),
    };
    assert_eq!(coupons.len(), 2);
    assert_eq!(coupons[0].discount_type(), Some("PERCENTAGE"));
    assert_eq!(coupons[0].value().and_then(|n| n.as_i64()), Some(10));
    assert_eq!(coupons[1].value().and_then(|n| n.as_f64()), Some(25.5));
    assert_eq!(coupons[1].valid_until(), None);
}

#[test]
fn deserialize_coupons_empty() {
    let json = load_fixture("coupons_empty.json");
    let resp: CouponsResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.is_success());
    assert!(resp.items().unwrap().is_empty());
}

#[test]
fn fixtures_reencode_unchanged() {
    for name in [
        "config.json",
        "categories.json",
        "products.json",
        "product.json",
        "coupons.json",
    ] {
        let json = load_fixture(name);
        let original: serde_json::Value = serde_json::from_str(&json).unwrap();
        let resp: ProductsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(serde_json::to_value(&resp).unwrap(), original, "{}", name);
    }
}
