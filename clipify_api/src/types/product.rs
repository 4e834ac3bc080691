//! Products returned by the `/products` and `/product` endpoints.

use serde_json::{Number, Value};

use super::raw::{bool_field, json_object, list_field, number_field, str_field};

json_object! {
    /// A catalog product.
    ///
    /// Prices are decimal strings on the wire and are returned that way.
    /// Counters are returned as raw JSON numbers.
    Product
}

impl Product {
    pub fn base_price(&self) -> Option<&str> {
        str_field(&self.0, "basePrice")
    }

    pub fn ct(&self) -> Option<&str> {
        str_field(&self.0, "ct")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    pub fn enabled(&self) -> Option<bool> {
        bool_field(&self.0, "enabled")
    }

    /// Primary image URL.
    pub fn image(&self) -> Option<&str> {
        str_field(&self.0, "image")
    }

    /// All image URLs, primary included. Non-string entries are skipped.
    pub fn images(&self) -> Option<Vec<&str>> {
        let images = self.0.get("images")?.as_array()?;
        Some(images.iter().filter_map(Value::as_str).collect())
    }

    pub fn modifiers(&self) -> Option<Vec<ProductModifier>> {
        list_field(&self.0, "modifiers")
    }

    pub fn number_of_modifiers(&self) -> Option<&Number> {
        number_field(&self.0, "numberOfModifiers")
    }

    pub fn number_of_variants(&self) -> Option<&Number> {
        number_field(&self.0, "numberOfVariants")
    }

    pub fn price(&self) -> Option<&str> {
        str_field(&self.0, "price")
    }

    pub fn product_id(&self) -> Option<&str> {
        str_field(&self.0, "productId")
    }

    pub fn product_name(&self) -> Option<&str> {
        str_field(&self.0, "productName")
    }

    pub fn sku(&self) -> Option<&str> {
        str_field(&self.0, "sku")
    }

    pub fn stock(&self) -> Option<&Number> {
        number_field(&self.0, "stock")
    }

    pub fn stock_status(&self) -> Option<&str> {
        str_field(&self.0, "stockStatus")
    }

    pub fn version(&self) -> Option<&str> {
        str_field(&self.0, "version")
    }
}

json_object! {
    /// A modifier group attached to a product.
    ProductModifier
}

impl ProductModifier {
    pub fn modifier_id(&self) -> Option<&str> {
        str_field(&self.0, "modifierId")
    }

    pub fn modifier_name(&self) -> Option<&str> {
        str_field(&self.0, "modifierName")
    }

    /// Modifier options. Only `GET /product` fills these in.
    pub fn options(&self) -> Option<&Vec<Value>> {
        self.0.get("options")?.as_array()
    }
}
