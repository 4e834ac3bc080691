//! Categories returned by `GET /categories/{shop}`.

use super::raw::{json_object, list_field, str_field};

json_object! {
    Category
}

impl Category {
    pub fn category_id(&self) -> Option<&str> {
        str_field(&self.0, "categoryId")
    }

    pub fn category_name(&self) -> Option<&str> {
        str_field(&self.0, "categoryName")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    /// Category image URL.
    pub fn image(&self) -> Option<&str> {
        str_field(&self.0, "image")
    }

    /// Products listed under this category, by id and name only.
    pub fn products(&self) -> Option<Vec<CategoryProductRef>> {
        list_field(&self.0, "products")
    }
}

json_object! {
    CategoryProductRef
}

impl CategoryProductRef {
    pub fn product_id(&self) -> Option<&str> {
        str_field(&self.0, "productId")
    }

    pub fn product_name(&self) -> Option<&str> {
        str_field(&self.0, "productName")
    }
}
