//! Shop configuration returned by `GET /config/{shop}`.

use serde_json::Value;

use super::raw::{bool_field, json_object, object_field, str_field};

json_object! {
    /// Merchant profile and storefront settings.
    ShopConfig
}

impl ShopConfig {
    pub fn address(&self) -> Option<ShopAddress> {
        object_field(&self.0, "address")
    }

    /// Short name of the shop, as used in the config URL.
    pub fn alias(&self) -> Option<&str> {
        str_field(&self.0, "alias")
    }

    /// ISO 8601 creation timestamp.
    pub fn created_at(&self) -> Option<&str> {
        str_field(&self.0, "createdAt")
    }

    pub fn email(&self) -> Option<&str> {
        str_field(&self.0, "email")
    }

    /// Address formatted as a single line.
    pub fn full_address(&self) -> Option<&str> {
        str_field(&self.0, "fullAddress")
    }

    /// Profile image URL.
    pub fn image(&self) -> Option<&str> {
        str_field(&self.0, "image")
    }

    pub fn opengraph_banner(&self) -> Option<&str> {
        str_field(&self.0, "opengraphBanner")
    }

    pub fn phone(&self) -> Option<&str> {
        str_field(&self.0, "phone")
    }

    pub fn profile_config(&self) -> Option<ShopProfileConfig> {
        object_field(&self.0, "profileConfig")
    }

    pub fn proxy_merchant_id(&self) -> Option<&str> {
        str_field(&self.0, "proxyMerchantId")
    }

    /// Token required by the product and coupon endpoints.
    pub fn proxy_merchant_token(&self) -> Option<&str> {
        str_field(&self.0, "proxyMerchantToken")
    }

    pub fn proxy_user_id(&self) -> Option<&str> {
        str_field(&self.0, "proxyUserId")
    }

    pub fn public_description(&self) -> Option<&str> {
        str_field(&self.0, "publicDescription")
    }

    pub fn public_name(&self) -> Option<&str> {
        str_field(&self.0, "publicName")
    }

    /// ISO 8601 timestamp of the last update.
    pub fn updated_at(&self) -> Option<&str> {
        str_field(&self.0, "updatedAt")
    }
}

json_object! {
    /// Postal address of the merchant.
    ShopAddress
}

impl ShopAddress {
    pub fn address_type(&self) -> Option<&str> {
        str_field(&self.0, "addressType")
    }

    pub fn colony(&self) -> Option<&str> {
        str_field(&self.0, "colony")
    }

    pub fn first_address(&self) -> Option<&str> {
        str_field(&self.0, "firstAddress")
    }

    pub fn municipality(&self) -> Option<&str> {
        str_field(&self.0, "municipality")
    }

    /// Postal code. Some merchants have it stored as a number.
    pub fn postal_code(&self) -> Option<String> {
        match self.0.get("postalCode")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn second_address(&self) -> Option<&str> {
        str_field(&self.0, "secondAddress")
    }

    pub fn state(&self) -> Option<&str> {
        str_field(&self.0, "state")
    }
}

json_object! {
    /// Which contact details the public profile shows.
    ShopProfileConfig
}

impl ShopProfileConfig {
    pub fn profile_active(&self) -> Option<bool> {
        bool_field(&self.0, "profileActive")
    }

    pub fn show_address(&self) -> Option<bool> {
        bool_field(&self.0, "showAddress")
    }

    pub fn show_email(&self) -> Option<bool> {
        bool_field(&self.0, "showEmail")
    }

    pub fn show_phone(&self) -> Option<bool> {
        bool_field(&self.0, "showPhone")
    }
}
