//! Coupons returned by `GET /coupons/{token}`.

use serde_json::Number;

use super::raw::{json_object, number_field, str_field};

json_object! {
    /// An active coupon.
    Coupon
}

impl Coupon {
    pub fn coupon_id(&self) -> Option<&str> {
        str_field(&self.0, "couponId")
    }

    pub fn coupon_name(&self) -> Option<&str> {
        str_field(&self.0, "couponName")
    }

    /// e.g. `PERCENTAGE` or `FIXED_AMOUNT`.
    pub fn discount_type(&self) -> Option<&str> {
        str_field(&self.0, "discountType")
    }

    /// Discount amount: `10` for 10% or `10.00` for a fixed amount,
    /// depending on `discount_type`.
    pub fn value(&self) -> Option<&Number> {
        number_field(&self.0, "value")
    }

    /// Minimum purchase, as a decimal string.
    pub fn min_purchase_amount(&self) -> Option<&str> {
        str_field(&self.0, "minPurchaseAmount")
    }

    /// ISO 8601 start of validity.
    pub fn valid_from(&self) -> Option<&str> {
        str_field(&self.0, "validFrom")
    }

    /// ISO 8601 end of validity.
    pub fn valid_until(&self) -> Option<&str> {
        str_field(&self.0, "validUntil")
    }
}
