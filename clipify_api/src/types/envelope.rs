//! Response envelopes shared by every endpoint.
//!
//! Each endpoint answers with `{ "success": bool, <payload>?, "error"? }`
//! where the payload key is `config`, `items` or `item`. The envelopes keep
//! the body exactly as received: the client never acts on `success` itself,
//! and nothing is defaulted or dropped. Callers that want a tagged result use
//! [`Envelope::into_outcome`].

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{error_text, json_object, list_field, object_field, str_field};
use super::ShopConfig;

/// Message used by [`Envelope::into_outcome`] when an unsuccessful envelope
/// carries no usable `error`.
const UNSPECIFIED_FAILURE: &str = "request was not successful";

/// The in-band result of an API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<P> {
    Success(P),
    Failure(String),
}

impl<P> Outcome<P> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts into a `Result`, with the failure message as the error.
    pub fn into_result(self) -> Result<P, String> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(message) => Err(message),
        }
    }
}

/// Common view over the endpoint envelopes.
pub trait Envelope {
    type Payload;

    /// The body exactly as received.
    fn as_value(&self) -> &Value;

    /// Splits the envelope on its `success` flag. Anything other than
    /// `"success": true` is a failure.
    fn into_outcome(self) -> Outcome<Self::Payload>;

    /// The `success` flag, if the server sent a boolean.
    fn success(&self) -> Option<bool> {
        self.as_value().get("success")?.as_bool()
    }

    fn is_success(&self) -> bool {
        self.success() == Some(true)
    }

    /// The `error` field, if the server sent a string.
    fn error(&self) -> Option<&str> {
        str_field(self.as_value(), "error")
    }
}

fn failure<P>(body: &Value) -> Outcome<P> {
    Outcome::Failure(error_text(body).unwrap_or_else(|| UNSPECIFIED_FAILURE.to_string()))
}

json_object! {
    /// Envelope of `GET /config/{shop}`.
    ShopConfigResponse
}

impl ShopConfigResponse {
    pub fn config(&self) -> Option<ShopConfig> {
        object_field(&self.0, "config")
    }

    /// The merchant token the product and coupon endpoints require.
    pub fn merchant_token(&self) -> Option<&str> {
        self.0.get("config")?.get("proxyMerchantToken")?.as_str()
    }
}

impl Envelope for ShopConfigResponse {
    type Payload = Option<ShopConfig>;

    fn as_value(&self) -> &Value {
        &self.0
    }

    fn into_outcome(self) -> Outcome<Self::Payload> {
        if self.is_success() {
            Outcome::Success(self.config())
        } else {
            failure(&self.0)
        }
    }
}

/// Envelope of the list endpoints (categories, products, coupons).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct ListResponse<T> {
    raw: Value,
    #[serde(skip)]
    _items: PhantomData<T>,
}

impl<T> From<Value> for ListResponse<T> {
    fn from(raw: Value) -> Self {
        Self {
            raw,
            _items: PhantomData,
        }
    }
}

impl<T: From<Value>> ListResponse<T> {
    /// The `items` array, if present. Each element is wrapped as received.
    pub fn items(&self) -> Option<Vec<T>> {
        list_field(&self.raw, "items")
    }

    pub fn into_value(self) -> Value {
        self.raw
    }
}

impl<T: From<Value>> Envelope for ListResponse<T> {
    type Payload = Vec<T>;

    fn as_value(&self) -> &Value {
        &self.raw
    }

    /// A successful envelope without `items` yields an empty list.
    fn into_outcome(self) -> Outcome<Self::Payload> {
        if self.is_success() {
            Outcome::Success(self.items().unwrap_or_default())
        } else {
            failure(&self.raw)
        }
    }
}

/// Envelope of `GET /product/{product}/{token}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct ItemResponse<T> {
    raw: Value,
    #[serde(skip)]
    _item: PhantomData<T>,
}

impl<T> From<Value> for ItemResponse<T> {
    fn from(raw: Value) -> Self {
        Self {
            raw,
            _item: PhantomData,
        }
    }
}

impl<T: From<Value>> ItemResponse<T> {
    pub fn item(&self) -> Option<T> {
        object_field(&self.raw, "item")
    }

    pub fn into_value(self) -> Value {
        self.raw
    }
}

impl<T: From<Value>> Envelope for ItemResponse<T> {
    type Payload = Option<T>;

    fn as_value(&self) -> &Value {
        &self.raw
    }

    fn into_outcome(self) -> Outcome<Self::Payload> {
        if self.is_success() {
            Outcome::Success(self.item())
        } else {
            failure(&self.raw)
        }
    }
}
