//! HTTP client for the clip-ify storefront API.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::ClientConfig,
    transport::{ReqwestTransport, RequestOptions, Transport, TransportResponse},
    types::{
        raw::error_text, CategoriesResponse, CouponsResponse, ProductResponse, ProductsResponse,
        ShopConfigResponse,
    },
    Error,
};

/// HTTP client for the clip-ify storefront API.
///
/// Holds an immutable base URL and a [`Transport`]. Every operation is a
/// single GET whose decoded JSON envelope is returned as-is, including
/// envelopes that report `success: false`. Only non-2xx statuses, transport
/// failures, and undecodable bodies become an [`Error`].
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    /// Base URL for the API. Defaults to `https://clip-ify.pockethost.io`.
    base_url: String,
    transport: T,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Creates a client with a custom base URL. An empty string falls back to
    /// the production API.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::from_config(ClientConfig::with_base_url(base_url))
    }

    /// Creates a client from a [`ClientConfig`], using the default reqwest
    /// transport.
    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.resolved_base_url().to_string(),
            transport,
        }
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `endpoint` (appended verbatim to the base URL) and decodes the
    /// 2xx body. Every failure is logged with the URL before it is returned.
    async fn request<R>(&self, endpoint: &str, options: &RequestOptions) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, method = %options.method, "sending request");
        self.send(&url, options).await.map_err(|e| {
            tracing::error!(%url, error = %e, "clipify: error fetching");
            e
        })
    }

    async fn send<R>(&self, url: &str, options: &RequestOptions) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let resp = self.transport.send(url, options).await?;
        if !resp.is_success() {
            return Err(http_error(&resp));
        }
        Ok(resp.json::<R>()?)
    }

    async fn get<R>(&self, endpoint: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(endpoint, &RequestOptions::default()).await
    }

    /// Fetches the configuration of a shop, including the merchant token
    /// used by the product and coupon endpoints.
    pub async fn get_config(&self, shop_name: &str) -> Result<ShopConfigResponse, Error> {
        require("get_config", &[("shop_name", shop_name)])?;
        self.get(&format!("/config/{}", shop_name)).await
    }

    /// Fetches the categories of a shop.
    pub async fn get_categories(&self, shop_name: &str) -> Result<CategoriesResponse, Error> {
        require("get_categories", &[("shop_name", shop_name)])?;
        self.get(&format!("/categories/{}", shop_name)).await
    }

    /// Fetches the products of a category. `limit` is sent whenever it is
    /// `Some`, zero and negative values included; the server decides what
    /// they mean. Fractional limits are not expressible.
    pub async fn get_products(
        &self,
        category_id: &str,
        proxy_merchant_token: &str,
        limit: Option<i64>,
    ) -> Result<ProductsResponse, Error> {
        require(
            "get_products",
            &[
                ("category_id", category_id),
                ("proxy_merchant_token", proxy_merchant_token),
            ],
        )?;
        let mut endpoint = format!("/products/{}/{}", category_id, proxy_merchant_token);
        if let Some(limit) = limit {
            endpoint.push_str(&format!("?limit={}", limit));
        }
        self.get(&endpoint).await
    }

    /// Fetches a single product, with its modifier options filled in.
    pub async fn get_product(
        &self,
        product_id: &str,
        proxy_merchant_token: &str,
    ) -> Result<ProductResponse, Error> {
        require(
            "get_product",
            &[
                ("product_id", product_id),
                ("proxy_merchant_token", proxy_merchant_token),
            ],
        )?;
        self.get(&format!("/product/{}/{}", product_id, proxy_merchant_token))
            .await
    }

    /// Fetches the active coupons of a merchant. The list may be empty.
    pub async fn get_coupons(&self, proxy_merchant_token: &str) -> Result<CouponsResponse, Error> {
        require("get_coupons", &[("proxy_merchant_token", proxy_merchant_token)])?;
        self.get(&format!("/coupons/{}", proxy_merchant_token)).await
    }
}

/// Fails with the names of every empty argument.
fn require(operation: &'static str, args: &[(&'static str, &str)]) -> Result<(), Error> {
    let params: Vec<&'static str> = args
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if params.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingArgument { operation, params })
    }
}

fn http_error(resp: &TransportResponse) -> Error {
    // The body is only read for a better message; anything unparseable is ignored.
    let message = resp
        .json::<Value>()
        .ok()
        .as_ref()
        .and_then(error_text)
        .unwrap_or_else(|| format!("Request failed with status {}", resp.status));
    Error::Http {
        status: resp.status,
        message,
    }
}
