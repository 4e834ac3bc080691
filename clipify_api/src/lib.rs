//! Async client for the clip-ify storefront API: shop configuration,
//! categories, products, and coupons.
//!
//! ```no_run
//! # async fn run() -> Result<(), clipify_api::Error> {
//! use clipify_api::Client;
//!
//! let client = Client::new();
//! let config = client.get_config("my-shop").await?;
//! if let Some(token) = config.merchant_token() {
//!     let coupons = client.get_coupons(token).await?;
//!     println!("{} coupons", coupons.items().map(|c| c.len()).unwrap_or(0));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod errors;
pub mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::transport::{
    ReqwestTransport, RequestOptions, Transport, TransportError, TransportResponse,
};
