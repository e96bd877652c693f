//! Client for the Tremendous rewards-disbursement REST API
//!
//! This crate provides a thin, uniform client over the Tremendous API:
//! organizations, products, orders, rewards, and funding sources, plus
//! HS256-signed embed tokens for the hosted UI.
//!
//! # Design
//!
//! - **Uniform outcomes**: every resource operation resolves to an
//!   [`ApiResponse`], whether the API answered 2xx, answered with an
//!   error status, or the transport failed. Callers branch on
//!   [`ApiResponse::is_success`] / [`ApiResponse::is_error`] rather
//!   than catching errors.
//! - **One attempt per call**: no retries, backoff, caching, or
//!   pagination handling. Timeouts are the transport's.
//! - **Immutable configuration**: a client holds its token and base
//!   address behind an `Arc` and is safe to clone and share across
//!   tasks.
//!
//! # Example
//!
//! ```rust,no_run
//! use tremendous_api_client::TremendousClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TremendousClient::sandbox("YOUR_API_KEY")?;
//!
//!     let response = client.organizations().list().await;
//!     if response.is_success() {
//!         println!("organizations: {:?}", response.json()["organizations"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod response;

pub use client::{JsonObject, QueryParams, TremendousClient};
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use response::ApiResponse;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::{JsonObject, QueryParams, TremendousClient};
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{
        FundingSourcesApi, OrdersApi, OrganizationsApi, ProductsApi, RewardsApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::response::ApiResponse;
}
