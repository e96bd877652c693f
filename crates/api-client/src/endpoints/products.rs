//! Product catalog endpoints
//!
//! Products are the reward items (gift cards, prepaid cards, charity
//! donations) an order can deliver.

use crate::client::{QueryParams, TremendousClient};
use crate::response::ApiResponse;
use reqwest::Method;

/// Products API interface
#[derive(Clone)]
pub struct ProductsApi {
    client: TremendousClient,
}

impl ProductsApi {
    /// Create a new products API interface
    pub(crate) fn new(client: TremendousClient) -> Self {
        Self { client }
    }

    /// List the product catalog, optionally filtered
    ///
    /// GET products
    pub async fn list(&self, params: Option<&QueryParams>) -> ApiResponse {
        self.client
            .dispatch(Method::GET, "products", params, None)
            .await
    }
}
