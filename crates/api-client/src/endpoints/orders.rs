//! Order endpoints
//!
//! Orders are the unit of disbursement: one order funds one or more
//! rewards from a funding source.

use crate::client::{JsonObject, QueryParams, TremendousClient};
use crate::response::ApiResponse;
use reqwest::Method;

/// Orders API interface
#[derive(Clone)]
pub struct OrdersApi {
    client: TremendousClient,
}

impl OrdersApi {
    /// Create a new orders API interface
    pub(crate) fn new(client: TremendousClient) -> Self {
        Self { client }
    }

    /// Place an order
    ///
    /// POST orders
    pub async fn create(&self, payload: &JsonObject) -> ApiResponse {
        self.client
            .dispatch(Method::POST, "orders", None, Some(payload))
            .await
    }

    /// List orders, optionally filtered
    ///
    /// GET orders
    pub async fn list(&self, params: Option<&QueryParams>) -> ApiResponse {
        self.client
            .dispatch(Method::GET, "orders", params, None)
            .await
    }

    /// Fetch a single order by identifier
    ///
    /// GET orders/{id}
    pub async fn get(&self, order_id: &str) -> ApiResponse {
        let path = format!("orders/{order_id}");
        self.client.dispatch(Method::GET, &path, None, None).await
    }
}
