//! Funding source endpoints
//!
//! A funding source is a payment method (balance, bank account) on the
//! account, used to pay for orders.

use crate::client::{QueryParams, TremendousClient};
use crate::response::ApiResponse;
use reqwest::Method;

/// Funding sources API interface
#[derive(Clone)]
pub struct FundingSourcesApi {
    client: TremendousClient,
}

impl FundingSourcesApi {
    /// Create a new funding sources API interface
    pub(crate) fn new(client: TremendousClient) -> Self {
        Self { client }
    }

    /// List funding sources, optionally filtered
    ///
    /// GET funding_sources
    pub async fn list(&self, params: Option<&QueryParams>) -> ApiResponse {
        self.client
            .dispatch(Method::GET, "funding_sources", params, None)
            .await
    }

    /// Fetch a single funding source by identifier
    ///
    /// GET funding_sources/{id}
    pub async fn get(&self, funding_source_id: &str) -> ApiResponse {
        let path = format!("funding_sources/{funding_source_id}");
        self.client.dispatch(Method::GET, &path, None, None).await
    }
}
