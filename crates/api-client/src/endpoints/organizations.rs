//! Organization endpoints

use crate::client::{JsonObject, QueryParams, TremendousClient};
use crate::response::ApiResponse;
use reqwest::Method;

/// Organizations API interface
#[derive(Clone)]
pub struct OrganizationsApi {
    client: TremendousClient,
}

impl OrganizationsApi {
    /// Create a new organizations API interface
    pub(crate) fn new(client: TremendousClient) -> Self {
        Self { client }
    }

    /// Create an organization under the current account
    ///
    /// POST organizations
    pub async fn create(&self, payload: &JsonObject) -> ApiResponse {
        self.client
            .dispatch(Method::POST, "organizations", None, Some(payload))
            .await
    }

    /// List organizations visible to the current account
    ///
    /// GET organizations
    pub async fn list(&self) -> ApiResponse {
        self.client
            .dispatch(Method::GET, "organizations", None, None)
            .await
    }

    /// List organizations with query parameters
    ///
    /// GET organizations
    pub async fn list_with(&self, params: &QueryParams) -> ApiResponse {
        self.client
            .dispatch(Method::GET, "organizations", Some(params), None)
            .await
    }
}
