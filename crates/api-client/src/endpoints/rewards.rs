//! Reward endpoints

use crate::client::TremendousClient;
use crate::response::ApiResponse;
use reqwest::Method;

/// Rewards API interface
#[derive(Clone)]
pub struct RewardsApi {
    client: TremendousClient,
}

impl RewardsApi {
    /// Create a new rewards API interface
    pub(crate) fn new(client: TremendousClient) -> Self {
        Self { client }
    }

    /// Fetch a single reward by identifier
    ///
    /// GET rewards/{id}
    pub async fn get(&self, reward_id: &str) -> ApiResponse {
        let path = format!("rewards/{reward_id}");
        self.client.dispatch(Method::GET, &path, None, None).await
    }
}
