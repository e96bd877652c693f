//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{FundingSourcesApi, OrdersApi, OrganizationsApi, ProductsApi, RewardsApi};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Fixed user-agent identifying this client and its version
const USER_AGENT_STRING: &str =
    concat!("tremendous-api-client/", env!("CARGO_PKG_VERSION"));

/// Query parameter mapping for GET operations (keys unique, values
/// already stringified)
pub type QueryParams = BTreeMap<String, String>;

/// JSON object payload for create operations and embed tokens
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Tremendous API client
///
/// Holds the bearer credential and base address, immutable once
/// constructed. Cloning is cheap and clones share the configuration, so
/// concurrent use needs no coordination. Each call performs exactly one
/// network attempt and resolves to an [`ApiResponse`] for both API
/// errors and transport failures; only construction and embed-token
/// signing can fail with an error.
#[derive(Clone)]
pub struct TremendousClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl TremendousClient {
    /// Create a client for the sandbox environment
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the token is empty.
    pub fn sandbox(access_token: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::sandbox(access_token))
    }

    /// Create a client for the production environment
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the token is empty.
    pub fn production(access_token: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::production(access_token))
    }

    /// Create a client with a caller-supplied base address
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the token or base address is
    /// empty.
    pub fn new(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> ApiResult<Self> {
        Self::with_config(ClientConfig::new(access_token, base_url))
    }

    /// Create a client with a specific configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] for an empty token or base address,
    /// or [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| ApiError::config("access_token contains invalid header characters"))?;
        auth.set_sensitive(true);
        default_headers.insert(AUTHORIZATION, auth);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Resource API accessors
    // -------------------------------------------------------------------------

    /// Access organization endpoints
    #[must_use]
    pub fn organizations(&self) -> OrganizationsApi {
        OrganizationsApi::new(self.clone())
    }

    /// Access product catalog endpoints
    #[must_use]
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    /// Access order endpoints
    #[must_use]
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.clone())
    }

    /// Access reward endpoints
    #[must_use]
    pub fn rewards(&self) -> RewardsApi {
        RewardsApi::new(self.clone())
    }

    /// Access funding source endpoints
    #[must_use]
    pub fn funding_sources(&self) -> FundingSourcesApi {
        FundingSourcesApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Embed tokens
    // -------------------------------------------------------------------------

    /// Sign a payload for embedding the hosted UI in a third-party page
    ///
    /// The payload is signed HS256 with the access token as the
    /// symmetric secret. This is a local computation with no network
    /// I/O.
    ///
    /// # Errors
    /// Returns [`ApiError::Signing`] if the payload cannot be
    /// serialized.
    pub fn create_embed_token(&self, payload: &JsonObject) -> ApiResult<String> {
        let token =
            tremendous_crypto::encode_hs256(payload, self.config.access_token.as_bytes())?;
        Ok(token)
    }

    // -------------------------------------------------------------------------
    // Request dispatch
    // -------------------------------------------------------------------------

    /// Issue a single request and normalize its outcome
    ///
    /// Query parameters apply only to GET requests; a JSON body applies
    /// only to non-GET requests. Never returns an error: transport
    /// failures come back as an [`ApiResponse`] carrying the error.
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&JsonObject>,
    ) -> ApiResponse {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(method = %method, url = %url, "Dispatching request");

        let mut request = self.inner.request(method.clone(), &url);

        if method == Method::GET {
            if let Some(params) = query {
                request = request.query(params);
            }
        } else if let Some(payload) = body {
            request = request.json(payload);
        }

        match request.send().await {
            Ok(response) => {
                let wrapped = ApiResponse::from_http(response).await;
                debug!(
                    method = %method,
                    url = %url,
                    status = ?wrapped.status_code(),
                    "Request completed"
                );
                wrapped
            }
            Err(e) => {
                debug!(method = %method, url = %url, error = %e, "Transport failure");
                ApiResponse::from_transport_error(e)
            }
        }
    }
}
