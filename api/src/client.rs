use std::env;

use reqwest::{header::AUTHORIZATION, Client};
use serde::de::DeserializeOwned;
use tracing::debug;
use yelp_fusion_core::{QueryParams, Result, YelpError};

pub const API_BASE_URL: &str = "https://api.yelp.com/v3";

const API_KEY_ENV: &str = "YELP_API_KEY";
const BASE_URL_ENV: &str = "YELP_API_BASE_URL";

/// Settings used to build a [`YelpClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub api_key: String,
    /// Defaults to [`API_BASE_URL`]
    pub base_url: Option<String>,
    /// Bring your own client to set timeouts, proxies or a user agent
    pub http_client: Option<Client>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Read `YELP_API_KEY` and, if present, `YELP_API_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| YelpError::Config(format!("{} is not set", API_KEY_ENV)))?;

        Ok(Self {
            api_key,
            base_url: env::var(BASE_URL_ENV).ok().filter(|url| !url.is_empty()),
            http_client: None,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

/// Client for the Yelp Fusion API.
///
/// Holds no mutable state between calls and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct YelpClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YelpClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        if options.api_key.is_empty() {
            return Err(YelpError::Config(
                "API key is required but not provided".to_string(),
            ));
        }

        let base_url = options
            .base_url
            .as_deref()
            .unwrap_or(API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: options.http_client.unwrap_or_default(),
            api_key: options.api_key,
            base_url,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at another server, e.g. a local test double
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Send one authenticated GET to `endpoint` and decode the JSON body into `T`.
    ///
    /// The response is dropped on every return path, which releases the connection.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!(endpoint, params = params.len(), "Dispatching Yelp API request");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .query(params)
            .send()
            .await
            .map_err(|e| YelpError::Network(e.to_string()))?;

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "Yelp API responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YelpError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| YelpError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| YelpError::Parse(e.to_string()))
    }
}
