//! HTTP/JSON implementation of the calculation service.

use super::CalculationService;
use crate::config::ClientConfig;
use crate::error::{CALCULATE_FALLBACK_MESSAGE, FALLBACK_MESSAGE, ServiceError};
use async_trait::async_trait;
use rendafixa_domain::{CalculationRequest, ScenarioResult, SimulationRequest};
use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const SIMULATE_PATH: &str = "/api/simular-renda-fixa";
const CALCULATE_PATH: &str = "/api/calculate";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SimulationResponse {
    #[serde(default)]
    resultados: Vec<ScenarioResult>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Calculation service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCalculationService {
    client: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpCalculationService {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` and decodes the reply. A rejection without an `error`
    /// text carries `fallback` as its message.
    async fn post_json<B, R>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<R, ServiceError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST to calculation service");

        let mut request = self.client.post(&url).json(body);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            warn!(
                status = status.as_u16(),
                message = %message,
                "Calculation service rejected request"
            );
            return Err(ServiceError::Service {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CalculationService for HttpCalculationService {
    async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<Vec<ScenarioResult>, ServiceError> {
        let response: SimulationResponse = self
            .post_json(SIMULATE_PATH, request, FALLBACK_MESSAGE)
            .await?;
        Ok(response.resultados)
    }

    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<ScenarioResult, ServiceError> {
        self.post_json(CALCULATE_PATH, request, CALCULATE_FALLBACK_MESSAGE).await
    }
}
