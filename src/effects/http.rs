//! HTTP client for a JSON evaluation service.
//!
//! The service accepts a POST with an [`EvaluationRequest`] body and answers
//! `{"result": ...}` on success or `{"error": "..."}` with a non-2xx status.

use crate::config::ServiceConfig;
use crate::core::{EvaluationRequest, ResultValue};
use crate::effects::service::{EvaluationError, EvaluationService};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    result: Option<ResultValue>,
    #[serde(default)]
    error: Option<String>,
}

/// [`EvaluationService`] backed by an HTTP endpoint.
pub struct HttpEvaluationService {
    client: Client,
    url: String,
}

impl HttpEvaluationService {
    pub fn new(config: &ServiceConfig) -> Result<Self, EvaluationError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| EvaluationError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl EvaluationService for HttpEvaluationService {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<ResultValue, EvaluationError> {
        debug!(url = %self.url, %request, "Sending evaluation request");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Evaluation request failed without a response");
                EvaluationError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body: ResponseBody = match response.json().await {
            Ok(body) => body,
            Err(e) if e.is_decode() => {
                warn!(status = status.as_u16(), error = %e, "Undecodable evaluation response");
                ResponseBody::default()
            }
            Err(e) => return Err(EvaluationError::Transport(e.to_string())),
        };

        if !status.is_success() || body.error.is_some() {
            return Err(EvaluationError::Service {
                status: Some(status.as_u16()),
                message: body.error,
            });
        }

        body.result.ok_or(EvaluationError::Service {
            status: Some(status.as_u16()),
            message: None,
        })
    }
}
