//! The evaluation service contract and the environment effects run in.

use crate::core::{EvaluationRequest, Outcome, ResultValue};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by an [`EvaluationService`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvaluationError {
    /// The service responded but reported a failure.
    #[error("Service rejected the request (status {status:?}): {}", .message.as_deref().unwrap_or("no message"))]
    Service {
        status: Option<u16>,
        message: Option<String>,
    },

    /// No response could be obtained.
    #[error("Evaluation service unreachable: {0}")]
    Transport(String),
}

/// Remote collaborator that performs the actual arithmetic.
#[async_trait]
pub trait EvaluationService: Send + Sync {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<ResultValue, EvaluationError>;
}

impl From<Result<ResultValue, EvaluationError>> for Outcome {
    fn from(result: Result<ResultValue, EvaluationError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(EvaluationError::Service { message, .. }) => Outcome::ServiceError(message),
            Err(EvaluationError::Transport(_)) => Outcome::TransportError,
        }
    }
}

/// Environment handed to evaluation effects.
#[derive(Clone)]
pub struct ServiceEnv {
    service: Arc<dyn EvaluationService>,
}

impl ServiceEnv {
    pub fn new(service: Arc<dyn EvaluationService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> Arc<dyn EvaluationService> {
        Arc::clone(&self.service)
    }
}
