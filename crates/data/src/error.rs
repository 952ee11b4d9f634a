//! Errors raised while talking to the calculation service.

use rendafixa_domain::ValidationError;
use std::time::Duration;
use thiserror::Error;

/// Message shown when the service gives no usable explanation.
pub const FALLBACK_MESSAGE: &str = "Não foi possível realizar a simulação.";
/// Fallback for a single-investment calculation.
pub const CALCULATE_FALLBACK_MESSAGE: &str = "Erro ao calcular investimento";

/// Failure of a user-triggered calculation. Every variant is terminal for
/// that action; nothing is retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Local input rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Non-2xx response from the service.
    #[error("{message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Service-provided `error` text, or the fallback message.
        message: String,
    },
    /// Network-level failure.
    #[error("falha de comunicação com o serviço de cálculo: {0}")]
    Transport(#[source] reqwest::Error),
    /// Response body did not match the expected schema.
    #[error("resposta inválida do serviço de cálculo: {0}")]
    Decode(String),
    /// Deadline expired before the service answered.
    #[error("o serviço de cálculo não respondeu em {} s", .0.as_secs())]
    Timeout(Duration),
    /// The request was cancelled by the user.
    #[error("simulação cancelada")]
    Cancelled,
    /// Another request is already in flight.
    #[error("já existe uma simulação em andamento")]
    Busy,
    /// Invalid client configuration.
    #[error("configuração inválida: {0}")]
    Config(String),
}

impl ServiceError {
    /// Single human-readable message for the user after a simulation.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.user_message_or(FALLBACK_MESSAGE)
    }

    /// Same as [`Self::user_message`], with `fallback` shown when the
    /// failure carries no usable explanation.
    #[must_use]
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            Self::Service { message, .. } => message.clone(),
            Self::Transport(_) | Self::Decode(_) => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}
