use thiserror::Error;

/// Failure while handing a chart to its render target.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("falha ao gravar o gráfico: {0}")]
    Io(#[from] std::io::Error),
    #[error("falha ao serializar o gráfico: {0}")]
    Serialize(#[from] serde_json::Error),
}
