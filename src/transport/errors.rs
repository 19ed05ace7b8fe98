use thiserror::Error;

/// Errors that can occur on the real-time channel
///
/// All of them are non-fatal to the application: the adapter degrades to
/// `Disconnected` and the response simulator takes over. They never
/// propagate into task or agent state.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    #[error("frame serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("transport is not connected")]
    NotConnected,

    #[error("transport has shut down")]
    Closed,
}

impl From<tokio_tungstenite::tungstenite::Error> for TransportError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}

pub type TransportResult<T> = Result<T, TransportError>;
