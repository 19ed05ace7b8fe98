use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;

use super::config::TransportConfig;
use super::errors::{TransportError, TransportResult};
use super::frames::{InboundFrame, OutboundFrame};
use crate::workspace::SharedState;

/// Connection lifecycle of the transport adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "disconnected"),
            ConnectionState::Connecting => write!(f, "connecting"),
            ConnectionState::Connected => write!(f, "connected"),
        }
    }
}

/// WebSocket channel that substitutes for the response simulator
///
/// Spawns a driver task that dials the endpoint, forwards outbound
/// frames, and appends inbound `agent` frames to the conversation log.
/// Connection failures degrade to `Disconnected` with bounded
/// backoff retries; they never touch task or agent state.
pub struct ChatTransport {
    outbound: mpsc::UnboundedSender<OutboundFrame>,
    state_rx: watch::Receiver<ConnectionState>,
    shutdown: CancellationToken,
    driver: Option<JoinHandle<()>>,
}

impl ChatTransport {
    /// Spawns the driver task for the configured endpoint
    ///
    /// Must be called within a Tokio runtime. The adapter begins in
    /// `Connecting` as soon as the driver is scheduled.
    pub(crate) fn spawn(config: TransportConfig, state: SharedState) -> Self {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ConnectionState::Disconnected);
        let shutdown = CancellationToken::new();

        let driver = tokio::spawn(run_driver(
            config,
            state,
            outbound_rx,
            state_tx,
            shutdown.clone(),
        ));

        Self {
            outbound: outbound_tx,
            state_rx,
            shutdown,
            driver: Some(driver),
        }
    }

    /// Returns the adapter's current connection state
    pub fn connection_state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Returns whether the adapter is currently connected
    pub fn is_connected(&self) -> bool {
        self.connection_state() == ConnectionState::Connected
    }

    /// Queues a frame for the backend
    ///
    /// Fails with `NotConnected` while the adapter is dialing or down;
    /// the caller falls back to the response simulator in that case.
    pub fn send(&self, frame: OutboundFrame) -> TransportResult<()> {
        if !self.is_connected() {
            return Err(TransportError::NotConnected);
        }
        self.outbound
            .send(frame)
            .map_err(|_| TransportError::Closed)
    }

    /// Shuts the adapter down and waits for the driver to exit
    pub async fn close(mut self) {
        self.shutdown.cancel();
        if let Some(driver) = self.driver.take() {
            let _ = driver.await;
        }
    }
}

impl Drop for ChatTransport {
    fn drop(&mut self) {
        // Close the connection on teardown; the driver exits on its own.
        self.shutdown.cancel();
    }
}

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn run_driver(
    config: TransportConfig,
    state: SharedState,
    mut outbound_rx: mpsc::UnboundedReceiver<OutboundFrame>,
    state_tx: watch::Sender<ConnectionState>,
    shutdown: CancellationToken,
) {
    let mut attempt: u32 = 0;

    loop {
        if shutdown.is_cancelled() {
            break;
        }

        let _ = state_tx.send(ConnectionState::Connecting);
        tracing::info!(endpoint = %config.endpoint, "connecting to backend");

        let stream = tokio::select! {
            _ = shutdown.cancelled() => break,
            result = tokio_tungstenite::connect_async(config.endpoint.as_str()) => match result {
                Ok((stream, _)) => stream,
                Err(err) => {
                    tracing::warn!(%err, "connection failed");
                    let _ = state_tx.send(ConnectionState::Disconnected);
                    attempt += 1;
                    if !wait_for_retry(&config, &shutdown, attempt).await {
                        break;
                    }
                    continue;
                }
            },
        };

        attempt = 0;
        let _ = state_tx.send(ConnectionState::Connected);
        tracing::info!("connected to backend");

        let closed_by_us = run_session(stream, &state, &mut outbound_rx, &shutdown).await;
        let _ = state_tx.send(ConnectionState::Disconnected);
        if closed_by_us {
            break;
        }

        tracing::info!("connection lost");
        attempt += 1;
        if !wait_for_retry(&config, &shutdown, attempt).await {
            break;
        }
    }

    let _ = state_tx.send(ConnectionState::Disconnected);
}

/// Sleeps out the backoff before the next attempt
///
/// Returns `false` when the retry budget is spent or shutdown was
/// requested, in which case the driver exits for good.
async fn wait_for_retry(
    config: &TransportConfig,
    shutdown: &CancellationToken,
    attempt: u32,
) -> bool {
    if attempt >= config.reconnect.max_attempts {
        tracing::warn!(attempt, "retry budget spent, staying disconnected");
        return false;
    }

    let backoff = config.reconnect.backoff_for(attempt);
    tracing::debug!(attempt, ?backoff, "waiting before reconnect");
    tokio::select! {
        _ = shutdown.cancelled() => false,
        _ = tokio::time::sleep(backoff) => true,
    }
}

/// Pumps one connected session; returns `true` when we closed it
async fn run_session(
    stream: WsStream,
    state: &SharedState,
    outbound_rx: &mut mpsc::UnboundedReceiver<OutboundFrame>,
    shutdown: &CancellationToken,
) -> bool {
    let (mut sink, mut source) = stream.split();

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                let _ = sink.send(Message::Close(None)).await;
                return true;
            }
            frame = outbound_rx.recv() => match frame {
                Some(frame) => match serde_json::to_string(&frame) {
                    Ok(text) => {
                        if let Err(err) = sink.send(Message::Text(text)).await {
                            tracing::warn!(%err, "send failed");
                            return false;
                        }
                    }
                    Err(err) => tracing::warn!(%err, "dropping unserializable frame"),
                },
                // All senders gone means the adapter handle was dropped.
                None => {
                    let _ = sink.send(Message::Close(None)).await;
                    return true;
                }
            },
            message = source.next() => match message {
                Some(Ok(Message::Text(text))) => handle_inbound(state, &text),
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("closed by peer");
                    return false;
                }
                // Ping/pong are handled by tungstenite; binary has no
                // meaning on this channel.
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::warn!(%err, "receive failed");
                    return false;
                }
            },
        }
    }
}

/// Parses one inbound text frame and appends `agent` payloads
///
/// Malformed frames are dropped with a warning; they never crash the
/// conversation log.
fn handle_inbound(state: &SharedState, text: &str) {
    match serde_json::from_str::<InboundFrame>(text) {
        Ok(InboundFrame::Agent(frame)) => {
            let mut state = state.lock().expect("workspace state lock poisoned");
            let message = state.conversation.append_agent(frame.into_reply());
            tracing::debug!(id = message.id(), sender = message.sender(), "agent frame appended");
        }
        Ok(InboundFrame::Ignored) => {
            tracing::debug!("ignoring non-agent frame");
        }
        Err(err) => {
            tracing::warn!(%err, "dropping malformed frame");
        }
    }
}
