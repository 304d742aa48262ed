use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::StreamExt;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

use crate::event::TrackerEvent;

/// Minimal socket surface the event stream needs
#[async_trait]
pub trait SocketWrapper: Send {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError>;

    /// Next client frame; `None` once the client has gone away
    async fn receive_message(&mut self) -> Result<Option<String>, SocketError>;

    async fn close(&mut self) -> Result<(), SocketError>;
}

#[derive(Debug)]
pub enum SocketError {
    SendFailed(String),
    ReceiveFailed(String),
}

#[async_trait]
impl SocketWrapper for WebSocket {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        self.send(Message::Text(message))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        loop {
            match self.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text)),
                Some(Ok(Message::Close(_))) | None => return Ok(None),
                Some(Ok(_)) => continue, // ping/pong/binary
                Some(Err(e)) => return Err(SocketError::ReceiveFailed(e.to_string())),
            }
        }
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        self.send(Message::Close(None))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }
}

/// Forwards tracker events to one client as JSON text frames until either side closes
pub struct EventStream {
    socket: Box<dyn SocketWrapper>,
    events: broadcast::Receiver<TrackerEvent>,
}

impl EventStream {
    pub fn new(socket: Box<dyn SocketWrapper>, events: broadcast::Receiver<TrackerEvent>) -> Self {
        Self { socket, events }
    }

    pub async fn run(mut self) -> Result<(), SocketError> {
        loop {
            tokio::select! {
                event = self.events.recv() => {
                    match event {
                        Ok(event) => match serde_json::to_string(&event) {
                            Ok(text) => self.socket.send_message(text).await?,
                            Err(e) => warn!(error = %e, "Could not serialize tracker event"),
                        },
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "Event subscriber lagged, events dropped");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }

                msg = self.socket.receive_message() => {
                    match msg {
                        // Clients have nothing to say on this stream
                        Ok(Some(text)) => debug!(message = %text, "Ignoring client message"),
                        Ok(None) => break,
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        let _ = self.socket.close().await;
        Ok(())
    }
}
