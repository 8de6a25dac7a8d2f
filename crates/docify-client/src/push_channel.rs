//! Push channel for live commit notifications
//!
//! A push channel delivers text frames from the backend for one repository
//! subscription. The WebSocket implementation opens the connection, sends the
//! subscription request and then yields every text frame until the server
//! closes the socket.

use crate::types::SubscribeRequest;
use anyhow::Context;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use log::{debug, warn};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// Lifecycle of the live update connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Closed,
    Connecting,
    Open,
}

impl ConnectionState {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Closed => "offline",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "live",
        }
    }
}

/// Opens subscriptions for a repository
#[async_trait]
pub trait PushChannel: Send + Sync {
    /// Connect and subscribe to updates for `repo_url`
    ///
    /// Returns once the subscription request has been sent.
    async fn connect(&self, repo_url: &str) -> anyhow::Result<Box<dyn PushSubscription>>;
}

/// An open subscription
#[async_trait]
pub trait PushSubscription: Send {
    /// Next text frame, `None` once the channel is closed
    async fn next_message(&mut self) -> Option<anyhow::Result<String>>;

    /// Close the channel. Calling this on a closed channel is a no-op.
    async fn close(&mut self);
}

/// Push channel backed by a WebSocket endpoint
#[derive(Debug, Clone)]
pub struct WebSocketChannel {
    endpoint: String,
}

impl WebSocketChannel {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PushChannel for WebSocketChannel {
    async fn connect(&self, repo_url: &str) -> anyhow::Result<Box<dyn PushSubscription>> {
        debug!("Connecting to {}", self.endpoint);
        let (mut stream, _response) = connect_async(self.endpoint.as_str())
            .await
            .with_context(|| format!("Failed to connect to {}", self.endpoint))?;

        let request = serde_json::to_string(&SubscribeRequest { repo_url })?;
        stream
            .send(Message::Text(request))
            .await
            .context("Failed to send subscription request")?;

        debug!("Subscribed to live updates for {}", repo_url);
        Ok(Box::new(WebSocketSubscription {
            stream: Some(stream),
        }))
    }
}

struct WebSocketSubscription {
    stream: Option<WebSocketStream<MaybeTlsStream<TcpStream>>>,
}

#[async_trait]
impl PushSubscription for WebSocketSubscription {
    async fn next_message(&mut self) -> Option<anyhow::Result<String>> {
        loop {
            let stream = self.stream.as_mut()?;
            match stream.next().await {
                Some(Ok(Message::Text(text))) => return Some(Ok(text)),
                Some(Ok(Message::Close(frame))) => {
                    debug!("Live update channel closed by server: {:?}", frame);
                    self.stream = None;
                    return None;
                }
                // Binary, ping and pong frames carry no updates
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    self.stream = None;
                    return Some(Err(e).context("Live update channel failed"));
                }
                None => {
                    self.stream = None;
                    return None;
                }
            }
        }
    }

    async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.close(None).await {
                warn!("Error while closing live update channel: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_state_default_closed() {
        assert_eq!(ConnectionState::default(), ConnectionState::Closed);
    }

    #[test]
    fn test_connection_state_labels() {
        assert_eq!(ConnectionState::Open.label(), "live");
        assert_eq!(ConnectionState::Connecting.label(), "connecting");
        assert_eq!(ConnectionState::Closed.label(), "offline");
    }
}
