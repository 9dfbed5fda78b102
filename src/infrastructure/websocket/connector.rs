use futures::{Stream, StreamExt};
use gloo_net::websocket::{Message, WebSocketError, futures::WebSocket};
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::domain::errors::FeedError;

/// Opens push connections for the feed client.
///
/// A connection yields text frames until it ends (`None`) or fails (`Err`).
pub trait FeedConnector {
    type Connection: Stream<Item = Result<String, FeedError>> + Unpin;

    fn connect(&mut self) -> Result<Self::Connection, FeedError>;

    /// Forces a connection closed after a socket error
    fn close(&mut self, connection: Self::Connection);
}

/// `ws://` or `wss://` URL for `path` on the page's own host
pub fn feed_url(page_protocol: &str, host: &str, path: &str) -> String {
    let scheme = if page_protocol == "https:" { "wss" } else { "ws" };
    format!("{scheme}://{host}{path}")
}

/// Same as [`feed_url`], reading protocol and host from `window.location`
pub fn page_feed_url(path: &str) -> Result<String, FeedError> {
    let location = web_sys::window()
        .ok_or_else(|| FeedError::Connect("window not available".to_string()))?
        .location();
    let protocol = location.protocol().map_err(|e| FeedError::Connect(format!("{e:?}")))?;
    let host = location.host().map_err(|e| FeedError::Connect(format!("{e:?}")))?;
    Ok(feed_url(&protocol, &host, path))
}

/// Browser WebSocket connector built on gloo-net
#[derive(Debug, Clone)]
pub struct GlooConnector {
    url: String,
}

impl GlooConnector {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FeedConnector for GlooConnector {
    type Connection = GlooConnection;

    fn connect(&mut self) -> Result<GlooConnection, FeedError> {
        WebSocket::open(&self.url)
            .map(GlooConnection)
            .map_err(|e| FeedError::Connect(format!("{}: {e}", self.url)))
    }

    fn close(&mut self, connection: GlooConnection) {
        let _ = connection.0.close(None, None);
    }
}

/// Text-frame view of a gloo WebSocket; binary frames are skipped
pub struct GlooConnection(WebSocket);

impl Stream for GlooConnection {
    type Item = Result<String, FeedError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            return match self.0.poll_next_unpin(cx) {
                Poll::Pending => Poll::Pending,
                Poll::Ready(Some(Ok(Message::Text(text)))) => Poll::Ready(Some(Ok(text))),
                Poll::Ready(Some(Ok(_))) => continue,
                // a close frame ends the stream like a clean shutdown
                Poll::Ready(Some(Err(WebSocketError::ConnectionClose(_)))) => Poll::Ready(None),
                Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(FeedError::Socket(e.to_string())))),
                Poll::Ready(None) => Poll::Ready(None),
            };
        }
    }
}
