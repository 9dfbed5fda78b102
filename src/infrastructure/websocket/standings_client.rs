use futures::{Stream, StreamExt};
use gloo_timers::future::sleep;
use std::time::Duration;

use crate::domain::errors::FeedError;
use crate::domain::logging::LogComponent;
use crate::domain::standings::{ConnectionState, StandingsTable};
use crate::infrastructure::websocket::{FeedConnector, StandingsSnapshotDto};
use crate::{log_debug, log_error, log_info, log_warn};

pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(2000);

/// How a single connection ended
#[derive(Debug, Clone, PartialEq)]
pub enum CloseReason {
    Closed,
    Errored(FeedError),
}

/// Parses one push message into a full table
pub fn parse_snapshot(data: &str) -> Result<StandingsTable, FeedError> {
    serde_json::from_str::<StandingsSnapshotDto>(data)
        .map(StandingsSnapshotDto::into_table)
        .map_err(|e| FeedError::Malformed(e.to_string()))
}

/// Feeds every parsable snapshot of `connection` to `handler` until the
/// connection ends or fails. Malformed messages are dropped one by one.
pub async fn consume_connection<S, F>(connection: &mut S, handler: &mut F) -> CloseReason
where
    S: Stream<Item = Result<String, FeedError>> + Unpin,
    F: FnMut(StandingsTable),
{
    while let Some(message) = connection.next().await {
        match message {
            Ok(data) => match parse_snapshot(&data) {
                Ok(table) => {
                    log_debug!(
                        LogComponent::Infrastructure("StandingsFeed"),
                        "📊 Snapshot: {} rows, {} live",
                        table.len(),
                        table.live_count()
                    );
                    handler(table);
                }
                Err(e) => {
                    log_warn!(LogComponent::Infrastructure("StandingsFeed"), "🗑️ Dropped update: {e}");
                }
            },
            Err(e) => return CloseReason::Errored(e),
        }
    }
    CloseReason::Closed
}

/// Live standings client: one connection at a time, reopened after a fixed
/// delay whenever it closes, forever.
pub struct StandingsFeedClient<C: FeedConnector> {
    connector: C,
    reconnect_delay: Duration,
    state: ConnectionState,
}

impl<C: FeedConnector> StandingsFeedClient<C> {
    pub fn new(connector: C) -> Self {
        Self::with_delay(connector, DEFAULT_RECONNECT_DELAY)
    }

    pub fn with_delay(connector: C, reconnect_delay: Duration) -> Self {
        Self { connector, reconnect_delay, state: ConnectionState::ReconnectPending }
    }

    pub fn reconnect_delay(&self) -> Duration {
        self.reconnect_delay
    }

    fn set_state(&mut self, state: ConnectionState) {
        if self.state != state {
            log_debug!(
                LogComponent::Infrastructure("StandingsFeed"),
                "🔀 {} -> {}",
                self.state,
                state
            );
            self.state = state;
        }
    }

    /// Connection cycle. Never returns; cancel it by dropping or aborting the future.
    pub async fn run<F, R>(&mut self, mut handler: F, mut on_reconnect: R)
    where
        F: FnMut(StandingsTable),
        R: FnMut(),
    {
        loop {
            match self.connector.connect() {
                Ok(mut connection) => {
                    self.set_state(ConnectionState::Connected);
                    log_info!(LogComponent::Infrastructure("StandingsFeed"), "✅ Feed connection opened");

                    match consume_connection(&mut connection, &mut handler).await {
                        CloseReason::Closed => {
                            log_warn!(LogComponent::Infrastructure("StandingsFeed"), "🔌 Feed closed");
                        }
                        CloseReason::Errored(e) => {
                            log_error!(LogComponent::Infrastructure("StandingsFeed"), "❌ {e}");
                            self.connector.close(connection);
                        }
                    }
                }
                Err(e) => {
                    log_error!(LogComponent::Infrastructure("StandingsFeed"), "❌ {e}");
                }
            }

            self.set_state(ConnectionState::ReconnectPending);
            on_reconnect();
            log_info!(
                LogComponent::Infrastructure("StandingsFeed"),
                "⏳ Reconnecting in {}ms",
                self.reconnect_delay.as_millis()
            );
            sleep(self.reconnect_delay).await;
        }
    }
}
