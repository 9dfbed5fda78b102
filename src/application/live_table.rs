use futures::future::{AbortHandle, Abortable};
use std::cell::RefCell;
use wasm_bindgen_futures::spawn_local;

use crate::domain::logging::LogComponent;
use crate::domain::standings::StandingsTable;
use crate::infrastructure::websocket::{FeedConnector, StandingsFeedClient};
use crate::log_info;

/// Stop switch for a running feed task
#[derive(Debug, Clone)]
pub struct FeedHandle {
    abort: AbortHandle,
}

impl FeedHandle {
    pub fn stop(&self) {
        self.abort.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.abort.is_aborted()
    }
}

thread_local! {
    static ACTIVE_FEED: RefCell<Option<FeedHandle>> = const { RefCell::new(None) };
}

/// Runs `client` on the local executor, passing each snapshot to `on_snapshot`.
/// Any previously started feed is stopped first, so at most one is live.
pub fn start_feed<C, F>(client: StandingsFeedClient<C>, on_snapshot: F) -> FeedHandle
where
    C: FeedConnector + 'static,
    F: FnMut(StandingsTable) + 'static,
{
    stop_active_feed();

    let (abort, registration) = AbortHandle::new_pair();
    let handle = FeedHandle { abort };

    spawn_local(async move {
        let mut client = client;
        let cycle = client.run(on_snapshot, || {});
        if Abortable::new(cycle, registration).await.is_err() {
            log_info!(LogComponent::Application("LiveTable"), "🛑 Standings feed stopped");
        }
    });

    ACTIVE_FEED.with(|active| *active.borrow_mut() = Some(handle.clone()));
    handle
}

pub fn stop_active_feed() {
    if let Some(previous) = ACTIVE_FEED.with(|active| active.borrow_mut().take()) {
        previous.stop();
    }
}
