//! JavaScript entry points called from the page templates.

use wasm_bindgen::prelude::*;

use crate::application::context::AppContext;
use crate::application::live_table::FeedHandle;
use crate::domain::logging::LogComponent;
use crate::infrastructure::ui::redirect;
use crate::log_error;
use crate::presentation::{auth_page, live_table, profile_page};

/// Handle returned by `initTableLive`; `stop()` ends the feed for good
#[wasm_bindgen]
pub struct LiveFeedHandle {
    inner: FeedHandle,
}

#[wasm_bindgen]
impl LiveFeedHandle {
    pub fn stop(&self) {
        self.inner.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.inner.is_stopped()
    }
}

/// Starts the live standings table. Problems only show up as a table that never updates.
#[wasm_bindgen(js_name = initTableLive)]
pub fn init_table_live() -> Option<LiveFeedHandle> {
    match live_table::start_live_table() {
        Ok(inner) => Some(LiveFeedHandle { inner }),
        Err(e) => {
            log_error!(LogComponent::Presentation("WasmApi"), "❌ Live table not started: {e}");
            None
        }
    }
}

#[wasm_bindgen(js_name = initProfilePage)]
pub async fn init_profile_page() {
    profile_page::init_profile_page(AppContext::from_page()).await;
}

#[wasm_bindgen(js_name = initAuthPage)]
pub async fn init_auth_page() {
    auth_page::init_auth_page(AppContext::from_page()).await;
}

#[wasm_bindgen]
pub async fn logout() {
    let destination = AppContext::from_page().auth().logout().await;
    redirect(destination);
}
