use leptos::*;
use std::cell::Cell;
use web_sys::HtmlElement;

use crate::application::live_table::{FeedHandle, start_feed};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::domain::standings::StandingsRow;
use crate::global_state::{apply_snapshot, live_visible, standings};
use crate::infrastructure::config::app_config;
use crate::infrastructure::ui::{element_by_id, set_visible};
use crate::infrastructure::websocket::{GlooConnector, StandingsFeedClient, page_feed_url};
use crate::{log_info, log_warn};

pub const TABLE_BODY_ID: &str = "table-body";
pub const LIVE_INDICATOR_ID: &str = "live-indicator";

thread_local! {
    static TABLE_MOUNTED: Cell<bool> = const { Cell::new(false) };
}

#[component]
fn StandingsRowView(row: StandingsRow) -> impl IntoView {
    let StandingsRow { rank, team_name, played, points, goal_difference, is_live } = row;
    let row_class = if is_live { "team-live" } else { "" };
    let badge = is_live.then(|| view! { <span class="live-badge">"LIVE"</span> });

    view! {
        <tr class=row_class>
            <td>{rank.value()}</td>
            <td>{team_name}</td>
            <td>{played}</td>
            <td>{points}</td>
            <td>{goal_difference}</td>
            <td>{badge}</td>
        </tr>
    }
}

/// Table body; rebuilt from scratch whenever a snapshot lands
#[component]
pub fn StandingsRows() -> impl IntoView {
    move || {
        standings().with(|table| {
            table
                .rows()
                .iter()
                .cloned()
                .map(|row| view! { <StandingsRowView row=row /> })
                .collect_view()
        })
    }
}

/// Mirrors `live_visible` onto the page's indicator element once a snapshot has set it
fn bind_live_indicator() {
    match element_by_id::<HtmlElement>(LIVE_INDICATOR_ID) {
        Some(indicator) => {
            create_effect(move |_| {
                if let Some(visible) = live_visible().get() {
                    set_visible(&indicator, visible);
                }
            });
        }
        None => {
            log_warn!(
                LogComponent::Presentation("LiveTable"),
                "#{LIVE_INDICATOR_ID} missing, live state will not be shown"
            );
        }
    }
}

/// Mounts the reactive rows into `#table-body`. Returns false when the page has no table.
pub fn mount_live_table() -> bool {
    if TABLE_MOUNTED.with(Cell::get) {
        return true;
    }
    let Some(body) = element_by_id::<HtmlElement>(TABLE_BODY_ID) else {
        log_warn!(LogComponent::Presentation("LiveTable"), "#{TABLE_BODY_ID} missing, live table disabled");
        return false;
    };
    body.set_inner_html("");
    mount_to(body, || {
        bind_live_indicator();
        view! { <StandingsRows /> }
    });
    TABLE_MOUNTED.with(|mounted| mounted.set(true));
    true
}

/// Mounts the table and starts the standings feed for this page
pub fn start_live_table() -> AppResult<FeedHandle> {
    if !mount_live_table() {
        return Err(AppError::Dom(format!("#{TABLE_BODY_ID} not found")));
    }
    let config = app_config();
    let url = page_feed_url(&config.standings_path)?;
    log_info!(LogComponent::Presentation("LiveTable"), "🚀 Live table on {url}");

    let client = StandingsFeedClient::with_delay(GlooConnector::new(url), config.reconnect_delay());
    Ok(start_feed(client, apply_snapshot))
}
