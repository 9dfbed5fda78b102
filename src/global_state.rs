//! Reactive state shared by the live table components.

use leptos::SignalSet;

use crate::domain::standings::StandingsTable;
use crate::signal_table;

signal_table! {
    pub standings: StandingsTable = StandingsTable::default(),
    pub live_visible: Option<bool> = None,
}

/// Replaces the rendered table and recomputes the live indicator.
/// `live_visible` stays `None` until the first snapshot, leaving the page's own indicator state alone.
pub fn apply_snapshot(table: StandingsTable) {
    let any_live = table.any_live();
    standings().set(table);
    live_visible().set(Some(any_live));
}
