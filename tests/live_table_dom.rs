#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use league_live_wasm::domain::standings::StandingsTable;
use league_live_wasm::global_state::apply_snapshot;
use league_live_wasm::infrastructure::websocket::parse_snapshot;
use league_live_wasm::presentation::live_table::{LIVE_INDICATOR_ID, TABLE_BODY_ID, mount_live_table};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Builds `<table><tbody id="table-body">` and the live indicator once per page
fn ensure_page() {
    let doc = document();
    if doc.get_element_by_id(TABLE_BODY_ID).is_some() {
        return;
    }
    let body = doc.body().unwrap();
    let table = doc.create_element("table").unwrap();
    let tbody = doc.create_element("tbody").unwrap();
    tbody.set_id(TABLE_BODY_ID);
    tbody.set_inner_html("<tr><td>Loading…</td></tr>");
    table.append_child(&tbody).unwrap();
    body.append_child(&table).unwrap();

    let indicator = doc.create_element("span").unwrap();
    indicator.set_id(LIVE_INDICATOR_ID);
    body.append_child(&indicator).unwrap();

    assert!(mount_live_table());
}

fn rows() -> Vec<Vec<String>> {
    let rows = document().query_selector_all(&format!("#{TABLE_BODY_ID} tr")).unwrap();
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|row| {
            let cells = row.query_selector_all("td").unwrap();
            (0..cells.length())
                .filter_map(|i| cells.item(i))
                .map(|cell| cell.text_content().unwrap_or_default())
                .collect()
        })
        .collect()
}

fn indicator_display() -> String {
    document()
        .get_element_by_id(LIVE_INDICATOR_ID)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

async fn render(raw: &str) {
    apply_snapshot(parse_snapshot(raw).unwrap());
    sleep(Duration::from_millis(10)).await;
}

#[wasm_bindgen_test(async)]
async fn snapshot_rows_render_in_order() {
    ensure_page();
    render(
        r#"{"standings":[
            {"team":"Arsenal","played":10,"points":25,"gd":12,"live":true},
            {"team":"Chelsea","played":10,"points":20,"gd":5,"live":false}]}"#,
    )
    .await;

    let rows = rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], ["1", "Arsenal", "10", "25", "12", "LIVE"]);
    assert_eq!(rows[1], ["2", "Chelsea", "10", "20", "5", ""]);

    let live = document().query_selector_all(".team-live").unwrap();
    assert_eq!(live.length(), 1);
    assert_eq!(indicator_display(), "");
}

#[wasm_bindgen_test(async)]
async fn next_snapshot_replaces_the_table() {
    ensure_page();
    render(r#"{"standings":[{"team":"A","played":1,"points":3,"gd":1,"live":true},{"team":"B","played":1,"points":0,"gd":-1}]}"#).await;
    render(r#"{"standings":[{"team":"C","played":2,"points":4,"gd":0}]}"#).await;

    let rows = rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], "C");
    assert_eq!(indicator_display(), "none");
}

#[wasm_bindgen_test(async)]
async fn empty_snapshot_clears_rows_and_hides_indicator() {
    ensure_page();
    render(r#"{"standings":[{"team":"A","played":1,"points":3,"gd":1,"live":true}]}"#).await;
    apply_snapshot(StandingsTable::default());
    sleep(Duration::from_millis(10)).await;

    assert!(rows().is_empty());
    assert_eq!(indicator_display(), "none");
}

#[wasm_bindgen_test]
fn mounting_twice_is_harmless() {
    ensure_page();
    assert!(mount_live_table());
    assert_eq!(document().query_selector_all(&format!("#{TABLE_BODY_ID}")).unwrap().length(), 1);
}
