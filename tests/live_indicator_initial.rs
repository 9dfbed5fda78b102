#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use leptos::SignalGetUntracked;
use league_live_wasm::global_state::{apply_snapshot, live_visible};
use league_live_wasm::infrastructure::websocket::parse_snapshot;
use league_live_wasm::presentation::live_table::{LIVE_INDICATOR_ID, TABLE_BODY_ID, mount_live_table};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn indicator() -> HtmlElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id(LIVE_INDICATOR_ID)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

#[wasm_bindgen_test(async)]
async fn indicator_keeps_page_state_until_first_snapshot() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();
    let tbody = doc.create_element("tbody").unwrap();
    tbody.set_id(TABLE_BODY_ID);
    body.append_child(&tbody).unwrap();
    let badge = doc.create_element("span").unwrap();
    badge.set_id(LIVE_INDICATOR_ID);
    badge.set_attribute("style", "display: inline-block").unwrap();
    body.append_child(&badge).unwrap();

    assert_eq!(live_visible().get_untracked(), None);
    assert!(mount_live_table());
    sleep(Duration::from_millis(10)).await;
    assert_eq!(indicator().style().get_property_value("display").unwrap(), "inline-block");

    apply_snapshot(parse_snapshot(r#"{"standings":[{"team":"A","played":1,"points":0,"gd":0}]}"#).unwrap());
    sleep(Duration::from_millis(10)).await;
    assert_eq!(live_visible().get_untracked(), Some(false));
    assert_eq!(indicator().style().get_property_value("display").unwrap(), "none");
}
