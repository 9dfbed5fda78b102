#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use league_live_wasm::infrastructure::ui::{
    ANIMATION_STYLE_ID, NotificationKind, SLIDE_OUT_MS, show_notification,
};
use league_live_wasm::presentation::forms::{MessageKind, show_message};
use std::time::Duration;
use wasm_bindgen_test::*;
use web_sys::Document;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const VISIBLE_MS: u32 = 50;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test(async)]
async fn toasts_share_one_style_and_leave_after_slide_out() {
    show_notification("Saved", NotificationKind::Info, VISIBLE_MS);
    show_notification("Failed", NotificationKind::Error, VISIBLE_MS);

    assert_eq!(count(&format!("#{ANIMATION_STYLE_ID}")), 1);
    assert_eq!(count("body > [data-kind]"), 2);
    assert_eq!(count("[data-kind=\"info\"]"), 1);
    assert_eq!(count("[data-kind=\"error\"]"), 1);

    sleep(Duration::from_millis(u64::from(VISIBLE_MS / 2))).await;
    assert_eq!(count("[data-kind]"), 2);

    sleep(Duration::from_millis(u64::from(VISIBLE_MS + SLIDE_OUT_MS + 100))).await;
    assert_eq!(count("[data-kind]"), 0);
    assert_eq!(count(&format!("#{ANIMATION_STYLE_ID}")), 1);
}

#[wasm_bindgen_test]
fn message_without_target_is_ignored() {
    show_message("noSuchMessage", "Login failed.", MessageKind::Error);
    assert!(document().get_element_by_id("noSuchMessage").is_none());
}

#[wasm_bindgen_test]
fn message_replaces_previous_outcome() {
    let doc = document();
    let target = doc.create_element("div").unwrap();
    target.set_id("loginMessage");
    doc.body().unwrap().append_child(&target).unwrap();

    show_message("loginMessage", "Login failed.", MessageKind::Error);
    show_message("loginMessage", "Login successful!", MessageKind::Success);

    assert_eq!(target.text_content().as_deref(), Some("Login successful!"));
    assert!(target.class_list().contains("auth-message--success"));
    assert!(!target.class_list().contains("auth-message--error"));
}

#[wasm_bindgen_test]
fn console_logger_writes_every_level() {
    use league_live_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger};
    use league_live_wasm::infrastructure::services::ConsoleLogger;

    let logger = ConsoleLogger::new(LogLevel::Trace);
    for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        logger.log(LogEntry {
            timestamp: 0,
            level,
            component: LogComponent::Infrastructure("Console"),
            message: format!("{level} line"),
        });
    }
}
