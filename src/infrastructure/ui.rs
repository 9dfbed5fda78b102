//! DOM side effects that are not part of the reactive table.

use gloo_timers::callback::Timeout;
use strum::{AsRefStr, Display};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::domain::logging::LogComponent;
use crate::domain::theme::{TeamColors, ThemeKey};
use crate::{log_debug, log_warn};

pub const ANIMATION_STYLE_ID: &str = "notification-animations";
pub const SLIDE_OUT_MS: u32 = 300;

const ANIMATION_CSS: &str = r#"
  @keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
  }
  @keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
  }
"#;

const TOAST_STYLE: &str = "position: fixed; top: 90px; right: 20px; padding: 16px 24px; \
    background: var(--bg-secondary); border-left: 4px solid var(--accent-primary); \
    border-radius: 8px; box-shadow: var(--shadow-lg); z-index: 1000; \
    animation: slideIn 0.3s ease;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    let element = document()?.get_element_by_id(id);
    if element.is_none() {
        log_debug!(LogComponent::Infrastructure("UI"), "Element #{id} not found");
    }
    element?.dyn_into::<T>().ok()
}

pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, skipping non-element nodes
pub fn query_selector_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(id: &str, text: &str) {
    if let Some(element) = element_by_id::<Element>(id) {
        element.set_text_content(Some(text));
    }
}

pub fn redirect(path: &str) {
    log_debug!(LogComponent::Infrastructure("UI"), "↪️ Redirecting to {path}");
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log_warn!(LogComponent::Infrastructure("UI"), "Redirect to {path} failed: {e:?}");
        }
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Shows `display` or hides the element
pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "" } else { "none" };
    let _ = element.style().set_property("display", display);
}

/// Sets `--primary` / `--secondary` on the document root
pub fn apply_team_colors(colors: &TeamColors) {
    let Some(root) = document()
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    let _ = style.set_property("--primary", &colors.primary);
    let _ = style.set_property("--secondary", &colors.secondary);
}

pub fn apply_theme_class(key: ThemeKey) {
    if let Some(body) = document().and_then(|d| d.body()) {
        body.set_class_name(&key.body_class());
    }
}

fn ensure_animation_style(document: &Document) {
    if document.get_element_by_id(ANIMATION_STYLE_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        return;
    };
    style.set_id(ANIMATION_STYLE_ID);
    style.set_text_content(Some(ANIMATION_CSS));
    let _ = head.append_child(&style);
}

/// Toast in the top-right corner, removed after `visible_ms` plus the slide-out
pub fn show_notification(message: &str, kind: NotificationKind, visible_ms: u32) {
    log_debug!(LogComponent::Infrastructure("UI"), "🔔 [{kind}] {message}");

    let Some(document) = document() else { return };
    let Some(body) = document.body() else { return };
    ensure_animation_style(&document);

    let Ok(toast) = document.create_element("div").map(|e| e.unchecked_into::<HtmlElement>()) else {
        return;
    };
    let _ = toast.set_attribute("style", TOAST_STYLE);
    let _ = toast.set_attribute("data-kind", kind.as_ref());
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }

    Timeout::new(visible_ms, move || {
        let _ = toast.style().set_property("animation", "slideOut 0.3s ease");
        Timeout::new(SLIDE_OUT_MS, move || toast.remove()).forget();
    })
    .forget();
}
