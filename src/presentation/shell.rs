//! Work done on every page: access guard, saved theme, navigation, header badge.

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::application::auth::AccessDecision;
use crate::application::context::AppContext;
use crate::domain::logging::LogComponent;
use crate::domain::navigation::{AUTH_PATH, initials, is_nav_link_active};
use crate::infrastructure::ui::{
    apply_theme_class, current_path, query_selector, query_selector_all, redirect,
};
use crate::{log_debug, log_error};

pub async fn bootstrap(ctx: AppContext) {
    let path = current_path();
    if ctx.auth().check_access(&path).await == AccessDecision::RedirectToLogin {
        redirect(AUTH_PATH);
        return;
    }

    if let Some(key) = ctx.session.theme() {
        apply_theme_class(key);
    }
    highlight_nav_links(&path);
    enable_smooth_scroll();
    fill_user_badge(&ctx).await;
    log_debug!(LogComponent::Presentation("Shell"), "✅ Page shell ready for {path}");
}

fn highlight_nav_links(path: &str) {
    for link in query_selector_all("#sidebar a") {
        let active = link.get_attribute("href").is_some_and(|href| is_nav_link_active(path, &href));
        let _ = link.class_list().toggle_with_force("active", active);
    }
}

fn enable_smooth_scroll() {
    for anchor in query_selector_all("a[href^=\"#\"]") {
        let Some(href) = anchor.get_attribute("href") else { continue };
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                if let Some(target) = query_selector(&href) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            },
        )
        .forget();
    }
}

async fn fill_user_badge(ctx: &AppContext) {
    if !ctx.session.is_authenticated() || query_selector(".user-profile").is_none() {
        return;
    }
    match ctx.profile().load_me().await {
        Ok(profile) if !profile.name.is_empty() => {
            if let Some(avatar) = query_selector(".user-avatar") {
                avatar.set_text_content(Some(&initials(&profile.name)));
            }
            if let Some(name) = query_selector(".user-profile span") {
                name.set_text_content(Some(&profile.name));
            }
        }
        Ok(_) => {}
        Err(e) => {
            log_error!(LogComponent::Presentation("Shell"), "Failed to load user profile: {e}");
        }
    }
}
