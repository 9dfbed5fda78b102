//! Login / register page.

use gloo::events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::application::auth::AuthService;
use crate::application::context::AppContext;
use crate::domain::league::{Credentials, Registration, parse_team_selection};
use crate::domain::logging::LogComponent;
use crate::domain::navigation::FEED_PATH;
use crate::infrastructure::http::LeagueHttpClient;
use crate::infrastructure::ui::{NotificationKind, query_selector_all, redirect, show_notification};
use crate::presentation::forms::{MessageKind, element, fill_team_select, input_value, select, show_message};
use crate::{log_error, log_info};

const LOGIN_REDIRECT_MS: u32 = 800;
const AUTO_LOGIN_MS: u32 = 1000;

/// Activates the `login` or `register` tab and its form
fn show_tab(target: &str) {
    for tab in query_selector_all(".auth-tab") {
        let active = tab.get_attribute("data-tab").as_deref() == Some(target);
        let _ = tab.class_list().toggle_with_force("auth-tab--active", active);
    }
    if let Some(form) = element("loginForm") {
        let _ = form.class_list().toggle_with_force("auth-form--hidden", target != "login");
    }
    if let Some(form) = element("registerForm") {
        let _ = form.class_list().toggle_with_force("auth-form--hidden", target == "login");
    }
}

async fn load_registration_teams(ctx: &AppContext) {
    let Some(team_select) = select("registerTeam") else { return };
    match ctx.profile().teams().await {
        Ok(teams) => fill_team_select(&team_select, &teams, false),
        Err(e) => {
            log_error!(LogComponent::Presentation("AuthPage"), "Failed to load teams: {e}");
        }
    }
}

fn wire_tabs() {
    for tab in query_selector_all(".auth-tab") {
        let target = tab.get_attribute("data-tab").unwrap_or_default();
        EventListener::new(&tab, "click", move |_| show_tab(&target)).forget();
    }
}

fn on_submit(form_id: &str, mut handler: impl FnMut() + 'static) {
    let Some(form) = element(form_id) else { return };
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            handler();
        },
    )
    .forget();
}

const LOGIN_MESSAGE_ID: &str = "loginMessage";
const REGISTER_MESSAGE_ID: &str = "registerMessage";

async fn submit_login(auth: AuthService<LeagueHttpClient>, ctx: AppContext) {
    let credentials = Credentials {
        email: input_value("loginEmail").trim().to_string(),
        password: input_value("loginPassword"),
    };

    match auth.login(&credentials).await {
        Ok(token) => {
            show_message(LOGIN_MESSAGE_ID, "Login successful! Redirecting…", MessageKind::Success);
            show_notification("Welcome back!", NotificationKind::Info, ctx.config.notification_ms);
            TimeoutFuture::new(LOGIN_REDIRECT_MS).await;
            redirect(auth.post_login_destination(&token).await);
        }
        Err(e) => {
            log_error!(LogComponent::Presentation("AuthPage"), "Login failed: {e}");
            show_message(LOGIN_MESSAGE_ID, "Login failed. Check your email and password.", MessageKind::Error);
        }
    }
}

async fn submit_registration(auth: AuthService<LeagueHttpClient>, ctx: AppContext) {
    let team = select("registerTeam").and_then(|s| parse_team_selection(&s.value()));
    let Some(favorite_team) = team else {
        show_message(REGISTER_MESSAGE_ID, "Please select your favorite team.", MessageKind::Error);
        return;
    };
    let registration = Registration {
        name: input_value("registerName").trim().to_string(),
        email: input_value("registerEmail").trim().to_string(),
        password: input_value("registerPassword"),
        favorite_team,
    };

    if let Err(e) = auth.register(&registration).await {
        log_error!(LogComponent::Presentation("AuthPage"), "Registration failed: {e}");
        show_message(REGISTER_MESSAGE_ID, "Registration failed. Try a different email.", MessageKind::Error);
        return;
    }

    show_message(REGISTER_MESSAGE_ID, "Account created! Logging you in...", MessageKind::Success);
    show_notification("Account created successfully!", NotificationKind::Info, ctx.config.notification_ms);
    TimeoutFuture::new(AUTO_LOGIN_MS).await;

    match auth.login(&registration.credentials()).await {
        Ok(_) => redirect(FEED_PATH),
        Err(e) => {
            log_info!(LogComponent::Presentation("AuthPage"), "Auto-login failed, showing login tab: {e}");
            show_tab("login");
            show_message(REGISTER_MESSAGE_ID, "Account created! Please log in.", MessageKind::Success);
        }
    }
}

pub async fn init_auth_page(ctx: AppContext) {
    load_registration_teams(&ctx).await;
    wire_tabs();

    let auth = ctx.auth();
    {
        let (auth, ctx) = (auth.clone(), ctx.clone());
        on_submit("loginForm", move || spawn_local(submit_login(auth.clone(), ctx.clone())));
    }
    on_submit("registerForm", move || spawn_local(submit_registration(auth.clone(), ctx.clone())));
}
