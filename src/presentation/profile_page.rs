//! Profile page: quick login, profile card, favorite team picker.

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::application::context::AppContext;
use crate::application::profile::{NOT_LOGGED_IN, ProfileSummary, ProfileTheme};
use crate::domain::league::{Credentials, Profile, parse_team_selection};
use crate::domain::logging::LogComponent;
use crate::infrastructure::ui::{
    NotificationKind, apply_team_colors, apply_theme_class, element_by_id, set_text, show_notification,
};
use crate::presentation::forms::{fill_team_select, input_value, preselect_team, select};
use crate::{log_error, log_warn};

fn set_raw_profile(raw: &str) {
    if let Some(me_data) = element_by_id::<HtmlElement>("meData") {
        let _ = me_data.dataset().set("raw", raw);
    }
}

fn render_profile(ctx: &AppContext, profile: &Profile) {
    match serde_json::to_string_pretty(profile) {
        Ok(raw) => set_raw_profile(&raw),
        Err(e) => {
            log_warn!(LogComponent::Presentation("ProfilePage"), "Profile not serializable: {e}");
        }
    }

    let summary = ProfileSummary::from(profile);
    if !summary.name.is_empty() {
        set_text("displayName", &summary.name);
    }
    if !summary.email.is_empty() {
        set_text("displayEmail", &summary.email);
    }
    if !summary.role.is_empty() {
        set_text("displayRole", &summary.role);
    }
    set_text("displayFavoriteTeam", &summary.favorite_team);

    if let (Some(team_select), Some(team_id)) = (select("teamSelect"), summary.favorite_team_id) {
        preselect_team(&team_select, team_id);
    }

    let theme = ProfileTheme::for_profile(profile);
    if let Some(colors) = &theme.colors {
        apply_team_colors(colors);
    }
    if let Some(key) = theme.key {
        ctx.profile().remember_theme(&theme);
        apply_theme_class(key);
    }
}

async fn load_me(ctx: &AppContext) {
    match ctx.profile().load_me().await {
        Ok(profile) => render_profile(ctx, &profile),
        Err(e) => {
            log_warn!(LogComponent::Presentation("ProfilePage"), "Profile unavailable: {e}");
            set_raw_profile(NOT_LOGGED_IN);
        }
    }
}

async fn load_teams(ctx: &AppContext) {
    let Some(team_select) = select("teamSelect") else { return };
    match ctx.profile().teams().await {
        Ok(teams) => fill_team_select(&team_select, &teams, true),
        Err(e) => {
            log_error!(LogComponent::Presentation("ProfilePage"), "Failed to load teams: {e}");
        }
    }
}

async fn quick_login(ctx: AppContext) {
    let credentials = Credentials { email: input_value("email"), password: input_value("password") };
    match ctx.auth().login(&credentials).await {
        Ok(_) => {
            set_text("loginStatus", "Logged in");
            load_me(&ctx).await;
        }
        Err(e) => {
            log_warn!(LogComponent::Presentation("ProfilePage"), "Login failed: {e}");
            set_text("loginStatus", "Login failed");
        }
    }
}

async fn save_favorite(ctx: AppContext) {
    let notify = |message: &str, kind| show_notification(message, kind, ctx.config.notification_ms);
    let selection = select("teamSelect").and_then(|s| parse_team_selection(&s.value()));
    let Some(team_id) = selection else {
        notify("Please select a team first.", NotificationKind::Info);
        return;
    };

    match ctx.profile().save_favorite(team_id).await {
        Ok(()) => {
            load_me(&ctx).await;
            notify("Favorite team saved successfully.", NotificationKind::Info);
        }
        Err(e) => {
            log_error!(LogComponent::Presentation("ProfilePage"), "Saving favorite failed: {e}");
            notify("Failed to save favorite team.", NotificationKind::Error);
        }
    }
}

fn on_click<F, Fut>(id: &str, ctx: &AppContext, action: F)
where
    F: Fn(AppContext) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(button) = element_by_id::<HtmlElement>(id) else { return };
    let ctx = ctx.clone();
    EventListener::new(&button, "click", move |_| spawn_local(action(ctx.clone()))).forget();
}

pub async fn init_profile_page(ctx: AppContext) {
    on_click("loginBtn", &ctx, quick_login);
    on_click("saveFavBtn", &ctx, save_favorite);

    load_teams(&ctx).await;
    load_me(&ctx).await;
}
