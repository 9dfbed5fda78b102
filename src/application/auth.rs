use crate::application::session::SessionContext;
use crate::domain::errors::ApiResult;
use crate::domain::league::{Credentials, Registration};
use crate::domain::logging::LogComponent;
use crate::domain::navigation::{AUTH_PATH, AccessCheck, FEED_PATH, PROFILE_PATH, access_check};
use crate::domain::repositories::LeagueApi;
use crate::{log_info, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    RedirectToLogin,
}

/// Login, registration, logout and the page-load guard
#[derive(Clone)]
pub struct AuthService<A: LeagueApi> {
    api: A,
    session: SessionContext,
}

impl<A: LeagueApi> AuthService<A> {
    pub fn new(api: A, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Public pages pass; everything else needs a token the backend still accepts.
    /// A rejected token is dropped from the session.
    pub async fn check_access(&self, path: &str) -> AccessDecision {
        match access_check(path, self.session.token().as_deref()) {
            AccessCheck::Public => AccessDecision::Allowed,
            AccessCheck::RedirectToLogin => AccessDecision::RedirectToLogin,
            AccessCheck::Verify(token) => match self.api.me(&token).await {
                Ok(_) => AccessDecision::Allowed,
                Err(e) => {
                    log_warn!(LogComponent::Application("Auth"), "🔒 Stored token rejected: {e}");
                    self.session.clear_token();
                    AccessDecision::RedirectToLogin
                }
            },
        }
    }

    /// Exchanges credentials for a token and stores it
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let response = self.api.login(credentials).await?;
        if let Err(e) = self.session.store_token(&response.token) {
            log_warn!(LogComponent::Application("Auth"), "⚠️ Token not persisted: {e}");
        }
        log_info!(LogComponent::Application("Auth"), "🔑 Logged in");
        Ok(response.token)
    }

    pub async fn register(&self, registration: &Registration) -> ApiResult<()> {
        self.api.register(registration).await?;
        log_info!(LogComponent::Application("Auth"), "🆕 Account created for {}", registration.email);
        Ok(())
    }

    /// Where to go after login: users without a favorite team pick one first
    pub async fn post_login_destination(&self, token: &str) -> &'static str {
        match self.api.me(token).await {
            Ok(profile) if profile.has_favorite_team() => FEED_PATH,
            Ok(_) => PROFILE_PATH,
            Err(e) => {
                log_warn!(LogComponent::Application("Auth"), "Profile check failed: {e}");
                PROFILE_PATH
            }
        }
    }

    /// Best-effort server logout, then local cleanup. Returns the login page path.
    pub async fn logout(&self) -> &'static str {
        if let Err(e) = self.api.logout().await {
            log_warn!(LogComponent::Application("Auth"), "Logout request failed: {e}");
        }
        self.session.clear();
        AUTH_PATH
    }
}
