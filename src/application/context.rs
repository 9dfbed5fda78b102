use crate::application::auth::AuthService;
use crate::application::profile::ProfileService;
use crate::application::session::SessionContext;
use crate::infrastructure::config::{AppConfig, app_config};
use crate::infrastructure::http::LeagueHttpClient;

/// Everything a page controller needs, built once per page
#[derive(Clone)]
pub struct AppContext {
    pub config: &'static AppConfig,
    pub session: SessionContext,
    pub api: LeagueHttpClient,
}

impl AppContext {
    pub fn from_page() -> Self {
        let config = app_config();
        Self {
            config,
            session: SessionContext::browser(),
            api: LeagueHttpClient::new(config.api_base.clone()),
        }
    }

    pub fn auth(&self) -> AuthService<LeagueHttpClient> {
        AuthService::new(self.api.clone(), self.session.clone())
    }

    pub fn profile(&self) -> ProfileService<LeagueHttpClient> {
        ProfileService::new(self.api.clone(), self.session.clone())
    }
}
