use crate::application::session::SessionContext;
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::league::{Profile, Team};
use crate::domain::logging::LogComponent;
use crate::domain::repositories::LeagueApi;
use crate::domain::theme::{TeamColors, ThemeKey};
use crate::{log_info, log_warn};

pub const NOT_SET: &str = "Not set";
pub const NOT_LOGGED_IN: &str = "Not logged in";

/// Display-ready fields of the profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
    pub role: String,
    pub favorite_team: String,
    pub favorite_team_id: Option<u32>,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            role: profile.role.clone(),
            favorite_team: profile.favorite_team_name().unwrap_or(NOT_SET).to_string(),
            favorite_team_id: profile.favorite_team.as_ref().map(|team| team.id),
        }
    }
}

/// Visual identity derived from the favorite team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTheme {
    pub colors: Option<TeamColors>,
    pub key: Option<ThemeKey>,
}

impl ProfileTheme {
    pub fn for_profile(profile: &Profile) -> Self {
        match &profile.favorite_team {
            Some(team) => Self {
                colors: Some(TeamColors::new(&team.primary_color, &team.secondary_color)),
                key: ThemeKey::from_team_name(&team.name),
            },
            None => Self { colors: None, key: None },
        }
    }
}

/// Profile page operations
#[derive(Clone)]
pub struct ProfileService<A: LeagueApi> {
    api: A,
    session: SessionContext,
}

impl<A: LeagueApi> ProfileService<A> {
    pub fn new(api: A, session: SessionContext) -> Self {
        Self { api, session }
    }

    fn token(&self) -> ApiResult<String> {
        self.session.token().ok_or(ApiError::Unauthorized)
    }

    pub async fn teams(&self) -> ApiResult<Vec<Team>> {
        self.api.teams().await
    }

    pub async fn load_me(&self) -> ApiResult<Profile> {
        let token = self.token()?;
        self.api.me(&token).await
    }

    pub async fn save_favorite(&self, team_id: u32) -> ApiResult<()> {
        let token = self.token()?;
        self.api.set_favorite(&token, team_id).await?;
        log_info!(LogComponent::Application("Profile"), "⭐ Favorite team set to {team_id}");
        Ok(())
    }

    /// Persists the theme of `profile`, if its team has one
    pub fn remember_theme(&self, theme: &ProfileTheme) {
        if let Some(key) = theme.key {
            if let Err(e) = self.session.store_theme(key) {
                log_warn!(LogComponent::Application("Profile"), "Theme not persisted: {e}");
            }
        }
    }
}
