use crate::domain::errors::ApiResult;
use crate::domain::league::{Credentials, LoginResponse, Profile, Registration, Team};

/// REST surface of the league backend.
///
/// Futures are `!Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait LeagueApi {
    async fn me(&self, token: &str) -> ApiResult<Profile>;
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;
    async fn register(&self, registration: &Registration) -> ApiResult<()>;
    /// Clears the server-side auth cookie
    async fn logout(&self) -> ApiResult<()>;
    async fn teams(&self) -> ApiResult<Vec<Team>>;
    async fn set_favorite(&self, token: &str, team_id: u32) -> ApiResult<()>;
}
