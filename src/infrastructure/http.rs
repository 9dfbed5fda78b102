use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::league::{Credentials, FavoriteRequest, LoginResponse, Profile, Registration, Team};
use crate::domain::logging::LogComponent;
use crate::domain::repositories::LeagueApi;
use crate::{log_debug, log_info};

/// `Authorization` value for a session token
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// gloo-net client for the league REST API
#[derive(Clone, Debug, Default)]
pub struct LeagueHttpClient {
    base_url: String,
}

impl LeagueHttpClient {
    /// `base_url` is prepended to every path; empty means same origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: Request) -> ApiResult<Response> {
        let method = request.method();
        let url = request.url();
        log_debug!(LogComponent::Infrastructure("LeagueHttp"), "📡 {method:?} {url}");

        let response =
            request.send().await.map_err(|e| ApiError::Network(format!("{method:?} {url}: {e}")))?;

        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        if status == 401 || status == 403 {
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http { status, body })
    }

    async fn get_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let request = builder.build().map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
        builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl LeagueApi for LeagueHttpClient {
    async fn me(&self, token: &str) -> ApiResult<Profile> {
        let builder =
            Request::get(&self.url("/api/profile/me")).header("Authorization", &bearer_header(token));
        self.get_json(builder).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let request = Self::with_json(Request::post(&self.url("/api/auth/login")), credentials)?;
        let response = self.send(request).await?;
        let login = response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        log_info!(LogComponent::Infrastructure("LeagueHttp"), "🔑 Login accepted for {}", credentials.email);
        Ok(login)
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let request =
            Self::with_json(Request::post(&self.url("/api/auth/register")), registration)?;
        self.send(request).await.map(|_| ())
    }

    async fn logout(&self) -> ApiResult<()> {
        let request = Request::post(&self.url("/api/auth/logout"))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(request).await.map(|_| ())
    }

    async fn teams(&self) -> ApiResult<Vec<Team>> {
        let teams: Vec<Team> = self.get_json(Request::get(&self.url("/api/teams"))).await?;
        log_debug!(LogComponent::Infrastructure("LeagueHttp"), "📋 Loaded {} teams", teams.len());
        Ok(teams)
    }

    async fn set_favorite(&self, token: &str, team_id: u32) -> ApiResult<()> {
        let builder = Request::post(&self.url("/api/profile/favorite"))
            .header("Authorization", &bearer_header(token));
        let request = Self::with_json(builder, &FavoriteRequest { team_id })?;
        self.send(request).await.map(|_| ())
    }
}
