//! In-memory stand-in for the league backend.

#![allow(dead_code)]

use league_live_wasm::application::session::SessionContext;
use league_live_wasm::domain::errors::{ApiError, ApiResult};
use league_live_wasm::domain::league::{Credentials, LoginResponse, Profile, Registration, Team};
use league_live_wasm::domain::repositories::LeagueApi;
use league_live_wasm::infrastructure::storage::InMemoryStore;
use std::cell::RefCell;
use std::rc::Rc;

pub const VALID_TOKEN: &str = "valid-token";

#[derive(Default)]
pub struct Backend {
    pub profile: Option<Profile>,
    pub teams: Vec<Team>,
    pub accept_login: bool,
    pub accept_register: bool,
    pub logout_fails: bool,
    pub favorite_calls: Vec<(String, u32)>,
    pub logout_calls: usize,
    pub registrations: Vec<Registration>,
}

/// Cheap to clone; all clones see the same backend
#[derive(Clone, Default)]
pub struct FakeApi(pub Rc<RefCell<Backend>>);

impl FakeApi {
    pub fn with(configure: impl FnOnce(&mut Backend)) -> Self {
        let api = Self::default();
        configure(&mut api.0.borrow_mut());
        api
    }
}

impl LeagueApi for FakeApi {
    async fn me(&self, token: &str) -> ApiResult<Profile> {
        if token != VALID_TOKEN {
            return Err(ApiError::Unauthorized);
        }
        self.0.borrow().profile.clone().ok_or(ApiError::Http { status: 404, body: "not found".into() })
    }

    async fn login(&self, _credentials: &Credentials) -> ApiResult<LoginResponse> {
        if self.0.borrow().accept_login {
            Ok(LoginResponse { token: VALID_TOKEN.to_string() })
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let mut backend = self.0.borrow_mut();
        if !backend.accept_register {
            return Err(ApiError::Http { status: 400, body: "email taken".into() });
        }
        backend.registrations.push(registration.clone());
        Ok(())
    }

    async fn logout(&self) -> ApiResult<()> {
        let mut backend = self.0.borrow_mut();
        backend.logout_calls += 1;
        if backend.logout_fails {
            Err(ApiError::Network("offline".into()))
        } else {
            Ok(())
        }
    }

    async fn teams(&self) -> ApiResult<Vec<Team>> {
        Ok(self.0.borrow().teams.clone())
    }

    async fn set_favorite(&self, token: &str, team_id: u32) -> ApiResult<()> {
        if token != VALID_TOKEN {
            return Err(ApiError::Unauthorized);
        }
        self.0.borrow_mut().favorite_calls.push((token.to_string(), team_id));
        Ok(())
    }
}

pub fn team(id: u32, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        short_name: String::new(),
        primary_color: "#DA291C".to_string(),
        secondary_color: "#FBE122".to_string(),
    }
}

pub fn profile(favorite: Option<Team>) -> Profile {
    Profile {
        name: "Alex Ferguson".to_string(),
        email: "alex@example.com".to_string(),
        role: "user".to_string(),
        favorite_team: favorite,
    }
}

pub fn memory_session() -> SessionContext {
    SessionContext::new(Rc::new(InMemoryStore::new()))
}
