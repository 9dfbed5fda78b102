//! League and account types exchanged with the REST API.
//!
//! Responses come straight from the backend models, which serialize with
//! Go-style field names (`ID`, `Name`, `PrimaryColor`). Request bodies are
//! camelCase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Team {
    #[serde(rename = "ID")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub favorite_team: Option<Team>,
}

impl Profile {
    pub fn favorite_team_name(&self) -> Option<&str> {
        self.favorite_team.as_ref().map(|team| team.name.as_str()).filter(|name| !name.is_empty())
    }

    pub fn has_favorite_team(&self) -> bool {
        self.favorite_team.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub favorite_team: u32,
}

impl Registration {
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub team_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Parses a `<select>` value into a team id; empty or zero means "no team"
pub fn parse_team_selection(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|id| *id > 0)
}
