//! Page routing rules shared by the shell and the auth flow.

pub const AUTH_PATH: &str = "/auth";
pub const FEED_PATH: &str = "/feed";
pub const PROFILE_PATH: &str = "/profile";

/// Pages reachable without a session
pub const PUBLIC_PATHS: [&str; 3] = ["/", AUTH_PATH, PROFILE_PATH];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Outcome of the page-load access check before any network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessCheck {
    Public,
    Verify(String),
    RedirectToLogin,
}

pub fn access_check(path: &str, token: Option<&str>) -> AccessCheck {
    if is_public_path(path) {
        return AccessCheck::Public;
    }
    match token {
        Some(token) if !token.is_empty() => AccessCheck::Verify(token.to_string()),
        _ => AccessCheck::RedirectToLogin,
    }
}

/// Sidebar link highlighting; the landing page shows the feed link as active
pub fn is_nav_link_active(current_path: &str, href: &str) -> bool {
    href == current_path || (current_path == "/" && href == FEED_PATH)
}

/// Up to two uppercase initials for the header avatar
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
