//! Use cases wiring the domain to browser adapters.

pub mod auth;
pub mod context;
pub mod live_table;
pub mod profile;
pub mod session;
