//! Domain layer: pure types and rules, no browser access.

pub mod errors;
pub mod league;
pub mod logging;
pub mod navigation;
pub mod repositories;
pub mod session;
pub mod standings;
pub mod theme;
