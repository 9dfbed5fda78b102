//! Push-stream plumbing for the live standings table.

pub mod connector;
pub mod dto;
pub mod standings_client;

pub use connector::*;
pub use dto::*;
pub use standings_client::*;
