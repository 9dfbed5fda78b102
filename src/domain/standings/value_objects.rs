use derive_more::{Display, From, Into};
use serde::Serialize;

/// 1-based table position, taken from the row's index in the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, From, Into, Serialize)]
pub struct Rank(u32);

impl Rank {
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Lifecycle of the single feed connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConnectionState {
    #[display(fmt = "connected")]
    Connected,
    #[display(fmt = "reconnect pending")]
    ReconnectPending,
}
