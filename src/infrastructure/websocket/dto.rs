//! Wire format of `/ws/standings` pushes.

use serde::Deserialize;

use crate::domain::standings::StandingsTable;

/// `{ "standings": [ ... ] }`; a missing or null list is malformed
#[derive(Debug, Deserialize)]
pub struct StandingsSnapshotDto {
    pub standings: Vec<StandingsEntryDto>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsEntryDto {
    pub team: String,
    pub played: u32,
    pub points: i32,
    pub gd: i32,
    #[serde(default)]
    pub live: bool,
}

impl StandingsSnapshotDto {
    pub fn into_table(self) -> StandingsTable {
        StandingsTable::from_entries(
            self.standings.into_iter().map(|e| (e.team, e.played, e.points, e.gd, e.live)),
        )
    }
}
