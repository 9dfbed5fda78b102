use serde::Serialize;

use super::value_objects::Rank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub rank: Rank,
    pub team_name: String,
    pub played: u32,
    pub points: i32,
    pub goal_difference: i32,
    pub is_live: bool,
}

/// One complete standings snapshot, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StandingsTable {
    rows: Vec<StandingsRow>,
}

impl StandingsTable {
    /// Builds the table from `(team, played, points, gd, live)` entries.
    /// Ranks follow position only.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32, i32, i32, bool)>,
    {
        let rows = entries
            .into_iter()
            .enumerate()
            .map(|(idx, (team_name, played, points, goal_difference, is_live))| StandingsRow {
                rank: Rank::from_index(idx),
                team_name,
                played,
                points,
                goal_difference,
                is_live,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the global live indicator should be shown
    pub fn any_live(&self) -> bool {
        self.rows.iter().any(|row| row.is_live)
    }

    pub fn live_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_live).count()
    }
}
