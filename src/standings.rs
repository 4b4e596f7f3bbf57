//! Standings aggregation: a single forward fold over in-scope results.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::points::PointsTable;
use crate::race::{Driver, Race, Team};
use crate::types::{DivisionId, DriverId, Points, TeamId};

/// Entry count for the "current" ranking feature.
pub const TOP_N: usize = 3;

/// Aggregation failures caused by inconsistent repository data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsError {
    /// A result references a driver id missing from the catalog.
    UnknownDriver(DriverId),
    /// A result references a team id missing from the catalog.
    UnknownTeam(TeamId),
}

/// Driver and team catalogs keyed by surrogate id.
#[derive(Debug, Default)]
pub struct Roster {
    drivers: HashMap<DriverId, String>,
    teams: HashMap<TeamId, String>,
}

impl Roster {
    /// Builds a roster from repository catalog rows.
    pub fn new(drivers: Vec<Driver>, teams: Vec<Team>) -> Self {
        Self {
            drivers: drivers.into_iter().map(|d| (d.id, d.name)).collect(),
            teams: teams.into_iter().map(|t| (t.id, t.name)).collect(),
        }
    }

    /// Resolves a driver id to its natural-key name.
    pub fn driver_name(&self, id: DriverId) -> Option<&str> {
        self.drivers.get(&id).map(String::as_str)
    }

    /// Resolves a team id to its display name.
    pub fn team_name(&self, id: TeamId) -> Option<&str> {
        self.teams.get(&id).map(String::as_str)
    }
}

/// Derived ranking row; regenerated on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    /// Resolved driver name.
    #[serde(rename = "Driver")]
    pub driver: String,
    /// Accumulated points within scope; always non-negative.
    #[serde(rename = "TotalPoints")]
    pub total_points: Points,
    /// Team from the driver's most recent result, absent when unassigned.
    #[serde(rename = "Team")]
    pub team: Option<String>,
}

/// Ranked entries for one division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionStandings {
    /// Division the group belongs to.
    #[serde(rename = "Division")]
    pub division: DivisionId,
    /// At most [`TOP_N`] entries, points descending.
    #[serde(rename = "Top3")]
    pub top3: Vec<StandingsEntry>,
}

#[derive(Debug, Default)]
struct Tally {
    points: Points,
    last_team: Option<TeamId>,
}

/// Ranks every driver that has at least one result in `races`.
///
/// The fold walks races in chronological order (ascending id) and results in
/// stored order. A driver's team is whatever their last result carried,
/// including `None`; drivers that changed teams mid-scope surface the most
/// recent one. Ties on points break by driver name ascending so output is
/// deterministic. `limit` truncates after sorting.
pub fn rank_drivers<'a>(
    races: impl IntoIterator<Item = &'a Race>,
    roster: &Roster,
    table: &PointsTable,
    limit: Option<usize>,
) -> Result<Vec<StandingsEntry>, StandingsError> {
    let mut ordered: Vec<&Race> = races.into_iter().collect();
    ordered.sort_by_key(|race| race.id);

    let mut tallies: HashMap<DriverId, Tally> = HashMap::new();
    for race in ordered {
        for result in &race.results {
            let tally = tallies.entry(result.driver_id).or_default();
            tally.points += table.points_for(result.position, &result.flags);
            tally.last_team = result.team_id;
        }
    }

    let mut entries = Vec::with_capacity(tallies.len());
    for (driver_id, tally) in tallies {
        let driver = roster
            .driver_name(driver_id)
            .ok_or(StandingsError::UnknownDriver(driver_id))?
            .to_string();
        let team = match tally.last_team {
            Some(team_id) => Some(
                roster
                    .team_name(team_id)
                    .ok_or(StandingsError::UnknownTeam(team_id))?
                    .to_string(),
            ),
            None => None,
        };
        entries.push(StandingsEntry {
            driver,
            total_points: tally.points,
            team,
        });
    }

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.driver.cmp(&b.driver))
    });
    if let Some(n) = limit {
        entries.truncate(n);
    }
    Ok(entries)
}

/// Groups a season's races by division and ranks the top [`TOP_N`] of each.
///
/// Divisions whose races have no results are omitted, never included empty.
/// Groups come out ascending by division id.
pub fn season_top3(
    races: &[Race],
    roster: &Roster,
    table: &PointsTable,
) -> Result<Vec<DivisionStandings>, StandingsError> {
    let mut by_division: BTreeMap<DivisionId, Vec<&Race>> = BTreeMap::new();
    for race in races {
        by_division.entry(race.division).or_default().push(race);
    }

    let mut groups = Vec::with_capacity(by_division.len());
    for (division, group) in by_division {
        let top3 = rank_drivers(group.iter().copied(), roster, table, Some(TOP_N))?;
        if top3.is_empty() {
            continue;
        }
        groups.push(DivisionStandings { division, top3 });
    }
    Ok(groups)
}
