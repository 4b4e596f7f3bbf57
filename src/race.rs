//! Race, result, and catalog records.

use serde::{Deserialize, Serialize};

use crate::types::{DivisionId, DriverId, RaceId, SeasonId, TeamId, TrackId};

/// Circuit metadata attached to a race; immutable display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Stable track identifier.
    pub id: TrackId,
    /// Circuit name.
    pub name: String,
    /// Host country, when recorded.
    pub country: Option<String>,
}

/// Result flags that affect point computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultFlags {
    /// Did not finish.
    pub dnf: bool,
    /// Disqualified.
    pub dsq: bool,
}

impl ResultFlags {
    /// True when the result scores no points regardless of position.
    pub fn unscored(&self) -> bool {
        self.dnf || self.dsq
    }
}

/// One driver's outcome within a race.
///
/// The team reference may be absent; an unassigned team is a valid terminal
/// state, not a data defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// Race this result belongs to.
    pub race_id: RaceId,
    /// Driver who scored this result.
    pub driver_id: DriverId,
    /// Team the driver raced for, when assigned.
    pub team_id: Option<TeamId>,
    /// Finishing position, 1 = winner.
    pub position: u32,
    /// Flags affecting point computation.
    pub flags: ResultFlags,
}

/// A single scored event within a (season, division) scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Creation-order identifier; canonical chronological order.
    pub id: RaceId,
    /// Season this race belongs to.
    pub season: SeasonId,
    /// Division this race belongs to.
    pub division: DivisionId,
    /// Round number within the calendar.
    pub round: u32,
    /// Circuit, when recorded.
    pub track: Option<Track>,
    /// Nested results, in stored order.
    #[serde(rename = "raceResults")]
    pub results: Vec<RaceResult>,
}

/// Driver catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Surrogate identifier referenced by results.
    pub id: DriverId,
    /// Natural key observed in the source data.
    pub name: String,
    /// Nationality, when recorded.
    pub country: Option<String>,
}

/// Team catalog row. Display metadata only; never part of ranking logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Surrogate identifier referenced by results.
    pub id: TeamId,
    /// Team name.
    pub name: String,
}
