pub mod sqlite;

use crate::race::{Driver, Race, Team};
use crate::types::{DivisionId, SeasonId};

#[derive(Debug)]
pub enum RepoError {
    Sqlite(rusqlite::Error),
    Message(String),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Read-only view of the race/result/driver/team catalog.
///
/// The engine never creates, mutates, or deletes these rows; each call is a
/// consistent read of whatever the import tooling has loaded.
pub trait ResultsRepository: Send {
    /// Races (with nested results and track) for one (season, division) scope.
    fn races(&self, season: SeasonId, division: DivisionId) -> RepoResult<Vec<Race>>;
    /// Races across every division of `season`.
    fn season_races(&self, season: SeasonId) -> RepoResult<Vec<Race>>;
    /// Full driver catalog.
    fn drivers(&self) -> RepoResult<Vec<Driver>>;
    /// Full team catalog.
    fn teams(&self) -> RepoResult<Vec<Team>>;
}
