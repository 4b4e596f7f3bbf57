//! Query facade: the three read operations over a repository snapshot.

use tracing::debug;

use crate::points::PointsTable;
use crate::race::Race;
use crate::repo::{RepoError, ResultsRepository};
use crate::standings::{DivisionStandings, Roster, StandingsError, season_top3};
use crate::types::{DivisionId, SeasonId};

#[derive(Debug)]
pub enum QueryError {
    /// No race exists for the requested (season, division) scope.
    NotFound,
    /// The repository failed or returned inconsistent data.
    Repo(RepoError),
}

impl From<RepoError> for QueryError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<StandingsError> for QueryError {
    fn from(value: StandingsError) -> Self {
        let msg = match value {
            StandingsError::UnknownDriver(id) => {
                format!("result references unknown driver id {id}")
            }
            StandingsError::UnknownTeam(id) => format!("result references unknown team id {id}"),
        };
        Self::Repo(RepoError::Message(msg))
    }
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Read facade over a results repository and a points table.
///
/// Stateless between calls: every operation is a pure transformation over a
/// fresh repository read, so identical calls over an unchanged catalog yield
/// identical output.
pub struct Championship {
    repo: Box<dyn ResultsRepository>,
    points: PointsTable,
}

impl Championship {
    /// Wraps a repository with the scoring configuration to apply.
    pub fn new(repo: Box<dyn ResultsRepository>, points: PointsTable) -> Self {
        Self { repo, points }
    }

    /// Points table this facade scores with.
    pub fn points(&self) -> &PointsTable {
        &self.points
    }

    /// Races for one (season, division), ascending by race id.
    ///
    /// A scope with zero races is [`QueryError::NotFound`]; an empty listing
    /// is never silently returned here.
    pub fn races_by_division(
        &self,
        season: SeasonId,
        division: DivisionId,
    ) -> QueryResult<Vec<Race>> {
        self.scoped_races(season, division)
    }

    /// Same data as [`Self::races_by_division`]; the ascending-by-id ordering
    /// guarantee is the named contract of this operation.
    pub fn races_ordered(&self, season: SeasonId, division: DivisionId) -> QueryResult<Vec<Race>> {
        self.scoped_races(season, division)
    }

    /// Top-3 driver standings per division for `season`.
    ///
    /// The current season is supplied by the caller's policy, never inferred.
    /// This operation never reports NotFound: a season with no scored
    /// divisions degrades to an empty list.
    pub fn current_top3(&self, season: SeasonId) -> QueryResult<Vec<DivisionStandings>> {
        let races = self.repo.season_races(season)?;
        debug!(season, races = races.len(), "computing current standings");
        if races.is_empty() {
            return Ok(Vec::new());
        }

        let roster = Roster::new(self.repo.drivers()?, self.repo.teams()?);
        Ok(season_top3(&races, &roster, &self.points)?)
    }

    fn scoped_races(&self, season: SeasonId, division: DivisionId) -> QueryResult<Vec<Race>> {
        let mut races = self.repo.races(season, division)?;
        debug!(season, division, races = races.len(), "loaded scope");
        if races.is_empty() {
            return Err(QueryError::NotFound);
        }
        races.sort_by_key(|race| race.id);
        Ok(races)
    }
}
