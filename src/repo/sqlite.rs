//! SQLite-backed results repository.

use std::path::Path;

use rusqlite::{Connection, Row, params};
use tracing::debug;

use crate::race::{Driver, Race, RaceResult, ResultFlags, Team, Track};
use crate::types::{DivisionId, DriverId, RaceId, SeasonId, TeamId, TrackId};

use super::{RepoResult, ResultsRepository};

const SCOPED_RACES_SQL: &str = "SELECT r.id, r.season, r.division, r.round, t.id, t.name, t.country \
     FROM races r LEFT JOIN tracks t ON t.id = r.track_id \
     WHERE r.season = ?1 AND r.division = ?2 ORDER BY r.id ASC";

const SEASON_RACES_SQL: &str = "SELECT r.id, r.season, r.division, r.round, t.id, t.name, t.country \
     FROM races r LEFT JOIN tracks t ON t.id = r.track_id \
     WHERE r.season = ?1 ORDER BY r.id ASC";

/// SQLite implementation of [`crate::repo::ResultsRepository`].
///
/// The write helpers exist for the import tooling and for test seeding; the
/// engine itself only ever reads.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens or creates a repository database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Self::init_schema(conn)
    }

    /// Opens an in-memory repository.
    pub fn open_in_memory() -> RepoResult<Self> {
        Self::init_schema(Connection::open_in_memory()?)
    }

    fn init_schema(conn: Connection) -> RepoResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// Inserts a track row, returning its id.
    pub fn add_track(&self, name: &str, country: Option<&str>) -> RepoResult<TrackId> {
        self.conn.execute(
            "INSERT INTO tracks(name, country) VALUES (?1, ?2)",
            params![name, country],
        )?;
        Ok(self.conn.last_insert_rowid() as TrackId)
    }

    /// Inserts a driver row, returning its id.
    pub fn add_driver(&self, name: &str, country: Option<&str>) -> RepoResult<DriverId> {
        self.conn.execute(
            "INSERT INTO drivers(name, country) VALUES (?1, ?2)",
            params![name, country],
        )?;
        Ok(self.conn.last_insert_rowid() as DriverId)
    }

    /// Inserts a team row, returning its id.
    pub fn add_team(&self, name: &str) -> RepoResult<TeamId> {
        self.conn
            .execute("INSERT INTO teams(name) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid() as TeamId)
    }

    /// Inserts a race row, returning its creation-order id.
    pub fn add_race(
        &self,
        season: SeasonId,
        division: DivisionId,
        round: u32,
        track_id: Option<TrackId>,
    ) -> RepoResult<RaceId> {
        self.conn.execute(
            "INSERT INTO races(season, division, round, track_id) VALUES (?1, ?2, ?3, ?4)",
            params![
                season as i64,
                division as i64,
                round as i64,
                track_id.map(|v| v as i64)
            ],
        )?;
        Ok(self.conn.last_insert_rowid() as RaceId)
    }

    /// Inserts one result row for a race.
    pub fn add_result(
        &self,
        race_id: RaceId,
        driver_id: DriverId,
        team_id: Option<TeamId>,
        position: u32,
        flags: ResultFlags,
    ) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO race_results(race_id, driver_id, team_id, position, dnf, dsq) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                race_id as i64,
                driver_id as i64,
                team_id.map(|v| v as i64),
                position as i64,
                flags.dnf,
                flags.dsq
            ],
        )?;
        Ok(())
    }

    fn load_races(&self, sql: &str, bind: &[i64]) -> RepoResult<Vec<Race>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(bind), race_from_row)?;

        let mut races = Vec::new();
        for row in rows {
            races.push(row?);
        }
        for race in &mut races {
            race.results = self.load_results(race.id)?;
        }
        Ok(races)
    }

    fn load_results(&self, race_id: RaceId) -> RepoResult<Vec<RaceResult>> {
        let mut stmt = self.conn.prepare(
            "SELECT race_id, driver_id, team_id, position, dnf, dsq \
             FROM race_results WHERE race_id = ?1 ORDER BY id ASC",
        )?;
        let rows = stmt.query_map(params![race_id as i64], |row| {
            Ok(RaceResult {
                race_id: row.get::<_, i64>(0)? as RaceId,
                driver_id: row.get::<_, i64>(1)? as DriverId,
                team_id: row.get::<_, Option<i64>>(2)?.map(|v| v as TeamId),
                position: row.get::<_, i64>(3)? as u32,
                flags: ResultFlags {
                    dnf: row.get(4)?,
                    dsq: row.get(5)?,
                },
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

impl ResultsRepository for SqliteRepository {
    fn races(&self, season: SeasonId, division: DivisionId) -> RepoResult<Vec<Race>> {
        debug!(season, division, "loading scoped races");
        self.load_races(SCOPED_RACES_SQL, &[i64::from(season), i64::from(division)])
    }

    fn season_races(&self, season: SeasonId) -> RepoResult<Vec<Race>> {
        debug!(season, "loading season races");
        self.load_races(SEASON_RACES_SQL, &[i64::from(season)])
    }

    fn drivers(&self) -> RepoResult<Vec<Driver>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, country FROM drivers ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Driver {
                id: row.get::<_, i64>(0)? as DriverId,
                name: row.get(1)?,
                country: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn teams(&self) -> RepoResult<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM teams ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Team {
                id: row.get::<_, i64>(0)? as TeamId,
                name: row.get(1)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

fn race_from_row(row: &Row<'_>) -> rusqlite::Result<Race> {
    let track = match row.get::<_, Option<i64>>(4)? {
        Some(id) => Some(Track {
            id: id as TrackId,
            name: row.get(5)?,
            country: row.get(6)?,
        }),
        None => None,
    };

    Ok(Race {
        id: row.get::<_, i64>(0)? as RaceId,
        season: row.get::<_, i64>(1)? as SeasonId,
        division: row.get::<_, i64>(2)? as DivisionId,
        round: row.get::<_, i64>(3)? as u32,
        track,
        results: Vec::new(),
    })
}
