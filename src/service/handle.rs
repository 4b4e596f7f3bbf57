use std::sync::Arc;

use tokio::sync::{Mutex, mpsc, oneshot};
use tracing::warn;

use crate::query::{Championship, QueryError};
use crate::race::Race;
use crate::repo::RepoError;
use crate::standings::DivisionStandings;
use crate::types::{DivisionId, SeasonId};

#[derive(Debug)]
pub enum ServiceError {
    Query(QueryError),
    ChannelClosed,
}

impl From<QueryError> for ServiceError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}

impl ServiceError {
    /// True when the underlying outcome was a scope NotFound.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Query(QueryError::NotFound))
    }
}

/// Serving configuration.
///
/// `current_season` is external policy: whoever spawns the service decides
/// what "current" means; the engine never infers it from the data.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub current_season: SeasonId,
    pub queue_bound: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            current_season: 0,
            queue_bound: 64,
        }
    }
}

/// Cloneable handle to the query loop.
pub struct StandingsHandle {
    cmd_tx: mpsc::Sender<Command>,
}

impl Clone for StandingsHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
        }
    }
}

enum Command {
    RacesByDivision {
        season: SeasonId,
        division: DivisionId,
        resp: oneshot::Sender<Result<Vec<Race>, ServiceError>>,
    },
    RacesOrdered {
        season: SeasonId,
        division: DivisionId,
        resp: oneshot::Sender<Result<Vec<Race>, ServiceError>>,
    },
    CurrentTop3 {
        resp: oneshot::Sender<Result<Vec<DivisionStandings>, ServiceError>>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Spawns the query loop and returns a handle to it.
///
/// The loop owns the facade (and with it the repository connection); queries
/// execute on the blocking pool because repository reads are synchronous IO.
pub fn spawn_standings(championship: Championship, config: ServiceConfig) -> StandingsHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.queue_bound);
    let championship = Arc::new(Mutex::new(championship));

    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            let done = handle_command(cmd, &championship, &config).await;
            if done {
                break;
            }
        }
    });

    StandingsHandle { cmd_tx }
}

impl StandingsHandle {
    /// Races for a (season, division) scope; NotFound when the scope is empty.
    pub async fn races_by_division(
        &self,
        season: SeasonId,
        division: DivisionId,
    ) -> Result<Vec<Race>, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::RacesByDivision {
                season,
                division,
                resp: tx,
            })
            .await
            .map_err(|_| ServiceError::ChannelClosed)?;
        rx.await.map_err(|_| ServiceError::ChannelClosed)?
    }

    /// Races for a scope with the ascending-by-id contract called out.
    pub async fn races_ordered(
        &self,
        season: SeasonId,
        division: DivisionId,
    ) -> Result<Vec<Race>, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::RacesOrdered {
                season,
                division,
                resp: tx,
            })
            .await
            .map_err(|_| ServiceError::ChannelClosed)?;
        rx.await.map_err(|_| ServiceError::ChannelClosed)?
    }

    /// Top-3 per division for the configured current season.
    pub async fn current_top3(&self) -> Result<Vec<DivisionStandings>, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::CurrentTop3 { resp: tx })
            .await
            .map_err(|_| ServiceError::ChannelClosed)?;
        rx.await.map_err(|_| ServiceError::ChannelClosed)?
    }

    /// Stops the query loop after in-flight commands drain.
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| ServiceError::ChannelClosed)?;
        rx.await.map_err(|_| ServiceError::ChannelClosed)
    }
}

async fn handle_command(
    cmd: Command,
    championship: &Arc<Mutex<Championship>>,
    config: &ServiceConfig,
) -> bool {
    match cmd {
        Command::RacesByDivision {
            season,
            division,
            resp,
        } => {
            let out = run_query(championship, move |ch| ch.races_by_division(season, division)).await;
            let _ = resp.send(out);
        }
        Command::RacesOrdered {
            season,
            division,
            resp,
        } => {
            let out = run_query(championship, move |ch| ch.races_ordered(season, division)).await;
            let _ = resp.send(out);
        }
        Command::CurrentTop3 { resp } => {
            let season = config.current_season;
            let out = run_query(championship, move |ch| ch.current_top3(season)).await;
            let _ = resp.send(out);
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}

async fn run_query<T, F>(
    championship: &Arc<Mutex<Championship>>,
    query: F,
) -> Result<T, ServiceError>
where
    T: Send + 'static,
    F: FnOnce(&Championship) -> Result<T, QueryError> + Send + 'static,
{
    let championship = Arc::clone(championship);
    let joined = tokio::task::spawn_blocking(move || {
        let guard = championship.blocking_lock();
        query(&guard)
    })
    .await;

    match joined {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            if !matches!(err, QueryError::NotFound) {
                warn!(?err, "standings query failed");
            }
            Err(ServiceError::Query(err))
        }
        Err(join) => Err(ServiceError::Query(QueryError::Repo(RepoError::Message(
            format!("join error: {join}"),
        )))),
    }
}
