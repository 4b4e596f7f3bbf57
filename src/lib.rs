//! Championship standings engine: race listings and point-based driver
//! rankings derived from recorded race results.
//!
//! # Examples
//!
//! Direct facade usage over an in-memory repository:
//! ```
//! use champstand::{
//!     points::PointsTable,
//!     query::Championship,
//!     race::ResultFlags,
//!     repo::sqlite::SqliteRepository,
//! };
//!
//! let repo = SqliteRepository::open_in_memory().expect("open repo");
//! let alice = repo.add_driver("Alice", None).expect("driver");
//! let apex = repo.add_team("Apex GP").expect("team");
//! let race = repo.add_race(29, 1, 1, None).expect("race");
//! repo.add_result(race, alice, Some(apex), 1, ResultFlags::default())
//!     .expect("result");
//!
//! let championship = Championship::new(Box::new(repo), PointsTable::default());
//! let groups = championship.current_top3(29).expect("standings");
//! assert_eq!(groups[0].top3[0].total_points, 25);
//! ```
//!
//! Serving through the async query loop:
//! ```no_run
//! use champstand::{
//!     points::PointsTable,
//!     query::Championship,
//!     repo::sqlite::SqliteRepository,
//!     service::handle::{ServiceConfig, spawn_standings},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let repo = SqliteRepository::open("league.db").expect("open repo");
//! let championship = Championship::new(Box::new(repo), PointsTable::default());
//! let handle = spawn_standings(
//!     championship,
//!     ServiceConfig {
//!         current_season: 29,
//!         ..ServiceConfig::default()
//!     },
//! );
//! let groups = handle.current_top3().await.expect("standings");
//! for group in groups {
//!     println!("division {}: {} ranked", group.division, group.top3.len());
//! }
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```

/// Transport adapter: parameter parsing and status/body mapping.
pub mod api;
/// Points model and scoring table configuration.
pub mod points;
/// Query facade and error taxonomy.
pub mod query;
/// Race, result, and catalog records.
pub mod race;
/// Repository seam and SQLite implementation.
pub mod repo;
/// Async serving loop and handle.
pub mod service;
/// Standings aggregation and ranking.
pub mod standings;
/// Shared primitive types.
pub mod types;
