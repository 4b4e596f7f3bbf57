//! Shared primitive IDs used across the standings engine.

/// Championship year/cycle identifier.
pub type SeasonId = u32;
/// Competitive tier within a season.
pub type DivisionId = u32;
/// Race identifier; assigned at creation, ascending id is ascending chronology.
pub type RaceId = u64;
/// Surrogate driver identifier.
pub type DriverId = u32;
/// Surrogate team identifier.
pub type TeamId = u32;
/// Track identifier.
pub type TrackId = u32;
/// Accumulated championship points.
pub type Points = u32;
